//! JSON output.
//!
//! Entry:     `{"date":"2021-01-04","duration":2,"tag":"research","text":"reading papers"}`
//! LogSet:    array of entries
//! TagIndex:  object mapping each tag to its array of entries
//!
//! `text` is left out when an entry has none. Dates are always `YYYY-MM-DD`.

use crate::error::SerializeError;
use serde::Serialize;
use std::io::Write;

/// Encodes `value` as a JSON string, optionally pretty-printed.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, SerializeError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Writes `value` as JSON to `writer`, followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    pretty: bool,
) -> Result<(), SerializeError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}
