//! crates/logging-sink/src/encoder.rs
//! Record-to-bytes rendering in human-readable or JSON form.

use std::io::{self, Write};

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::record::Record;

/// Rendering form for records written by byte-oriented sinks.
///
/// Selection is a pass-through configuration flag; the core never inspects
/// encoded output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Encoder {
    /// Tab-separated single line: timestamp, level, logger, caller, message,
    /// trailing JSON object of structured fields.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl Encoder {
    /// Renders `record` into `buf`, appending a trailing newline.
    pub fn encode(self, record: &Record, buf: &mut Vec<u8>) -> io::Result<()> {
        match self {
            Self::Text => encode_text(record, buf),
            Self::Json => encode_json(record, buf),
        }
    }
}

fn encode_text(record: &Record, buf: &mut Vec<u8>) -> io::Result<()> {
    let ts = record.time.to_rfc3339_opts(SecondsFormat::Millis, true);
    write!(buf, "{ts}\t{}", record.level.as_str().to_ascii_uppercase())?;
    if !record.logger.is_empty() {
        write!(buf, "\t{}", record.logger)?;
    }
    if let Some(caller) = record.caller {
        write!(buf, "\t{caller}")?;
    }
    write!(buf, "\t{}", record.message)?;
    if !record.fields.is_empty() {
        let fields: Map<String, Value> = record
            .fields
            .iter()
            .map(|field| (field.key.clone(), field.value.clone()))
            .collect();
        buf.push(b'\t');
        serde_json::to_writer(&mut *buf, &fields).map_err(io::Error::other)?;
    }
    buf.push(b'\n');
    Ok(())
}

fn encode_json(record: &Record, buf: &mut Vec<u8>) -> io::Result<()> {
    let mut object = Map::new();
    object.insert(
        "ts".to_owned(),
        Value::from(record.time.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    object.insert("level".to_owned(), Value::from(record.level.as_str()));
    if !record.logger.is_empty() {
        object.insert("logger".to_owned(), Value::from(record.logger.clone()));
    }
    if let Some(caller) = record.caller {
        object.insert("caller".to_owned(), Value::from(caller.to_string()));
    }
    object.insert("message".to_owned(), Value::from(record.message.clone()));
    for field in &record.fields {
        object.insert(field.key.clone(), field.value.clone());
    }
    serde_json::to_writer(&mut *buf, &object).map_err(io::Error::other)?;
    buf.push(b'\n');
    Ok(())
}
