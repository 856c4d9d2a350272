//! crates/logging-sink/src/record.rs
//! Severity levels and the opaque log record tuple.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered severity levels admitted by the facility.
///
/// The ordering `Debug < Info < Warn < Error` drives every threshold check:
/// a sink configured at [`Level::Info`] admits `Info`, `Warn`, and `Error`
/// records and drops `Debug` ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Verbose diagnostics, additionally gated by debug selectors.
    Debug,
    /// Routine operational messages.
    Info,
    /// Conditions worth operator attention.
    #[serde(alias = "warning")]
    Warn,
    /// Failures.
    Error,
}

impl Level {
    /// Returns `true` when a sink configured at `self` admits a record at
    /// `level`.
    #[must_use]
    pub fn enables(self, level: Level) -> bool {
        level >= self
    }

    /// Returns the lowercase level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parses a level name, case-insensitively.
    ///
    /// `"warning"` is accepted as an alias for [`Level::Warn`], matching the
    /// legacy configuration vocabulary. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured field attached to a record.
///
/// Field values are opaque [`serde_json::Value`]s; the facility performs no
/// typing of its own and leaves interpretation to the encoder.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    /// Field name as it appears in encoded output.
    pub key: String,
    /// Opaque field value.
    pub value: Value,
}

impl Field {
    /// Creates a field from any value convertible to JSON.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Source location of the log call, captured when caller stamping is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caller {
    /// Source file path.
    pub file: &'static str,
    /// Line number within the file.
    pub line: u32,
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One log record flowing through the facility.
///
/// Treated opaquely by the core: sinks and encoders are the only consumers
/// of its contents. The `logger` name doubles as the record's debug selector
/// tag.
#[derive(Clone, Debug)]
pub struct Record {
    /// Time the record was created.
    pub time: DateTime<Utc>,
    /// Severity.
    pub level: Level,
    /// Dot-delimited logger name; empty for the root logger.
    pub logger: String,
    /// Human-readable message.
    pub message: String,
    /// Call-site location, if caller stamping was enabled.
    pub caller: Option<Caller>,
    /// Structured fields, in attachment order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Creates a record stamped with the current time and no caller or
    /// fields.
    pub fn new(level: Level, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            level,
            logger: logger.into(),
            message: message.into(),
            caller: None,
            fields: Vec::new(),
        }
    }

    /// Attaches a call-site location.
    #[must_use]
    pub fn with_caller(mut self, caller: Caller) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Attaches structured fields, replacing any present.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}
