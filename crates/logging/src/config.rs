//! crates/logging/src/config.rs
//! Declarative logging configuration and destination resolution.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use logging_sink::{Level, RotationOptions};
use serde::{Deserialize, Serialize};

/// Declarative configuration consumed by [`configure`](crate::configure).
///
/// The destination toggles are independent booleans rather than a single
/// choice field: legacy configurations could set several at once, and the
/// earliest-checked one wins. [`Config::destination`] is the single place
/// that precedence lives.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render records as JSON instead of tab-separated text.
    pub json: bool,
    /// Minimum severity admitted by the destination sink.
    pub level: Level,
    /// Debug selector names; consulted only when `level` admits Debug.
    pub selectors: Vec<String>,

    /// Route records to the in-memory observer (a testing mode).
    #[serde(skip)]
    pub to_observer: bool,
    /// Encode records and discard the bytes (a benchmarking mode).
    #[serde(skip)]
    pub to_discard: bool,
    /// Route records to standard error.
    pub to_stderr: bool,
    /// Route records to syslog(3).
    pub to_syslog: bool,
    /// Route records to the platform event log.
    #[serde(alias = "to_event_log")]
    pub to_eventlog: bool,
    /// Route records to a rotated log file. Also the fallback when no toggle
    /// is set.
    pub to_files: bool,

    /// File destination parameters.
    pub files: FileConfig,

    /// Stamp each record with the log call's source location.
    #[serde(skip)]
    pub add_caller: bool,
    /// Development mode: `dpanic` panics instead of merely logging.
    #[serde(skip)]
    pub development: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json: false,
            level: Level::Info,
            selectors: Vec::new(),
            to_observer: false,
            to_discard: false,
            to_stderr: true,
            to_syslog: false,
            to_eventlog: false,
            to_files: false,
            files: FileConfig::default(),
            add_caller: true,
            development: false,
        }
    }
}

impl Config {
    /// Development preset: everything to stderr at debug level, caller
    /// stamping on, and `dpanic` promoted to a real panic.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::Debug,
            to_stderr: true,
            add_caller: true,
            development: true,
            ..Self::default()
        }
    }

    /// Observation preset: capture records in memory at the given level,
    /// for test assertions via
    /// [`observed_records`](crate::observed_records).
    #[must_use]
    pub fn observing(level: Level) -> Self {
        Self {
            level,
            to_observer: true,
            to_stderr: false,
            ..Self::default()
        }
    }

    /// Resolves the destination toggles into the single effective
    /// destination.
    ///
    /// Precedence: Observe > Discard > Stderr > Syslog > EventLog > File.
    /// No toggle set falls through to File, the legacy default.
    #[must_use]
    pub fn destination(&self) -> Destination {
        if self.to_observer {
            Destination::Observe
        } else if self.to_discard {
            Destination::Discard
        } else if self.to_stderr {
            Destination::Stderr
        } else if self.to_syslog {
            Destination::Syslog
        } else if self.to_eventlog {
            Destination::EventLog
        } else {
            Destination::File
        }
    }
}

/// The effective destination a [`Config`] resolves to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Destination {
    /// In-memory observer for test assertions.
    Observe,
    /// Encode and discard.
    Discard,
    /// Standard-error stream.
    Stderr,
    /// syslog(3).
    Syslog,
    /// Platform event log.
    EventLog,
    /// Rotated log file.
    File,
}

impl Destination {
    /// Destination name as used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Observe => "observer",
            Self::Discard => "discard",
            Self::Stderr => "stderr",
            Self::Syslog => "syslog",
            Self::EventLog => "event log",
            Self::File => "file",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File destination parameters, converted into the rotating sink's
/// [`RotationOptions`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Directory holding the log file. Defaults to the working directory.
    pub path: PathBuf,
    /// Log file name.
    pub name: String,
    /// Rotate once the active file would exceed this many bytes.
    #[serde(alias = "rotateeverybytes")]
    pub max_size: u64,
    /// Rotated files kept before pruning.
    #[serde(alias = "keepfiles")]
    pub max_backups: u32,
    /// Unix permission bits for created log files.
    pub permissions: u32,
    /// Age-based rotation interval; `None` disables it.
    pub interval: Option<Duration>,
}

impl Default for FileConfig {
    fn default() -> Self {
        let defaults = RotationOptions::default();
        Self {
            path: PathBuf::from("."),
            name: String::from("loghub.log"),
            max_size: defaults.max_size,
            max_backups: defaults.max_backups,
            permissions: defaults.permissions,
            interval: None,
        }
    }
}

impl FileConfig {
    pub(crate) fn rotation_options(&self) -> RotationOptions {
        RotationOptions {
            max_size: self.max_size,
            max_backups: self.max_backups,
            permissions: self.permissions,
            interval: self.interval,
        }
    }
}
