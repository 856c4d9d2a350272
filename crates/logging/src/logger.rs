//! crates/logging/src/logger.rs
//! Named logger handles and the module-level convenience functions.

use std::panic::Location;
use std::process;

use logging_sink::{Caller, Field, Level, Record};

use crate::registry;

/// Named handle for emitting records through the process-wide core.
///
/// A handle is a name plus optional bound fields; it holds no sink of its
/// own. Every emission reads the currently installed snapshot, so a handle
/// created before a [`configure`](crate::configure) call routes to the new
/// destination without being recreated.
#[derive(Clone, Debug)]
pub struct Logger {
    name: String,
    fields: Vec<Field>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The handle's logger name, as matched against debug selectors.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Derives a child handle with a dot-joined name, keeping bound fields.
    #[must_use]
    pub fn named(&self, suffix: &str) -> Self {
        let name = if self.name.is_empty() {
            suffix.to_owned()
        } else {
            format!("{}.{suffix}", self.name)
        };
        Self {
            name,
            fields: self.fields.clone(),
        }
    }

    /// Derives a handle carrying additional structured fields on every
    /// record it emits.
    #[must_use]
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut merged = self.fields.clone();
        merged.extend(fields);
        Self {
            name: self.name.clone(),
            fields: merged,
        }
    }

    /// Emits a debug record, subject to the active selector set.
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Level::Debug, message.into(), Vec::new(), Location::caller());
    }

    /// Emits an informational record.
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.emit(Level::Info, message.into(), Vec::new(), Location::caller());
    }

    /// Emits a warning record.
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.emit(Level::Warn, message.into(), Vec::new(), Location::caller());
    }

    /// Emits an error record.
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Level::Error, message.into(), Vec::new(), Location::caller());
    }

    /// Emits a record at an explicit level with extra one-off fields.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>, fields: Vec<Field>) {
        self.emit(level, message.into(), fields, Location::caller());
    }

    /// Emits a debug record with extra one-off fields.
    #[track_caller]
    pub fn debug_fields(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.emit(Level::Debug, message.into(), fields, Location::caller());
    }

    /// Emits an informational record with extra one-off fields.
    #[track_caller]
    pub fn info_fields(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.emit(Level::Info, message.into(), fields, Location::caller());
    }

    /// Emits a warning record with extra one-off fields.
    #[track_caller]
    pub fn warn_fields(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.emit(Level::Warn, message.into(), fields, Location::caller());
    }

    /// Emits an error record with extra one-off fields.
    #[track_caller]
    pub fn error_fields(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.emit(Level::Error, message.into(), fields, Location::caller());
    }

    /// Emits an error record, flushes the sink, and terminates the process
    /// with exit code 1.
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.emit(Level::Error, message.into(), Vec::new(), Location::caller());
        let _ = registry::sync();
        process::exit(1);
    }

    /// Emits an error record, then panics when the active configuration is
    /// in development mode. In production the record is the only effect.
    ///
    /// The snapshot is read once: the record lands in the same
    /// configuration's sink that decides whether to panic, even when a
    /// reconfiguration races this call.
    #[track_caller]
    pub fn dpanic(&self, message: impl Into<String>) {
        let message = message.into();
        let core = registry::current();
        self.emit_to(&core, Level::Error, message.clone(), Vec::new(), Location::caller());
        if core.development {
            panic!("{message}");
        }
    }

    fn emit(
        &self,
        level: Level,
        message: String,
        extra: Vec<Field>,
        location: &'static Location<'static>,
    ) {
        let core = registry::current();
        self.emit_to(&core, level, message, extra, location);
    }

    fn emit_to(
        &self,
        core: &crate::registry::ActiveCore,
        level: Level,
        message: String,
        extra: Vec<Field>,
        location: &'static Location<'static>,
    ) {
        let mut record = Record::new(level, self.name.clone(), message);
        if core.add_caller {
            record = record.with_caller(Caller {
                file: location.file(),
                line: location.line(),
            });
        }
        if !self.fields.is_empty() || !extra.is_empty() {
            let mut fields = self.fields.clone();
            fields.extend(extra);
            record = record.with_fields(fields);
        }
        // Delivery is best-effort; an unwritable sink must not take the
        // calling thread down with it.
        let _ = core.root.write(&record);
    }
}

/// Emits a debug record under the given selector name.
#[track_caller]
pub fn debug(selector: &str, message: impl Into<String>) {
    Logger::new(selector).debug(message);
}

/// Emits an informational record with no logger name.
#[track_caller]
pub fn info(message: impl Into<String>) {
    Logger::new("").info(message);
}

/// Emits a warning record with no logger name.
#[track_caller]
pub fn warn(message: impl Into<String>) {
    Logger::new("").warn(message);
}

/// Emits an error record with no logger name.
#[track_caller]
pub fn error(message: impl Into<String>) {
    Logger::new("").error(message);
}
