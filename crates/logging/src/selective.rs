//! crates/logging/src/selective.rs
//! Selector-gated decorator for debug-level records.

use std::collections::HashSet;
use std::io;

use logging_sink::{Level, Record, Sink};

/// Wildcard selector enabling every debug channel.
pub(crate) const WILDCARD: &str = "*";

/// Decorator that gates debug records on the enabled selector set.
///
/// Records at Info and above always pass through unfiltered. Debug records
/// pass only when the set contains the wildcard or the record's logger name.
/// Any sink variant can be wrapped; the decorator holds the inner sink by
/// value and forwards flushes untouched.
pub(crate) struct SelectiveSink {
    selectors: HashSet<String>,
    inner: Box<dyn Sink>,
}

impl SelectiveSink {
    pub(crate) fn new(selectors: HashSet<String>, inner: Box<dyn Sink>) -> Self {
        Self { selectors, inner }
    }

    fn admits(&self, record: &Record) -> bool {
        record.level != Level::Debug
            || self.selectors.contains(WILDCARD)
            || self.selectors.contains(&record.logger)
    }
}

impl Sink for SelectiveSink {
    fn write(&self, record: &Record) -> io::Result<()> {
        if self.admits(record) {
            self.inner.write(record)
        } else {
            Ok(())
        }
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.flush()
    }
}
