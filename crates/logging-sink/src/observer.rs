//! crates/logging-sink/src/observer.rs
//! In-memory observation sink for test assertions.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use crate::record::{Level, Record};
use crate::sink::Sink;

/// Sink that retains admitted records in memory instead of emitting them.
///
/// Used as the Observe destination: tests configure it, exercise the code
/// under test, then assert on the ordered capture through the paired
/// [`CapturedRecords`] handle. Records accumulate until the sink is
/// dropped with its snapshot.
#[derive(Debug)]
pub struct ObserverSink {
    threshold: Level,
    captured: CapturedRecords,
}

impl ObserverSink {
    /// Creates an observation sink and the handle reading its capture.
    #[must_use]
    pub fn new(threshold: Level) -> (Self, CapturedRecords) {
        let captured = CapturedRecords::default();
        (
            Self {
                threshold,
                captured: captured.clone(),
            },
            captured,
        )
    }
}

impl Sink for ObserverSink {
    fn write(&self, record: &Record) -> io::Result<()> {
        if self.threshold.enables(record.level) {
            self.captured.push(record.clone());
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Cloneable handle over the ordered records captured by an
/// [`ObserverSink`].
#[derive(Clone, Debug, Default)]
pub struct CapturedRecords {
    entries: Arc<Mutex<Vec<Record>>>,
}

impl CapturedRecords {
    fn push(&self, record: Record) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Returns a copy of all captured records in write order.
    #[must_use]
    pub fn all(&self) -> Vec<Record> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns all captured records in write order.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(
            &mut *self
                .entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no records have been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
