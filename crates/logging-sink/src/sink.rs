//! crates/logging-sink/src/sink.rs
//! The two-method sink capability and locked-writer adapters.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::encoder::Encoder;
use crate::record::{Level, Record};

/// Capability accepted by the logging core for every destination.
///
/// A sink persists or emits records at or above its configured minimum
/// severity and exposes an idempotent flush. The core composes, decorates,
/// and swaps values of this trait without knowing adapter internals.
pub trait Sink: Send + Sync {
    /// Delivers one record. Records below the sink's threshold are dropped
    /// silently and report success.
    fn write(&self, record: &Record) -> io::Result<()>;

    /// Flushes buffered output. Idempotent; flushing an empty sink succeeds.
    fn flush(&self) -> io::Result<()>;
}

impl std::fmt::Debug for dyn Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Sink")
    }
}

/// Sink that accepts everything and emits nothing.
///
/// Installed as the registry payload before the first explicit
/// configuration so that early log calls never fail or panic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl Sink for NullSink {
    fn write(&self, _record: &Record) -> io::Result<()> {
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that renders records through an [`Encoder`] into a locked writer.
///
/// The `Mutex` serialises concurrent callers onto the single underlying
/// writer, the Rust analogue of wrapping a shared stderr handle in a lock.
/// A poisoned lock is ignored: a panicking log caller must not disable
/// logging for the rest of the process.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    encoder: Encoder,
    threshold: Level,
}

impl<W> WriterSink<W> {
    /// Creates a sink over an arbitrary writer.
    pub fn new(writer: W, encoder: Encoder, threshold: Level) -> Self {
        Self {
            writer: Mutex::new(writer),
            encoder,
            threshold,
        }
    }
}

impl WriterSink<io::Stderr> {
    /// Creates a sink writing to the process standard-error stream.
    #[must_use]
    pub fn stderr(encoder: Encoder, threshold: Level) -> Self {
        Self::new(io::stderr(), encoder, threshold)
    }
}

impl WriterSink<io::Sink> {
    /// Creates a sink that encodes records and discards the bytes.
    ///
    /// Unlike [`NullSink`] this still exercises the encoder, so encoding
    /// failures remain observable in discard mode.
    #[must_use]
    pub fn discard(encoder: Encoder, threshold: Level) -> Self {
        Self::new(io::sink(), encoder, threshold)
    }
}

impl<W> Sink for WriterSink<W>
where
    W: Write + Send,
{
    fn write(&self, record: &Record) -> io::Result<()> {
        if !self.threshold.enables(record.level) {
            return Ok(());
        }
        let mut buf = Vec::with_capacity(256);
        self.encoder.encode(record, &mut buf)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(&buf)
    }

    fn flush(&self) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush()
    }
}
