#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` is the collaborator layer of the loghub logging facility.
//! It defines the opaque [`Record`] tuple, the two-method [`Sink`] capability
//! that every destination implements, the [`Encoder`] variants that render a
//! record to bytes, and the concrete destination adapters: locked writers
//! (stderr, discard), an in-memory observer for test assertions, a rotating
//! file writer, and a syslog(3) backend on Unix.
//!
//! # Design
//!
//! The core crate (`logging`) composes and swaps these sinks but never looks
//! inside them; it depends only on [`Sink::write`] and [`Sink::flush`]. Each
//! adapter enforces its own minimum-severity threshold inside `write`, so a
//! decorated sink chain needs no shared level state. All adapters take
//! `&self`; the only interior mutability is a `Mutex` around the underlying
//! writer, mirroring how a locked stderr handle serialises concurrent
//! diagnostics.
//!
//! # Errors
//!
//! `write` and `flush` surface [`std::io::Error`] values from the underlying
//! destination. Callers on the logging hot path are expected to drop these
//! errors (logging must never fail the caller); configuration-time
//! constructors such as [`RotatingFileSink::new`] propagate them so a bad
//! destination is rejected before it is installed.
//!
//! # Examples
//!
//! Capture records in memory and inspect them:
//!
//! ```
//! use logging_sink::{Level, ObserverSink, Record, Sink};
//!
//! let (sink, captured) = ObserverSink::new(Level::Info);
//! sink.write(&Record::new(Level::Info, "transfer", "session opened")).unwrap();
//! sink.write(&Record::new(Level::Debug, "transfer", "dropped by threshold")).unwrap();
//!
//! let records = captured.all();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].message, "session opened");
//! ```

mod encoder;
mod file;
mod observer;
mod record;
mod sink;
#[cfg(unix)]
pub mod syslog;

pub use encoder::Encoder;
pub use file::{RotatingFileSink, RotationOptions};
pub use observer::{CapturedRecords, ObserverSink};
pub use record::{Caller, Field, Level, Record};
pub use sink::{NullSink, Sink, WriterSink};
#[cfg(unix)]
pub use syslog::SyslogSink;
