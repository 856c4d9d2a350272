#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the process-wide structured logging core: one atomically
//! swappable configuration snapshot shared by every thread, consumed through
//! cheap named [`Logger`] handles or the module-level convenience functions.
//! Destinations, encoders, and rotation live in the companion
//! [`logging_sink`] crate; this crate decides which of them is active.
//!
//! # Design
//!
//! [`configure`] builds a complete snapshot off to the side and publishes it
//! with a single atomic pointer swap. Emitters perform one lock-free load
//! per log call and never cache the snapshot, so a handle created at startup
//! follows every later reconfiguration. Debug records are additionally gated
//! by a selector set: naming selectors in [`Config::selectors`] enables only
//! those channels, while requesting debug with no selectors enables all of
//! them.
//!
//! Output through the de-facto standard `log` facade is folded into the same
//! core under the `"stdlog"` logger name. While explicit selectors are
//! active, facade output is silenced unless `"stdlog"` is among them.
//!
//! # Errors
//!
//! [`configure`] fails with [`BuildError`] when the requested destination
//! cannot be constructed, leaving the previous configuration untouched.
//! Emission itself is infallible from the caller's point of view: delivery
//! failures are swallowed so logging never takes the application down.
//!
//! # Examples
//!
//! ```
//! use logging::{configure, logger, observed_records, Config, Level};
//!
//! configure(&Config::observing(Level::Debug)).unwrap();
//!
//! let log = logger("transfer");
//! log.info("session opened");
//! log.debug("checksum negotiated");
//!
//! let captured = observed_records().unwrap();
//! assert_eq!(captured.len(), 2);
//! ```

mod build;
mod config;
mod logger;
mod registry;
mod selective;
mod stdlog;

pub use build::BuildError;
pub use config::{Config, Destination, FileConfig};
pub use logger::{Logger, debug, error, info, warn};
pub use registry::{
    configure, configure_development, logger, observed_records, sync, testing_setup,
};
pub use stdlog::STDLOG_SELECTOR;

pub use logging_sink::{Caller, Field, Level, Record};
