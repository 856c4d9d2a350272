//! crates/logging/src/registry.rs
//! The process-wide, atomically swappable logger core.

use std::collections::HashSet;
use std::io;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use logging_sink::{CapturedRecords, Level, NullSink, Sink};

use crate::build::{BuildError, build_output};
use crate::config::Config;
use crate::logger::Logger;
use crate::selective::{SelectiveSink, WILDCARD};
use crate::stdlog;

/// Installed, immutable configuration snapshot.
///
/// Built off to the side by [`configure`] and installed with a single atomic
/// pointer swap; never mutated afterwards. Readers holding a superseded
/// snapshot keep using a fully valid, merely outdated one.
pub(crate) struct ActiveCore {
    /// Resolved debug selector set; may contain the wildcard.
    pub(crate) selectors: HashSet<String>,
    /// The composed destination sink all records flow into.
    pub(crate) root: Arc<dyn Sink>,
    /// Present only in Observe mode.
    pub(crate) observed: Option<CapturedRecords>,
    /// Stamp call-site locations onto records.
    pub(crate) add_caller: bool,
    /// `dpanic` panics after logging.
    pub(crate) development: bool,
}

impl ActiveCore {
    /// Pre-configuration core: everything flows into a null sink, so log
    /// calls made before the first [`configure`] never fail or panic.
    fn unconfigured() -> Self {
        Self {
            selectors: HashSet::new(),
            root: Arc::new(NullSink),
            observed: None,
            add_caller: false,
            development: false,
        }
    }
}

static ACTIVE: LazyLock<ArcSwap<ActiveCore>> =
    LazyLock::new(|| ArcSwap::from_pointee(ActiveCore::unconfigured()));

/// Returns the currently installed snapshot.
///
/// Lock-free; one atomic load per call. Log calls re-read this on every
/// invocation rather than caching it, so reconfiguration is observed by
/// handles created long before.
pub(crate) fn current() -> Arc<ActiveCore> {
    ACTIVE.load_full()
}

/// Installs a new logger configuration for the whole process.
///
/// The snapshot is fully constructed before a single atomic swap publishes
/// it; concurrent readers never observe a half-initialized state, and
/// concurrent `configure` races resolve as last-writer-wins. On failure the
/// previous configuration remains authoritative. The superseded snapshot's
/// sink is flushed best-effort; a flush failure never blocks
/// reconfiguration.
pub fn configure(cfg: &Config) -> Result<(), BuildError> {
    let (mut sink, observed) = build_output(cfg)?;

    let debug_enabled = cfg.level.enables(Level::Debug);
    let explicit_selectors = debug_enabled && !cfg.selectors.is_empty();
    let mut selectors: HashSet<String> = HashSet::new();
    if debug_enabled {
        if cfg.selectors.is_empty() {
            // Debug asked for with no selectors listed: enable everything.
            selectors.insert(WILDCARD.to_owned());
        } else {
            selectors.extend(cfg.selectors.iter().cloned());
        }
    }

    // Global side effect: third-party output through the `log` facade is
    // silenced while selectors are active, unless "stdlog" is selected.
    stdlog::install();
    if explicit_selectors && !selectors.contains(stdlog::STDLOG_SELECTOR) {
        stdlog::silence();
    } else {
        stdlog::set_level(cfg.level);
    }

    if explicit_selectors {
        sink = Box::new(SelectiveSink::new(selectors.clone(), sink));
    }

    let core = Arc::new(ActiveCore {
        selectors,
        root: Arc::from(sink),
        observed,
        add_caller: cfg.add_caller,
        development: cfg.development,
    });
    let previous = ACTIVE.swap(core);
    // Drain the outgoing snapshot; failure is informational only.
    let _ = previous.root.flush();
    Ok(())
}

/// Applies [`Config::development`]: stderr at debug level with panicking
/// `dpanic`.
pub fn configure_development() -> Result<(), BuildError> {
    configure(&Config::development())
}

/// Applies the development preset only when `LOG_TESTING` is set in the
/// environment, leaving the no-op core otherwise. Intended for test
/// binaries that want verbose output on demand.
pub fn testing_setup() -> Result<(), BuildError> {
    if std::env::var_os("LOG_TESTING").is_some() {
        configure_development()
    } else {
        Ok(())
    }
}

/// Flushes the current snapshot's sink.
///
/// Succeeds trivially before the first [`configure`] call. Applications
/// should call this before exiting.
pub fn sync() -> io::Result<()> {
    current().root.flush()
}

/// Records captured since the last Observe-mode [`configure`] call, or
/// `None` when the active destination is not the observer.
#[must_use]
pub fn observed_records() -> Option<CapturedRecords> {
    current().observed.clone()
}

/// Returns a named logger handle bound to the registry.
///
/// The handle consumes whatever snapshot is current at each call, so it can
/// be created once and kept across reconfigurations.
#[must_use]
pub fn logger(name: impl Into<String>) -> Logger {
    Logger::new(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn configure_failure_keeps_previous_snapshot() {
        configure(&Config::observing(Level::Info)).unwrap();
        let before = observed_records().unwrap();

        let bad = Config {
            to_stderr: false,
            files: crate::config::FileConfig {
                path: std::path::PathBuf::from("/nonexistent/loghub"),
                ..crate::config::FileConfig::default()
            },
            ..Config::default()
        };
        assert!(configure(&bad).is_err());

        // Still the observer snapshot from before the failed call.
        logger("registry").info("survived");
        assert_eq!(before.len(), 1);
    }

    #[test]
    #[serial]
    fn selectors_resolve_to_wildcard_when_debug_and_unlisted() {
        configure(&Config::observing(Level::Debug)).unwrap();
        let core = current();
        assert!(core.selectors.contains(WILDCARD));
        assert_eq!(core.selectors.len(), 1);
    }

    #[test]
    #[serial]
    fn selectors_are_empty_when_level_excludes_debug() {
        configure(&Config::observing(Level::Warn)).unwrap();
        assert!(current().selectors.is_empty());
    }

    #[test]
    #[serial]
    fn explicit_selectors_are_resolved_verbatim() {
        let cfg = Config {
            selectors: vec!["transfer".into(), "daemon".into()],
            ..Config::observing(Level::Debug)
        };
        configure(&cfg).unwrap();
        let core = current();
        assert!(core.selectors.contains("transfer"));
        assert!(core.selectors.contains("daemon"));
        assert!(!core.selectors.contains(WILDCARD));
    }

    #[test]
    #[serial]
    fn observed_records_is_none_outside_observe_mode() {
        let cfg = Config {
            to_discard: true,
            ..Config::default()
        };
        configure(&cfg).unwrap();
        assert!(observed_records().is_none());
    }
}
