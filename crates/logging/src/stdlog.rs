//! crates/logging/src/stdlog.rs
//! Bridge routing the `log` facade into the process-wide core.

use logging_sink::{Level, Record};

use crate::registry;

/// Selector name third-party facade output is filed under. Listing it in
/// [`Config::selectors`](crate::Config) keeps facade output alive when
/// selector filtering is active.
pub const STDLOG_SELECTOR: &str = "stdlog";

struct FacadeBridge;

static BRIDGE: FacadeBridge = FacadeBridge;

fn from_facade(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warn,
        log::Level::Info => Level::Info,
        // Trace has no counterpart; fold it into Debug.
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

fn to_facade(level: Level) -> log::LevelFilter {
    match level {
        Level::Debug => log::LevelFilter::Debug,
        Level::Info => log::LevelFilter::Info,
        Level::Warn => log::LevelFilter::Warn,
        Level::Error => log::LevelFilter::Error,
    }
}

impl log::Log for FacadeBridge {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        // Admission is decided by the max-level filter and the core's sinks.
        true
    }

    fn log(&self, facade: &log::Record<'_>) {
        let core = registry::current();
        let record = Record::new(
            from_facade(facade.level()),
            STDLOG_SELECTOR,
            facade.args().to_string(),
        );
        let _ = core.root.write(&record);
    }

    fn flush(&self) {
        let _ = registry::sync();
    }
}

/// Installs the facade bridge. Idempotent; a second registration attempt
/// (including one from the host application) is ignored.
pub(crate) fn install() {
    let _ = log::set_logger(&BRIDGE);
}

/// Lets facade output through up to `level`.
pub(crate) fn set_level(level: Level) {
    log::set_max_level(to_facade(level));
}

/// Drops all facade output before it reaches the bridge.
pub(crate) fn silence() {
    log::set_max_level(log::LevelFilter::Off);
}
