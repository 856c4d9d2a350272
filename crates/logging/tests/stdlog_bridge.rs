//! crates/logging/tests/stdlog_bridge.rs
//! Routing and silencing of `log` facade output.

use logging::{Config, Level, STDLOG_SELECTOR, configure, observed_records};
use serial_test::serial;

#[test]
#[serial]
fn facade_output_is_filed_under_the_stdlog_name() {
    configure(&Config::observing(Level::Debug)).unwrap();
    let captured = observed_records().unwrap();

    log::info!("via the facade");
    log::warn!("also via the facade");

    let records = captured.take();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.logger == STDLOG_SELECTOR));
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[1].level, Level::Warn);
    assert_eq!(records[0].message, "via the facade");
}

#[test]
#[serial]
fn facade_respects_the_configured_level() {
    configure(&Config::observing(Level::Warn)).unwrap();
    let captured = observed_records().unwrap();

    log::debug!("below level");
    log::info!("below level");
    log::error!("admitted");

    let records = captured.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
}

#[test]
#[serial]
fn explicit_selectors_silence_the_facade() {
    configure(&Config {
        selectors: vec!["transfer".into()],
        ..Config::observing(Level::Debug)
    })
    .unwrap();
    let captured = observed_records().unwrap();

    log::error!("dropped while silenced");

    assert!(captured.take().is_empty());
}

#[test]
#[serial]
fn selecting_stdlog_keeps_the_facade_alive() {
    configure(&Config {
        selectors: vec!["transfer".into(), STDLOG_SELECTOR.into()],
        ..Config::observing(Level::Debug)
    })
    .unwrap();
    let captured = observed_records().unwrap();

    log::debug!("admitted by the stdlog selector");

    let records = captured.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].logger, STDLOG_SELECTOR);
}

#[test]
#[serial]
fn reconfiguring_without_selectors_restores_the_facade() {
    configure(&Config {
        selectors: vec!["transfer".into()],
        ..Config::observing(Level::Debug)
    })
    .unwrap();

    configure(&Config::observing(Level::Info)).unwrap();
    let captured = observed_records().unwrap();

    log::info!("audible again");

    assert_eq!(captured.take().len(), 1);
}
