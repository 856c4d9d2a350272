//! crates/logging/tests/observe_mode.rs
//! End-to-end coverage of the in-memory observer destination.

use logging::{Config, Field, Level, configure, logger, observed_records};
use serde_json::json;
use serial_test::serial;

#[test]
#[serial]
fn observer_captures_records_in_emission_order() {
    configure(&Config::observing(Level::Debug)).unwrap();
    let captured = observed_records().unwrap();

    let log = logger("observe");
    log.debug("first");
    log.info("second");
    log.warn("third");
    log.error("fourth");

    let records = captured.take();
    let levels: Vec<Level> = records.iter().map(|r| r.level).collect();
    assert_eq!(
        levels,
        [Level::Debug, Level::Info, Level::Warn, Level::Error]
    );
    let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, ["first", "second", "third", "fourth"]);
}

#[test]
#[serial]
fn observer_threshold_drops_below_level_records() {
    configure(&Config::observing(Level::Warn)).unwrap();
    let captured = observed_records().unwrap();

    let log = logger("observe");
    log.debug("dropped");
    log.info("dropped");
    log.warn("kept");
    log.error("kept");

    assert_eq!(captured.take().len(), 2);
}

#[test]
#[serial]
fn bound_fields_survive_into_captured_records() {
    configure(&Config::observing(Level::Info)).unwrap();
    let captured = observed_records().unwrap();

    logger("observe")
        .with_fields([Field::new("host", "alpha"), Field::new("attempt", 3)])
        .info("with context");

    let records = captured.take();
    assert_eq!(records[0].fields.len(), 2);
    assert_eq!(records[0].fields[0].key, "host");
    assert_eq!(records[0].fields[1].value, json!(3));
}

#[test]
#[serial]
fn take_drains_while_all_preserves() {
    configure(&Config::observing(Level::Info)).unwrap();
    let captured = observed_records().unwrap();

    logger("observe").info("one");
    logger("observe").info("two");

    assert_eq!(captured.all().len(), 2);
    assert_eq!(captured.all().len(), 2);
    assert_eq!(captured.take().len(), 2);
    assert!(captured.is_empty());
}
