//! crates/logging/tests/reconfiguration.rs
//! Atomic snapshot replacement under sequential and concurrent use.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use logging::{Config, Level, configure, logger, observed_records, sync};
use serial_test::serial;

#[test]
#[serial]
fn handles_created_before_reconfigure_route_to_the_new_sink() {
    configure(&Config::observing(Level::Info)).unwrap();
    let first = observed_records().unwrap();
    let log = logger("stable-handle");
    log.info("into first");

    configure(&Config::observing(Level::Info)).unwrap();
    let second = observed_records().unwrap();
    log.info("into second");

    assert_eq!(first.take().len(), 1);
    let records = second.take();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "into second");
}

#[test]
#[serial]
fn reconfigure_swaps_level_and_destination_together() {
    configure(&Config::observing(Level::Debug)).unwrap();
    let verbose = observed_records().unwrap();
    logger("swap").debug("admitted at debug");

    configure(&Config::observing(Level::Error)).unwrap();
    let quiet = observed_records().unwrap();
    logger("swap").debug("now dropped");
    logger("swap").warn("also dropped");
    logger("swap").error("admitted");

    assert_eq!(verbose.take().len(), 1);
    assert_eq!(quiet.take().len(), 1);
}

#[test]
#[serial]
fn sync_succeeds_before_and_after_configure() {
    sync().unwrap();
    configure(&Config::observing(Level::Info)).unwrap();
    logger("sync").info("buffered");
    sync().unwrap();
}

#[test]
#[serial]
fn concurrent_emission_during_reconfiguration_never_drops_into_limbo() {
    configure(&Config::observing(Level::Info)).unwrap();

    let stop = Arc::new(AtomicBool::new(false));
    let writers: Vec<_> = (0..4)
        .map(|worker| {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                let log = logger(format!("worker-{worker}"));
                let mut emitted = 0_u64;
                while !stop.load(Ordering::Relaxed) {
                    log.info("spin");
                    emitted += 1;
                }
                emitted
            })
        })
        .collect();

    // Swap the whole core repeatedly underneath the writers.
    for _ in 0..50 {
        configure(&Config::observing(Level::Info)).unwrap();
    }
    stop.store(true, Ordering::Relaxed);

    let emitted: u64 = writers.into_iter().map(|w| w.join().unwrap()).sum();
    assert!(emitted > 0);

    // The final snapshot still accepts records.
    let captured = observed_records().unwrap();
    logger("after-stress").info("alive");
    assert!(!captured.all().is_empty());
}
