//! crates/logging/src/build.rs
//! Translates a [`Config`] into one concrete destination sink.

use std::io;

use logging_sink::{CapturedRecords, Encoder, ObserverSink, RotatingFileSink, Sink, WriterSink};
use thiserror::Error;

use crate::config::{Config, Destination};

/// Error returned when the destination sink cannot be constructed.
///
/// Surfaced synchronously from [`configure`](crate::configure); the previous
/// snapshot stays active.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The resolved destination failed to build.
    #[error("failed to build {destination} log output")]
    Output {
        /// Destination that failed.
        destination: Destination,
        /// Underlying construction failure.
        #[source]
        source: io::Error,
    },
}

/// Builds the destination sink for `cfg`, plus the capture handle when the
/// destination is the in-memory observer.
///
/// Each constructor is a pure function of the configuration; no partially
/// built sink is ever returned.
pub(crate) fn build_output(
    cfg: &Config,
) -> Result<(Box<dyn Sink>, Option<CapturedRecords>), BuildError> {
    let encoder = if cfg.json { Encoder::Json } else { Encoder::Text };
    let destination = cfg.destination();

    let sink: Box<dyn Sink> = match destination {
        Destination::Observe => {
            let (sink, captured) = ObserverSink::new(cfg.level);
            return Ok((Box::new(sink), Some(captured)));
        }
        Destination::Discard => Box::new(WriterSink::discard(encoder, cfg.level)),
        Destination::Stderr => Box::new(WriterSink::stderr(encoder, cfg.level)),
        Destination::Syslog => build_syslog(cfg).map_err(|source| BuildError::Output {
            destination,
            source,
        })?,
        Destination::EventLog => {
            // TODO: wire a Windows Event Log adapter in logging-sink.
            return Err(BuildError::Output {
                destination,
                source: io::Error::new(
                    io::ErrorKind::Unsupported,
                    "event log output is not available on this platform",
                ),
            });
        }
        Destination::File => Box::new(
            RotatingFileSink::new(
                &cfg.files.path,
                &cfg.files.name,
                cfg.files.rotation_options(),
                encoder,
                cfg.level,
            )
            .map_err(|source| BuildError::Output {
                destination,
                source,
            })?,
        ),
    };
    Ok((sink, None))
}

#[cfg(unix)]
fn build_syslog(cfg: &Config) -> io::Result<Box<dyn Sink>> {
    logging_sink::SyslogSink::new(None, cfg.level).map(|sink| Box::new(sink) as Box<dyn Sink>)
}

#[cfg(not(unix))]
fn build_syslog(_cfg: &Config) -> io::Result<Box<dyn Sink>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "syslog output is only available on Unix",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging_sink::{Level, Record};
    use std::path::PathBuf;

    #[test]
    fn observer_destination_returns_a_capture_handle() {
        let (sink, captured) = build_output(&Config::observing(Level::Debug)).unwrap();
        let captured = captured.expect("observer mode exposes captured records");

        sink.write(&Record::new(Level::Info, "build", "captured"))
            .unwrap();
        assert_eq!(captured.len(), 1);
    }

    #[test]
    fn non_observer_destinations_have_no_capture_handle() {
        let cfg = Config {
            to_discard: true,
            ..Config::default()
        };
        let (_, captured) = build_output(&cfg).unwrap();
        assert!(captured.is_none());
    }

    #[test]
    fn bad_file_path_surfaces_as_wrapped_output_error() {
        let cfg = Config {
            to_stderr: false,
            files: crate::config::FileConfig {
                path: PathBuf::from("/nonexistent/loghub/deep"),
                ..crate::config::FileConfig::default()
            },
            ..Config::default()
        };
        let err = build_output(&cfg).unwrap_err();
        assert!(err.to_string().contains("file log output"));
        let BuildError::Output { destination, .. } = err;
        assert_eq!(destination, Destination::File);
    }

    #[test]
    fn event_log_is_unsupported_here() {
        let cfg = Config {
            to_stderr: false,
            to_eventlog: true,
            ..Config::default()
        };
        let err = build_output(&cfg).unwrap_err();
        assert!(err.to_string().contains("event log"));
    }
}
