//! crates/logging-sink/src/syslog.rs
//! syslog(3) destination for Unix hosts.
//!
//! Calls libc `openlog`/`syslog` directly rather than pulling in a dedicated
//! syslog crate, keeping the dependency graph minimal. The connection is
//! deliberately left open across reconfiguration: `closelog` on drop would
//! sever the connection a newer snapshot just opened, and syslog reopens
//! lazily on the next call anyway.
#![allow(unsafe_code)]

use std::ffi::CString;
use std::io;
use std::sync::OnceLock;

use crate::record::{Level, Record};
use crate::sink::Sink;

/// Sink routing records to the local syslog daemon.
///
/// Messages carry the logger name and structured fields but no timestamp;
/// syslog stamps its own. The facility is fixed to `LOG_USER`.
#[derive(Debug)]
pub struct SyslogSink {
    threshold: Level,
}

impl SyslogSink {
    /// Opens the syslog connection with the given identification tag.
    ///
    /// With `None` the tag defaults to the program name, the openlog(3)
    /// behaviour for a null ident. The first tag passed in the process
    /// lifetime wins; syslog stores the ident pointer internally, so it is
    /// kept in a process-lifetime static.
    pub fn new(tag: Option<&str>, threshold: Level) -> io::Result<Self> {
        static IDENT: OnceLock<Option<CString>> = OnceLock::new();
        let ident = IDENT.get_or_init(|| {
            tag.and_then(|tag| CString::new(tag).ok())
        });
        let ident_ptr = ident
            .as_ref()
            .map_or(std::ptr::null(), |ident| ident.as_ptr());

        // SAFETY: the ident pointer is either null (program name) or backed
        // by the process-lifetime static above, satisfying openlog's
        // requirement that it outlive all syslog calls.
        unsafe {
            libc::openlog(ident_ptr, libc::LOG_PID, libc::LOG_USER);
        }
        Ok(Self { threshold })
    }

    const fn priority(level: Level) -> libc::c_int {
        match level {
            Level::Debug => libc::LOG_DEBUG,
            Level::Info => libc::LOG_INFO,
            Level::Warn => libc::LOG_WARNING,
            Level::Error => libc::LOG_ERR,
        }
    }
}

impl Sink for SyslogSink {
    fn write(&self, record: &Record) -> io::Result<()> {
        if !self.threshold.enables(record.level) {
            return Ok(());
        }
        let mut body = String::new();
        if !record.logger.is_empty() {
            body.push_str(&record.logger);
            body.push_str(": ");
        }
        body.push_str(&record.message);
        for field in &record.fields {
            body.push(' ');
            body.push_str(&field.key);
            body.push('=');
            body.push_str(&field.value.to_string());
        }
        // Records with interior NUL bytes cannot cross the C boundary; drop
        // them rather than fail the caller.
        let Ok(message) = CString::new(body) else {
            return Ok(());
        };

        // syslog(3) interprets `%` as a format specifier; passing the
        // message as a `%s` argument avoids format string injection.
        //
        // SAFETY: both pointers are valid NUL-terminated C strings and
        // openlog has been called by the constructor.
        unsafe {
            libc::syslog(
                Self::priority(record.level),
                c"%s".as_ptr(),
                message.as_ptr(),
            );
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_mapping_matches_libc_constants() {
        assert_eq!(SyslogSink::priority(Level::Debug), libc::LOG_DEBUG);
        assert_eq!(SyslogSink::priority(Level::Info), libc::LOG_INFO);
        assert_eq!(SyslogSink::priority(Level::Warn), libc::LOG_WARNING);
        assert_eq!(SyslogSink::priority(Level::Error), libc::LOG_ERR);
    }

    #[test]
    fn write_does_not_panic() {
        let sink = SyslogSink::new(Some("loghub-test"), Level::Info).unwrap();
        sink.write(&Record::new(Level::Info, "tests", "syslog smoke message"))
            .unwrap();
        sink.flush().unwrap();
    }

    #[test]
    fn interior_nul_bytes_are_dropped_not_failed() {
        let sink = SyslogSink::new(Some("loghub-test"), Level::Debug).unwrap();
        sink.write(&Record::new(Level::Info, "tests", "before\0after"))
            .unwrap();
    }

    #[test]
    fn below_threshold_is_silently_dropped() {
        let sink = SyslogSink::new(Some("loghub-test"), Level::Error).unwrap();
        sink.write(&Record::new(Level::Debug, "tests", "quiet"))
            .unwrap();
    }
}
