//! crates/logging-sink/src/file.rs
//! Rotating file destination with size- and age-triggered rollover.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime};

use crate::encoder::Encoder;
use crate::record::{Level, Record};
use crate::sink::Sink;

/// Rotation parameters for the file destination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RotationOptions {
    /// Rotate once the active file would exceed this many bytes.
    pub max_size: u64,
    /// Number of rotated files kept as `name.1` … `name.N`; `0` truncates
    /// instead of keeping backups.
    pub max_backups: u32,
    /// Unix permission bits applied to newly created log files.
    pub permissions: u32,
    /// Rotate once the active file has been open this long, regardless of
    /// size. `None` disables age-based rotation.
    pub interval: Option<Duration>,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            max_size: 10 * 1024 * 1024,
            max_backups: 7,
            permissions: 0o600,
            interval: None,
        }
    }
}

struct FileState {
    /// Handle on the active file. `None` between closing the handle for
    /// rotation and reopening the active path; a failed reopen leaves it
    /// `None` so the next write retries instead of appending to a backup.
    file: Option<File>,
    written: u64,
    opened: SystemTime,
}

/// Sink appending encoded records to `dir/name`, rotating backups in place.
///
/// The file is opened eagerly so an unwritable destination is rejected at
/// configuration time rather than on the first log call. Rotation renames
/// the active file to `name.1`, shifting existing backups up and pruning
/// beyond [`RotationOptions::max_backups`].
pub struct RotatingFileSink {
    path: PathBuf,
    options: RotationOptions,
    encoder: Encoder,
    threshold: Level,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// Opens (or creates) the active log file under `dir`.
    pub fn new(
        dir: impl AsRef<Path>,
        name: &str,
        options: RotationOptions,
        encoder: Encoder,
        threshold: Level,
    ) -> io::Result<Self> {
        let path = dir.as_ref().join(name);
        let file = open_log_file(&path, options.permissions)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            options,
            encoder,
            threshold,
            state: Mutex::new(FileState {
                file: Some(file),
                written,
                opened: SystemTime::now(),
            }),
        })
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn should_rotate(&self, state: &FileState, incoming: u64) -> bool {
        if state.written > 0 && state.written + incoming > self.options.max_size {
            return true;
        }
        if let Some(interval) = self.options.interval {
            return state.opened.elapsed().unwrap_or_default() >= interval;
        }
        false
    }

    /// Shifts the active file into the backup chain.
    ///
    /// The handle is closed before any rename, so an error partway through
    /// can never leave it pointing at a renamed backup; the next write
    /// reopens the active path instead.
    fn rotate(&self, state: &mut FileState) -> io::Result<()> {
        if let Some(file) = state.file.as_mut() {
            file.flush()?;
        }
        state.file = None;
        state.written = 0;
        if self.options.max_backups == 0 {
            // No backups kept: drop the current contents outright.
            let _ = fs::remove_file(&self.path);
        } else {
            let _ = fs::remove_file(backup_path(&self.path, self.options.max_backups));
            for index in (1..self.options.max_backups).rev() {
                let from = backup_path(&self.path, index);
                if from.exists() {
                    fs::rename(&from, backup_path(&self.path, index + 1))?;
                }
            }
            if self.path.exists() {
                fs::rename(&self.path, backup_path(&self.path, 1))?;
            }
        }
        Ok(())
    }
}

impl Sink for RotatingFileSink {
    fn write(&self, record: &Record) -> io::Result<()> {
        if !self.threshold.enables(record.level) {
            return Ok(());
        }
        let mut buf = Vec::with_capacity(256);
        self.encoder.encode(record, &mut buf)?;

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.file.is_some() && self.should_rotate(&state, buf.len() as u64) {
            self.rotate(&mut state)?;
        }
        if state.file.is_none() {
            let file = open_log_file(&self.path, self.options.permissions)?;
            state.written = file.metadata()?.len();
            state.opened = SystemTime::now();
            state.file = Some(file);
        }
        if let Some(file) = state.file.as_mut() {
            file.write_all(&buf)?;
            state.written += buf.len() as u64;
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match state.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn backup_path(path: &Path, index: u32) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

#[cfg(unix)]
fn open_log_file(path: &Path, permissions: u32) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(permissions)
        .open(path)
}

#[cfg(not(unix))]
fn open_log_file(path: &Path, _permissions: u32) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
