//! Size-rotated line writer for trace output.
//!
//! When the file grows past its limit it is renamed to
//! `<name>.<UTC timestamp>` and a fresh file is started. Only the newest
//! backups are kept. Timestamps sort lexicographically, so backups are
//! ordered by name rather than by filesystem metadata.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;

/// Rotate once the file exceeds this many bytes (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups kept after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Appends lines to a file, rotating it by size.
pub struct RotatingWriter {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    /// A writer with the default limits. The file is opened on first write.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// A writer with explicit limits.
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` and a newline, rotating first if the file is too big.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() > self.max_bytes) {
            *file = None;
            self.rotate()?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;

        writeln!(handle, "{line}")?;
        handle.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.9fZ");
        let backup = backup_name(&self.path, &stamp.to_string());
        fs::rename(&self.path, backup)?;
        self.prune_backups()
    }

    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = list_backups(&self.path)?;
        backups.sort();
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.into_iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

fn backup_name(path: &Path, stamp: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(stamp);
    path.with_file_name(name)
}

/// Backups of `path`, in no particular order.
fn list_backups(path: &Path) -> io::Result<Vec<PathBuf>> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let prefix = format!(
        "{}.",
        path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    );

    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&prefix))
        })
        .collect())
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}
