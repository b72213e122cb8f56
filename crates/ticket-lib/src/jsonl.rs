//! JSONL file I/O for tickets.
//!
//! Each line in the JSONL file is one complete `Ticket`, in storage order.
//! Writers serialize on an advisory lock held on a sibling `.lock` file.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, trace};

use crate::error::{Result, TicketError};
use crate::model::Ticket;

/// Load tickets from a JSONL file.
///
/// A missing file is an empty collection. Blank lines are skipped.
///
/// # Errors
///
/// Returns `Io` if the file exists but cannot be read, or `JsonlParse` if
/// any line is invalid or repeats an id seen earlier in the file.
pub fn load(path: &Path) -> Result<Vec<Ticket>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "ticket file missing; starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(TicketError::Io(e)),
    };
    let reader = BufReader::new(file);

    let mut tickets = Vec::new();
    let mut seen = HashSet::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let ticket: Ticket =
            serde_json::from_str(trimmed).map_err(|e| TicketError::JsonlParse {
                line: line_num + 1,
                reason: e.to_string(),
            })?;

        if !seen.insert(ticket.id) {
            return Err(TicketError::JsonlParse {
                line: line_num + 1,
                reason: format!("duplicate ticket id {}", ticket.id),
            });
        }

        tickets.push(ticket);
    }

    debug!(path = %path.display(), count = tickets.len(), "loaded tickets");
    Ok(tickets)
}

/// Save the complete ticket collection with an atomic write.
///
/// The collection is written to a sibling temp file which is then renamed
/// over `path`, so readers only ever see the old or the new file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be written.
pub fn save(path: &Path, tickets: &[Ticket]) -> Result<()> {
    ensure_parent(path)?;

    let tmp_path = temp_path(path);
    let result = write_all(&tmp_path, tickets).and_then(|()| {
        fs::rename(&tmp_path, path)?;
        Ok(())
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    } else {
        trace!(path = %path.display(), count = tickets.len(), "saved tickets");
    }
    result
}

/// Exclusive advisory lock on a ticket file, released on drop.
#[derive(Debug)]
pub struct FileLock {
    file: File,
    path: PathBuf,
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            debug!(path = %self.path.display(), error = %e, "failed to release ticket lock");
        }
    }
}

/// Block until this process holds the write lock for `path`.
///
/// Every writer of `path` must hold this lock across its whole
/// read-modify-write cycle, including the temp-file rename.
///
/// # Errors
///
/// Returns `Io` if the lock file cannot be created or locked.
pub fn lock(path: &Path) -> Result<FileLock> {
    ensure_parent(path)?;

    let path = lock_path(path);
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;
    file.lock_exclusive()?;
    trace!(path = %path.display(), "acquired ticket lock");

    Ok(FileLock { file, path })
}

fn write_all(tmp_path: &Path, tickets: &[Ticket]) -> Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    for ticket in tickets {
        let json = serde_json::to_string(ticket)?;
        writeln!(file, "{json}")?;
    }
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    sibling(path, ".tmp")
}

fn lock_path(path: &Path) -> PathBuf {
    sibling(path, ".lock")
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| "tickets.jsonl".into(), std::ffi::OsStr::to_os_string);
    name.push(suffix);
    path.with_file_name(name)
}
