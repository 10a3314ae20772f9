//! The write pass: one open, one write, one close, all journaled.

use std::fs::OpenOptions;
use std::io::Write;
use std::os::fd::IntoRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::journal::Journal;
use crate::{Result, WriterError};

/// Owner read/write only. Applied when the target is created; re-truncating
/// an existing file keeps its bits.
const FILE_MODE: u32 = 0o600;

/// Byte accounting for a completed write pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteReport {
    /// Bytes the caller asked to write.
    pub requested: usize,
    /// Bytes the single write call actually transferred.
    pub written: usize,
}

impl WriteReport {
    /// True when fewer bytes than requested were transferred.
    pub fn is_short(&self) -> bool {
        self.written < self.requested
    }
}

/// Write `content` to `path`, journaling the attempt and any failures.
///
/// The target is created if absent and truncated if present, with owner-only
/// permissions. A short or failed write is journaled but does not abort the
/// pass: the file is still closed and, if the close succeeds, the pass
/// reports success. Open and close failures are fatal.
pub fn write_file(journal: &mut dyn Journal, path: &Path, content: &str) -> Result<WriteReport> {
    journal.debug(&format!("Writing {} to {}", content, path.display()));

    let opened = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path);
    let mut file = match opened {
        Ok(file) => file,
        Err(err) => {
            let err = WriterError::Open(err);
            journal.error(&err.to_string());
            return Err(err);
        }
    };

    let requested = content.len();
    // A single write(2), not write_all: a partial transfer is reported, never
    // retried.
    let written = match file.write(content.as_bytes()) {
        Ok(written) => {
            if written != requested {
                journal.error(&format!(
                    "Failed to write to file: wrote {written} of {requested} bytes"
                ));
            }
            written
        }
        Err(err) => {
            journal.error(&format!("Failed to write to file: {err}"));
            0
        }
    };

    // File's Drop swallows close errors, so hand the descriptor to close(2)
    // directly.
    if let Err(errno) = nix::unistd::close(file.into_raw_fd()) {
        let err = WriterError::Close(errno);
        journal.error(&err.to_string());
        return Err(err);
    }

    Ok(WriteReport { requested, written })
}
