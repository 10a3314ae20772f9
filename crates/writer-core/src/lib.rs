//! # writer-core
//!
//! Core logic for the `writer` utility: write a string to a file while
//! journaling the action to the user-level syslog facility.
//!
//! The crate separates the write pass from its logging destination:
//! [`write_file`] drives one open/write/close cycle against any [`Journal`],
//! and [`SyslogSession`] is the production journal backed by syslog(3).

mod journal;
pub mod testing;
mod write;

pub use journal::{Journal, SyslogSession};
pub use write::{write_file, WriteReport};

use thiserror::Error;

/// Fatal failures of a write pass.
///
/// A short or failed write is deliberately absent: it is journaled at error
/// level but does not fail the pass (see [`write_file`]).
#[derive(Error, Debug)]
pub enum WriterError {
    #[error("Failed to open file for writing: {0}")]
    Open(#[from] std::io::Error),

    #[error("Failed to close file: {0}")]
    Close(#[from] nix::errno::Errno),
}

pub type Result<T> = std::result::Result<T, WriterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn error_records_carry_context_and_platform_text() {
        let open = WriterError::Open(io::Error::from_raw_os_error(libc::ENOENT));
        let rendered = open.to_string();
        assert!(rendered.starts_with("Failed to open file for writing: "));
        assert!(rendered.contains("os error 2"));

        let close = WriterError::Close(nix::errno::Errno::EBADF);
        assert!(close.to_string().starts_with("Failed to close file: "));
    }
}
