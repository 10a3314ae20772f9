//! Journal abstraction and the syslog(3) session behind it.

use std::ffi::{CStr, CString};

/// Destination for the records a write pass emits.
///
/// The write routine only ever needs these two levels. Keeping them behind a
/// trait lets tests capture records without a log daemon; see
/// [`crate::testing::MemoryJournal`].
pub trait Journal {
    /// Record a debug-level message.
    fn debug(&mut self, message: &str);

    /// Record an error-level message.
    fn error(&mut self, message: &str);
}

/// Fixed session identity. openlog(3) keeps the pointer it is given rather
/// than copying the string, so the ident must have static storage.
const IDENT: &CStr = c"writer_app";

/// Records go through `%s` so their content is never treated as a format
/// string by syslog(3).
const MESSAGE_FMT: &CStr = c"%s";

/// Scoped connection to the user-level syslog facility.
///
/// Opening the session configures the `writer_app` identity with PID tagging
/// and console fallback (`LOG_PID | LOG_CONS`); dropping it runs closelog(3).
/// The platform connects lazily, so opening cannot fail and works even when
/// no log daemon is running.
pub struct SyslogSession(());

impl SyslogSession {
    pub fn open() -> Self {
        unsafe { libc::openlog(IDENT.as_ptr(), libc::LOG_PID | libc::LOG_CONS, libc::LOG_USER) };
        SyslogSession(())
    }

    fn emit(&mut self, priority: libc::c_int, message: &str) {
        // A C string cannot carry an interior NUL; truncate there.
        let text = match message.find('\0') {
            Some(end) => &message[..end],
            None => message,
        };
        let Ok(text) = CString::new(text) else {
            return;
        };
        unsafe { libc::syslog(priority, MESSAGE_FMT.as_ptr(), text.as_ptr()) };
    }
}

impl Journal for SyslogSession {
    fn debug(&mut self, message: &str) {
        self.emit(libc::LOG_DEBUG, message);
    }

    fn error(&mut self, message: &str) {
        self.emit(libc::LOG_ERR, message);
    }
}

impl Drop for SyslogSession {
    fn drop(&mut self) {
        unsafe { libc::closelog() };
    }
}
