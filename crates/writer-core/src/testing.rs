//! Test support: an in-memory journal that captures records instead of
//! sending them to syslog.

use crate::journal::Journal;

/// Severity of a captured record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Error,
}

/// Journal that keeps every record in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    pub records: Vec<(Level, String)>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured at the given level, in emission order.
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.records
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Journal for MemoryJournal {
    fn debug(&mut self, message: &str) {
        self.records.push((Level::Debug, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.records.push((Level::Error, message.to_string()));
    }
}
