//! MemTable implementation
//!
//! HashMap-based index; a pure fold target over the record sequence.

use std::collections::HashMap;

use crate::wal::Record;

/// In-memory key→value index
///
/// At any point, `get(k)` returns the value of the most recently applied
/// `Set` for `k`, or `None` if `k` was never set or was deleted since. The
/// whole structure is a cache: it is fully derivable by folding `apply`
/// over the log from the start.
#[derive(Debug, Default)]
pub struct MemTable {
    data: HashMap<String, String>,
}

impl MemTable {
    /// Create a new empty MemTable
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Apply one record
    ///
    /// This is the single transition function shared by replay and live
    /// writes, which is what makes replay ≡ live application.
    pub fn apply(&mut self, record: Record) {
        match record {
            Record::Set(key, value) => {
                self.data.insert(key, value);
            }
            Record::Delete(key) => {
                // Removing an absent key is a no-op, matching the log's
                // delete-is-always-recorded policy
                self.data.remove(&key);
            }
        }
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the index holds no live keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over live entries (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
