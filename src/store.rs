//! Store Module
//!
//! The key-value store that coordinates the log and the index.
//!
//! ## Responsibilities
//! - Rebuild the index by replaying the full log on open
//! - Append to the log (durably) before every index update
//! - Serve reads from the index alone

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::memtable::MemTable;
use crate::wal::{Record, Wal};

/// A durable key-value store
///
/// ## Write path
/// Every mutation is serialized as a record, appended to the log, and
/// fsynced before the in-memory index is updated. If the append fails, the
/// index is left untouched — nothing becomes visible in memory that is not
/// already durable.
///
/// ## Concurrency Model
/// Single-threaded by construction: `set`/`delete` take `&mut self`, so the
/// borrow checker enforces the one-writer discipline. Callers that need
/// shared access should wrap the store in a `Mutex`; `get` only reads the
/// index and never blocks on storage.
#[derive(Debug)]
pub struct Store {
    /// Append-only log; the source of truth
    wal: Wal,

    /// In-memory index; a cache over the log
    memtable: MemTable,
}

impl Store {
    /// Open or create a store backed by the log file at `path`
    ///
    /// On startup:
    /// 1. Open/create the log for appending
    /// 2. Replay every record into a fresh index, in storage order
    /// 3. Ready to serve requests
    pub fn open(path: &Path) -> Result<Self> {
        // Step 1: Acquire the append handle (creates the file if absent)
        let wal = Wal::open(path)?;

        // Step 2: Replay. Later records win, so a plain in-order fold
        // reproduces the exact final state.
        let records = wal.read_all()?;
        let replayed = records.len();

        let mut memtable = MemTable::new();
        for record in records {
            memtable.apply(record);
        }

        debug!(
            path = %path.display(),
            records = replayed,
            live_keys = memtable.len(),
            "log replayed"
        );

        Ok(Self { wal, memtable })
    }

    /// Open using a config (convenience method)
    pub fn open_config(config: &Config) -> Result<Self> {
        Self::open(&config.log_path)
    }

    /// Get the current value for a key
    ///
    /// Pure index lookup; never touches the log. An absent key returns
    /// `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.memtable.get(key)
    }

    /// Set a key to a value, unconditionally overwriting any previous value
    ///
    /// Steps:
    /// 1. Append `Set` record to the log (durable before return)
    /// 2. Apply it to the index
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let record = Record::Set(key.to_string(), value.to_string());

        // Step 1: Log first (durability guarantee); on failure the index
        // stays untouched and the error surfaces unchanged
        self.wal.append(&record)?;

        // Step 2: Apply to the index
        self.memtable.apply(record);

        Ok(())
    }

    /// Delete a key
    ///
    /// Deleting an absent key is not an error; the record is still
    /// appended so that replay is stable regardless of prior state.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        let record = Record::Delete(key.to_string());

        // Same contract as set: log durably, then apply
        self.wal.append(&record)?;
        self.memtable.apply(record);

        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Path of the backing log file
    pub fn log_path(&self) -> &Path {
        self.wal.path()
    }

    /// Number of live keys in the index
    pub fn len(&self) -> usize {
        self.memtable.len()
    }

    /// Whether the store currently holds no live keys
    pub fn is_empty(&self) -> bool {
        self.memtable.is_empty()
    }
}
