//! Write-Ahead Log (WAL) Module
//!
//! Provides durability guarantees through append-only logging.
//!
//! ## Responsibilities
//! - Append one record per mutation, before the in-memory index is touched
//! - Force every appended record to stable storage before returning
//! - Full sequential replay of all records, in storage order
//! - Tolerate a torn final line left by an interrupted append
//!
//! ## File Format
//! A text file, one JSON-encoded record per newline-terminated line:
//! ```text
//! {"Set":["foo","a"]}
//! {"Set":["bar","b"]}
//! {"Delete":"foo"}
//! ```
//! Keys and values are JSON-escaped, so arbitrary strings (including
//! embedded quotes and newlines) round-trip without ambiguity.

mod log;
mod record;

pub use log::Wal;
pub use record::Record;
