//! MemTable Module
//!
//! In-memory index derived from the log.
//!
//! ## Responsibilities
//! - Fast key→value lookups without touching storage
//! - Apply records in order (the fold that replay and live writes share)
//! - Last-writer-wins on duplicate keys; delete removes the key outright
//!
//! ## Data Structure Choice
//! Plain HashMap for V1:
//! - The store is single-writer and lookups are point queries only
//! - No range scans, so ordering buys nothing here

mod table;

pub use table::MemTable;
