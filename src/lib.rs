//! # logkv
//!
//! A minimal log-structured key-value store with:
//! - An append-only command log as the single source of truth
//! - fsync-before-acknowledge durability on every mutation
//! - Crash recovery by replaying the full log into a fresh in-memory index
//! - Torn-write tolerance for an interrupted final append
//!
//! ## Architecture Overview
//!
//! ```text
//!            set / delete                     get
//!                 │                            │
//!                 ▼                            ▼
//!          ┌─────────────┐             ┌─────────────┐
//!          │     WAL     │──replay────▶│  MemTable   │
//!          │  (append +  │  (on open)  │  (HashMap)  │
//!          │   fsync)    │             │             │
//!          └─────────────┘             └─────────────┘
//!            source of truth             derived cache
//! ```
//!
//! The log is the database; the index is a cache over it. Every mutation is
//! durable on disk before it becomes visible in memory, so a fresh `Store`
//! opened against the same log always reproduces the exact final state.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod memtable;
pub mod store;
pub mod wal;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, StoreError};
pub use store::Store;
pub use wal::{Record, Wal};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of logkv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
