//! Log record definitions
//!
//! Defines the unit of durability: one serialized mutation per log line.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// One mutation, as it appears in the log
///
/// The serde externally-tagged representation gives the on-disk shapes
/// directly:
///
/// - `Record::Set(key, value)` → `{"Set":["<key>","<value>"]}`
/// - `Record::Delete(key)`     → `{"Delete":"<key>"}`
///
/// The variant tag makes decoding a discriminated parse: a line that carries
/// neither tag fails outright instead of being guessed at. JSON string
/// escaping means keys and values may contain quotes, newlines, or any other
/// character without breaking the line framing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Record {
    /// Set a key to a value
    Set(String, String),

    /// Delete a key
    Delete(String),
}

impl Record {
    /// The key this record applies to
    pub fn key(&self) -> &str {
        match self {
            Record::Set(key, _) => key,
            Record::Delete(key) => key,
        }
    }

    /// Encode as a single JSON log line, without the trailing newline
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(StoreError::Encode)
    }

    /// Decode one log line; `line` is the 1-based position used in errors
    pub fn decode(frame: &str, line: usize) -> Result<Self> {
        serde_json::from_str(frame).map_err(|source| StoreError::Decode { line, source })
    }
}
