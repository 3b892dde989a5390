//! Append-only log
//!
//! Owns the append handle to the backing file; the sole durability
//! boundary of the whole store.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use super::Record;
use crate::error::Result;

/// Durable, ordered, append-only sequence of records
///
/// Appending is the only mutation; nothing is ever rewritten or reordered
/// in place, so physical order on disk equals logical application order.
/// Exactly one writer process is assumed to own a given path at a time.
#[derive(Debug)]
pub struct Wal {
    /// Append handle; opened once, never seeks
    file: File,

    /// Backing file path; `read_all` opens its own handle from this
    path: PathBuf,
}

impl Wal {
    /// Open or create the log file for appending
    ///
    /// Existing content is never truncated or modified.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Append one record and force it to stable storage
    ///
    /// The record is written as a single JSON line. This does not return
    /// until the bytes are fsynced; on error the byte-level state of the
    /// log is unknown (the write may be absent, partial, or complete), so
    /// callers must not retry blindly.
    pub fn append(&mut self, record: &Record) -> Result<()> {
        let mut frame = record.encode()?;
        frame.push(b'\n');

        // One write_all for frame + delimiter, then fsync before returning
        self.file.write_all(&frame)?;
        self.file.sync_all()?;

        Ok(())
    }

    /// Read every durable record from the start of the log, in order
    ///
    /// Opens an independent read handle, so it can be called repeatedly
    /// and interleaved with appends. Torn-write policy: a line that fails
    /// to decode is tolerated only when it is the final line of the file —
    /// the signature of an append interrupted by a crash — and is skipped
    /// with a warning. An undecodable line anywhere else is corruption and
    /// fails with the line number.
    pub fn read_all(&self) -> Result<Vec<Record>> {
        let file = File::open(&self.path)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        let mut records = Vec::with_capacity(lines.len());
        for (i, frame) in lines.iter().enumerate() {
            match Record::decode(frame, i + 1) {
                Ok(record) => records.push(record),
                Err(err) if i + 1 == lines.len() => {
                    warn!(line = i + 1, %err, "ignoring torn final log line");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(records)
    }

    /// Path of the backing log file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
