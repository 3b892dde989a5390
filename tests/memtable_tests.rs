//! Tests for the in-memory index
//!
//! These tests verify:
//! - Apply as the single transition function (set/delete semantics)
//! - Last-writer-wins on duplicate keys
//! - Delete of an absent key is a no-op
//! - Folding the same record sequence twice yields identical state

use logkv::wal::Record;
use logkv::memtable::MemTable;

// =============================================================================
// Helper Functions
// =============================================================================

fn snapshot(table: &MemTable) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    entries.sort();
    entries
}

// =============================================================================
// Apply Semantics
// =============================================================================

#[test]
fn test_set_then_get() {
    let mut table = MemTable::new();
    table.apply(Record::Set("k".into(), "v".into()));

    assert_eq!(table.get("k"), Some("v"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_get_absent_key() {
    let table = MemTable::new();
    assert_eq!(table.get("missing"), None);
    assert!(table.is_empty());
}

#[test]
fn test_last_writer_wins() {
    let mut table = MemTable::new();
    table.apply(Record::Set("k".into(), "a".into()));
    table.apply(Record::Set("k".into(), "b".into()));

    assert_eq!(table.get("k"), Some("b"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_delete_removes_key() {
    let mut table = MemTable::new();
    table.apply(Record::Set("k".into(), "a".into()));
    table.apply(Record::Delete("k".into()));

    assert_eq!(table.get("k"), None);
    assert!(table.is_empty());
}

#[test]
fn test_delete_absent_key_is_noop() {
    let mut table = MemTable::new();
    table.apply(Record::Set("other".into(), "x".into()));
    table.apply(Record::Delete("missing".into()));

    assert_eq!(table.get("other"), Some("x"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_set_after_delete() {
    let mut table = MemTable::new();
    table.apply(Record::Set("k".into(), "a".into()));
    table.apply(Record::Delete("k".into()));
    table.apply(Record::Set("k".into(), "b".into()));

    assert_eq!(table.get("k"), Some("b"));
}

// =============================================================================
// Fold Determinism
// =============================================================================

#[test]
fn test_same_sequence_same_state() {
    let records = vec![
        Record::Set("foo".into(), "a".into()),
        Record::Set("bar".into(), "b".into()),
        Record::Delete("foo".into()),
        Record::Set("baz".into(), "c".into()),
        Record::Set("bar".into(), "b2".into()),
    ];

    let mut first = MemTable::new();
    let mut second = MemTable::new();
    for record in &records {
        first.apply(record.clone());
    }
    for record in &records {
        second.apply(record.clone());
    }

    assert_eq!(snapshot(&first), snapshot(&second));
    assert_eq!(
        snapshot(&first),
        vec![
            ("bar".to_string(), "b2".to_string()),
            ("baz".to_string(), "c".to_string()),
        ]
    );
}
