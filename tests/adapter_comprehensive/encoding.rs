//! Stored Value Format Tests
//!
//! What actually lands in the store for each encoding.

use crate::*;

#[test]
fn test_legacy_value_layout() {
    let (db, store) = create_client(Encoding::Legacy);
    db.insert(TABLE, "user1", &record_of([("name", "alice"), ("age", "30")]))
        .unwrap();

    assert_eq!(store.raw("user1").unwrap(), "name\nalice\tage\n30");
}

#[test]
fn test_framed_value_layout() {
    let (db, store) = create_client(Encoding::Framed);
    db.insert(TABLE, "user1", &record_of([("name", "alice"), ("age", "30")]))
        .unwrap();

    assert_eq!(store.raw("user1").unwrap(), "4:name5:alice3:age2:30");
}

#[test]
fn test_legacy_reads_values_written_by_older_clients() {
    let (db, store) = create_client(Encoding::Legacy);
    store
        .set("user1", "name\nalice\tage\n30", NO_EXPIRATION)
        .unwrap();

    let record = db.read(TABLE, "user1", None).unwrap();
    assert_eq!(record, record_of([("name", "alice"), ("age", "30")]));
}

#[test]
fn test_legacy_insert_with_delimiters_is_refused_not_corrupted() {
    let (db, store) = create_client(Encoding::Legacy);
    let record = record_of([("notes", "col1\tcol2")]);

    let result = db.insert(TABLE, "k", &record);
    assert_eq!(Status::of(&result), Status::Error);
    assert!(matches!(result.unwrap_err(), DbError::Encoding(_)));
    assert!(store.raw("k").is_none());
}

#[test]
fn test_framed_handles_delimiters() {
    let (db, _store) = create_client(Encoding::Framed);
    let record = record_of([("notes", "col1\tcol2\nrow2"), ("tab\tname", "")]);

    db.insert(TABLE, "k", &record).unwrap();
    assert_eq!(db.read(TABLE, "k", None).unwrap(), record);
}

#[test]
fn test_reading_with_wrong_encoding_is_error() {
    let (writer, store) = create_client(Encoding::Framed);
    writer
        .insert(TABLE, "k", &record_of([("a", "1")]))
        .unwrap();

    let reader = MembaseClient::with_store(store, Encoding::Legacy);
    let result = reader.read(TABLE, "k", None);
    assert_eq!(Status::of(&result), Status::Error);
}
