//! Insert / Read / Update / Delete Tests

use crate::*;

// =============================================================================
// INSERT / READ TESTS
// =============================================================================

#[test]
fn test_insert_then_read_roundtrip() {
    let (db, _store) = create_client(Encoding::Framed);
    let record = record_of([("name", "alice"), ("age", "30")]);

    let inserted = db.insert(TABLE, "user1", &record);
    assert_eq!(Status::of(&inserted), Status::Ok);

    let read = db.read(TABLE, "user1", None);
    assert_eq!(Status::of(&read), Status::Ok);
    assert_eq!(read.unwrap(), record);
}

#[test]
fn test_insert_then_read_all_standard_records() {
    for encoding in [Encoding::Framed, Encoding::Legacy] {
        let (db, _store) = create_client(encoding);
        for (name, record) in standard_test_records() {
            let key = format!("record:{}", name);
            db.insert(TABLE, &key, &record).unwrap();
            assert_eq!(
                db.read(TABLE, &key, None).unwrap(),
                record,
                "{} with {}",
                name,
                encoding
            );
        }
    }
}

#[test]
fn test_read_never_inserted_is_error() {
    let (db, _store) = create_client(Encoding::Framed);

    let result = db.read(TABLE, "ghost", None);
    assert_eq!(Status::of(&result), Status::Error);
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_read_returns_all_fields_regardless_of_request() {
    let (db, _store) = create_client(Encoding::Framed);
    let record = record_of([("a", "1"), ("b", "2"), ("c", "3")]);
    db.insert(TABLE, "k", &record).unwrap();

    let only_a: FieldSet = ["a".to_string()].into_iter().collect();
    assert_eq!(db.read(TABLE, "k", Some(&only_a)).unwrap(), record);
}

#[test]
fn test_table_is_ignored() {
    let (db, _store) = create_client(Encoding::Framed);
    let record = record_of([("f", "v")]);
    db.insert("table_a", "k", &record).unwrap();

    assert_eq!(db.read("table_b", "k", None).unwrap(), record);
}

// =============================================================================
// UPDATE TESTS
// =============================================================================

#[test]
fn test_update_replaces_whole_record() {
    let (db, _store) = create_client(Encoding::Framed);
    db.insert(TABLE, "k", &record_of([("a", "1"), ("b", "2")]))
        .unwrap();

    db.update(TABLE, "k", &record_of([("b", "3")])).unwrap();

    assert_eq!(db.read(TABLE, "k", None).unwrap(), record_of([("b", "3")]));
}

#[test]
fn test_update_missing_key_upserts() {
    let (db, _store) = create_client(Encoding::Framed);
    let record = record_of([("a", "1")]);

    assert_eq!(Status::of(&db.update(TABLE, "new", &record)), Status::Ok);
    assert_eq!(db.read(TABLE, "new", None).unwrap(), record);
}

#[test]
fn test_insert_existing_key_overwrites() {
    let (db, _store) = create_client(Encoding::Framed);
    db.insert(TABLE, "k", &record_of([("v", "1")])).unwrap();
    db.insert(TABLE, "k", &record_of([("v", "2")])).unwrap();

    assert_eq!(db.read(TABLE, "k", None).unwrap()["v"], "2");
}

// =============================================================================
// DELETE TESTS
// =============================================================================

#[test]
fn test_delete_existing_then_read_is_error() {
    let (db, store) = create_client(Encoding::Framed);
    db.insert(TABLE, "k", &record_of([("a", "1")])).unwrap();

    assert_eq!(Status::of(&db.delete(TABLE, "k")), Status::Ok);
    assert!(store.is_empty());

    let read = db.read(TABLE, "k", None);
    assert_eq!(Status::of(&read), Status::Error);
}

#[test]
fn test_delete_missing_is_error() {
    let (db, _store) = create_client(Encoding::Framed);

    let result = db.delete(TABLE, "missing");
    assert_eq!(Status::of(&result), Status::Error);
}

#[test]
fn test_delete_twice() {
    let (db, _store) = create_client(Encoding::Framed);
    db.insert(TABLE, "k", &record_of([("a", "1")])).unwrap();

    assert!(db.delete(TABLE, "k").is_ok());
    assert!(db.delete(TABLE, "k").is_err());
}

// =============================================================================
// SCAN TESTS
// =============================================================================

#[test]
fn test_scan_always_unsupported() {
    let (db, _store) = create_client(Encoding::Framed);
    db.insert(TABLE, "user1", &record_of([("a", "1")])).unwrap();

    for (start, count) in [("user1", 1), ("", 0), ("zzz", 1000)] {
        let err = db.scan(TABLE, start, count, None).unwrap_err();
        assert!(err.is_unsupported(), "{:?}", err);
        assert_eq!(err.status(), Status::Error);
    }
}

#[test]
fn test_scan_unsupported_even_when_uninitialized() {
    let db = MembaseClient::new();
    let err = db.scan(TABLE, "k", 1, None).unwrap_err();
    assert!(err.is_unsupported());
}
