//! Initialization Lifecycle Tests
//!
//! uninitialized -> initialized (handle set or unset) -> operating

use crate::*;
use std::thread;

#[test]
fn test_uninitialized_operations_fail() {
    let db = MembaseClient::new();
    let record = record_of([("a", "1")]);

    assert!(matches!(db.read(TABLE, "k", None), Err(DbError::NotInitialized)));
    assert!(matches!(db.insert(TABLE, "k", &record), Err(DbError::NotInitialized)));
    assert!(matches!(db.update(TABLE, "k", &record), Err(DbError::NotInitialized)));
    assert!(matches!(db.delete(TABLE, "k"), Err(DbError::NotInitialized)));
}

#[test]
fn test_init_with_malformed_address_is_reported() {
    let mut db = MembaseClient::new();
    let props = Properties::new().with("memcached.address", "not a host");

    let err = db.init(&props).unwrap_err();
    assert!(err.is_connect_error());
    assert!(!db.is_initialized());

    // Still usable: every operation reports ERROR instead of panicking
    let record = record_of([("a", "1")]);
    assert_eq!(Status::of(&db.read(TABLE, "k", None)).code(), -1);
    assert_eq!(Status::of(&db.insert(TABLE, "k", &record)).code(), -1);
    assert_eq!(Status::of(&db.update(TABLE, "k", &record)).code(), -1);
    assert_eq!(Status::of(&db.delete(TABLE, "k")).code(), -1);
}

#[test]
fn test_init_with_unresolvable_host_is_reported() {
    let mut db = MembaseClient::new();
    let props = Properties::new().with("memcached.address", "membase.invalid");

    let err = db.init(&props).unwrap_err();
    match &err {
        DbError::UnknownHost(host) => assert_eq!(host, "membase.invalid"),
        other => panic!("expected unknown host, got {:?}", other),
    }
    assert!(!db.is_initialized());
    assert_eq!(Status::of(&db.read(TABLE, "k", None)), Status::Error);
}

#[test]
fn test_init_with_invalid_settings() {
    let cases = [
        ("membase.encoding", "yaml"),
        ("membase.bootstrap", "maybe"),
        ("memcached.port", "-1"),
    ];
    for (key, value) in cases {
        let mut db = MembaseClient::new();
        let err = db.init(&Properties::new().with(key, value)).unwrap_err();
        assert!(matches!(err, DbError::Config(_)), "{}: {:?}", key, err);
    }
}

#[test]
fn test_init_with_refused_connection_is_reported() {
    let mut db = MembaseClient::new();
    let props = Properties::new().with("memcached.address", "127.0.0.1");

    let err = db.init(&props).unwrap_err();
    assert!(matches!(err, DbError::Connection { .. }), "{:?}", err);
    assert!(!db.is_initialized());
}

#[test]
fn test_init_with_unusable_password_is_config_error() {
    let mut db = MembaseClient::new();
    let props = Properties::new()
        .with("membase.bucket", "users")
        .with("membase.password", "p@ss word!");

    let err = db.init(&props).unwrap_err();
    match err {
        DbError::Config(msg) => assert!(msg.contains("membase.password"), "{}", msg),
        other => panic!("expected config error, got {:?}", other),
    }
    assert!(!db.is_initialized());
}

#[test]
fn test_connection_config_defaults() {
    let config = ConnectionConfig::from_properties(&Properties::new()).unwrap();
    assert_eq!(config.address, "localhost");
    assert_eq!(config.bucket, "default");
    assert_eq!(config.password, "");
    assert_eq!(config.bootstrap_uri(), "http://localhost:8091/pools");
}

#[test]
fn test_cleanup_is_noop() {
    let (mut db, _store) = create_client(Encoding::Framed);
    db.insert(TABLE, "k", &record_of([("a", "1")])).unwrap();
    db.cleanup().unwrap();
    assert!(db.read(TABLE, "k", None).is_ok());
}

#[test]
fn test_handle_shared_across_threads() {
    let (db, store) = create_client(Encoding::Framed);
    let handle = db.store().unwrap();

    let workers: Vec<_> = (0..4)
        .map(|t| {
            let db = MembaseClient::with_store(handle.clone(), Encoding::Framed);
            thread::spawn(move || {
                for i in 0..50 {
                    let key = format!("user{}:{}", t, i);
                    db.insert(TABLE, &key, &record_of([("thread", t.to_string())]))
                        .unwrap();
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    assert_eq!(store.len(), 200);
    assert_eq!(db.read(TABLE, "user3:49", None).unwrap()["thread"], "3");
}
