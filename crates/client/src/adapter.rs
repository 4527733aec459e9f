//! The Membase adapter.
//!
//! [`MembaseClient`] implements the harness [`Db`] contract on top of a
//! shared [`KeyValueStore`] handle. Each operation is a single delegated call:
//!
//! | Operation | Store call | Fails when |
//! |-----------|------------|------------|
//! | read | `get` | value absent, transport error, undecodable value |
//! | insert / update | `set`, no expiration | store refuses, transport error |
//! | delete | `delete` | key absent, store refuses, transport error |
//! | scan | none | always |
//!
//! Failures are logged and returned as `Err`; nothing panics and nothing is
//! retried. The `table` argument is ignored: a bucket is a single keyspace.

use crate::bootstrap;
use crate::config::{encoding_from_properties, ConnectionConfig};
use crate::memcached::MemcacheStore;
use crate::store::{KeyValueStore, NO_EXPIRATION};
use membase_core::{Db, DbError, FieldSet, Operation, Properties, Record, Result};
use membase_wire::Encoding;
use std::sync::Arc;
use tracing::{debug, error};

/// Message carried by the unsupported-operation error scan returns.
pub const SCAN_UNSUPPORTED: &str = "Scan is not supported in Membase. Try Couchbase!";

/// Harness adapter for a Membase bucket.
///
/// # Example
///
/// ```ignore
/// use membase_client::MembaseClient;
/// use membase_core::{Db, Properties, Status};
///
/// let mut db = MembaseClient::new();
/// db.init(&Properties::new().with("memcached.address", "membase1"))?;
///
/// db.insert("usertable", "user1", &record)?;
/// let status = Status::of(&db.read("usertable", "user1", None));
/// ```
pub struct MembaseClient {
    store: Option<Arc<dyn KeyValueStore>>,
    encoding: Encoding,
}

impl MembaseClient {
    /// Create an adapter with no client handle.
    ///
    /// Every operation fails with [`DbError::NotInitialized`] until
    /// [`Db::init`] succeeds.
    pub fn new() -> Self {
        Self {
            store: None,
            encoding: Encoding::default(),
        }
    }

    /// Create an adapter over an existing handle.
    pub fn with_store(store: Arc<dyn KeyValueStore>, encoding: Encoding) -> Self {
        Self {
            store: Some(store),
            encoding,
        }
    }

    /// Connect to the cluster described by `config`.
    pub fn connect(config: &ConnectionConfig, encoding: Encoding) -> Result<Self> {
        let store = open_store(config)?;
        Ok(Self::with_store(store, encoding))
    }

    /// Check whether a client handle is set.
    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    /// Encoding used for stored values.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The client handle, for sharing with other adapter instances.
    pub fn store(&self) -> Option<Arc<dyn KeyValueStore>> {
        self.store.clone()
    }

    fn handle(&self) -> Result<&dyn KeyValueStore> {
        self.store.as_deref().ok_or(DbError::NotInitialized)
    }

    fn fetch(&self, key: &str) -> Result<Record> {
        let value = self
            .handle()?
            .get(key)?
            .ok_or_else(|| DbError::NotFound {
                key: key.to_string(),
                operation: Operation::Read,
            })?;
        Ok(self.encoding.decode(&value)?)
    }

    fn write(&self, operation: Operation, key: &str, values: &Record) -> Result<()> {
        let store = self.handle()?;
        let value = self.encoding.encode(values)?;
        if !store.set(key, &value, NO_EXPIRATION)? {
            return Err(DbError::Rejected {
                key: key.to_string(),
                operation,
            });
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.handle()?.delete(key)? {
            return Err(DbError::Rejected {
                key: key.to_string(),
                operation: Operation::Delete,
            });
        }
        Ok(())
    }
}

impl Default for MembaseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MembaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembaseClient")
            .field("initialized", &self.is_initialized())
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl Db for MembaseClient {
    fn init(&mut self, properties: &Properties) -> Result<()> {
        self.store = None;

        let (encoding, config) = match read_settings(properties) {
            Ok(settings) => settings,
            Err(err) => {
                error!(error = %err, "invalid Membase configuration");
                return Err(err);
            }
        };
        self.encoding = encoding;

        match open_store(&config) {
            Ok(store) => {
                debug!(address = %config.address, bucket = %config.bucket, "Membase client ready");
                self.store = Some(store);
                Ok(())
            }
            Err(err) => {
                log_connect_failure(&config, &err);
                Err(err)
            }
        }
    }

    fn read(&self, _table: &str, key: &str, _fields: Option<&FieldSet>) -> Result<Record> {
        report(Operation::Read, key, self.fetch(key))
    }

    fn scan(
        &self,
        _table: &str,
        start_key: &str,
        _record_count: usize,
        _fields: Option<&FieldSet>,
    ) -> Result<Vec<Record>> {
        report(
            Operation::Scan,
            start_key,
            Err(DbError::Unsupported(SCAN_UNSUPPORTED.to_string())),
        )
    }

    fn update(&self, _table: &str, key: &str, values: &Record) -> Result<()> {
        report(Operation::Update, key, self.write(Operation::Update, key, values))
    }

    fn insert(&self, _table: &str, key: &str, values: &Record) -> Result<()> {
        report(Operation::Insert, key, self.write(Operation::Insert, key, values))
    }

    fn delete(&self, _table: &str, key: &str) -> Result<()> {
        report(Operation::Delete, key, self.remove(key))
    }
}

/// Build the client handle for `config`.
///
/// With bootstrap on, the node list comes from the REST API; otherwise the
/// handle dials `address:port` directly.
pub fn open_store(config: &ConnectionConfig) -> Result<Arc<dyn KeyValueStore>> {
    let servers = if config.bootstrap {
        bootstrap::discover(config)?
    } else {
        vec![config.server_url(&config.address, config.port)]
    };
    let store = MemcacheStore::connect(servers)?;
    debug!(servers = store.servers().len(), "connected to memcached");
    Ok(Arc::new(store))
}

fn read_settings(properties: &Properties) -> Result<(Encoding, ConnectionConfig)> {
    let encoding = encoding_from_properties(properties)?;
    let config = ConnectionConfig::from_properties(properties)?;
    Ok((encoding, config))
}

fn report<T>(operation: Operation, key: &str, result: Result<T>) -> Result<T> {
    if let Err(err) = &result {
        match err {
            DbError::NotFound { .. } | DbError::Rejected { .. } => {
                error!(operation = %operation, key = %key, "{}", err)
            }
            _ => error!(operation = %operation, key = %key, error = %err, "{} failed", operation),
        }
    }
    result
}

fn log_connect_failure(config: &ConnectionConfig, err: &DbError) {
    match err {
        DbError::UnknownHost(_) => {
            error!(address = %config.address, "IP address of host could not be determined")
        }
        DbError::BadUri(_) => error!("Bad URI: {}", config.bootstrap_uri()),
        DbError::Connection { reason, .. } => {
            error!(reason = %reason, "Could not connect to host at {}", config.address)
        }
        other => error!(address = %config.address, error = %other, "Membase init failed"),
    }
}
