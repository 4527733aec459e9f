//! Memcached-backed store.
//!
//! Wraps [`memcache::Client`], which owns the sockets, connection pooling and
//! the binary protocol. Keys are hashed across all configured servers by the
//! client library.

use crate::store::KeyValueStore;
use membase_core::{DbError, Result};
use memcache::{Client, MemcacheError};
use tracing::warn;

/// A [`KeyValueStore`] talking to one or more memcached servers.
pub struct MemcacheStore {
    client: Client,
    servers: Vec<String>,
}

impl MemcacheStore {
    /// Connect to the given `memcache://` URLs.
    pub fn connect(servers: Vec<String>) -> Result<Self> {
        if servers.is_empty() {
            return Err(DbError::Bootstrap("no memcached servers to connect to".into()));
        }
        let client = Client::connect(servers.clone()).map_err(|e| connect_error(&servers, e))?;
        Ok(Self { client, servers })
    }

    /// Server URLs this store was built from.
    pub fn servers(&self) -> &[String] {
        &self.servers
    }
}

impl std::fmt::Debug for MemcacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemcacheStore")
            .field("servers", &self.servers.len())
            .finish()
    }
}

impl KeyValueStore for MemcacheStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.client
            .get::<String>(key)
            .map_err(|e| DbError::Store(e.to_string()))
    }

    fn set(&self, key: &str, value: &str, expiration: u32) -> Result<bool> {
        match self.client.set(key, value, expiration) {
            Ok(()) => Ok(true),
            Err(err @ MemcacheError::CommandError(_)) => {
                warn!(key = %key, error = %err, "server refused set");
                Ok(false)
            }
            Err(err) => Err(DbError::Store(err.to_string())),
        }
    }

    fn delete(&self, key: &str) -> Result<bool> {
        match self.client.delete(key) {
            Ok(existed) => Ok(existed),
            Err(err @ MemcacheError::CommandError(_)) => {
                warn!(key = %key, error = %err, "server refused delete");
                Ok(false)
            }
            Err(err) => Err(DbError::Store(err.to_string())),
        }
    }
}

fn connect_error(servers: &[String], err: MemcacheError) -> DbError {
    match err {
        MemcacheError::BadURL(url) => DbError::BadUri(url),
        other => DbError::Connection {
            address: redact(&servers.join(",")),
            reason: other.to_string(),
        },
    }
}

/// Strip credentials from a server list before it reaches a log line.
fn redact(servers: &str) -> String {
    servers
        .split(',')
        .map(|s| match (s.find("://"), s.rfind('@')) {
            (Some(scheme), Some(at)) if at > scheme => {
                format!("{}{}", &s[..scheme + 3], &s[at + 1..])
            }
            _ => s.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
