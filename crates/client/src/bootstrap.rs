//! Cluster bootstrap over the REST management API.
//!
//! A Membase cluster publishes its topology on port 8091. Discovery walks
//! three documents:
//!
//! ```text
//! GET /pools                     -> pools[0].uri
//! GET /pools/default?uuid=...    -> buckets.uri
//! GET /pools/default/buckets?... -> [{name, proxyPort, nodes: [{hostname, ports}]}]
//! ```
//!
//! The configured bucket's nodes become memcached endpoints. Requests go to
//! each node's proxy port, which routes keys to the right vbucket, so the
//! memcache client can treat the nodes as plain servers.
//!
//! Password-protected buckets only show up in the bucket list for a caller
//! authenticated as that bucket, so with a password set every request carries
//! HTTP Basic credentials `bucket:password`.

use crate::config::ConnectionConfig;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use membase_core::{DbError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// A memcached server discovered for the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host name or address, IPv6 in brackets
    pub host: String,
    /// Memcached port
    pub port: u16,
}

#[derive(Debug, Deserialize)]
struct PoolsDoc {
    #[serde(default)]
    pools: Vec<PoolRef>,
}

#[derive(Debug, Deserialize)]
struct PoolRef {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct PoolDoc {
    buckets: BucketsRef,
}

#[derive(Debug, Deserialize)]
struct BucketsRef {
    uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BucketDoc {
    name: String,
    #[serde(default)]
    proxy_port: u16,
    #[serde(default)]
    nodes: Vec<NodeDoc>,
}

#[derive(Debug, Deserialize)]
struct NodeDoc {
    hostname: String,
    #[serde(default)]
    status: Option<String>,
    ports: NodePorts,
}

#[derive(Debug, Deserialize)]
struct NodePorts {
    proxy: u16,
}

/// Parse and check the bootstrap URI for a configuration.
pub fn bootstrap_url(config: &ConnectionConfig) -> Result<Url> {
    let uri = config.bootstrap_uri();
    let url = Url::parse(&uri).map_err(|e| DbError::BadUri(format!("{}: {}", uri, e)))?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(DbError::BadUri(uri)),
    }
}

/// Discover the memcached servers serving the configured bucket.
///
/// Returns `memcache://` URLs ready for
/// [`MemcacheStore::connect`](crate::MemcacheStore::connect).
pub fn discover(config: &ConnectionConfig) -> Result<Vec<String>> {
    let pools_url = bootstrap_url(config)?;
    let endpoints = walk(&ureq::agent(), &pools_url, config)?;
    debug!(
        bucket = %config.bucket,
        nodes = endpoints.len(),
        "discovered bucket topology"
    );

    Ok(endpoints
        .iter()
        .map(|e| config.server_url(&e.host, e.port))
        .collect())
}

/// `/pools` -> pool -> bucket list -> the configured bucket's endpoints.
fn walk(
    agent: &ureq::Agent,
    pools_url: &Url,
    config: &ConnectionConfig,
) -> Result<Vec<Endpoint>> {
    let pools: PoolsDoc = fetch(agent, pools_url, config)?;
    let pool_url = resolve(pools_url, first_pool(&pools)?)?;

    let pool: PoolDoc = fetch(agent, &pool_url, config)?;
    let buckets_url = resolve(&pool_url, &pool.buckets.uri)?;

    let buckets: Vec<BucketDoc> = fetch(agent, &buckets_url, config)?;
    select_endpoints(&buckets, &config.bucket)
}

fn fetch<T: DeserializeOwned>(
    agent: &ureq::Agent,
    url: &Url,
    config: &ConnectionConfig,
) -> Result<T> {
    let mut request = agent.get(url.as_str());
    if let Some(credentials) = basic_auth(config) {
        request = request.set("Authorization", &credentials);
    }
    let response = request.call().map_err(|e| http_error(config, url, e))?;
    response
        .into_json()
        .map_err(|e| DbError::Bootstrap(format!("{}: {}", url, e)))
}

/// `Authorization` header value for the bucket, if it has a password.
fn basic_auth(config: &ConnectionConfig) -> Option<String> {
    if config.password.is_empty() {
        return None;
    }
    let pair = format!("{}:{}", config.bucket, config.password);
    Some(format!("Basic {}", STANDARD.encode(pair)))
}

fn http_error(config: &ConnectionConfig, url: &Url, err: ureq::Error) -> DbError {
    match err {
        ureq::Error::Status(code, _) => DbError::Connection {
            address: config.address.clone(),
            reason: format!("{} returned HTTP {}", url, code),
        },
        ureq::Error::Transport(transport) => match transport.kind() {
            ureq::ErrorKind::Dns => DbError::UnknownHost(config.address.clone()),
            ureq::ErrorKind::InvalidUrl | ureq::ErrorKind::UnknownScheme => {
                DbError::BadUri(url.to_string())
            }
            _ => DbError::Connection {
                address: config.address.clone(),
                reason: transport.to_string(),
            },
        },
    }
}

fn first_pool(pools: &PoolsDoc) -> Result<&str> {
    pools
        .pools
        .first()
        .map(|p| p.uri.as_str())
        .ok_or_else(|| DbError::Bootstrap("cluster has no pools".into()))
}

fn resolve(base: &Url, reference: &str) -> Result<Url> {
    base.join(reference)
        .map_err(|e| DbError::BadUri(format!("{}: {}", reference, e)))
}

fn select_endpoints(buckets: &[BucketDoc], bucket: &str) -> Result<Vec<Endpoint>> {
    let doc = buckets
        .iter()
        .find(|b| b.name == bucket)
        .ok_or_else(|| DbError::Config(format!("bucket {:?} does not exist", bucket)))?;

    let endpoints: Vec<Endpoint> = doc
        .nodes
        .iter()
        .filter(|n| n.status.as_deref() != Some("unhealthy"))
        .map(|n| Endpoint {
            host: strip_port(&n.hostname).to_string(),
            port: if doc.proxy_port != 0 {
                doc.proxy_port
            } else {
                n.ports.proxy
            },
        })
        .collect();

    if endpoints.is_empty() {
        return Err(DbError::Bootstrap(format!(
            "bucket {:?} has no healthy nodes",
            bucket
        )));
    }
    Ok(endpoints)
}

/// `host:8091` -> `host`; bracketed IPv6 stays bracketed.
fn strip_port(hostname: &str) -> &str {
    match hostname.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            if host.starts_with('[') || !host.contains(':') {
                host
            } else {
                hostname
            }
        }
        _ => hostname,
    }
}
