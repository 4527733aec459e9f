//! Connection configuration.

use membase_core::{DbError, Properties, Result};
use membase_wire::Encoding;
use url::Url;

/// Host of the cluster, or of the memcached server when bootstrap is off.
pub const ADDRESS: &str = "memcached.address";
/// Default for [`ADDRESS`].
pub const ADDRESS_DEFAULT: &str = "localhost";

/// Bucket to open.
pub const BUCKET: &str = "membase.bucket";
/// Default for [`BUCKET`].
pub const BUCKET_DEFAULT: &str = "default";

/// Bucket password; empty means no authentication.
pub const PASSWORD: &str = "membase.password";
/// Default for [`PASSWORD`].
pub const PASSWORD_DEFAULT: &str = "";

/// Whether to discover nodes through the REST management endpoint.
pub const BOOTSTRAP: &str = "membase.bootstrap";

/// Memcached port used when bootstrap is off.
pub const PORT: &str = "memcached.port";
/// Default for [`PORT`].
pub const PORT_DEFAULT: u16 = 11211;

/// Value encoding, `framed` or `legacy`.
pub const ENCODING: &str = "membase.encoding";

/// Port of the cluster management REST API.
pub const REST_PORT: u16 = 8091;

/// Where and how to connect. Read once at init, never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Cluster host name or address
    pub address: String,
    /// Bucket name
    pub bucket: String,
    /// Bucket password
    pub password: String,
    /// Discover nodes via REST (`true`) or dial `address:port` directly
    pub bootstrap: bool,
    /// Memcached port for direct connections
    pub port: u16,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            address: ADDRESS_DEFAULT.to_string(),
            bucket: BUCKET_DEFAULT.to_string(),
            password: PASSWORD_DEFAULT.to_string(),
            bootstrap: true,
            port: PORT_DEFAULT,
        }
    }
}

impl ConnectionConfig {
    /// Read the connection settings from harness properties.
    ///
    /// With a password set, the bucket name and password must survive a
    /// trip through a `memcache://` URL unchanged, since the memcache client
    /// hands the URL's userinfo to SASL as-is.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        let config = Self {
            address: props.get_or(ADDRESS, ADDRESS_DEFAULT).to_string(),
            bucket: props.get_or(BUCKET, BUCKET_DEFAULT).to_string(),
            password: props.get_or(PASSWORD, PASSWORD_DEFAULT).to_string(),
            bootstrap: props.get_parsed(BOOTSTRAP, true)?,
            port: props.get_parsed(PORT, PORT_DEFAULT)?,
        };
        config.check_credentials()?;
        Ok(config)
    }

    /// REST endpoint the cluster topology is read from.
    pub fn bootstrap_uri(&self) -> String {
        format!("http://{}:{}/pools", self.address, REST_PORT)
    }

    /// Memcached URL for one server, carrying bucket credentials when a
    /// password is set. Credentials are written verbatim.
    pub fn server_url(&self, host: &str, port: u16) -> String {
        if self.password.is_empty() {
            format!("memcache://{}:{}", host, port)
        } else {
            format!(
                "memcache://{}:{}@{}:{}",
                self.bucket, self.password, host, port
            )
        }
    }

    fn check_credentials(&self) -> Result<()> {
        if self.password.is_empty() {
            return Ok(());
        }
        let bucket = Url::parse(&format!("memcache://{}:x@localhost", self.bucket));
        if bucket.as_ref().map(|url| url.username()).ok() != Some(self.bucket.as_str()) {
            return Err(unusable_credential(BUCKET));
        }
        let password = Url::parse(&format!("memcache://u:{}@localhost", self.password));
        if password.as_ref().ok().and_then(|url| url.password()) != Some(self.password.as_str()) {
            return Err(unusable_credential(PASSWORD));
        }
        Ok(())
    }
}

fn unusable_credential(key: &str) -> DbError {
    DbError::Config(format!(
        "{} contains characters that cannot be sent as memcached credentials",
        key
    ))
}

/// Read the value encoding from harness properties.
pub fn encoding_from_properties(props: &Properties) -> Result<Encoding> {
    props.get_parsed(ENCODING, Encoding::default())
}
