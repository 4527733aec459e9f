//! String-keyed configuration.
//!
//! Keys are dotted names such as `memcached.address`. Values come from TOML
//! files and `key=value` overrides; nested TOML tables flatten into dotted
//! keys, so these two files are equivalent:
//!
//! ```toml
//! memcached.address = "10.0.0.5"
//! ```
//!
//! ```toml
//! [memcached]
//! address = "10.0.0.5"
//! ```

use crate::error::{DbError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Configuration properties with per-lookup defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder form of [`Properties::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a property.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up a property, falling back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Look up and parse a property, falling back to `default` when unset.
    ///
    /// A present but unparseable value is an error rather than a silent default.
    pub fn get_parsed<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| DbError::Config(format!("{} = {:?}: {}", key, raw, e))),
        }
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy every property of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: &Properties) {
        for (k, v) in other.iter() {
            self.set(k, v);
        }
    }

    /// Apply a `key=value` override.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| DbError::Config(format!("expected key=value, got {:?}", assignment)))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DbError::Config(format!("empty key in {:?}", assignment)));
        }
        self.set(key, value.trim());
        Ok(())
    }

    /// Parse properties from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| DbError::Config(e.to_string()))?;
        let mut props = Properties::new();
        flatten_table("", &table, &mut props)?;
        Ok(props)
    }

    /// Load properties from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
            .map_err(|e| DbError::Config(format!("{}: {}", path.as_ref().display(), e)))
    }
}

fn flatten_table(prefix: &str, table: &toml::Table, out: &mut Properties) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            toml::Value::Table(inner) => flatten_table(&key, inner, out)?,
            toml::Value::String(s) => {
                out.set(key, s.clone());
            }
            toml::Value::Integer(i) => {
                out.set(key, i.to_string());
            }
            toml::Value::Float(f) => {
                out.set(key, f.to_string());
            }
            toml::Value::Boolean(b) => {
                out.set(key, b.to_string());
            }
            toml::Value::Datetime(d) => {
                out.set(key, d.to_string());
            }
            toml::Value::Array(_) => {
                return Err(DbError::Config(format!("{}: arrays are not supported", key)));
            }
        }
    }
    Ok(())
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}
