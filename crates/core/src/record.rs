//! Record types exchanged with the harness.

use indexmap::IndexMap;
use std::collections::HashSet;

/// A record: field name to field value.
///
/// Iteration follows insertion order, so encodings write fields in the order
/// the harness supplied them.
pub type Record = IndexMap<String, String>;

/// Subset of field names a read asks for.
pub type FieldSet = HashSet<String>;

/// Build a record from `(name, value)` pairs.
///
/// ```
/// use membase_core::record::record_of;
///
/// let r = record_of([("name", "alice"), ("age", "30")]);
/// assert_eq!(r.get_index(0), Some((&"name".to_string(), &"alice".to_string())));
/// ```
pub fn record_of<K, V, I>(pairs: I) -> Record
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
