//! Reverse merge: fill a mapping with defaults without overriding it.
//!
//! ```
//! use std::collections::BTreeMap;
//! use sitemapgen::utils::merge::reverse_merge_in_place;
//!
//! let mut options = BTreeMap::from([("size", 99)]);
//! let defaults = BTreeMap::from([("size", 25), ("velocity", 10)]);
//! reverse_merge_in_place(&mut options, &defaults);
//!
//! assert_eq!(options, BTreeMap::from([("size", 99), ("velocity", 10)]));
//! ```

use std::collections::BTreeMap;

/// Overlay `mapping` on a copy of `other`; `mapping` wins on shared keys.
///
/// Neither input is modified.
pub fn reverse_merge<K, V>(mapping: &BTreeMap<K, V>, other: &BTreeMap<K, V>) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    let mut merged = other.clone();
    merged.extend(mapping.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Add every key of `other` that `mapping` lacks.
///
/// Values already in `mapping` are kept as they are.
pub fn reverse_merge_in_place<'a, K, V>(
    mapping: &'a mut BTreeMap<K, V>,
    other: &BTreeMap<K, V>,
) -> &'a mut BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    for (key, value) in other {
        mapping
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }
    mapping
}
