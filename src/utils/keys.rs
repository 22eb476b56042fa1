//! Option-key validation and normalization.
//!
//! Keys are compared by representation: a string key `"host"` and the
//! symbol key `:host` are different keys. Loaders that read user-supplied
//! string keys call [`symbolize_keys_in_place`] before validating against a
//! symbol allow-list.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Error, Result};

/// A mapping key in one of its possible representations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// String-like key, as read from user input.
    Str(String),
    /// Canonical identifier-like key used for configuration options.
    Sym(String),
    /// Integer key. Has no identifier form.
    Int(i64),
}

impl Key {
    pub fn str(name: impl Into<String>) -> Self {
        Key::Str(name.into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Key::Sym(name.into())
    }

    /// Convert to the canonical identifier form.
    ///
    /// Returns `None` when the key has no identifier representation.
    pub fn to_symbol(&self) -> Option<Key> {
        match self {
            Key::Str(name) | Key::Sym(name) => Some(Key::Sym(name.clone())),
            Key::Int(_) => None,
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Key::Sym(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(name) | Key::Sym(name) => f.write_str(name),
            Key::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Str(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Str(name)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

/// Fail unless every key of `mapping` is in `valid_keys`.
///
/// Nested allow-lists are passed flattened, e.g. via `iter().chain(..)`.
/// The error lists exactly the keys of `mapping` missing from the allow-list.
pub fn assert_valid_keys<K, V, I>(mapping: &BTreeMap<K, V>, valid_keys: I) -> Result<()>
where
    K: Ord + fmt::Display,
    I: IntoIterator,
    I::Item: Borrow<K>,
{
    let valid: Vec<I::Item> = valid_keys.into_iter().collect();

    let unknown: Vec<String> = mapping
        .keys()
        .filter(|key| {
            !valid
                .iter()
                .any(|candidate| <I::Item as Borrow<K>>::borrow(candidate) == *key)
        })
        .map(|key| key.to_string())
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::validation_unknown_keys(unknown))
    }
}

/// Return a copy of `mapping` with every convertible key symbolized.
pub fn symbolize_keys<V: Clone>(mapping: &BTreeMap<Key, V>) -> BTreeMap<Key, V> {
    let mut copy = mapping.clone();
    symbolize_keys_in_place(&mut copy);
    copy
}

/// Symbolize every convertible key of `mapping` in place.
///
/// Keys without an identifier form are left unchanged. If two keys
/// symbolize to the same key, whichever is processed last keeps its value.
pub fn symbolize_keys_in_place<V>(mapping: &mut BTreeMap<Key, V>) -> &mut BTreeMap<Key, V> {
    let snapshot: Vec<Key> = mapping.keys().cloned().collect();

    for key in snapshot {
        if key.is_symbol() {
            continue;
        }
        let Some(symbol) = key.to_symbol() else {
            continue;
        };
        if let Some(value) = mapping.remove(&key) {
            mapping.insert(symbol, value);
        }
    }

    mapping
}
