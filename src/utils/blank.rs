//! Blank/present classification for option values.
//!
//! A value is blank when it carries no meaningful content: absence, `false`,
//! whitespace-only text, or an empty collection. Numbers and `true` are
//! never blank. Types outside this set opt in by implementing [`Blank`]
//! with their own emptiness predicate.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

pub trait Blank {
    fn is_blank(&self) -> bool;

    fn is_present(&self) -> bool {
        !self.is_blank()
    }
}

/// Free-function form of [`Blank::is_blank`].
pub fn is_blank<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Free-function form of [`Blank::is_present`].
pub fn is_present<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_present()
}

fn is_blank_text(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

impl Blank for () {
    fn is_blank(&self) -> bool {
        true
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(value) => value.is_blank(),
            None => true,
        }
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

macro_rules! never_blank {
    ($($t:ty),*) => {
        $(
            impl Blank for $t {
                fn is_blank(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_blank!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Blank for str {
    fn is_blank(&self) -> bool {
        is_blank_text(self)
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        is_blank_text(self)
    }
}

impl Blank for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        is_blank_text(self)
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Blank for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Blank for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for serde_json::Map<String, Value> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(flag) => flag.is_blank(),
            Value::Number(_) => false,
            Value::String(text) => text.is_blank(),
            Value::Array(items) => items.is_blank(),
            Value::Object(map) => map.is_blank(),
        }
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}
