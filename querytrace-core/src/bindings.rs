//! Keyed binding collections and their canonical form.
//!
//! Bindings are keyed either by position (`0`, `1`, ...) or by name
//! (`:title`). [`normalize_bindings`] renames positional keys to the same
//! `:slotN` names that [`normalize_slots`](crate::slots::normalize_slots)
//! assigns to `?` markers.
//!
//! ```rust
//! use querytrace_core::{Bindings, BindingKey};
//! use querytrace_core::bindings::normalize_bindings;
//!
//! let bindings = Bindings::positional([1, 2]).bind(":title", "Dune");
//! let normalized = normalize_bindings(&bindings);
//!
//! let keys: Vec<String> = normalized.keys().map(|k| k.to_string()).collect();
//! assert_eq!(keys, [":slot0", ":slot1", ":title"]);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::slots::slot_name;
use crate::value::{Binding, BoundValue, ParamType};

/// Key of a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingKey {
    /// Positional key.
    Position(usize),
    /// Named key, normally starting with `:`.
    Name(String),
}

impl BindingKey {
    /// Parse a key; purely numeric keys become positions.
    pub fn parse(key: &str) -> Self {
        match key.parse::<usize>() {
            Ok(position) if is_numeric(key) => Self::Position(position),
            _ => Self::Name(key.to_string()),
        }
    }

    /// Check if the key is purely numeric.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Position(_) => true,
            Self::Name(name) => is_numeric(name),
        }
    }

    /// Name of the key, if it is a named key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Position(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

fn is_numeric(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(position) => write!(f, "{}", position),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for BindingKey {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<&str> for BindingKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl From<String> for BindingKey {
    fn from(key: String) -> Self {
        Self::parse(&key)
    }
}

/// An ordered, keyed collection of bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: IndexMap<BindingKey, Binding>,
    next_position: usize,
}

impl Bindings {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_position: 0,
        }
    }

    /// Create a collection of positional bindings `0..n`.
    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Binding>,
    {
        let mut bindings = Self::new();
        for value in values {
            bindings.push(value);
        }
        bindings
    }

    /// Append a positional binding after the highest position so far.
    pub fn push(&mut self, value: impl Into<Binding>) -> &mut Self {
        let position = self.next_position;
        self.insert(position, value);
        self
    }

    /// Insert a binding, returning the one it replaced.
    ///
    /// A replaced key keeps its original place in the order.
    pub fn insert(
        &mut self,
        key: impl Into<BindingKey>,
        value: impl Into<Binding>,
    ) -> Option<Binding> {
        let key = key.into();
        if let BindingKey::Position(position) = key {
            self.next_position = self.next_position.max(position.saturating_add(1));
        }
        self.entries.insert(key, value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn bind(mut self, key: impl Into<BindingKey>, value: impl Into<Binding>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`insert`](Self::insert) with an explicit type.
    pub fn bind_typed(
        self,
        key: impl Into<BindingKey>,
        value: impl Into<BoundValue>,
        param_type: ParamType,
    ) -> Self {
        self.bind(key, Binding::typed(value, param_type))
    }

    /// Get a binding by key.
    pub fn get(&self, key: &BindingKey) -> Option<&Binding> {
        self.entries.get(key)
    }

    /// Get a named binding.
    pub fn get_named(&self, name: &str) -> Option<&Binding> {
        self.entries.get(&BindingKey::Name(name.to_string()))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&BindingKey, &Binding)> {
        self.entries.iter()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &BindingKey> {
        self.entries.keys()
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, binding)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} => {}", key, binding.value)?;
        }
        f.write_str("]")
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<BindingKey>,
    V: Into<Binding>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Self::new();
        for (key, value) in iter {
            bindings.insert(key, value);
        }
        bindings
    }
}

impl<V: Into<Binding>> From<Vec<V>> for Bindings {
    fn from(values: Vec<V>) -> Self {
        Self::positional(values)
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = (&'a BindingKey, &'a Binding);
    type IntoIter = indexmap::map::Iter<'a, BindingKey, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// JSON arrays become positional bindings, objects become keyed ones.
impl<'de> Deserialize<'de> for Bindings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Positional(Vec<Binding>),
            Keyed(IndexMap<String, Binding>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Positional(values) => Self::positional(values),
            Repr::Keyed(entries) => entries.into_iter().collect(),
        })
    }
}

/// Rename numeric keys to canonical slot names.
///
/// The N-th numeric key met, in iteration order, becomes `:slotN`. Named
/// keys keep their name and value. The input is left untouched.
pub fn normalize_bindings(bindings: &Bindings) -> Bindings {
    let mut normalized = Bindings::with_capacity(bindings.len());
    let mut ordinal = 0;

    for (key, binding) in bindings.iter() {
        if key.is_numeric() {
            normalized.insert(BindingKey::Name(slot_name(ordinal)), binding.clone());
            ordinal += 1;
        } else {
            normalized.insert(key.clone(), binding.clone());
        }
    }

    normalized
}
