//! Conversions between representations of the same data: sequences and
//! sets, key/value pairs and maps, and the two flavours of "no value".

use log::trace;
use std::collections::{BTreeMap, BTreeSet};

// ----- S E Q U E N C E S   A N D   S E T S -------------------------------------------

/// Collect a sequence into a set. Repeats are dropped, and the insertion
/// order is replaced by the natural order of the values.
pub fn to_set<T: Ord + Clone>(items: &[T]) -> BTreeSet<T> {
    items.iter().cloned().collect()
}

/// The elements of `set`, in ascending order
pub fn from_set<T: Ord + Clone>(set: &BTreeSet<T>) -> Vec<T> {
    set.iter().cloned().collect()
}

/// The round trip through [to_set] and [from_set]. Idempotent:
/// `unique(&unique(x)) == unique(x)`.
pub fn unique<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    from_set(&to_set(items))
}

// ----- O R D E R E D   M A P ---------------------------------------------------------

/// A map remembering the order in which its keys were first inserted,
/// i.e. what you get from a Python `dict` or a JavaScript object.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: BTreeMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap {
            entries: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from key/value pairs. A repeated key keeps the position
    /// of its first occurrence, and the value of its last.
    pub fn from_pairs<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }

    /// Insert `value` under `key`, returning the value it replaced, if any.
    /// Replacing a value does not change the position of the key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let i = *self.index.get(key)?;
        Some(&self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = *self.index.get(key)?;
        Some(&mut self.entries[i].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove `key`, keeping the relative order of the remaining keys
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for position in self.index.values_mut() {
            if *position > i {
                *position -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// ----- A B S E N C E -----------------------------------------------------------------

/// A value as seen by a language with two ways of saying "nothing here"
#[derive(Debug, Clone, PartialEq)]
pub enum Nullish<T> {
    Defined(T),
    Null,
    Undefined,
}

/// A value, or the single sentinel for its absence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<T> {
    Present(T),
    Missing,
}

impl<T> Presence<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Presence::Missing)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Presence::Present(value) => Some(value),
            Presence::Missing => None,
        }
    }
}

impl<T> From<Option<T>> for Presence<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Presence::Present(value),
            None => Presence::Missing,
        }
    }
}

/// Collapse both `Null` and `Undefined` into `Missing`
pub fn collapse<T>(value: Nullish<T>) -> Presence<T> {
    match value {
        Nullish::Defined(value) => Presence::Present(value),
        Nullish::Null | Nullish::Undefined => Presence::Missing,
    }
}

// ----- N E S T E D   V A L U E S -----------------------------------------------------

/// A nested document, in the spirit of JSON
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Map(OrderedMap<String, Value>),
}

impl Value {
    /// Build a `Value::Map` from `(key, value)` pairs
    pub fn map<S: Into<String>, I: IntoIterator<Item = (S, Value)>>(pairs: I) -> Value {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<Nullish<Value>> for Value {
    fn from(value: Nullish<Value>) -> Self {
        match collapse(value) {
            Presence::Present(value) => value,
            Presence::Missing => Value::Null,
        }
    }
}

/// Recursively merge `update` into a copy of `base`: Where both sides hold
/// a map under the same key, the maps are merged. Otherwise the value from
/// `update` wins. If either argument is not a map, the result is `update`.
pub fn merge(base: &Value, update: &Value) -> Value {
    let (Value::Map(base), Value::Map(update)) = (base, update) else {
        return update.clone();
    };

    let mut result = base.clone();
    for (key, value) in update.iter() {
        let merged = match result.get(key) {
            Some(existing @ Value::Map(_)) => merge(existing, value),
            _ => value.clone(),
        };
        result.insert(key.clone(), merged);
    }
    Value::Map(result)
}

/// Update `base` in place from `changes`. Nested maps are updated
/// recursively. Keys not already in `base` are only added when
/// `create_missing` is set.
pub fn update(
    base: &mut OrderedMap<String, Value>,
    changes: &OrderedMap<String, Value>,
    create_missing: bool,
) {
    for (key, value) in changes.iter() {
        if let Some(slot) = base.get_mut(key) {
            match (slot, value) {
                (Value::Map(nested), Value::Map(inner)) => update(nested, inner, create_missing),
                (slot, _) => *slot = value.clone(),
            }
            continue;
        }

        if create_missing {
            base.insert(key.clone(), value.clone());
            continue;
        }
        trace!("update: ignoring unknown key '{key}'");
    }
}

// ----- T E S T S ---------------------------------------------------------------------
