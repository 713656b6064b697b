use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::view::MapView;

/// Immutable, ordered map built once from its entries.
///
/// There are no mutating methods; [`with`](MapOf::with) returns a new map and
/// leaves the receiver untouched. Duplicate keys keep the last value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapOf<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> MapOf<K, V> {
    /// Empty map.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Map holding `entries`.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Copy of this map with `key -> value` added or replaced.
    pub fn with(&self, key: K, value: V) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut entries = self.entries.clone();
        entries.insert(key, value);
        Self { entries }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Give up immutability and take the backing map.
    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.entries
    }
}

impl<K: Ord, V> Default for MapOf<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MapOf<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for MapOf<K, V> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self { entries }
    }
}

impl<'a, K, V> IntoIterator for &'a MapOf<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V> IntoIterator for MapOf<K, V> {
    type Item = (K, V);
    type IntoIter = btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Ord, V> MapView<K, V> for MapOf<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    fn key_view(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.entries.keys())
    }

    fn value_view(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.entries.values())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
