//! The [`MapView`] trait: the read-only face of a key/value container.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Read-only key/value container.
///
/// A well-behaved implementation reports the same pairs through all three
/// views: `lookup(k) == Some(v)` exactly when `k` is in [`key_view`] and the
/// matching `v` is in [`value_view`]. [`BehavesAsMap`](crate::BehavesAsMap)
/// checks this for a sample pair.
///
/// [`key_view`]: MapView::key_view
/// [`value_view`]: MapView::value_view
pub trait MapView<K, V> {
    /// Value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Every key in the container.
    fn key_view(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Every value in the container.
    fn value_view(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Whether the key view contains `key`.
    fn contains_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.key_view().any(|k| k == key)
    }

    /// Whether the value view contains `value`.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.value_view().any(|v| v == value)
    }

    /// Number of keys.
    fn len(&self) -> usize {
        self.key_view().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> MapView<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn key_view(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }

    fn value_view(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.values())
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K: Ord, V> MapView<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn key_view(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.keys())
    }

    fn value_view(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.values())
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, V, M: MapView<K, V> + ?Sized> MapView<K, V> for &M {
    fn lookup(&self, key: &K) -> Option<&V> {
        (**self).lookup(key)
    }

    fn key_view(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        (**self).key_view()
    }

    fn value_view(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        (**self).value_view()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_views() {
        let map: HashMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(map.lookup(&"a"), Some(&1));
        assert!(MapView::contains_key(&map, &"b"));
        assert!(map.contains_value(&2));
        assert!(!map.contains_value(&3));
        assert_eq!(MapView::len(&map), 2);
    }

    #[test]
    fn btree_map_views_are_ordered() {
        let map: BTreeMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        let keys: Vec<_> = map.key_view().copied().collect();
        let values: Vec<_> = map.value_view().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(values, vec!['a', 'b', 'c']);
    }

    #[test]
    fn empty_map() {
        let map: BTreeMap<u8, u8> = BTreeMap::new();
        assert!(MapView::is_empty(&map));
        assert_eq!(map.lookup(&0), None);
    }

    #[test]
    fn views_through_reference() {
        let map: BTreeMap<u8, u8> = [(1, 10)].into_iter().collect();
        let by_ref = &map;
        assert_eq!(MapView::lookup(&by_ref, &1), Some(&10));
    }
}
