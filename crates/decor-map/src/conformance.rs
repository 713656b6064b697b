//! Contract check for containers claiming map semantics.
//!
//! [`BehavesAsMap`] takes one sample key and value and verifies, in order:
//!
//! 1. direct lookup by the key yields the value;
//! 2. the key view contains the key;
//! 3. the value view contains the value.
//!
//! The first failing condition is reported as a [`ConformanceError`]. The
//! container is only read.

use std::fmt;

use crate::error::ConformanceError;
use crate::view::MapView;

/// Sample pair every conforming container must report consistently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehavesAsMap<K, V> {
    key: K,
    value: V,
}

impl<K, V> BehavesAsMap<K, V>
where
    K: PartialEq + fmt::Debug,
    V: PartialEq + fmt::Debug,
{
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Evaluate the three conditions against `map`.
    pub fn check<M>(&self, map: &M) -> Result<(), ConformanceError>
    where
        M: MapView<K, V> + ?Sized,
    {
        if map.lookup(&self.key) != Some(&self.value) {
            return Err(ConformanceError::MissingPair {
                key: format!("{:?}", self.key),
                value: format!("{:?}", self.value),
            });
        }
        if !map.contains_key(&self.key) {
            return Err(ConformanceError::MissingKey {
                key: format!("{:?}", self.key),
            });
        }
        if !map.contains_value(&self.value) {
            return Err(ConformanceError::MissingValue {
                value: format!("{:?}", self.value),
            });
        }
        Ok(())
    }

    /// `true` when [`check`](Self::check) passes.
    pub fn matches<M>(&self, map: &M) -> bool
    where
        M: MapView<K, V> + ?Sized,
    {
        self.check(map).is_ok()
    }
}

impl<K, V> fmt::Display for BehavesAsMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a valid map")
    }
}

/// Panic unless `map` reports `key -> value` through all three views.
#[track_caller]
pub fn assert_behaves_as_map<K, V, M>(map: &M, key: K, value: V)
where
    K: PartialEq + fmt::Debug,
    V: PartialEq + fmt::Debug,
    M: MapView<K, V> + ?Sized,
{
    let check = BehavesAsMap::new(key, value);
    if let Err(err) = check.check(map) {
        panic!("{check}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn single() -> HashMap<String, String> {
        HashMap::from([("k".to_owned(), "v".to_owned())])
    }

    fn sample(key: &str, value: &str) -> BehavesAsMap<String, String> {
        BehavesAsMap::new(key.to_owned(), value.to_owned())
    }

    /// Lookup and key view agree; the value view is always empty.
    struct NoValues(BTreeMap<String, String>);

    impl MapView<String, String> for NoValues {
        fn lookup(&self, key: &String) -> Option<&String> {
            self.0.get(key)
        }

        fn key_view(&self) -> Box<dyn Iterator<Item = &String> + '_> {
            Box::new(self.0.keys())
        }

        fn value_view(&self) -> Box<dyn Iterator<Item = &String> + '_> {
            Box::new(std::iter::empty())
        }
    }

    /// Lookup works; the key view is always empty.
    struct NoKeys(BTreeMap<String, String>);

    impl MapView<String, String> for NoKeys {
        fn lookup(&self, key: &String) -> Option<&String> {
            self.0.get(key)
        }

        fn key_view(&self) -> Box<dyn Iterator<Item = &String> + '_> {
            Box::new(std::iter::empty())
        }

        fn value_view(&self) -> Box<dyn Iterator<Item = &String> + '_> {
            Box::new(self.0.values())
        }
    }

    fn one_entry() -> BTreeMap<String, String> {
        BTreeMap::from([("k".to_owned(), "v".to_owned())])
    }

    // -----------------------------------------------------------------------
    // Passing and failing samples
    // -----------------------------------------------------------------------

    #[test]
    fn single_entry_map_conforms() {
        assert_eq!(sample("k", "v").check(&single()), Ok(()));
        assert!(sample("k", "v").matches(&single()));
    }

    #[test]
    fn wrong_key_is_missing_pair() {
        let err = sample("x", "v").check(&single()).unwrap_err();
        assert_eq!(
            err,
            ConformanceError::MissingPair {
                key: "\"x\"".into(),
                value: "\"v\"".into()
            }
        );
        assert!(err.to_string().starts_with("missing key/value pair"));
    }

    #[test]
    fn wrong_value_is_missing_pair() {
        let err = sample("k", "w").check(&single()).unwrap_err();
        assert!(matches!(err, ConformanceError::MissingPair { .. }));
    }

    #[test]
    fn inconsistent_value_view_is_reported() {
        let err = sample("k", "v").check(&NoValues(one_entry())).unwrap_err();
        assert_eq!(err.to_string(), "missing value in value view: \"v\"");
    }

    #[test]
    fn inconsistent_key_view_is_reported() {
        let err = sample("k", "v").check(&NoKeys(one_entry())).unwrap_err();
        assert_eq!(err.to_string(), "missing key in key view: \"k\"");
    }

    #[test]
    fn check_does_not_mutate() {
        let map = single();
        let before = map.clone();
        let _ = sample("x", "y").check(&map);
        assert_eq!(map, before);
    }

    // -----------------------------------------------------------------------
    // Assertion helper
    // -----------------------------------------------------------------------

    #[test]
    fn assertion_passes_for_std_maps() {
        assert_behaves_as_map(&single(), "k".to_owned(), "v".to_owned());
        assert_behaves_as_map(&one_entry(), "k".to_owned(), "v".to_owned());
    }

    #[test]
    #[should_panic(expected = "not a valid map: missing value in value view")]
    fn assertion_panics_with_diagnostic() {
        assert_behaves_as_map(&NoValues(one_entry()), "k".to_owned(), "v".to_owned());
    }

    #[test]
    fn describes_itself() {
        assert_eq!(sample("k", "v").to_string(), "not a valid map");
    }
}
