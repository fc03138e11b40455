#![forbid(unsafe_code)]

//! Capability seam for map-shaped value sources.
//!
//! Anything that can answer "do you hold this key?" and hand out a value by
//! key can feed [`ObservedMap::reconcile`](crate::ObservedMap::reconcile)
//! and the binding adapters in `trellis-ui`. The trait replaces runtime
//! type probing ("is this object a mapping?") with an explicit capability
//! that concrete container types opt into.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A readable source of keyed values.
///
/// `get` clones the value out; implementations must not hand out references
/// into their own storage. `entries` is an owned snapshot — callers may
/// mutate the source while walking it.
pub trait KeyedSource<K, V> {
    /// Whether the source holds an entry for `key`.
    fn contains_key(&self, key: &K) -> bool;

    /// The value for `key`, or `None` if absent.
    fn get(&self, key: &K) -> Option<V>;

    /// An owned snapshot of every entry.
    fn entries(&self) -> Vec<(K, V)>;
}

impl<K: Eq + Hash + Clone, V: Clone> KeyedSource<K, V> for HashMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<V> {
        HashMap::get(self, key).cloned()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: Ord + Clone, V: Clone> KeyedSource<K, V> for BTreeMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<V> {
        BTreeMap::get(self, key).cloned()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_source<K, V, S: KeyedSource<K, V>>(_s: &S) {}

    #[test]
    fn hash_map_is_a_source() {
        let mut map = HashMap::new();
        map.insert("a", 1);
        assert_source(&map);
        assert!(KeyedSource::contains_key(&map, &"a"));
        assert_eq!(KeyedSource::<_, i32>::get(&map, &"a"), Some(1));
        assert_eq!(KeyedSource::<_, i32>::get(&map, &"b"), None);
        assert_eq!(map.entries(), vec![("a", 1)]);
    }

    #[test]
    fn btree_map_is_a_source() {
        let mut map = BTreeMap::new();
        map.insert(2, "b");
        map.insert(1, "a");
        assert_source(&map);
        assert!(KeyedSource::contains_key(&map, &1));
        // BTreeMap snapshots come out in key order.
        assert_eq!(map.entries(), vec![(1, "a"), (2, "b")]);
    }
}
