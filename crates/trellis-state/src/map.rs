#![forbid(unsafe_code)]

//! Observable map with per-mutation change notification and diff-based
//! reconciliation.
//!
//! # Design
//!
//! [`ObservedMap<K, V>`] wraps a `HashMap` in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). Every mutating operation that changes
//! observable state pushes exactly one [`MapChange`] to all live observers
//! before returning — except [`reconcile`](ObservedMap::reconcile), which
//! emits one notification per individual add/remove/update it performs, and
//! [`clear`](ObservedMap::clear), which always emits a single
//! [`ChangeKind::Reset`].
//!
//! Observers are stored as `Weak` callbacks and handed out as RAII
//! [`Subscription`] guards; dead entries are pruned lazily at notify time.
//! The callback list is snapshotted before any callback runs, so a guard
//! dropped during delivery does not disturb the in-flight cycle.
//!
//! # Performance
//!
//! | Operation     | Complexity                        |
//! |---------------|-----------------------------------|
//! | `get`/`add`   | O(1) + O(S) where S = observers   |
//! | `reconcile`   | O(len + source len) map walks     |
//! | `keys`/`iter` | O(len) copy-out                   |
//!
//! # Failure Modes
//!
//! - **Mutation from a callback**: permitted (no borrow is held during
//!   dispatch), but the nested mutation's notification is delivered
//!   depth-first, interleaving with the outer cycle. Observer graphs that
//!   need strict ordering should not mutate from callbacks.
//! - **Mutation during enumeration**: harmless. Enumeration walks an owned
//!   snapshot taken when the iterator was created and will not reflect
//!   later mutations.
//! - **Observer leak**: subscriptions held forever accumulate callbacks;
//!   dead weak references are cleaned lazily during notification.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use crate::change::MapChange;
use crate::error::MapError;
use crate::source::KeyedSource;
use crate::subscription::Subscription;

type CallbackRc<K, V> = Rc<dyn Fn(&MapChange<K, V>)>;
type CallbackWeak<K, V> = Weak<dyn Fn(&MapChange<K, V>)>;

/// Shared interior for [`ObservedMap<K, V>`].
struct MapInner<K, V> {
    entries: HashMap<K, V>,
    version: u64,
    /// Observers stored as weak references. Dead entries are pruned on notify.
    observers: Vec<CallbackWeak<K, V>>,
}

/// A key-unique mapping that announces every structural change.
///
/// Cloning an `ObservedMap` creates a new handle to the **same** inner
/// state — both handles see the same entries and share observers.
///
/// # Invariants
///
/// 1. At most one entry per key exists at any time.
/// 2. Every observable mutation emits exactly one notification describing
///    that single change; `version` increments by 1 per notification.
/// 3. Observers are notified in registration order, synchronously within
///    the mutating call.
/// 4. A failed [`add`](Self::add) (duplicate key) changes nothing and
///    notifies nobody.
/// 5. Accessors return copies; no reference into internal storage escapes.
pub struct ObservedMap<K, V> {
    inner: Rc<RefCell<MapInner<K, V>>>,
}

// Manual Clone: shares the same Rc.
impl<K, V> Clone for ObservedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug for ObservedMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservedMap")
            .field("entries", &inner.entries)
            .field("version", &inner.version)
            .field("observer_count", &inner.observers.len())
            .finish()
    }
}

impl<K: Clone + Eq + Hash + 'static, V: Clone + 'static> Default for ObservedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash + 'static, V: Clone + 'static> ObservedMap<K, V> {
    /// Create an empty map with no observers and version 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MapInner {
                entries: HashMap::new(),
                version: 0,
                observers: Vec::new(),
            })),
        }
    }

    // -----------------------------------------------------------------------
    // State queries
    // -----------------------------------------------------------------------

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Whether an entry with `key` exists.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.borrow().entries.contains_key(key)
    }

    /// Whether an entry `(key, value)` exists with both key and value equal.
    #[must_use]
    pub fn contains_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.borrow().entries.get(key) == Some(value)
    }

    /// The value for `key`.
    ///
    /// # Errors
    ///
    /// [`MapError::KeyNotFound`] if no entry with `key` exists. Callers for
    /// whom absence is expected should use [`try_get`](Self::try_get).
    pub fn get(&self, key: &K) -> Result<V, MapError> {
        self.try_get(key).ok_or(MapError::KeyNotFound)
    }

    /// The value for `key`, or `None` if absent. Never fails.
    #[must_use]
    pub fn try_get(&self, key: &K) -> Option<V> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// All keys, copied out. Length always equals [`len`](Self::len).
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.inner.borrow().entries.keys().cloned().collect()
    }

    /// All values, copied out. Length always equals [`len`](Self::len).
    #[must_use]
    pub fn values(&self) -> Vec<V> {
        self.inner.borrow().entries.values().cloned().collect()
    }

    /// Iterate over `(key, value)` pairs.
    ///
    /// The iterator walks an owned snapshot reflecting state at the moment
    /// of this call; mutating the map afterwards does not affect an
    /// iteration already in progress. Entry order is unspecified.
    #[must_use]
    pub fn iter(&self) -> MapIter<K, V> {
        MapIter {
            entries: self.snapshot().into_iter(),
        }
    }

    fn snapshot(&self) -> Vec<(K, V)> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Insert a new entry.
    ///
    /// Emits one [`ChangeKind::Add`] notification carrying `(key, value)`.
    ///
    /// # Errors
    ///
    /// [`MapError::DuplicateKey`] if `key` is already present. The map is
    /// left unchanged and no notification fires.
    pub fn add(&self, key: K, value: V) -> Result<(), MapError> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.entries.contains_key(&key) {
                return Err(MapError::DuplicateKey);
            }
            inner.entries.insert(key.clone(), value.clone());
        }
        self.emit(MapChange::added(key, value));
        Ok(())
    }

    /// Insert or overwrite the entry for `key` (upsert). Never fails.
    ///
    /// If `key` was absent, emits [`ChangeKind::Add`]. If present, emits
    /// [`ChangeKind::Replace`] carrying the pre-mutation value alongside the
    /// new one — even when the two compare equal. The map does not inspect
    /// values, so every overwrite is observable.
    pub fn set(&self, key: K, value: V) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            inner.entries.insert(key.clone(), value.clone())
        };
        match previous {
            Some(old) => self.emit(MapChange::replaced(key, old, value)),
            None => self.emit(MapChange::added(key, value)),
        }
    }

    /// Remove the entry for `key`, if any.
    ///
    /// Returns `true` and emits one [`ChangeKind::Remove`] carrying the
    /// prior value when the entry existed; returns `false` with no
    /// notification when it did not.
    pub fn remove(&self, key: &K) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            inner.entries.remove_entry(key)
        };
        match removed {
            Some((k, v)) => {
                self.emit(MapChange::removed(k, v));
                true
            }
            None => false,
        }
    }

    /// Empty the map.
    ///
    /// Always emits exactly one [`ChangeKind::Reset`], even when the map
    /// was already empty.
    pub fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
        self.emit(MapChange::reset());
    }

    /// Bring this map's contents in line with `source` via minimal diff.
    ///
    /// Three passes, in this order:
    ///
    /// 1. remove every key absent from `source`;
    /// 2. overwrite every key present in both (a [`ChangeKind::Replace`]
    ///    per key, equal values included — see below);
    /// 3. add every key only `source` holds.
    ///
    /// Each individual change emits its own notification; a reconcile never
    /// collapses to a single `Reset`. The ordering matters to observers
    /// that build positional view diffs: deletions land before updates,
    /// updates before insertions.
    ///
    /// Updates are value-blind: a key present on both sides gets a
    /// `Replace` even when old and new values compare equal. Skipping
    /// equal-value updates would change the number of notifications
    /// observers see per reconcile, so it is deliberately not done.
    pub fn reconcile<S: KeyedSource<K, V>>(&self, source: &S) {
        let removed: Vec<K> = {
            let inner = self.inner.borrow();
            inner
                .entries
                .keys()
                .filter(|k| !source.contains_key(k))
                .cloned()
                .collect()
        };
        let (updated, added): (Vec<(K, V)>, Vec<(K, V)>) = source
            .entries()
            .into_iter()
            .partition(|(k, _)| self.contains_key(k));

        tracing::trace!(
            removed = removed.len(),
            updated = updated.len(),
            added = added.len(),
            "map reconciled"
        );

        for key in &removed {
            self.remove(key);
        }
        for (key, value) in updated {
            self.set(key, value);
        }
        for (key, value) in added {
            // Key verified absent by the partition above, so this is the
            // Add path of the upsert.
            self.set(key, value);
        }
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register an observer. The callback is invoked with each
    /// [`MapChange`], synchronously within the mutating call, in
    /// registration order across observers.
    ///
    /// Returns a [`Subscription`] guard. Dropping the guard unsubscribes
    /// the callback; if dropped while a notification cycle is in flight,
    /// the callback still receives that cycle's change (the observer list
    /// is snapshotted at dispatch time) and nothing afterwards.
    pub fn subscribe(&self, callback: impl Fn(&MapChange<K, V>) + 'static) -> Subscription {
        let strong: CallbackRc<K, V> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().observers.push(weak);
        Subscription::holding(Box::new(strong))
    }

    /// Notification count so far. Increments by 1 per emitted change —
    /// a reconcile that performs N individual changes bumps it N times.
    /// Useful for dirty-checking in render loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of registered observers, including dead ones not yet pruned.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().observers.len()
    }

    /// Bump the version, then notify live observers and prune dead ones.
    fn emit(&self, change: MapChange<K, V>) {
        // Collect live callbacks first, so no borrow is held during calls
        // and observers detached mid-cycle still get this change.
        let callbacks: Vec<CallbackRc<K, V>> = {
            let mut inner = self.inner.borrow_mut();
            inner.version += 1;
            inner.observers.retain(|w| w.strong_count() > 0);
            inner.observers.iter().filter_map(|w| w.upgrade()).collect()
        };

        for cb in &callbacks {
            cb(&change);
        }
    }
}

impl<K: Clone + Eq + Hash + 'static, V: Clone + 'static> FromIterator<(K, V)>
    for ObservedMap<K, V>
{
    /// Build a seeded map. Later duplicates of a key overwrite earlier
    /// ones. No notifications fire — nothing can observe a map that is
    /// still being constructed.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MapInner {
                entries: iter.into_iter().collect(),
                version: 0,
                observers: Vec::new(),
            })),
        }
    }
}

impl<K: Clone + Eq + Hash + 'static, V: Clone + 'static> KeyedSource<K, V> for ObservedMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        ObservedMap::contains_key(self, key)
    }

    fn get(&self, key: &K) -> Option<V> {
        self.try_get(key)
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.snapshot()
    }
}

/// Snapshot iterator over an [`ObservedMap`]'s entries.
///
/// Holds owned pairs; the source map can be mutated freely while this
/// iterator is alive.
#[derive(Debug)]
pub struct MapIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for MapIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for MapIter<K, V> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
