#![forbid(unsafe_code)]

//! Change notifications emitted by [`ObservedMap`](crate::ObservedMap).
//!
//! A [`MapChange`] describes exactly one structural event. Observers receive
//! it synchronously, inside the mutating call, and must treat the entry
//! lists as read-only snapshots.
//!
//! # Invariants
//!
//! 1. `new_entries` is populated for [`ChangeKind::Add`] and
//!    [`ChangeKind::Replace`], empty otherwise.
//! 2. `old_entries` is populated for [`ChangeKind::Remove`] and
//!    [`ChangeKind::Replace`], empty otherwise.
//! 3. A `Replace` change's `old_entries` holds the pre-mutation value for
//!    the same key as `new_entries`.
//! 4. [`ChangeKind::Reset`] carries no entries: it means "discard all prior
//!    knowledge and re-read the full map".
//!
//! The constructors below are the only way to build a `MapChange`, so the
//! population rules cannot be violated at call sites.

/// The kind of structural change a [`MapChange`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// One or more entries were inserted.
    Add,
    /// One or more entries were deleted.
    Remove,
    /// An entry's value was overwritten in place.
    Replace,
    /// The whole map was emptied; observers should re-read from scratch.
    Reset,
}

/// An immutable record of a single observed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapChange<K, V> {
    kind: ChangeKind,
    new_entries: Vec<(K, V)>,
    old_entries: Vec<(K, V)>,
}

impl<K, V> MapChange<K, V> {
    /// A change describing the insertion of `(key, value)`.
    #[must_use]
    pub fn added(key: K, value: V) -> Self {
        Self {
            kind: ChangeKind::Add,
            new_entries: vec![(key, value)],
            old_entries: Vec::new(),
        }
    }

    /// A change describing the removal of `(key, value)`.
    #[must_use]
    pub fn removed(key: K, value: V) -> Self {
        Self {
            kind: ChangeKind::Remove,
            new_entries: Vec::new(),
            old_entries: vec![(key, value)],
        }
    }

    /// A change describing `key`'s value being overwritten.
    #[must_use]
    pub fn replaced(key: K, old_value: V, new_value: V) -> Self
    where
        K: Clone,
    {
        Self {
            kind: ChangeKind::Replace,
            new_entries: vec![(key.clone(), new_value)],
            old_entries: vec![(key, old_value)],
        }
    }

    /// A change describing a bulk reset. Carries no entry lists.
    #[must_use]
    pub fn reset() -> Self {
        Self {
            kind: ChangeKind::Reset,
            new_entries: Vec::new(),
            old_entries: Vec::new(),
        }
    }

    /// What kind of change this is.
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        self.kind
    }

    /// Entries introduced by this change (`Add`, `Replace`).
    #[must_use]
    pub fn new_entries(&self) -> &[(K, V)] {
        &self.new_entries
    }

    /// Entries removed or overwritten by this change (`Remove`, `Replace`).
    #[must_use]
    pub fn old_entries(&self) -> &[(K, V)] {
        &self.old_entries
    }
}
