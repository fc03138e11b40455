#![forbid(unsafe_code)]

//! Errors from map operations.

/// Errors raised by [`ObservedMap`](crate::ObservedMap) operations.
///
/// Both variants are caller-visible outcomes of a single synchronous call;
/// there is no retry or recovery inside the container. Callers that expect
/// absence as a normal condition should prefer the non-failing surface
/// (`try_get`, `remove`) over the failing one (`get`, `add`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// `add` was called with a key the map already holds.
    DuplicateKey,
    /// `get` was called with a key the map does not hold.
    KeyNotFound,
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey => write!(f, "key is already present in the map"),
            Self::KeyNotFound => write!(f, "key is not present in the map"),
        }
    }
}

impl std::error::Error for MapError {}
