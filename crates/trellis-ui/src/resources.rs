#![forbid(unsafe_code)]

//! Named-resource lookup.
//!
//! A [`ResourceRegistry`] maps names to styled values (themes, styles,
//! templates — anything cloneable). Lookups that miss return `None` and
//! log a warning rather than failing: a missing style should degrade the
//! presentation, not abort the operation that needed it.

use std::collections::HashMap;

/// Registry of named resources of one type.
#[derive(Debug, Clone)]
pub struct ResourceRegistry<T> {
    entries: HashMap<String, T>,
}

impl<T: Clone> ResourceRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `value` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, value: T) {
        self.entries.insert(name.into(), value);
    }

    /// Look up the resource registered under `name`.
    ///
    /// Misses log a `warn` and return `None`.
    #[must_use]
    pub fn load(&self, name: &str) -> Option<T> {
        match self.entries.get(name) {
            Some(value) => Some(value.clone()),
            None => {
                tracing::warn!(resource = name, "named resource could not be found");
                None
            }
        }
    }

    /// Whether a resource is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for ResourceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Accent {
        fg: u32,
    }

    #[test]
    fn load_returns_registered_value() {
        let mut registry = ResourceRegistry::new();
        registry.insert("Header", Accent { fg: 0x00ff_ffff });

        assert_eq!(registry.load("Header"), Some(Accent { fg: 0x00ff_ffff }));
        assert!(registry.contains("Header"));
    }

    #[test]
    fn load_miss_returns_none() {
        let registry: ResourceRegistry<Accent> = ResourceRegistry::new();
        assert_eq!(registry.load("Missing"), None);
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut registry = ResourceRegistry::new();
        registry.insert("Header", Accent { fg: 1 });
        registry.insert("Header", Accent { fg: 2 });

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.load("Header"), Some(Accent { fg: 2 }));
    }

    #[test]
    fn empty_registry() {
        let registry: ResourceRegistry<Accent> = ResourceRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
