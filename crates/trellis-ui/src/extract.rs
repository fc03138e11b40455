#![forbid(unsafe_code)]

//! Typed value extraction for declarative bindings.
//!
//! A declarative binding hands this adapter two inputs: a map-shaped
//! source and a raw key string. The raw key goes through an explicit
//! typed parse step; parse failures, absent inputs, and missing entries
//! all yield `None`, which the binding layer reads as "leave the bound
//! target untouched". No sentinel values cross type boundaries.

use std::marker::PhantomData;
use std::str::FromStr;

use trellis_state::KeyedSource;

/// Extracts values from a [`KeyedSource`] keyed by `K`, where the key
/// arrives as text from a binding expression.
///
/// The key type is fixed per extractor so the parse step is explicit and
/// typed; see [`IntValueExtractor`] and [`StringValueExtractor`] for the
/// common instantiations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueExtractor<K> {
    _key: PhantomData<K>,
}

impl<K: FromStr> ValueExtractor<K> {
    /// Create an extractor for key type `K`.
    #[must_use]
    pub fn new() -> Self {
        Self { _key: PhantomData }
    }

    /// Parse a raw key string into `K`, or `None` if it does not parse.
    #[must_use]
    pub fn parse_key(raw: &str) -> Option<K> {
        raw.parse().ok()
    }

    /// Extract the value for `raw_key` from `source`.
    ///
    /// Returns `None` — "do nothing to the binding target" — when the raw
    /// key is absent, fails to parse as `K`, or names no entry.
    #[must_use]
    pub fn extract<V, S>(&self, source: &S, raw_key: Option<&str>) -> Option<V>
    where
        S: KeyedSource<K, V>,
    {
        let key = Self::parse_key(raw_key?)?;
        source.get(&key)
    }
}

/// Extractor for sources keyed by `i32`.
pub type IntValueExtractor = ValueExtractor<i32>;

/// Extractor for sources keyed by `String`.
pub type StringValueExtractor = ValueExtractor<String>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use trellis_state::ObservedMap;

    #[test]
    fn extracts_by_parsed_int_key() {
        let mut source = HashMap::new();
        source.insert(7, "seven".to_string());

        let extractor = IntValueExtractor::new();
        assert_eq!(
            extractor.extract(&source, Some("7")),
            Some("seven".to_string())
        );
    }

    #[test]
    fn unparsable_key_yields_none() {
        let mut source = HashMap::new();
        source.insert(7, "seven".to_string());

        let extractor = IntValueExtractor::new();
        assert_eq!(extractor.extract::<String, _>(&source, Some("seven")), None);
    }

    #[test]
    fn absent_raw_key_yields_none() {
        let source: HashMap<i32, String> = HashMap::new();
        let extractor = IntValueExtractor::new();
        assert_eq!(extractor.extract::<String, _>(&source, None), None);
    }

    #[test]
    fn missing_entry_yields_none() {
        let source: HashMap<i32, String> = HashMap::new();
        let extractor = IntValueExtractor::new();
        assert_eq!(extractor.extract::<String, _>(&source, Some("3")), None);
    }

    #[test]
    fn string_keys_pass_through_parse() {
        let mut source = HashMap::new();
        source.insert("name".to_string(), 42);

        let extractor = StringValueExtractor::new();
        assert_eq!(extractor.extract(&source, Some("name")), Some(42));
    }

    #[test]
    fn reads_from_observed_map() {
        let map: ObservedMap<i32, String> = ObservedMap::new();
        map.add(1, "one".to_string()).unwrap();

        let extractor = IntValueExtractor::new();
        assert_eq!(extractor.extract(&map, Some("1")), Some("one".to_string()));
    }
}
