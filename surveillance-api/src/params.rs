//! Ordered request parameters with last-write-wins merging
//!
//! Every request is assembled from an operation's defaults followed by the
//! caller's overrides. Inserting a key that already exists replaces its value
//! in place, so the final parameter list keeps first-seen key order while the
//! most recent value wins.

/// An ordered set of query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any existing value for `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();

        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Apply `overrides` on top of `self`
    pub fn merge(&mut self, overrides: Params) {
        for (key, value) in overrides.pairs {
            self.insert(key, value);
        }
    }

    /// Consuming variant of [`merge`](Self::merge)
    pub fn merged(mut self, overrides: Params) -> Self {
        self.merge(overrides);
        self
    }

    /// Value currently stored for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameters as `(key, value)` pairs in insertion order
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new();
        params.insert("api", "SYNO.SurveillanceStation.Camera");
        params.insert("method", "List");
        params.insert("api", "SYNO.Other");

        assert_eq!(params.len(), 2);
        assert_eq!(params.as_pairs()[0].0, "api");
        assert_eq!(params.get("api"), Some("SYNO.Other"));
    }

    #[test]
    fn test_merge_last_write_wins() {
        let defaults = Params::from([("method", "List"), ("version", "1")]);
        let overrides = Params::from([("version", "9"), ("limit", "10")]);

        let merged = defaults.merged(overrides);

        let keys: Vec<_> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["method", "version", "limit"]);
        assert_eq!(merged.get("version"), Some("9"));
        assert_eq!(merged.get("limit"), Some("10"));
    }

    #[test]
    fn test_values_are_stringified() {
        let params = Params::new().with("camId", 7).with("on", true).with("blSave", 0);
        assert_eq!(params.get("camId"), Some("7"));
        assert_eq!(params.get("on"), Some("true"));
        assert_eq!(params.get("blSave"), Some("0"));
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let defaults = Params::from([("method", "GetInfo")]);
        assert_eq!(defaults.clone().merged(Params::new()), defaults);
    }

    proptest! {
        #[test]
        fn prop_merge_keys_are_unique(
            a in prop::collection::vec(("[a-c]", "[0-9]"), 0..8),
            b in prop::collection::vec(("[a-c]", "[0-9]"), 0..8),
        ) {
            let merged = a.into_iter().collect::<Params>().merged(b.clone().into_iter().collect());
            let mut keys: Vec<_> = merged.iter().map(|(k, _)| k.to_string()).collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), total);

            for (key, _) in &b {
                let last = b.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str());
                prop_assert_eq!(merged.get(key), last);
            }
        }
    }
}
