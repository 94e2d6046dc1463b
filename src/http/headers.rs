//! Header collection used by the parser and the request accessors.
//!
//! This module provides a low-level abstraction for handling header lines that
//! a caller has already split out of a request or response. It supports
//! setting, retrieving, removing and serializing headers.
//!
//! Headers are stored in an ordered map to preserve insertion order. Lookups
//! are case-insensitive: names are lowercased before hashing, while the
//! spelling used by the latest write is kept for enumeration and output.
//!
//! Values are stored as raw strings, without validation or restrictions on
//! which headers are allowed. When required, a populated store can be checked
//! by the [`validator`](crate::http::validator) module.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::config::StoreConfig;

/// A single stored header, keeping the name as it was last written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderEntry {
    name: String,
    value: String,
}

#[derive(Debug, Clone, Default)]
pub struct HeaderStore {
    headers: IndexMap<String, HeaderEntry>,
    pub(crate) config: StoreConfig,
}

/// Lookup key for a header name.
pub(crate) fn normalize(name: &str) -> String {
    name.to_ascii_lowercase()
}

impl HeaderStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            headers: IndexMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Inserts or overwrites `name`.
    ///
    /// Overwriting keeps the entry at its original position but adopts the
    /// spelling of `name` passed here.
    pub fn set(&mut self, name: &str, value: &str) {
        let entry = HeaderEntry {
            name: name.to_string(),
            value: value.to_string(),
        };

        if let Some(old) = self.headers.insert(normalize(name), entry) {
            debug!("overwriting header {}: {:?} -> {:?}", name, old.value, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&normalize(name))
            .map(|entry| entry.value.as_str())
    }

    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&normalize(name))
    }

    /// Removes `name` and returns its value. Remaining entries keep their order.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.headers
            .shift_remove(&normalize(name))
            .map(|entry| entry.value)
    }

    pub fn clear(&mut self) {
        self.headers.clear();
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.values().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// One `Name: Value` line per header, in enumeration order.
    pub fn debug_dump(&self) -> String {
        self.to_string()
    }

    /// Wire form of the headers, each line terminated by `\r\n`.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in self.iter() {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }
}

impl fmt::Display for HeaderStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

impl<'a> Extend<(&'a str, &'a str)> for HeaderStore {
    fn extend<T: IntoIterator<Item = (&'a str, &'a str)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HeaderStore {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_case_insensitive() {
        let mut headers = HeaderStore::new();
        headers.set("Content-Type", "text/html");

        assert_eq!(headers.get("content-type"), Some("text/html"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("text/html"));
        assert!(headers.contains("Content-type"));
        assert!(!headers.contains("Accept"));
    }

    #[test]
    fn set_overwrites_case_variants() {
        let mut headers = HeaderStore::new();
        headers.set("Accept", "text/html");
        headers.set("Host", "localhost");
        headers.set("ACCEPT", "application/json");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("accept"), Some("application/json"));
        // position is kept, spelling follows the latest write
        assert_eq!(headers.names().collect::<Vec<_>>(), vec!["ACCEPT", "Host"]);
    }

    #[test]
    fn absent_and_empty_are_distinct() {
        let mut headers = HeaderStore::new();
        headers.set("X-Empty", "");

        assert_eq!(headers.get("X-Empty"), Some(""));
        assert_eq!(headers.get("X-Missing"), None);
        assert_eq!(headers.get_or("X-Empty", "d"), "");
        assert_eq!(headers.get_or("Missing", "d"), "d");
    }

    #[test]
    fn remove() {
        let mut headers: HeaderStore =
            [("A", "1"), ("B", "2"), ("C", "3")].into_iter().collect();

        assert_eq!(headers.remove("missing"), None);
        assert_eq!(headers.len(), 3);

        assert_eq!(headers.remove("b"), Some("2".to_string()));
        assert_eq!(headers.len(), 2);
        assert!(!headers.contains("B"));
        assert_eq!(headers.names().collect::<Vec<_>>(), vec!["A", "C"]);
    }

    #[test]
    fn clear() {
        let mut headers: HeaderStore = [("A", "1"), ("B", "2")].into_iter().collect();
        headers.clear();

        assert_eq!(headers.len(), 0);
        assert!(headers.is_empty());
        assert!(!headers.contains("A"));
        assert!(!headers.contains("B"));

        headers.clear();
        assert!(headers.is_empty());
    }

    #[test]
    fn config_is_carried_by_store() {
        let config = StoreConfig {
            max_line_len: Some(64),
            ..StoreConfig::default()
        };

        assert_eq!(HeaderStore::new().config(), &StoreConfig::default());
        assert_eq!(HeaderStore::with_config(config).config(), &config);
    }

    #[test]
    fn names_follow_insertion_order() {
        let headers: HeaderStore = [("Zeta", "1"), ("alpha", "2"), ("Mid", "3")]
            .into_iter()
            .collect();

        assert_eq!(
            headers.names().collect::<Vec<_>>(),
            vec!["Zeta", "alpha", "Mid"]
        );
    }

    #[test]
    fn dump_and_stringify() {
        let headers: HeaderStore = [("Host", "example.com"), ("Accept", "*/*")]
            .into_iter()
            .collect();

        assert_eq!(headers.debug_dump(), "Host: example.com\nAccept: */*\n");
        assert_eq!(headers.stringify(), "Host: example.com\r\nAccept: */*\r\n");
        assert_eq!(HeaderStore::new().debug_dump(), "");
    }
}
