// dmglayout/src/defines.rs
//! Caller-supplied overrides, passed to the image builder as `-D key=value`.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([A-Za-z_][A-Za-z0-9_]*)=(.*)$").expect("define pattern is valid")
});

/// Named overrides that replace built-in defaults at resolution time.
///
/// Keys are kept sorted so rendered command lines are stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Defines {
    values: BTreeMap<String, String>,
}

impl Defines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `key=value` items. The value is everything after the first
    /// `=`, so it may be empty or contain further `=` signs. When a key is
    /// given twice the later value wins.
    pub fn parse<I, S>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut defines = Self::new();
        for item in items {
            let item = item.as_ref();
            let caps = DEFINE_RE
                .captures(item)
                .ok_or_else(|| Error::InvalidDefine(item.to_string()))?;
            defines.insert(&caps[1], &caps[2]);
        }
        Ok(defines)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(previous) = self.values.insert(key.clone(), value.clone()) {
            tracing::debug!("define {} redefined: {:?} -> {:?}", key, previous, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the override for `key`, or `default` when none was supplied.
    /// Absence is the common case, not an error.
    pub fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keys that are not in `recognized`, in sorted order.
    pub fn unused<'a>(&'a self, recognized: &[&str]) -> Vec<&'a str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !recognized.contains(key))
            .collect()
    }

    /// Renders the defines as builder arguments: `-D key=value` per entry.
    pub fn to_args(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(k, v)| ["-D".to_string(), format!("{}={}", k, v)])
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Defines {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut defines = Self::new();
        for (k, v) in iter {
            defines.insert(k, v);
        }
        defines
    }
}
