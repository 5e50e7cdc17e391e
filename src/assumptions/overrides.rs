//! Named parameter documents and the override merge protocol

use crate::error::{ModelError, ModelResult};
use std::str::FromStr;

/// Raw name/value parameter document, kept in document order.
///
/// Values stay textual until [`super::ParameterSet::from_map`] parses them, so a
/// non-numeric entry is reported against the field it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: Vec<(String, String)>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw value for a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set a value, replacing in place if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge overrides onto a copy of this baseline.
    ///
    /// An override may only replace a key the baseline already defines; anything
    /// else fails with [`ModelError::UnknownOverrideKey`] and nothing is merged.
    pub fn apply_overrides(&self, overrides: &[Override]) -> ModelResult<ParameterMap> {
        if let Some(unknown) = overrides.iter().find(|o| !self.contains(&o.name)) {
            return Err(ModelError::UnknownOverrideKey {
                name: unknown.name.clone(),
            });
        }

        let mut merged = self.clone();
        for o in overrides {
            log::debug!("Override {} = {}", o.name, o.value);
            merged.insert(o.name.clone(), o.value.clone());
        }
        Ok(merged)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// A single named replacement for a baseline value
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub name: String,
    pub value: String,
}

impl Override {
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }
}

/// Parses `name=value`, as passed on the command line
impl FromStr for Override {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ModelError::invalid(s, "override must be written as name=value"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::invalid(s, "override has an empty name"));
        }
        Ok(Override::new(name, value.trim()))
    }
}
