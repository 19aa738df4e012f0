// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

/// An ordered mapping from attribute name to value.
///
/// Keys keep the position they were first inserted at; inserting an existing
/// key replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

/// One row of a defaults file, keyed by the header's column names.
pub type Record = AttributeMap;

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, keeping the key's original position if it is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overlay `other` onto `self`: new keys are appended, existing keys take the new value.
    pub fn extend_from(&mut self, other: &AttributeMap) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Merge built-ins, file defaults and caller overrides, later sources winning.
///
/// Output order is first-seen key order across the three inputs.
pub fn merge(builtins: &AttributeMap, defaults: &AttributeMap, overrides: &AttributeMap) -> AttributeMap {
    let mut merged = builtins.clone();
    merged.extend_from(defaults);
    merged.extend_from(overrides);
    merged
}
