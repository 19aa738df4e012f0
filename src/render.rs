// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::attributes::AttributeMap;

lazy_static! {
    /// Twitter card property names that differ from the Open Graph ones.
    static ref TWITTER_ALIASES: HashMap<&'static str, &'static str> =
        HashMap::from_iter([("name", "title"), ("image", "image:src")]);
}

/// Attributes that are always rendered as plain `name`/`contents` tags.
pub const BASE_UNWRAPPED: [&str; 3] = ["title", "keywords", "description"];

/// Names rendered as plain meta tags rather than Twitter/Open Graph pairs.
///
/// Always contains [`BASE_UNWRAPPED`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnwrappedSet {
    names: HashSet<String>,
}

impl Default for UnwrappedSet {
    fn default() -> Self {
        Self {
            names: BASE_UNWRAPPED.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl UnwrappedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The base names plus `extra`.
    pub fn with<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.extend(extra);
        set
    }

    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Twitter card property for `name`.
pub fn twitter_name(name: &str) -> &str {
    TWITTER_ALIASES.get(name).copied().unwrap_or(name)
}

/// Render a single attribute as a meta tag.
pub fn tag(name: &str, value: &str, unwrapped: &UnwrappedSet) -> String {
    if unwrapped.contains(name) {
        return format!(r#"<meta name="{}" contents="{}">"#, name, value);
    }

    format!(
        r#"<meta name="twitter:{}" property="og:{}" content="{}">"#,
        twitter_name(name),
        name,
        value
    )
}

/// Render every attribute in order, one newline-terminated tag per attribute.
///
/// Values are inserted verbatim; nothing is HTML-escaped.
pub fn render(attributes: &AttributeMap, unwrapped: &UnwrappedSet) -> String {
    attributes
        .iter()
        .map(|(name, value)| tag(name, value, unwrapped) + "\n")
        .collect()
}
