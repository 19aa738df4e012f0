// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::{
    attributes::{merge, AttributeMap},
    cache::{CacheStore, DefaultsCache},
    config::Config,
    error::Result,
    image, loader,
    render::{render, UnwrappedSet},
    resolver,
    url::UrlResolver,
};

/// Generates the meta tags of a page.
///
/// Holds the site name, the defaults that apply to the current URL, and the
/// set of attributes rendered as plain tags.
pub struct Metadata<U: UrlResolver, S: CacheStore> {
    project: String,
    defaults: AttributeMap,
    unwrapped: UnwrappedSet,
    url: U,
    cache: DefaultsCache<S>,
    public_folder: Option<PathBuf>,
}

impl<U: UrlResolver, S: CacheStore> Metadata<U, S> {
    pub fn new(url: U, store: S, public_folder: Option<PathBuf>) -> Self {
        Self {
            project: "website".into(),
            defaults: AttributeMap::new(),
            unwrapped: UnwrappedSet::new(),
            url,
            cache: DefaultsCache::new(store),
            public_folder,
        }
    }

    /// Build from a configuration file's settings.
    ///
    /// `defaults_file` is loaded straight away when set.
    pub fn from_config(config: &Config, url: U, store: S) -> Result<Self> {
        let mut metadata = Self::new(url, store, config.public_folder.clone());
        metadata.set_project(config.project.clone());
        metadata.set_unwrapped(config.unwrapped.iter().cloned());

        if let Some(file) = &config.defaults_file {
            metadata.set_defaults_from_file(file)?;
        }

        Ok(metadata)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn set_project(&mut self, project: impl Into<String>) {
        self.project = project.into();
    }

    pub fn defaults(&self) -> &AttributeMap {
        &self.defaults
    }

    pub fn set_defaults(&mut self, defaults: AttributeMap) {
        self.defaults = defaults;
    }

    pub fn unwrapped(&self) -> &UnwrappedSet {
        &self.unwrapped
    }

    /// Unwrap `extra` on top of the base set, replacing earlier extensions.
    pub fn set_unwrapped<I, T>(&mut self, extra: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.unwrapped = UnwrappedSet::with(extra);
    }

    pub fn cache(&self) -> &DefaultsCache<S> {
        &self.cache
    }

    /// Load the defaults that apply to the current URL from a CSV file.
    ///
    /// If no row applies, the active defaults are cleared.
    pub fn set_defaults_from_file(&mut self, file: &Path) -> Result<()> {
        let records = self.cache.get(file, loader::load)?;

        self.defaults = resolver::resolve(&self.url.current(), &records)
            .cloned()
            .unwrap_or_default();

        Ok(())
    }

    /// Built-in attributes every page starts with.
    fn builtins(&self) -> AttributeMap {
        AttributeMap::from_iter([
            ("card", "summary".to_string()),
            ("site", self.project.clone()),
            ("url", self.url.current()),
        ])
    }

    /// Render the page's meta tags, `overrides` taking precedence over the defaults.
    pub fn render(&self, overrides: &AttributeMap) -> String {
        let mut attributes = merge(&self.builtins(), &self.defaults, overrides);

        let image = image::resolve(
            attributes.get("image"),
            self.public_folder.as_deref(),
            |path| self.url.asset(path),
        );
        attributes.insert("image", image);

        render(&attributes, &self.unwrapped)
    }
}
