// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

pub mod attributes;
pub mod cache;
pub mod config;
pub mod error;
pub mod image;
pub mod loader;
pub mod metadata;
pub mod render;
pub mod resolver;
pub mod url;

pub use attributes::{AttributeMap, Record};
pub use cache::{CacheEntry, CacheStore, DefaultsCache, MemoryStore};
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use url::{StaticUrls, UrlResolver};
