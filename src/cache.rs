// SPDX-FileCopyrightText: 2024 Ohin "Kazani" Taylor <kazani@kazani.dev>
// SPDX-License-Identifier: MIT

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, RwLock},
};

use chrono::{DateTime, Utc};

use crate::{
    attributes::Record,
    error::{Error, Result},
};

const KEY_PREFIX: &str = "metatags.defaults.";

/// Parsed records of one defaults file, stamped with the file's modification time.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub last_modified_at: DateTime<Utc>,
    pub records: Arc<Vec<Record>>,
}

/// A keyed store whose entries never expire on their own.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheEntry>;
    fn put_forever(&self, key: &str, entry: CacheEntry);
}

/// In-process [`CacheStore`] behind a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    pub fn flush(&self) {
        match self.entries.write() {
            Ok(mut entries) => entries.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    fn put_forever(&self, key: &str, entry: CacheEntry) {
        match self.entries.write() {
            Ok(mut entries) => entries.insert(key.to_owned(), entry),
            Err(poisoned) => poisoned.into_inner().insert(key.to_owned(), entry),
        };
    }
}

impl<S: CacheStore + ?Sized> CacheStore for Arc<S> {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        (**self).get(key)
    }

    fn put_forever(&self, key: &str, entry: CacheEntry) {
        (**self).put_forever(key, entry)
    }
}

/// Memoizes parsed defaults files until their modification time changes.
///
/// Two callers missing at the same time will both load the file; the later
/// write simply replaces the earlier one.
pub struct DefaultsCache<S: CacheStore> {
    store: S,
}

impl<S: CacheStore> DefaultsCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key under which the records of `path` are stored.
    pub fn key(path: &Path) -> String {
        format!("{}{}", KEY_PREFIX, path.display())
    }

    /// Return the records of `path`, calling `loader` only when nothing fresh is cached.
    pub fn get<F>(&self, path: &Path, loader: F) -> Result<Arc<Vec<Record>>>
    where
        F: FnOnce(&Path) -> Result<Vec<Record>>,
    {
        let last_modified_at = modified_at(path)?;
        let key = Self::key(path);

        match self.store.get(&key) {
            Some(entry) if entry.last_modified_at == last_modified_at => {
                log::debug!("Defaults cache hit for {:?}", path);
                return Ok(entry.records);
            }
            Some(_) => log::debug!("Defaults cache stale for {:?}", path),
            None => log::debug!("Defaults cache miss for {:?}", path),
        }

        let records = Arc::new(loader(path)?);
        self.store.put_forever(
            &key,
            CacheEntry {
                last_modified_at,
                records: records.clone(),
            },
        );

        Ok(records)
    }
}

fn modified_at(path: &Path) -> Result<DateTime<Utc>> {
    let modified = std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|source| Error::FileRead {
            path: path.to_owned(),
            source,
        })?;

    Ok(modified.into())
}

#[cfg(test)]
mod test {
    use std::{
        cell::Cell,
        io::Write,
        path::Path,
        sync::Arc,
        time::{Duration, SystemTime},
    };

    use crate::{
        attributes::{AttributeMap, Record},
        cache::{CacheEntry, CacheStore, DefaultsCache, MemoryStore},
        error::Error,
        loader::load,
    };

    fn set_modified(file: &std::fs::File, at: SystemTime) {
        file.set_modified(at).unwrap();
    }

    #[test]
    fn loads_once_while_unchanged() {
        let cache = DefaultsCache::new(MemoryStore::new());
        let calls = Cell::new(0);
        let counting = |path: &Path| {
            calls.set(calls.get() + 1);
            load(path)
        };

        let first = cache.get(Path::new("data/test.csv"), counting).unwrap();
        let second = cache.get(Path::new("data/test.csv"), counting).unwrap();

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.store().len(), 1);
    }

    #[test]
    fn reloads_after_modification() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "url,title\nfoo.com,Foo\n").unwrap();
        set_modified(file.as_file(), SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));

        let cache = DefaultsCache::new(MemoryStore::new());
        let before = cache.get(file.path(), load).unwrap();
        assert_eq!(before[0].get("title"), Some("Foo"));

        let mut rewritten = std::fs::File::create(file.path()).unwrap();
        write!(rewritten, "url,title\nfoo.com,Bar\n").unwrap();
        set_modified(&rewritten, SystemTime::UNIX_EPOCH + Duration::from_secs(2_000));

        let after = cache.get(file.path(), load).unwrap();
        assert_eq!(after[0].get("title"), Some("Bar"));
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn uses_seeded_entry() {
        let path = Path::new("data/test.csv");
        let store = MemoryStore::new();
        store.put_forever(
            &DefaultsCache::<MemoryStore>::key(path),
            CacheEntry {
                last_modified_at: std::fs::metadata(path).unwrap().modified().unwrap().into(),
                records: Arc::new(vec![AttributeMap::from_iter([
                    ("url", "foo.com"),
                    ("title", "Bar"),
                ])]),
            },
        );

        let cache = DefaultsCache::new(store);
        let records = cache
            .get(path, |_: &Path| -> crate::error::Result<Vec<Record>> {
                panic!("the seeded entry should have been used")
            })
            .unwrap();

        assert_eq!(records[0].get("title"), Some("Bar"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let cache = DefaultsCache::new(MemoryStore::new());

        assert!(matches!(
            cache.get(Path::new("data/does-not-exist.csv"), load),
            Err(Error::FileRead { .. })
        ));
        assert!(cache.store().is_empty());
    }

    #[test]
    fn flush_forces_reload() {
        let store = Arc::new(MemoryStore::new());
        let cache = DefaultsCache::new(store.clone());
        let calls = Cell::new(0);
        let counting = |path: &Path| {
            calls.set(calls.get() + 1);
            load(path)
        };

        cache.get(Path::new("data/test.csv"), counting).unwrap();
        store.flush();
        cache.get(Path::new("data/test.csv"), counting).unwrap();

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn concurrent_readers() {
        let cache = Arc::new(DefaultsCache::new(MemoryStore::new()));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.get(Path::new("data/test.csv"), load).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap()[0].get("url"), Some("foo.com"));
        }
        assert_eq!(cache.store().len(), 1);
    }
}
