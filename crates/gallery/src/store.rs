//! Generic JSON-array collection store.
//!
//! A [`JsonStore`] owns one JSON document holding an ordered array of
//! records. Every mutation is a full read-modify-write of that document.
//! Mutations made through clones of the same store are serialized by an
//! internal lock, so concurrent requests cannot lose each other's updates.
//! Other processes writing the same file are not coordinated with.

use std::convert::Infallible;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::Result;

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    cap: Option<usize>,
    write_lock: Mutex<()>,
}

/// A durable, newest-first, optionally bounded record collection.
#[derive(Debug)]
pub struct JsonStore<T> {
    inner: Arc<Inner>,
    _records: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _records: PhantomData,
        }
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    /// Create a store backed by `path`. `cap` bounds the collection length;
    /// records past the cap are dropped from the tail on every write.
    pub fn new(path: impl Into<PathBuf>, cap: Option<usize>) -> Self {
        Self {
            inner: Arc::new(Inner {
                path: path.into(),
                cap,
                write_lock: Mutex::new(()),
            }),
            _records: PhantomData,
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Maximum collection length, if bounded.
    pub fn cap(&self) -> Option<usize> {
        self.inner.cap
    }

    /// Read the collection.
    ///
    /// A missing document is an empty collection. So is an unreadable or
    /// corrupt one: the problem is logged and the caller sees no records.
    pub async fn load(&self) -> Vec<T> {
        let path = &self.inner.path;
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Corrupt collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the collection. Returns whether the write reached disk.
    ///
    /// Failures are logged, never raised.
    pub async fn save(&self, records: Vec<T>) -> bool {
        let _guard = self.inner.write_lock.lock().await;
        self.persist(records).await
    }

    /// Insert `record` at the head and trim to the cap.
    pub async fn append(&self, record: T) -> T
    where
        T: Clone,
    {
        let inserted = record.clone();
        let _ = self
            .try_modify(move |records| {
                records.insert(0, record);
                Ok::<_, Infallible>(())
            })
            .await;
        inserted
    }

    /// Drop every record matching `predicate`. Returns how many were removed.
    pub async fn remove_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool + Send,
    {
        let result = self
            .try_modify(|records| {
                let before = records.len();
                records.retain(|record| !predicate(record));
                Ok::<_, Infallible>(before - records.len())
            })
            .await;

        match result {
            Ok(removed) => removed,
            Err(never) => match never {},
        }
    }

    /// Apply `mutator` to the first record matching `predicate`.
    ///
    /// Returns `false` without touching the document when nothing matches.
    pub async fn update_where<P, M>(&self, mut predicate: P, mutator: M) -> bool
    where
        P: FnMut(&T) -> bool + Send,
        M: FnOnce(&mut T) + Send,
    {
        self.try_modify(|records| match records.iter_mut().find(|r| predicate(&**r)) {
            Some(record) => {
                mutator(record);
                Ok(())
            }
            None => Err(()),
        })
        .await
        .is_ok()
    }

    /// Empty the collection.
    pub async fn clear(&self) -> bool {
        self.save(Vec::new()).await
    }

    /// Run `f` over the loaded collection while holding the write lock.
    ///
    /// The collection is saved (after trimming to the cap) only when `f`
    /// returns `Ok`; an `Err` leaves the document untouched.
    pub async fn try_modify<R, E, F>(&self, f: F) -> std::result::Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> std::result::Result<R, E> + Send,
    {
        let _guard = self.inner.write_lock.lock().await;
        let mut records = self.load().await;
        let outcome = f(&mut records)?;
        self.persist(records).await;
        Ok(outcome)
    }

    /// Trim and write. Caller must hold the write lock.
    async fn persist(&self, mut records: Vec<T>) -> bool {
        if let Some(cap) = self.inner.cap {
            records.truncate(cap);
        }

        match self.write_document(&records).await {
            Ok(()) => true,
            Err(err) => {
                error!(path = %self.inner.path.display(), error = %err, "Failed to save collection");
                false
            }
        }
    }

    /// Write to a sibling temp file, then rename over the target.
    async fn write_document(&self, records: &[T]) -> Result<()> {
        let path = &self.inner.path;
        let json = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        value: u32,
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_string(),
            value,
        }
    }

    fn test_store(dir: &TempDir, cap: Option<usize>) -> JsonStore<Item> {
        JsonStore::new(dir.path().join("items.json"), cap)
    }

    #[tokio::test]
    async fn test_missing_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, None);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, None);
        std::fs::write(store.path(), b"{ this is not json").unwrap();

        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, Some(10));
        let records = vec![item("a", 1), item("b", 2), item("c", 3)];

        assert!(store.save(records.clone()).await);
        assert_eq!(store.load().await, records);
        assert!(!dir.path().join("items.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store: JsonStore<Item> = JsonStore::new(dir.path().join("nested/deeper/items.json"), None);

        assert!(store.save(vec![item("a", 1)]).await);
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        let dir = TempDir::new().unwrap();
        // A directory where the document should be makes the rename fail.
        let path = dir.path().join("items.json");
        std::fs::create_dir(&path).unwrap();
        let store: JsonStore<Item> = JsonStore::new(path, None);

        assert!(!store.save(vec![item("a", 1)]).await);
    }

    #[tokio::test]
    async fn test_append_is_newest_first_and_capped() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, Some(3));

        for (i, id) in ["a", "b", "c", "d"].iter().enumerate() {
            store.append(item(id, i as u32)).await;
        }

        let ids: Vec<String> = store.load().await.into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["d", "c", "b"]);
    }

    #[tokio::test]
    async fn test_remove_where() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, None);
        store.save(vec![item("a", 1), item("b", 2), item("c", 1)]).await;

        let removed = store.remove_where(|i| i.value == 1).await;

        assert_eq!(removed, 2);
        assert_eq!(store.load().await, vec![item("b", 2)]);
    }

    #[tokio::test]
    async fn test_update_where() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, None);
        store.save(vec![item("a", 1), item("b", 2)]).await;

        assert!(store.update_where(|i| i.id == "b", |i| i.value = 20).await);
        assert!(!store.update_where(|i| i.id == "zzz", |i| i.value = 0).await);

        assert_eq!(store.load().await, vec![item("a", 1), item("b", 20)]);
    }

    #[tokio::test]
    async fn test_try_modify_error_leaves_document() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, None);
        store.save(vec![item("a", 1)]).await;

        let result: std::result::Result<(), &str> = store
            .try_modify(|records| {
                records.clear();
                Err("rejected")
            })
            .await;

        assert_eq!(result, Err("rejected"));
        assert_eq!(store.load().await, vec![item("a", 1)]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir, None);

        let mut handles = Vec::new();
        for i in 0..20u32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(item(&format!("item-{}", i), i)).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.load().await.len(), 20);
    }
}
