use std::{collections::HashMap, path::PathBuf, sync::Arc};

use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Handle to the document store. Constructed once at process start and
/// passed by reference to each service; collections live as one JSON file
/// per entity type under `root`.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Open (or create) the named collection.
    pub async fn collection<T>(&self, name: &str) -> Result<Arc<Collection<T>>, ServiceError>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Clone,
    {
        Collection::open(self.root.join(format!("{name}.json"))).await
    }
}

/// One document collection, keyed by UUID and persisted as a JSON file.
///
/// The whole map is held in memory behind an async `RwLock` and flushed to
/// disk on every mutation. Intended for a small back-office data set where a
/// database server is overkill.
#[derive(Clone)]
pub struct Collection<T> {
    inner: Arc<RwLock<HashMap<Uuid, T>>>,
    file_path: PathBuf,
}

impl<T> Collection<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Load the collection from its file. Creates the file with an empty map
    /// if missing. A file that exists but does not parse is an error: the
    /// file is the system of record, and continuing with an empty map would
    /// let the next mutation overwrite the data.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: HashMap<Uuid, T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("{}: {}", file_path.display(), e))
            })?,
            Err(_) => {
                let empty: HashMap<Uuid, T> = HashMap::new();
                fs::write(
                    &file_path,
                    serde_json::to_vec(&empty).map_err(|e| ServiceError::Storage(e.to_string()))?,
                )
                .await
                .map_err(|e| ServiceError::Storage(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(map)), file_path }))
    }

    /// Flush one snapshot to disk. Called with the write guard still held so
    /// concurrent mutations cannot persist out of order.
    async fn save(&self, map: &HashMap<Uuid, T>) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(map).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(())
    }

    /// All documents, in unspecified order; callers sort as needed.
    pub async fn list(&self) -> Vec<T> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Documents matching a predicate.
    pub async fn find<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let map = self.inner.read().await;
        map.values().filter(|d| pred(d)).cloned().collect()
    }

    /// Get a document by id.
    pub async fn get(&self, id: &Uuid) -> Option<T> {
        let map = self.inner.read().await;
        map.get(id).cloned()
    }

    /// Insert or replace a document and persist.
    pub async fn insert(&self, id: Uuid, doc: T) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(id, doc);
        self.save(&map).await
    }

    /// Remove a document and persist; returns whether it existed.
    pub async fn remove(&self, id: &Uuid) -> Result<bool, ServiceError> {
        let mut map = self.inner.write().await;
        let existed = map.remove(id).is_some();
        self.save(&map).await?;
        Ok(existed)
    }

    /// Apply a mutation to the underlying map and persist atomically.
    pub async fn modify<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut HashMap<Uuid, T>) -> Result<R, ServiceError>,
    {
        let mut map = self.inner.write().await;
        let out = f(&mut map)?;
        self.save(&map).await?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collection_crud_persists_across_reload() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("collection_{}", Uuid::new_v4()));
        let store = DocumentStore::new(&tmp);
        let coll = store.collection::<String>("things").await?;

        // initially empty
        assert_eq!(coll.list().await.len(), 0);

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        coll.insert(a, "one".into()).await?;
        coll.insert(b, "two".into()).await?;
        assert_eq!(coll.get(&a).await.as_deref(), Some("one"));
        assert_eq!(coll.find(|v| v.starts_with('t')).await.len(), 1);

        // modify
        coll.modify(|m| {
            if let Some(v) = m.get_mut(&a) {
                *v = "ten".into();
            }
            Ok(())
        })
        .await?;
        assert_eq!(coll.get(&a).await.as_deref(), Some("ten"));

        // remove and reload persistence
        assert!(coll.remove(&b).await?);
        let reloaded = store.collection::<String>("things").await?;
        assert_eq!(reloaded.list().await.len(), 1);
        assert_eq!(reloaded.get(&a).await.as_deref(), Some("ten"));

        let _ = tokio::fs::remove_dir_all(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_fails_open_and_keeps_the_file() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("collection_{}", Uuid::new_v4()));
        let store = DocumentStore::new(&tmp);
        let coll = store.collection::<String>("things").await?;
        coll.insert(Uuid::new_v4(), "keep me".into()).await?;

        // Clobber the file with something that is not JSON
        let file = tmp.join("things.json");
        tokio::fs::write(&file, b"{not json").await?;

        let res = store.collection::<String>("things").await;
        assert!(matches!(res, Err(ServiceError::Storage(_))));

        // The broken file must stay untouched for manual recovery
        let bytes = tokio::fs::read(&file).await?;
        assert_eq!(bytes, b"{not json");

        let _ = tokio::fs::remove_dir_all(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn modify_error_leaves_map_unpersisted() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("collection_{}", Uuid::new_v4()));
        let coll = DocumentStore::new(&tmp).collection::<String>("things").await?;
        let res: Result<(), _> = coll.modify(|_| Err(ServiceError::not_found("thing"))).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        let _ = tokio::fs::remove_dir_all(&tmp).await;
        Ok(())
    }
}
