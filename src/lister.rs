//! Sources of candidate objects.
//!
//! A [`Lister`] hands back raw, namespace-scoped objects for the job model to
//! filter. [`ObjectStore`] is the in-memory implementation used by the CLI and
//! tests; it is loaded from a `kubectl get -o json` style document.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use kube::core::DynamicObject;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::error::{LineageError, Result};

/// Supplies raw candidate objects for a namespace.
#[async_trait]
pub trait Lister: Send + Sync {
    /// List objects in `namespace`, or in every namespace when it is empty.
    ///
    /// Implementations should stop and return [`LineageError::Cancelled`]
    /// once `cancel` fires.
    async fn list(&self, namespace: &str, cancel: &CancellationToken)
        -> Result<Vec<DynamicObject>>;
}

/// Namespace-indexed object cache.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: Arc<RwLock<BTreeMap<String, Vec<DynamicObject>>>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `objects`.
    pub async fn with_objects(objects: impl IntoIterator<Item = DynamicObject>) -> Self {
        let store = Self::new();
        for obj in objects {
            store.insert(obj).await;
        }
        store
    }

    /// Append an object under its own namespace
    pub async fn insert(&self, obj: DynamicObject) {
        let ns = obj.metadata.namespace.clone().unwrap_or_default();
        self.objects.write().await.entry(ns).or_default().push(obj);
    }

    /// Replace everything held for `namespace`. Returns the number of objects dropped.
    pub async fn replace(&self, namespace: &str, objects: Vec<DynamicObject>) -> usize {
        let mut store = self.objects.write().await;
        let dropped = store.get(namespace).map(Vec::len).unwrap_or(0);
        if objects.is_empty() {
            store.remove(namespace);
        } else {
            store.insert(namespace.to_string(), objects);
        }
        dropped
    }

    /// Returns the number of objects across all namespaces
    pub async fn len(&self) -> usize {
        self.objects.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl Lister for ObjectStore {
    async fn list(
        &self,
        namespace: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<DynamicObject>> {
        let store = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::warn!(namespace, "Listing cancelled");
                return Err(LineageError::Cancelled);
            }
            guard = self.objects.read() => guard,
        };

        let objects: Vec<DynamicObject> = if namespace.is_empty() {
            store.values().flatten().cloned().collect()
        } else {
            store.get(namespace).cloned().unwrap_or_default()
        };
        tracing::trace!(namespace, count = objects.len(), "Listed objects");
        Ok(objects)
    }
}

/// Parse a list document (`{"items": [...]}`) or a single object.
pub fn parse_objects(bytes: &[u8]) -> Result<Vec<DynamicObject>> {
    let doc: Value = serde_json::from_slice(bytes)?;
    let objects = match doc {
        Value::Object(mut map) if map.contains_key("items") => {
            let items = map.remove("items").unwrap_or(Value::Null);
            serde_json::from_value::<Option<Vec<DynamicObject>>>(items)?.unwrap_or_default()
        }
        other => vec![serde_json::from_value(other)?],
    };
    Ok(objects)
}

/// Read and parse a list document from disk.
pub async fn load_objects(path: impl AsRef<Path>) -> Result<Vec<DynamicObject>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    parse_objects(&bytes)
}
