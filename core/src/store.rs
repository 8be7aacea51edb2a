// core/src/store.rs

//! Storage seam for catalog, cart and user records.
//!
//! A store loads and saves a whole collection at a time. There is no
//! locking across a load/save cycle: concurrent writers race and the last
//! save wins.

use crate::error::{ShopError, ShopResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

#[async_trait]
pub trait Store<T: Send + Sync>: Send + Sync {
  /// Short label used in logs and `DataUnavailable` errors.
  fn name(&self) -> &str;

  async fn load(&self) -> ShopResult<Vec<T>>;

  async fn save(&self, records: &[T]) -> ShopResult<()>;
}

/// A collection persisted as one pretty-printed JSON array.
#[derive(Debug)]
pub struct JsonFileStore<T> {
  name: String,
  path: PathBuf,
  _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
  T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
  pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
    Self {
      name: name.into(),
      path: path.into(),
      _records: PhantomData,
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Writes an empty collection if the backing file does not exist yet.
  pub async fn ensure_exists(&self) -> ShopResult<()> {
    match tokio::fs::metadata(&self.path).await {
      Ok(_) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => {
        info!(store = %self.name, path = %self.path.display(), "Creating empty data file.");
        let empty: Vec<T> = Vec::new();
        self.save(&empty).await
      }
      Err(e) => Err(self.unavailable(e)),
    }
  }

  fn unavailable(&self, source: impl Into<anyhow::Error>) -> ShopError {
    let err = ShopError::data_unavailable(self.name.clone(), source);
    error!(store = %self.name, path = %self.path.display(), error = %err, "Data file operation failed.");
    err
  }
}

#[async_trait]
impl<T> Store<T> for JsonFileStore<T>
where
  T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
  fn name(&self) -> &str {
    &self.name
  }

  async fn load(&self) -> ShopResult<Vec<T>> {
    let bytes = tokio::fs::read(&self.path).await.map_err(|e| self.unavailable(e))?;
    let records: Vec<T> = serde_json::from_slice(&bytes).map_err(|e| self.unavailable(e))?;
    debug!(store = %self.name, count = records.len(), "Loaded records.");
    Ok(records)
  }

  async fn save(&self, records: &[T]) -> ShopResult<()> {
    let body = serde_json::to_vec_pretty(records).map_err(|e| self.unavailable(e))?;
    let parent = self
      .path
      .parent()
      .filter(|p| !p.as_os_str().is_empty())
      .unwrap_or_else(|| Path::new("."));
    tokio::fs::create_dir_all(parent).await.map_err(|e| self.unavailable(e))?;

    // One staging file per save. Readers never observe a half-written file.
    let staging = tempfile::Builder::new()
      .prefix(".shopfront-")
      .suffix(".tmp")
      .tempfile_in(parent)
      .map_err(|e| self.unavailable(e))?
      .into_temp_path();
    tokio::fs::write(&staging, &body).await.map_err(|e| self.unavailable(e))?;
    staging.persist(&self.path).map_err(|e| self.unavailable(e))?;
    debug!(store = %self.name, count = records.len(), "Saved records.");
    Ok(())
  }
}

/// Process-local store. Used by tests and demos.
#[derive(Debug)]
pub struct MemoryStore<T> {
  name: String,
  records: RwLock<Vec<T>>,
}

impl<T: Clone + Send + Sync> MemoryStore<T> {
  pub fn new(name: impl Into<String>, records: Vec<T>) -> Self {
    Self {
      name: name.into(),
      records: RwLock::new(records),
    }
  }

  pub fn empty(name: impl Into<String>) -> Self {
    Self::new(name, Vec::new())
  }

  pub fn snapshot(&self) -> Vec<T> {
    self.records.read().clone()
  }
}

#[async_trait]
impl<T: Clone + Send + Sync> Store<T> for MemoryStore<T> {
  fn name(&self) -> &str {
    &self.name
  }

  async fn load(&self) -> ShopResult<Vec<T>> {
    Ok(self.snapshot())
  }

  async fn save(&self, records: &[T]) -> ShopResult<()> {
    *self.records.write() = records.to_vec();
    Ok(())
  }
}
