//! Directory-backed content cache for remote includes.
//!
//! Entries are keyed by an opaque string (in practice the include URL)
//! and stored as one file per key under the cache root, named by the
//! SHA-256 digest of the key. A key once written is trusted on every
//! future read: there is no expiry, versioning, or integrity checking.

use crate::env::{self, Environment};
use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs as async_fs;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("home directory could not be resolved")]
    NoHome,

    #[error("can't create cache directory '{path}': {source}")]
    Create { path: PathBuf, source: io::Error },

    #[error("can't write cache entry for key '{key}': {source}")]
    Write { key: String, source: io::Error },
}

/// Directory-backed key→bytes store.
///
/// The cache performs no locking; concurrent use of the same root
/// directory requires caller serialization or distinct roots.
#[derive(Debug)]
pub struct ContentCache {
    root: PathBuf,
}

impl ContentCache {
    /// Open a cache rooted at `root`, creating the directory if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let root = root.into();

        std::fs::create_dir_all(&root).map_err(|source| CacheError::Create {
            path: root.clone(),
            source,
        })?;

        Ok(Self { root })
    }

    /// Open the default cache, a `.max` directory under the user's home.
    pub fn open_default(environment: &dyn Environment) -> Result<Self, CacheError> {
        let home = environment.home_dir().ok_or(CacheError::NoHome)?;

        Self::new(env::cache_dir_path(&home))
    }

    /// The cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up the content stored under `key`.
    ///
    /// Any read failure counts as a miss.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        match async_fs::read(self.entry_path(key)).await {
            Ok(content) => Some(content),
            Err(err) => {
                debug!("cache miss for key '{}': {}", key, err);
                None
            }
        }
    }

    /// Store `content` under `key`, replacing any previous entry.
    pub async fn put(&self, key: &str, content: &[u8]) -> Result<(), CacheError> {
        async_fs::write(self.entry_path(key), content)
            .await
            .map_err(|source| CacheError::Write {
                key: key.to_string(),
                source,
            })
    }

    /// Entry file for `key`: keys are arbitrary strings (URLs carry path
    /// separators), so the filename is the digest of the key.
    fn entry_path(&self, key: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());

        self.root.join(format!("{:x}", hasher.finalize()))
    }
}
