//! Document parsing and task dispatch.
//!
//! The [`Resolver`] turns a raw document into a [`Config`]: the top-level
//! shape is parsed once, each task entry is classified by shape, and
//! references are routed to the local or remote include path. Any hard
//! failure aborts the whole resolution.

use crate::cache::ContentCache;
use crate::config::ConfigError;
use crate::config::discovery;
use crate::config::types::{Config, RawDocument, TaskReference};
use crate::env::{Environment, SystemEnvironment};
use crate::include::fetcher::{Fetcher, HttpFetcher};
use crate::include::local::{self, LocalInclude};
use crate::include::remote;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Policy knobs for one resolver.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Fail the whole document when a local include cannot be read,
    /// instead of silently omitting the task.
    pub strict_local_includes: bool,
}

/// Resolves configuration documents into [`Config`] values.
///
/// A fresh resolver talks HTTP through [`HttpFetcher`], answers location
/// queries from the real process environment, and runs uncached; attach a
/// cache with [`with_default_cache`](Self::with_default_cache) or
/// [`with_cache`](Self::with_cache).
pub struct Resolver {
    cache: Option<ContentCache>,
    fetcher: Arc<dyn Fetcher>,
    environment: Arc<dyn Environment>,
    options: ResolveOptions,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            cache: None,
            fetcher: Arc::new(HttpFetcher::new()),
            environment: Arc::new(SystemEnvironment),
            options: ResolveOptions::default(),
        }
    }

    /// Attach the default content cache, a `.max` directory under the
    /// user's home.
    ///
    /// A cache that cannot be opened is tolerated: the failure is logged
    /// and resolution runs uncached, falling back to plain fetches for
    /// remote includes.
    pub fn with_default_cache(mut self) -> Self {
        match ContentCache::open_default(self.environment.as_ref()) {
            Ok(cache) => self.cache = Some(cache),
            Err(err) => {
                warn!("can't create cache, remote includes will be refetched: {}", err);
            }
        }

        self
    }

    /// Attach a specific content cache.
    pub fn with_cache(mut self, cache: ContentCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the remote fetcher.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Replace the environment capability.
    pub fn with_environment(mut self, environment: Arc<dyn Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Replace the resolve options.
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolve a configuration document from a string of content.
    pub async fn resolve_content(&self, content: &str) -> Result<Config, ConfigError> {
        self.resolve_document(content.as_bytes()).await
    }

    /// Resolve a configuration document by locating it on disk.
    ///
    /// With no explicit path, or one that does not exist, the working
    /// directory is searched for `max_<os>.yml` and then `max.yml`.
    pub async fn resolve_file(&self, path: Option<&Path>) -> Result<Config, ConfigError> {
        let content = discovery::locate(self.environment.as_ref(), path)?;

        self.resolve_document(&content).await
    }

    /// Task entries resolve sequentially, in map iteration order; callers
    /// must not assume a deterministic order.
    async fn resolve_document(&self, content: &[u8]) -> Result<Config, ConfigError> {
        let raw: RawDocument = serde_yaml::from_slice(content).map_err(|err| {
            warn!("configuration document is not valid: {}", err);
            ConfigError::Unmarshal
        })?;

        let mut tasks = HashMap::new();

        for (name, value) in raw.tasks {
            match TaskReference::classify(&value) {
                TaskReference::Remote(url) => {
                    let task = remote::resolve(&url, self.fetcher.as_ref(), self.cache.as_ref())
                        .await
                        .map_err(|err| {
                            warn!("remote include '{}' for task '{}' failed: {}", url, name, err);
                            ConfigError::Unmarshal
                        })?;

                    tasks.insert(name, task);
                }
                TaskReference::Local(path) => match local::resolve(&path) {
                    Ok(LocalInclude::Resolved(task)) => {
                        tasks.insert(name, task);
                    }
                    Ok(LocalInclude::Unreadable(source)) => {
                        if self.options.strict_local_includes {
                            return Err(ConfigError::LocalInclude { path, source });
                        }

                        debug!(
                            "skipping task '{}', local include '{}' is unreadable: {}",
                            name,
                            path.display(),
                            source
                        );
                    }
                    Err(err) => {
                        warn!(
                            "local include '{}' for task '{}' failed: {}",
                            path.display(),
                            name,
                            err
                        );
                        return Err(ConfigError::Unmarshal);
                    }
                },
                TaskReference::Inline(value) => {
                    let task = serde_yaml::from_value(value).map_err(|err| {
                        warn!("inline task '{}' is not valid: {}", name, err);
                        ConfigError::Unmarshal
                    })?;

                    tasks.insert(name, task);
                }
                TaskReference::Unsupported => {
                    debug!("ignoring task '{}': unsupported entry shape", name);
                }
            }
        }

        Ok(Config {
            args: raw.args,
            tasks,
            variables: raw.variables,
            version: raw.version,
        })
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a configuration document from a string of content, using a
/// default resolver with the default cache.
pub async fn read_content(content: &str) -> Result<Config, ConfigError> {
    Resolver::new().with_default_cache().resolve_content(content).await
}

/// Locate and resolve a configuration document, using a default resolver
/// with the default cache.
pub async fn read_file(path: Option<&Path>) -> Result<Config, ConfigError> {
    Resolver::new().with_default_cache().resolve_file(path).await
}
