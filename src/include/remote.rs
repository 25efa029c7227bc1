//! Remote include resolution.
//!
//! The content cache is consulted before any network I/O, so a reference
//! already fetched under the same URL never touches the network again.

use crate::cache::ContentCache;
use crate::include::IncludeError;
use crate::include::fetcher::Fetcher;
use crate::task::Task;
use tracing::{debug, warn};

/// Resolve a remote task reference into a [`Task`].
pub async fn resolve(
    url: &str,
    fetcher: &dyn Fetcher,
    cache: Option<&ContentCache>,
) -> Result<Task, IncludeError> {
    let content = match cache {
        Some(cache) => match cache.get(url).await {
            Some(content) => {
                debug!("using cached content for remote include '{}'", url);
                content
            }
            None => fetch_and_store(url, fetcher, Some(cache)).await?,
        },
        None => fetch_and_store(url, fetcher, None).await?,
    };

    let task = serde_yaml::from_slice(&content)?;

    Ok(task)
}

async fn fetch_and_store(
    url: &str,
    fetcher: &dyn Fetcher,
    cache: Option<&ContentCache>,
) -> Result<Vec<u8>, IncludeError> {
    let content = fetcher.fetch(url).await?;

    if let Some(cache) = cache {
        // Best-effort write-back; the fetched content is already in hand.
        if let Err(err) = cache.put(url, &content).await {
            warn!("can't cache remote include '{}': {}", url, err);
        }
    }

    Ok(content)
}
