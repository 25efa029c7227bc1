//! Resolution of task entries expressed as references.
//!
//! A task entry may point at another document instead of carrying an
//! inline mapping: a local file path or an HTTP(S) URL. The submodules
//! here turn those references into [`Task`](crate::task::Task) values.

pub mod fetcher;
pub mod local;
pub mod remote;

#[cfg(test)]
mod tests;

pub use fetcher::{FetchError, Fetcher, HttpFetcher, MockFetcher};
pub use local::LocalInclude;

use thiserror::Error;

/// Errors from resolving a single include reference.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("can't fetch remote include: {0}")]
    Fetch(#[from] FetchError),

    #[error("include content is not a valid task document: {0}")]
    Unmarshal(#[from] serde_yaml::Error),
}
