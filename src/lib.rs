//! # Max
//!
//! Max resolves declarative task-runner configuration documents into an
//! in-memory map of runnable task definitions. A document names tasks
//! either inline, as a path to another local document, or as an HTTP(S)
//! URL pointing to a remote document; all three forms resolve to the same
//! in-memory shape.
//!
//! ## Architecture Overview
//!
//! The system consists of a handful of modules, leaves first:
//!
//! - **[`cache`]**: directory-backed content store used to avoid
//!   refetching identical remote includes
//! - **[`include`]**: the remote and local include resolvers plus the
//!   transport seam they fetch through
//! - **[`config`]**: the document parser/dispatcher, document discovery,
//!   and the resolved [`Config`] shape
//! - **[`env`]**: filenames, cache placement, and the [`Environment`]
//!   capability answering process-wide location queries
//! - **[`task`]**: the opaque [`Task`] record resolution produces
//!
//! ## Resolution Flow
//!
//! Discovery locates the document bytes, the parser classifies each task
//! entry by shape (inline mapping, local path, remote URL) and routes
//! references to the matching include resolver, and the remote path
//! consults the content cache before performing any network I/O. A
//! document either resolves completely or not at all; no partial task map
//! is returned on error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use max::Resolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), max::ConfigError> {
//!     let resolver = Resolver::new().with_default_cache();
//!     let config = resolver.resolve_file(None).await?;
//!
//!     for name in config.tasks.keys() {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```

/// Directory-backed content cache for remote includes.
pub mod cache;

/// Document parsing, task dispatch, and configuration discovery.
pub mod config;

/// Filenames, cache placement, and the process environment capability.
pub mod env;

/// Resolution of task entries expressed as local or remote references.
pub mod include;

/// The task record produced by document resolution.
pub mod task;

// Re-export the resolution surface
pub use config::{Config, ConfigError, ResolveOptions, Resolver, TaskReference, read_content, read_file};

// Re-export the cache types
pub use cache::{CacheError, ContentCache};

// Re-export the include seam
pub use include::{FetchError, Fetcher, HttpFetcher, IncludeError, MockFetcher};

// Re-export the environment capability
pub use env::{Environment, SystemEnvironment};

// Re-export the task record
pub use task::Task;
