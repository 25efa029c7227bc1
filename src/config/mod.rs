//! Configuration document parsing, task dispatch, and discovery.
//!
//! A configuration document declares tasks inline, as local file paths,
//! or as remote URLs. The [`Resolver`] parses the document, classifies
//! each task entry by shape, and routes references through the include
//! resolvers, producing a fully resolved [`Config`] or a single coarse
//! error, never a partial task map.

pub mod discovery;
pub mod resolver;
pub mod types;


pub use resolver::{ResolveOptions, Resolver, read_content, read_file};
pub use types::{Config, TaskReference};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document, an include fragment, or an inline mapping is not
    /// structurally valid. Remote fetch failures collapse into this
    /// variant too; the distinction is kept in the logs.
    #[error("can't unmarshal config value")]
    Unmarshal,

    /// A local include could not be read (strict mode only).
    #[error("local include '{path}' could not be read: {source}")]
    LocalInclude { path: PathBuf, source: io::Error },

    /// The configuration document could not be located or read.
    #[error(transparent)]
    Io(#[from] io::Error),
}
