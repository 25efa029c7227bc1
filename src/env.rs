//! Environment constants and path utilities for the configuration resolver.
//!
//! This module centralizes the filenames and directories the resolver
//! probes, and abstracts process-wide location queries behind the
//! [`Environment`] trait so the resolution engine can be exercised without
//! touching the real home or working directory.

use std::io;
use std::path::{Path, PathBuf};

/// Cache directory name (hidden directory like .git, .vscode)
pub const MAX_DIR_NAME: &str = ".max";

/// Generic configuration document filename
pub const CONFIG_FILE_NAME: &str = "max.yml";

/// OS-specific configuration document filename, e.g. `max_linux.yml`
pub fn os_config_file_name() -> String {
    format!("max_{}.yml", std::env::consts::OS)
}

/// Build the cache root path from a home directory
pub fn cache_dir_path(home_dir: &Path) -> PathBuf {
    home_dir.join(MAX_DIR_NAME)
}

/// Process-wide location queries used by document discovery and cache
/// placement.
pub trait Environment: Send + Sync {
    /// Resolve the user's home directory, if one can be determined
    fn home_dir(&self) -> Option<PathBuf>;

    /// Resolve the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// [`Environment`] backed by the real process environment.
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var("HOME")
            .ok()
            .or_else(|| std::env::var("USERPROFILE").ok())
            .map(PathBuf::from)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}
