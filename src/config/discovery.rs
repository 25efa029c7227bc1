//! Configuration document discovery.
//!
//! An explicit path wins when it exists on disk. Otherwise the working
//! directory is searched for the OS-specific default filename
//! (`max_<os>.yml`) and then the generic one (`max.yml`), in that order.

use crate::config::ConfigError;
use crate::env::{self, Environment};
use std::io;
use std::path::Path;
use tracing::debug;

/// Locate the configuration document and return its raw bytes.
pub fn locate(environment: &dyn Environment, path: Option<&Path>) -> Result<Vec<u8>, ConfigError> {
    if let Some(path) = path {
        if path.exists() {
            return Ok(std::fs::read(path)?);
        }

        debug!(
            "explicit path '{}' does not exist, searching default filenames",
            path.display()
        );
    }

    let current_dir = environment.current_dir()?;
    let candidates = [env::os_config_file_name(), env::CONFIG_FILE_NAME.to_string()];

    let mut last_err: Option<io::Error> = None;

    for name in &candidates {
        let candidate = current_dir.join(name);

        debug!("checking for configuration document: {}", candidate.display());

        if candidate.exists() {
            match std::fs::read(&candidate) {
                Ok(content) => return Ok(content),
                Err(err) => last_err = Some(err),
            }
        }
    }

    let err = last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "no configuration document found, tried: {}",
                candidates.join(", ")
            ),
        )
    });

    Err(ConfigError::Io(err))
}
