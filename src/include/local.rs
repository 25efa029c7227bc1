//! Local include resolution.

use crate::include::IncludeError;
use crate::task::Task;
use std::io;
use std::path::Path;
use tracing::debug;

/// Outcome of resolving a local task reference.
#[derive(Debug)]
pub enum LocalInclude {
    /// The file was read and parsed into a task.
    Resolved(Task),

    /// The file could not be read. The dispatcher decides whether this
    /// skips the entry or fails the whole document.
    Unreadable(io::Error),
}

/// Resolve a local task reference.
///
/// An unreadable file is reported as [`LocalInclude::Unreadable`] rather
/// than an error; a readable file that is not a valid task fragment
/// always fails with [`IncludeError::Unmarshal`].
pub fn resolve(path: &Path) -> Result<LocalInclude, IncludeError> {
    match std::fs::read(path) {
        Ok(content) => {
            debug!("parsing local include: {}", path.display());

            let task = serde_yaml::from_slice(&content)?;
            Ok(LocalInclude::Resolved(task))
        }
        Err(err) => Ok(LocalInclude::Unreadable(err)),
    }
}
