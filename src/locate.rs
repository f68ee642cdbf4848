use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("{name} was not found on the executable search path")]
    NotFound {
        name: String,
        #[source]
        source: which::Error,
    },
}

/// Resolve a bare executable name to a full path via the OS search path.
/// Resolution happens on every run; nothing is cached.
pub fn locate(name: &str) -> Result<PathBuf, LocateError> {
    which::which(name).map_err(|source| LocateError::NotFound {
        name: name.to_owned(),
        source,
    })
}
