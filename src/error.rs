use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowseError {
    #[error("cannot read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("home directory is not available")]
    UnresolvedPath,
    #[error("terminal driver failure: {0}")]
    DriverFatal(#[source] io::Error),
}

impl BrowseError {
    pub fn read_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DriverFatal(_))
    }
}
