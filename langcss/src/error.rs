//! All error types for the langcss crate.
//!
//! Only [`Error::DirectoryListing`] is fatal to a batch run. Read errors are
//! degraded to an empty record sequence and write errors are recorded per
//! language, see [`crate::pipeline`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("cannot list source directory `{}`: {source}", .path.display())]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write stylesheet `{}`: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a directory listing error for `path`.
    pub fn directory_listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::DirectoryListing {
            path: path.into(),
            source,
        }
    }

    /// Creates an output write error for `path`.
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
