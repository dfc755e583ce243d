// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractionError>;

/// The only failures the pipeline knows about are I/O ones. Malformed
/// reports never error; they just extract to less.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write results to stdout")]
    Stdout(#[source] io::Error),
}

impl ExtractionError {
    /// The underlying I/O failure. Kept out of `Display`; reports walk the chain.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } | Self::Stdout(source) => source,
        }
    }

    /// The file this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path),
            Self::Stdout(_) => None,
        }
    }
}
