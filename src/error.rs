//! Error types for slice loading and navigation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SliceError {
    /// A file could not be read from disk.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but could not be turned into an image.
    #[error("failed to decode {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// The file name carries no usable numeric index.
    #[error("no numeric slice index in file name {name:?}")]
    SortKey { name: String },

    #[error("unknown axis {0:?}, expected one of X, Y, Z")]
    UnknownAxis(String),
}

pub type Result<T> = std::result::Result<T, SliceError>;
