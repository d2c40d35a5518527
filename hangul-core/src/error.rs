//! Error types for keyboard tables, layout loading and the registry

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Out of memory while growing table")]
    OutOfMemory,

    #[error("Keyboard not found: {0}")]
    NotFound(String),

    #[error("Malformed layout file {}: {message}", path.display())]
    MalformedInput { path: PathBuf, message: String },

    #[error("Cannot read layout file {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
