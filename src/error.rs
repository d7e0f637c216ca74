// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::model::ProfileId;

#[derive(Debug, Error)]
pub enum SocnetError {
    #[error("profile {0} does not exist")]
    NotFound(ProfileId),

    #[error("profile {0} is not a root element; attaching it would damage its current tree")]
    NotARoot(ProfileId),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed profile data: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, SocnetError>;

// Allow `?` on std::io::Error by converting to SocnetError::Io with unknown path.
impl From<std::io::Error> for SocnetError {
    fn from(source: std::io::Error) -> Self {
        SocnetError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
