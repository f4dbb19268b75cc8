use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("malformed digest '{0}': expected 40 hex characters")]
    MalformedDigest(String),

    #[error("malformed object: {0}")]
    MalformedObject(String),

    #[error("truncated tree payload")]
    TruncatedTree,

    #[error("expected a {expected} object, found '{found}'")]
    WrongObjectType {
        expected: &'static str,
        found: String,
    },

    #[error("object {0} not found in store")]
    ObjectNotFound(String),

    #[error("referenced object {0} does not exist in store")]
    DanglingReference(String),

    #[error("object store I/O failure: {0}")]
    StoreIo(#[from] io::Error),

    #[error("clone failed: {0}")]
    Clone(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, GitError>;
