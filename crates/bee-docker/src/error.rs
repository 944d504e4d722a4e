//! Generation errors

use std::path::PathBuf;

use beekit_crypto::KeystoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Count outside `1..=MAX_NODES`
    #[error("invalid node count: {0}")]
    InvalidCount(usize),

    /// A node directory is already present; nothing is merged into it
    #[error("Directory {0} already exists")]
    DirectoryExists(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keystore error: {0}")]
    Keystore(#[from] KeystoreError),

    #[error("key generation task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
