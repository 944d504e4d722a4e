//! Scaffolding errors

use std::path::PathBuf;

use thiserror::Error;

use crate::template::POSSIBLE_TYPES;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Possible types: {}", POSSIBLE_TYPES.join(", "))]
    UnknownType(String),

    /// The project directory is already present; nothing is written into it
    #[error("Project already exists")]
    ProjectExists(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render package.json: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
