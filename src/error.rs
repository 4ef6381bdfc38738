//! Error types for the secret-rendering pipeline.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid delimiter pair: {source}")]
    InvalidDelimiters {
        #[source]
        source: minijinja::Error,
    },

    #[error("template syntax error in {path:?}: {source}")]
    Syntax {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("missing secret key in {path:?}: {source}")]
    MissingKey {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render {path:?}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("no matching secret key among {candidates:?}")]
    KeyNotFound { candidates: Vec<String> },
}

impl RenderError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Attach the failing path to a walk error, falling back to the walk root
    /// when the error carries none.
    pub(crate) fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        Self::Filesystem {
            path,
            source: err.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
