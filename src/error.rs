use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Per-file read problems never end up here; they are
/// recorded in the bundle itself.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}
