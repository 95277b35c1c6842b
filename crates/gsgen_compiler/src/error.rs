//! Error types for file-level generation.

use std::path::PathBuf;
use thiserror::Error;

/// Failure outside the per-line diagnostics: the input could not be read.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Declaration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
