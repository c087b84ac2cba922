//! Error type shared by the builder and the document pipeline.

use std::path::PathBuf;

/// Every failure the library can surface. Nothing is recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A setter received a value outside its domain.
    #[error("{0}")]
    InvalidArgument(String),

    /// `build()` was called before the car was complete.
    #[error("{0}")]
    InvalidState(&'static str),

    /// The requested document format is not one of pdf, word or html.
    /// Carries the format exactly as the caller wrote it.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
