use std::path::PathBuf;

/// Failures surfaced by the extraction and plotting stages.
///
/// Lines that do not parse as a complex literal are not errors; the reader
/// drops them silently.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Invalid time window: {0} seconds")]
    InvalidWindow(f64),

    #[error("Failed to render chart {}: {reason}", path.display())]
    Render { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
