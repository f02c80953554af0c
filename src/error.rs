//! Error types
//!
//! Everything here is fatal at startup or a rejected settings value.
//! Nothing is raised per frame.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasMissing(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2D drawing context unavailable")]
    ContextUnavailable,
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
}
