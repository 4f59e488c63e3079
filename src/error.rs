use thiserror::Error;

/// Errors surfaced by the overlay engine and its collaborators.
///
/// Out-of-bounds pixel reads and empty samples never show up here; the
/// sampler recovers from both locally.
#[derive(Debug, Error)]
pub enum HexError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("font error: {0}")]
    Font(String),

    #[error("logging setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, HexError>;
