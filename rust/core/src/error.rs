use thiserror::Error;

/// Result type for payload decoding
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding payload envelopes and wire values
#[derive(Error, Debug)]
pub enum Error {
    /// The input buffer was not valid JSON at all.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A type tag was present but is not one of the known geometry kinds.
    /// Distinct from an absent tag, which is not an error.
    #[error("unrecognized geometry type tag: {0:?}")]
    MalformedTag(String),

    /// Input was present but structurally wrong for the claimed shape.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
