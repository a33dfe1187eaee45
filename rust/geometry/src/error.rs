use thiserror::Error;

/// Result type for geometry reconstruction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rebuilding geometry from payload data
#[derive(Error, Debug)]
pub enum Error {
    /// Input present but structurally wrong for the claimed kind.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Syntactically valid but unsupported sub-kind tag.
    #[error("deserialization of {0:?} is not implemented")]
    NotImplemented(String),

    /// Failure surfaced by the wire schema layer.
    #[error("payload error: {0}")]
    Core(#[from] portal_core::Error),
}
