use thiserror::Error;

/// Errors from the fallible outer surface (reading input files, emitting
/// JSON). Decoding an ID number itself never fails; malformed numbers are
/// reported through `IdNumberRecord::errors`.
#[derive(Debug, Error)]
pub enum IdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
