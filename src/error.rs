use std::io;

/// Error type for the version code codec and its adapters.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum VersionCodeError {
    #[error("Unknown Architecture: {0}")]
    UnknownArchitecture(String),
    #[error("Range Error: {0}")]
    RangeError(String),
    #[error("Malformed Version Code: {0}")]
    MalformedVersionCode(String),
    #[error("Unresolved Digit: {0}")]
    UnresolvedDigit(String),
    #[error("Invalid Version File: {0}")]
    InvalidVersionFile(String),
    #[error("IO Error: {0}")]
    Io(String),
}

impl From<io::Error> for VersionCodeError {
    fn from(e: io::Error) -> Self {
        VersionCodeError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VersionCodeError>;
