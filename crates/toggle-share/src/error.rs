use thiserror::Error;

/// Why a share token could not be restored.
///
/// Every variant means the same thing to callers: the share is invalid and
/// the default state should be used instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token payload is not an object")]
    NotAnObject,
    #[error("unsupported share format version: {0}")]
    UnsupportedVersion(String),
    #[error("token payload rows are not a list")]
    RowsNotAList,
    #[error("row {index} of the token payload is null")]
    InvalidRow { index: usize },
    #[error("token holds {found} rows, fewer than the minimum of {min}")]
    TooFewRows { found: usize, min: usize },
}
