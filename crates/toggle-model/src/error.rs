use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("row count {found} is outside the allowed range {min}..={max}")]
    RowCountOutOfBounds {
        found: usize,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
