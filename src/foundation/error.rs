/// Result alias used across the crate.
pub type ScrollSeqResult<T> = Result<T, ScrollSeqError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type.
pub enum ScrollSeqError {
    /// Invalid input such as out-of-range indices or malformed geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be read or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// A frame could not be fetched or decoded.
    #[error("resource load error: {0}")]
    ResourceLoad(String),

    /// Drawing to a surface failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped error with context from a lower layer.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollSeqError {
    /// Build a [`ScrollSeqError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollSeqError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollSeqError::ResourceLoad`].
    pub fn resource_load(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    /// Build a [`ScrollSeqError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
