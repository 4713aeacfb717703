/// Convenience result type used across canvasplot.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CanvasError {
    /// A serialized grid token is not a finite number.
    #[error("parse error: token {index} ({token:?}) is not a finite number")]
    Parse {
        /// Zero-based token position.
        index: usize,
        /// Offending token text (possibly truncated).
        token: String,
    },

    /// The number of grid values does not match the fixed grid size.
    #[error("shape error: expected {expected} values, got {actual}")]
    Shape {
        /// Required value count.
        expected: usize,
        /// Value count actually supplied.
        actual: usize,
    },

    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed payload identifier.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// Requested payload does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request body exceeds the configured size limit.
    #[error("too large: {0}")]
    TooLarge(String),

    /// Payload storage failed in a way the caller cannot fix.
    #[error("storage error: {0}")]
    Storage(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

const MAX_TOKEN_ECHO: usize = 32;

impl CanvasError {
    /// Build a [`CanvasError::Parse`] value, truncating long tokens.
    pub fn parse(index: usize, token: &str) -> Self {
        let token = if token.chars().count() > MAX_TOKEN_ECHO {
            let mut t: String = token.chars().take(MAX_TOKEN_ECHO).collect();
            t.push('…');
            t
        } else {
            token.to_string()
        };
        Self::Parse { index, token }
    }

    /// Build a [`CanvasError::Shape`] value.
    pub fn shape(expected: usize, actual: usize) -> Self {
        Self::Shape { expected, actual }
    }

    /// Build a [`CanvasError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CanvasError::InvalidId`] value.
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Build a [`CanvasError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`CanvasError::TooLarge`] value.
    pub fn too_large(msg: impl Into<String>) -> Self {
        Self::TooLarge(msg.into())
    }

    /// Build a [`CanvasError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::Shape { .. }
                | Self::Validation(_)
                | Self::InvalidId(_)
                | Self::TooLarge(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
