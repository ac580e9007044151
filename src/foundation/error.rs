/// Convenience result type used across blendfunc.
pub type BlendResult<T> = Result<T, BlendError>;

/// Top-level error taxonomy used by the compositor and its shell.
#[derive(thiserror::Error, Debug)]
pub enum BlendError {
    /// Input rasters violate the compositor contract (geometry or bit depth).
    #[error("precondition violation: {0}")]
    Precondition(String),

    /// Invalid user-provided data outside the kernel.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlendError {
    /// Build a [`BlendError::Precondition`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build a [`BlendError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlendError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for contract breaches detected before any pixel work.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
