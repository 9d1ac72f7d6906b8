/// Result alias used throughout the crate.
pub type MorphdeckResult<T> = Result<T, MorphdeckError>;

/// Errors surfaced by slide-transition synthesis.
///
/// `Validation` reports bad caller input (malformed slides, options or a preview index out of
/// range) and is safe to show to a user. `Synthesis` means an internal invariant broke while the
/// engine was linking or scheduling shapes; it indicates a defect, not bad input.
#[derive(thiserror::Error, Debug)]
pub enum MorphdeckError {
    /// Input or option validation failure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal invariant violation during synthesis.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error propagated from a dependency.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphdeckError {
    /// Build a [`MorphdeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphdeckError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build a [`MorphdeckError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors caused by caller input rather than an engine defect.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for MorphdeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
