/// Convenience result type used across watchshot.
pub type WatchshotResult<T> = Result<T, WatchshotError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum WatchshotError {
    /// Invalid user-provided dimensions, times, or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Glyph set could not be assembled (missing digit, mismatched sizes).
    #[error("glyph error: {0}")]
    Glyph(String),

    /// A crop or resample was asked to work on a zero-sized region.
    #[error("resample error: {0}")]
    Resample(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WatchshotError {
    /// Build a [`WatchshotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WatchshotError::Glyph`] value.
    pub fn glyph(msg: impl Into<String>) -> Self {
        Self::Glyph(msg.into())
    }

    /// Build a [`WatchshotError::Resample`] value.
    pub fn resample(msg: impl Into<String>) -> Self {
        Self::Resample(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
