use std::path::PathBuf;

/// Result alias used across the crate.
pub type SlideResult<T> = Result<T, SlideError>;

/// Errors produced while loading resources, composing slides, and writing them out.
#[derive(thiserror::Error, Debug)]
pub enum SlideError {
    /// A required resource (font file) is missing, unreadable, or unusable. Fatal for a run.
    #[error("resource load error: {0}")]
    ResourceLoad(String),

    /// Optional content (a transcript) could not be read. Callers degrade instead of failing.
    #[error("content read error: {0}")]
    ContentRead(String),

    /// A rendered slide could not be persisted.
    #[error("write error for '{}': {message}", path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// Deck or argument data is inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failed (surface limits, bad layer sizes).
    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideError {
    pub fn resource_load(msg: impl Into<String>) -> Self {
        Self::ResourceLoad(msg.into())
    }

    pub fn content_read(msg: impl Into<String>) -> Self {
        Self::ContentRead(msg.into())
    }

    pub fn write(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Write {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Whether this error must abort the whole run rather than a single slide.
    pub fn is_fatal_for_run(&self) -> bool {
        matches!(self, Self::ResourceLoad(_) | Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
