/// Convenience result type used across facegif.
pub type FaceResult<T> = Result<T, FaceError>;

/// Top-level error taxonomy used by the mapper, renderer and animator.
#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    /// The seed list (or descriptor list) was empty after parsing.
    #[error("invalid seed list: {0}")]
    InvalidSeedList(String),

    /// The frame duration was missing a valid positive integer value.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// The component catalog failed to parse or validate.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Compositing, rasterizing or encoding a frame failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FaceError {
    /// Build a [`FaceError::InvalidSeedList`] value.
    pub fn invalid_seed_list(msg: impl Into<String>) -> Self {
        Self::InvalidSeedList(msg.into())
    }

    /// Build a [`FaceError::InvalidDuration`] value.
    pub fn invalid_duration(msg: impl Into<String>) -> Self {
        Self::InvalidDuration(msg.into())
    }

    /// Build a [`FaceError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`FaceError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// `true` for errors caused by the caller's input rather than by rendering.
    ///
    /// Front-ends map these to request rejections (HTTP 400) and everything else to an internal
    /// failure for that request only.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::InvalidSeedList(_) | Self::InvalidDuration(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
