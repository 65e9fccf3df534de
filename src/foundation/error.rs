/// Convenience result type used across radar-anim.
pub type RadarResult<T> = Result<T, RadarError>;

/// Top-level error taxonomy used by the rendering pipelines.
#[derive(thiserror::Error, Debug)]
pub enum RadarError {
    /// Invalid user-provided configuration (frame counts, sizes, colours).
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image could not be read or decoded.
    #[error("could not load image: {0}")]
    Load(String),

    /// Errors while rotating, compositing or drawing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames, GIF or SVG output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing style/config files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RadarError {
    /// Build a [`RadarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RadarError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`RadarError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RadarError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`RadarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
