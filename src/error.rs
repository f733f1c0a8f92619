//! Error types for the jog wheel core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WheelError {
    /// Scale reference was zero, negative or not finite
    #[error("invalid wheel scale: {0}")]
    InvalidScale(f32),
    #[error("visual mode {0} is outside 1..=6")]
    InvalidMode(u8),
    #[error("track index {index} out of range (deck has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },
    #[error("setting `{name}` = {value} is out of range")]
    InvalidSetting { name: &'static str, value: f32 },
    #[error("track library has no tracks")]
    EmptyLibrary,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WheelError>;
