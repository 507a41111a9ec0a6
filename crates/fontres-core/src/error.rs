//! Error types for fontres

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FontError>;

/// Main error type for fontres
///
/// Resolution itself never produces one of these: heights are clamped,
/// descriptions parse best-effort, and a resolver that yields no typeface
/// is treated as a broken invariant rather than an error.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidSetting { var: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("System font not found: {0}")]
    SystemFontNotFound(String),
}
