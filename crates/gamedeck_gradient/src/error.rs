//! Gradient error types

use thiserror::Error;

/// Errors produced while interpreting a gradient directive or loading config
#[derive(Error, Debug)]
pub enum GradientError {
    /// The directive does not match the `linear-gradient(...)` grammar
    #[error("invalid gradient string: {0:?}")]
    MalformedDirective(String),

    /// An angled directive needs a viewport with a non-zero diagonal
    #[error("cannot derive gradient axis for a {width}x{height} viewport")]
    DegenerateViewport { width: f64, height: f64 },

    /// Failed to read a config file
    #[error("IO error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config file is not valid TOML for [`GradientConfig`](crate::GradientConfig)
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for gradient operations
pub type Result<T> = std::result::Result<T, GradientError>;
