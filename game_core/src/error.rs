use thiserror::Error;

/// Errors raised while building or resizing a game
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// Surface dimensions must be finite and strictly positive
    #[error("Invalid surface size {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },

    /// A configuration value is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),
}
