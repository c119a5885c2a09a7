//! Error types for board configuration.

use thiserror::Error;

/// Reasons a [`GameConfig`](crate::GameConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Canvas must have a positive, finite width.
    #[error("Canvas width must be positive, got {0}")]
    InvalidCanvasWidth(f32),

    /// Actor collision radius must be positive.
    #[error("Actor radius must be positive, got {0}")]
    InvalidActorRadius(f32),

    /// A speed value is NaN or infinite.
    #[error("Speed '{name}' must be finite, got {value}")]
    NonFiniteSpeed { name: &'static str, value: f32 },

    /// A target zone does not fit on the canvas.
    #[error("Target zone {index} spans [{min}, {max}] outside canvas width {width}")]
    TargetZoneOutOfBounds {
        index: usize,
        min: f32,
        max: f32,
        width: f32,
    },

    /// A lane descriptor has no entities.
    #[error("Lane '{0}' has no columns")]
    EmptyLane(&'static str),
}
