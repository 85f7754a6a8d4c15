//! Error types for rope construction and settings I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RopeError {
    #[error("rope needs at least 2 nodes, got {count}")]
    TooFewNodes { count: usize },

    #[error("rest length must be positive and finite, got {0}")]
    InvalidRestLength(f32),

    #[error("gravity must be finite")]
    NonFiniteGravity,

    #[error("initial head position must be finite")]
    NonFiniteHead,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RopeError>;
