use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("escape threshold must be positive and finite, got {0}")]
    InvalidEscapeThreshold(f64),
}
