use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("initial speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("launch angle must be between 0 and 90 degrees, got {0}")]
    InvalidAngle(f64),

    #[error("gravitational acceleration must be positive and finite, got {0}")]
    InvalidGravity(f64),

    #[error("frame rate must be positive, got {0}")]
    InvalidFrameRate(f64),
}
