use thiserror::Error;

/// Axis of a scale factor, used in error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors that can occur while configuring the coordinate scaler
#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    /// A scale factor was zero, negative, NaN or infinite
    #[error("invalid {axis} scale factor {value}: must be finite and greater than zero")]
    InvalidFactor { axis: Axis, value: f32 },
}
