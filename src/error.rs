use thiserror::Error;

/// Errors raised while gathering run parameters. All of them are fatal and
/// are reported before any simulation runs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid {field}: '{value}' is not a number")]
    Malformed { field: &'static str, value: String },
    #[error("{field}: expected {expected} value(s), got {got}")]
    WrongArity { field: &'static str, expected: usize, got: usize },
    #[error("input ended while reading {field}")]
    UnexpectedEof { field: &'static str },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("mass must be a positive number, got {0}")]
    InvalidMass(f64),
    #[error("gravity must be negative (pointing down), got {0}")]
    InvalidGravity(f64),
    #[error("thrust given both as acceleration and as force/mass")]
    ConflictingThrust,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scenario file error: {0}")]
    Scenario(#[from] serde_yaml::Error),
}

pub type InputResult<T> = Result<T, InputError>;
