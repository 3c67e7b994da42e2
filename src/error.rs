use thiserror::Error;

/// Failures while turning a raw package into a workout record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {code:?}")]
    UnknownWorkoutType { code: String },

    #[error("workout {code} expects {expected} parameters, got {actual}")]
    ParameterCountMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f64),
}

/// Failures while reading packages from an input file
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed csv input: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported input file {0:?}, expected .json or .csv")]
    UnsupportedInput(String),

    #[error("row {row}: {value:?} is not a number")]
    InvalidNumber { row: usize, value: String },

    #[error("row {0} is empty")]
    EmptyRow(usize),

    #[error(transparent)]
    Workout(#[from] WorkoutError),
}
