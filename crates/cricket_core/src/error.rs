use thiserror::Error;

/// Failures raised by [`FixedRoster`](crate::roster::FixedRoster).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Roster is full: size {size}, capacity {capacity}")]
    CapacityExceeded { size: usize, capacity: usize },

    #[error("Index: {index}, Size: {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Opt-in record checks. Constructors never produce these; callers run
/// [`RecordValidator`](crate::models::RecordValidator) when they want them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Identity cannot be empty")]
    EmptyIdentity,

    #[error("Field {field} is not finite: {value}")]
    NonFiniteValue { field: &'static str, value: f32 },

    #[error("Field {field} cannot be negative: {value}")]
    NegativeValue { field: &'static str, value: f32 },

    #[error("Derived field {field} is stale: stored {stored}, expected {expected}")]
    StaleDerivedValue { field: &'static str, stored: f32, expected: f32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyIdentity => "identity",
            ValidationError::NonFiniteValue { field, .. }
            | ValidationError::NegativeValue { field, .. }
            | ValidationError::StaleDerivedValue { field, .. } => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
