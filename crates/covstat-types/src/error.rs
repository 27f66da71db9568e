use std::fmt;

/// Result type for covstat-types operations
pub type Result<T> = std::result::Result<T, DecodingError>;

/// A payload did not have the shape the decoder requires
#[derive(Debug, Clone, PartialEq)]
pub enum DecodingError {
    /// Expected a JSON object
    NotAnObject,

    /// Expected a JSON array
    NotAnArray,

    /// Required field absent or null
    Missing { field: String },

    /// Required field present with the wrong runtime type
    WrongType {
        field: String,
        expected: &'static str,
    },

    /// Required string field present but empty
    Empty { field: String },

    /// Required count is negative or fractional
    NotACount { field: String, value: f64 },
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodingError::NotAnObject => write!(f, "expected a JSON object"),
            DecodingError::NotAnArray => write!(f, "expected a JSON array"),
            DecodingError::Missing { field } => write!(f, "missing required field '{}'", field),
            DecodingError::WrongType { field, expected } => {
                write!(f, "field '{}' is not a {}", field, expected)
            }
            DecodingError::Empty { field } => write!(f, "field '{}' is empty", field),
            DecodingError::NotACount { field, value } => {
                write!(f, "field '{}' is not a non-negative integer: {}", field, value)
            }
        }
    }
}

impl std::error::Error for DecodingError {}
