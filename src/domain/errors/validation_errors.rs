/// Validation errors for domain value objects and member input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // FamilyName validation errors
    EmptyFamilyName,
    FamilyNameTooLong {
        actual: usize,
        max: usize,
    },
    InvalidFamilyNameCharacter(char),

    // MemberId validation errors
    InvalidMemberId(String),

    // Member input validation errors
    MalformedBody(String),
    MissingFields(Vec<String>),
    InvalidField {
        field: String,
        value: String,
        expected: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // FamilyName errors
            ValidationError::EmptyFamilyName => write!(f, "Family name cannot be empty"),
            ValidationError::FamilyNameTooLong { actual, max } => {
                write!(
                    f,
                    "Family name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::InvalidFamilyNameCharacter(c) => {
                write!(f, "Invalid character in family name: {:?}", c)
            }

            // MemberId errors
            ValidationError::InvalidMemberId(value) => {
                write!(f, "Invalid member id: '{}'", value)
            }

            // Member input errors
            ValidationError::MalformedBody(reason) => {
                write!(f, "Request body must be a JSON object: {}", reason)
            }
            ValidationError::MissingFields(_) => write!(f, "Missing required fields"),
            ValidationError::InvalidField {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value for field '{}': {} (expected: {})",
                    field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
