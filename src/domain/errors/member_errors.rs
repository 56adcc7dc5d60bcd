use crate::domain::{errors::ValidationError, value_objects::MemberId};

/// Errors that can occur during family member operations
#[derive(Debug, Clone, PartialEq)]
pub enum MemberError {
    /// No member with this id exists in the family
    NotFound { id: MemberId },

    /// Input failed validation
    Validation(ValidationError),

    /// Generic failure from the store or a collaborator
    Internal { message: String },
}

impl std::fmt::Display for MemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberError::NotFound { .. } => write!(f, "Member not found"),
            MemberError::Validation(e) => write!(f, "{}", e),
            MemberError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for MemberError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MemberError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for MemberError {
    fn from(error: ValidationError) -> Self {
        MemberError::Validation(error)
    }
}

/// Result type for member operations
pub type MemberResult<T> = Result<T, MemberError>;
