use crate::domain::errors::ValidationError;

const MAX_FAMILY_NAME_LEN: usize = 128;

/// A validated family name, fixed for the lifetime of a store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilyName(String);

impl FamilyName {
    /// Create a new FamilyName with validation
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyFamilyName);
        }

        if trimmed.chars().count() > MAX_FAMILY_NAME_LEN {
            return Err(ValidationError::FamilyNameTooLong {
                actual: trimmed.chars().count(),
                max: MAX_FAMILY_NAME_LEN,
            });
        }

        if let Some(c) = trimmed.chars().find(|c| c.is_control()) {
            return Err(ValidationError::InvalidFamilyNameCharacter(c));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FamilyName {
    fn default() -> Self {
        Self("Jackson".to_string())
    }
}

impl std::fmt::Display for FamilyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_family_name() {
        assert_eq!(FamilyName::new("Jackson").unwrap().as_str(), "Jackson");
        assert_eq!(FamilyName::new("  Doe  ").unwrap().as_str(), "Doe");
        assert_eq!(FamilyName::default().as_str(), "Jackson");
    }

    #[test]
    fn test_invalid_family_name() {
        assert_eq!(FamilyName::new(""), Err(ValidationError::EmptyFamilyName));
        assert_eq!(FamilyName::new("   "), Err(ValidationError::EmptyFamilyName));
        assert!(FamilyName::new("x".repeat(129)).is_err());
        assert_eq!(
            FamilyName::new("Smi\nth"),
            Err(ValidationError::InvalidFamilyNameCharacter('\n'))
        );
    }
}
