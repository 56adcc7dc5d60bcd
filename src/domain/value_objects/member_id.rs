use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Identifier assigned to a member by its family store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(u64);

impl MemberId {
    /// The first identifier handed out by an empty store
    pub const FIRST: MemberId = MemberId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse an identifier from its decimal text form
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        value
            .trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidMemberId(value.to_string()))
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The identifier following this one, `None` once the id space is spent
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<u64> for MemberId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_member_id() {
        assert_eq!(MemberId::parse("1").unwrap(), MemberId::new(1));
        assert_eq!(MemberId::parse(" 42 ").unwrap(), MemberId::new(42));
        assert!(MemberId::parse("").is_err());
        assert!(MemberId::parse("abc").is_err());
        assert!(MemberId::parse("-3").is_err());
    }

    #[test]
    fn test_next_member_id() {
        assert_eq!(MemberId::FIRST.next(), Some(MemberId::new(2)));
        assert_eq!(MemberId::new(u64::MAX).next(), None);
        assert_eq!(MemberId::FIRST.to_string(), "1");
    }
}
