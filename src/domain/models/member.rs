use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MemberId;

/// A single family member record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

/// Request to add a member; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

impl NewMember {
    pub fn new(first_name: impl Into<String>, age: u32, lucky_numbers: Vec<i64>) -> Self {
        Self {
            first_name: first_name.into(),
            age,
            lucky_numbers,
        }
    }

    /// Attach an identifier, producing the stored record
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            age: self.age,
            lucky_numbers: self.lucky_numbers,
        }
    }
}

impl Member {
    /// The member's data without its identifier
    pub fn data(&self) -> NewMember {
        NewMember {
            first_name: self.first_name.clone(),
            age: self.age,
            lucky_numbers: self.lucky_numbers.clone(),
        }
    }
}
