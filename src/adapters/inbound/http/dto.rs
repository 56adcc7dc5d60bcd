use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::domain::{
    errors::{MemberError, ValidationError},
    models::{FamilySnapshot, Member, NewMember},
};

/// Fields every POST /member body must carry
pub const REQUIRED_MEMBER_FIELDS: [&str; 3] = ["first_name", "age", "lucky_numbers"];

/// DTO for a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub id: u64,
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

/// DTO for creating a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberDto {
    pub first_name: String,
    pub age: u32,
    pub lucky_numbers: Vec<i64>,
}

/// DTO for the whole family
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyDto {
    pub family_name: String,
    pub members: Vec<MemberDto>,
}

/// DTO for delete responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponseDto {
    pub done: bool,
}

/// DTO for error responses
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponseDto {
    pub error: String,
    pub kind: String,
    pub details: Option<HashMap<String, Value>>,
    pub timestamp: DateTime<Utc>,
}

/// DTO for success responses
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponseDto {
    pub message: String,
    pub data: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

// Conversion implementations

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        MemberDto {
            id: member.id.value(),
            first_name: member.first_name,
            age: member.age,
            lucky_numbers: member.lucky_numbers,
        }
    }
}

impl From<FamilySnapshot> for FamilyDto {
    fn from(snapshot: FamilySnapshot) -> Self {
        FamilyDto {
            family_name: snapshot.family_name,
            members: snapshot.members.into_iter().map(MemberDto::from).collect(),
        }
    }
}

impl From<CreateMemberDto> for NewMember {
    fn from(dto: CreateMemberDto) -> Self {
        NewMember::new(dto.first_name, dto.age, dto.lucky_numbers)
    }
}

impl TryFrom<Value> for CreateMemberDto {
    type Error = ValidationError;

    /// Presence of every required field is checked before any field type.
    /// A body that is not an object carries none of them.
    fn try_from(body: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = body else {
            return Err(ValidationError::MissingFields(
                REQUIRED_MEMBER_FIELDS.iter().map(|f| f.to_string()).collect(),
            ));
        };

        let missing: Vec<String> = REQUIRED_MEMBER_FIELDS
            .iter()
            .filter(|field| !fields.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(CreateMemberDto {
            first_name: string_field(&fields, "first_name")?,
            age: age_field(&fields, "age")?,
            lucky_numbers: integer_list_field(&fields, "lucky_numbers")?,
        })
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String, ValidationError> {
    match &fields[name] {
        Value::String(s) => Ok(s.clone()),
        other => Err(invalid_field(name, other, "string")),
    }
}

fn age_field(fields: &Map<String, Value>, name: &str) -> Result<u32, ValidationError> {
    let value = &fields[name];
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| invalid_field(name, value, "non-negative integer"))
}

fn integer_list_field(fields: &Map<String, Value>, name: &str) -> Result<Vec<i64>, ValidationError> {
    let value = &fields[name];
    let items = value
        .as_array()
        .ok_or_else(|| invalid_field(name, value, "array of integers"))?;

    items
        .iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| invalid_field(name, value, "array of integers"))
        })
        .collect()
}

fn invalid_field(name: &str, value: &Value, expected: &str) -> ValidationError {
    ValidationError::InvalidField {
        field: name.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

// Error response helpers

impl From<MemberError> for StatusCode {
    fn from(error: MemberError) -> Self {
        match error {
            MemberError::NotFound { .. } => StatusCode::NOT_FOUND,
            MemberError::Validation(_) => StatusCode::BAD_REQUEST,
            MemberError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorResponseDto {
    pub fn from_member_error(error: &MemberError) -> Self {
        let mut details = HashMap::new();

        match error {
            MemberError::NotFound { id } => {
                details.insert("id".to_string(), Value::Number(id.value().into()));
            }
            MemberError::Validation(ValidationError::MissingFields(fields)) => {
                details.insert(
                    "missing_fields".to_string(),
                    Value::Array(fields.iter().cloned().map(Value::String).collect()),
                );
            }
            MemberError::Validation(ValidationError::InvalidField {
                field, expected, ..
            }) => {
                details.insert("field".to_string(), Value::String(field.clone()));
                details.insert("expected".to_string(), Value::String(expected.clone()));
            }
            _ => {}
        }

        let kind = match error {
            MemberError::NotFound { .. } => "NotFound",
            MemberError::Validation(_) => "BadRequest",
            MemberError::Internal { .. } => "InternalServerError",
        };

        ErrorResponseDto {
            error: error.to_string(),
            kind: kind.to_string(),
            details: if details.is_empty() {
                None
            } else {
                Some(details)
            },
            timestamp: Utc::now(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::plain("NotFound", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::plain("InternalServerError", message)
    }

    fn plain(kind: &str, message: &str) -> Self {
        ErrorResponseDto {
            error: message.to_string(),
            kind: kind.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

impl SuccessResponseDto {
    pub fn with_data(message: &str, data: Value) -> Self {
        SuccessResponseDto {
            message: message.to_string(),
            data: Some(data),
            timestamp: Utc::now(),
        }
    }
}
