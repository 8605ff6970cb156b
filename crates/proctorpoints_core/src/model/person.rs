//! Person domain model shared by proctor and volunteer collections.
//!
//! # Responsibility
//! - Define the personnel record referenced by slot and roster assignments.
//! - Validate caller-supplied fields before a record reaches the reducer.
//!
//! # Invariants
//! - `id` is caller-supplied and unique within its collection (uniqueness is
//!   checked at the session boundary, where the collection is known).
//! - A non-empty `email` must match the address format check.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Stable identifier for personnel records.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = String;

/// Personnel record used for both proctors and volunteers.
///
/// The two collections share one shape; which collection a record lives in
/// decides whether it is offered for exam slots or event slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Caller-supplied stable ID, unique within its collection.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Optional contact address. Empty string is treated as absent.
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form skills note, only used for volunteers in practice.
    #[serde(default)]
    pub skills: Option<String>,
}

/// Validation failures for caller-supplied entity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `id` is empty after trimming.
    MissingId,
    /// `name` is empty after trimming.
    MissingName,
    /// Non-empty email does not look like an address.
    InvalidEmail(String),
    /// Container duration is outside the supported `1..=12` hour range.
    DurationOutOfRange(u32),
    /// Event requires fewer than one volunteer.
    RequiredVolunteersOutOfRange(u32),
    /// Create would duplicate an existing id in the same collection.
    DuplicateId(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingId => write!(f, "id is required"),
            Self::MissingName => write!(f, "name is required"),
            Self::InvalidEmail(email) => write!(f, "invalid email format: {email}"),
            Self::DurationOutOfRange(hours) => {
                write!(f, "duration must be between 1 and 12 hours, got {hours}")
            }
            Self::RequiredVolunteersOutOfRange(count) => {
                write!(f, "at least 1 volunteer is required, got {count}")
            }
            Self::DuplicateId(id) => write!(f, "id already exists: {id}"),
        }
    }
}

impl Error for ValidationError {}

impl Person {
    /// Creates a person with no contact details.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            skills: None,
        }
    }

    /// Checks caller-supplied fields.
    ///
    /// # Errors
    /// - `MissingId` / `MissingName` when blank after trim.
    /// - `InvalidEmail` when a non-empty email fails the format check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if let Some(email) = self.email.as_deref() {
            if !email.is_empty() && !EMAIL_RE.is_match(email) {
                return Err(ValidationError::InvalidEmail(email.to_string()));
            }
        }
        Ok(())
    }
}

/// Rejects a create that would duplicate an id already in `existing`.
pub fn ensure_unique_id<'a>(
    mut existing: impl Iterator<Item = &'a str>,
    candidate: &str,
) -> Result<(), ValidationError> {
    if existing.any(|id| id == candidate) {
        return Err(ValidationError::DuplicateId(candidate.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_unique_id, Person, ValidationError};

    #[test]
    fn blank_id_and_name_are_rejected() {
        let mut person = Person::new("  ", "Someone");
        assert_eq!(person.validate(), Err(ValidationError::MissingId));

        person.id = "p1".to_string();
        person.name = "".to_string();
        assert_eq!(person.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn empty_email_is_allowed_and_malformed_email_is_not() {
        let mut person = Person::new("p1", "Someone");
        person.email = Some(String::new());
        assert!(person.validate().is_ok());

        person.email = Some("not-an-address".to_string());
        assert!(matches!(
            person.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));

        person.email = Some("someone@example.org".to_string());
        assert!(person.validate().is_ok());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let existing = ["p1", "p2"];
        let err = ensure_unique_id(existing.iter().copied(), "p1").unwrap_err();
        assert_eq!(err, ValidationError::DuplicateId("p1".to_string()));
        assert!(ensure_unique_id(existing.iter().copied(), "p3").is_ok());
    }
}
