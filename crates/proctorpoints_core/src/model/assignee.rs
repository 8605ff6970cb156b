//! Slot assignee resolution: personnel ids and coordinator role tags.
//!
//! # Responsibility
//! - Interpret the `role-` prefixed pseudo-ids that share slot storage with
//!   real personnel ids, in exactly one place.
//!
//! # Invariants
//! - Storage keeps the original string forms (`role-coordinator`,
//!   `role-breaktime-coordinator`); only this module parses them.

use crate::model::person::Person;

const ROLE_COORDINATOR_ID: &str = "role-coordinator";
const ROLE_BREAKTIME_COORDINATOR_ID: &str = "role-breaktime-coordinator";

/// Coordinator roles that can stand in for a person on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTag {
    Coordinator,
    BreaktimeCoordinator,
}

impl RoleTag {
    /// Storage form used inside `Slot::person_ids`.
    pub fn storage_id(self) -> &'static str {
        match self {
            Self::Coordinator => ROLE_COORDINATOR_ID,
            Self::BreaktimeCoordinator => ROLE_BREAKTIME_COORDINATOR_ID,
        }
    }

    /// Human-readable role name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Coordinator => "Coordinator",
            Self::BreaktimeCoordinator => "Breaktime Coordinator",
        }
    }
}

/// A slot occupant: either a personnel record or a coordinator role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    Person(String),
    Role(RoleTag),
}

impl Assignee {
    /// Parses one stored occupant id.
    ///
    /// Unknown `role-` strings fall back to `Person` so stale data degrades
    /// to an unresolvable id instead of being dropped.
    pub fn parse(raw: &str) -> Self {
        match raw {
            ROLE_COORDINATOR_ID => Self::Role(RoleTag::Coordinator),
            ROLE_BREAKTIME_COORDINATOR_ID => Self::Role(RoleTag::BreaktimeCoordinator),
            other => Self::Person(other.to_string()),
        }
    }

    /// String form kept in `Slot::person_ids`.
    pub fn storage_id(&self) -> &str {
        match self {
            Self::Person(id) => id,
            Self::Role(tag) => tag.storage_id(),
        }
    }

    /// Resolves a display name against a personnel collection.
    ///
    /// Unknown personnel ids render as the raw id.
    pub fn display_name(&self, people: &[Person]) -> String {
        match self {
            Self::Role(tag) => tag.display_name().to_string(),
            Self::Person(id) => people
                .iter()
                .find(|person| person.id == *id)
                .map(|person| person.name.clone())
                .unwrap_or_else(|| id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignee, RoleTag};
    use crate::model::person::Person;

    #[test]
    fn role_ids_parse_to_role_tags() {
        assert_eq!(
            Assignee::parse("role-coordinator"),
            Assignee::Role(RoleTag::Coordinator)
        );
        assert_eq!(
            Assignee::parse("role-breaktime-coordinator"),
            Assignee::Role(RoleTag::BreaktimeCoordinator)
        );
        assert_eq!(
            Assignee::parse("mosami"),
            Assignee::Person("mosami".to_string())
        );
    }

    #[test]
    fn unknown_role_string_degrades_to_person() {
        assert_eq!(
            Assignee::parse("role-janitor"),
            Assignee::Person("role-janitor".to_string())
        );
    }

    #[test]
    fn storage_id_roundtrips() {
        for raw in ["role-coordinator", "role-breaktime-coordinator", "p1"] {
            assert_eq!(Assignee::parse(raw).storage_id(), raw);
        }
    }

    #[test]
    fn display_name_resolves_people_and_roles() {
        let people = vec![Person::new("p1", "Mosami")];
        assert_eq!(
            Assignee::parse("p1").display_name(&people),
            "Mosami".to_string()
        );
        assert_eq!(
            Assignee::parse("p2").display_name(&people),
            "p2".to_string()
        );
        assert_eq!(
            Assignee::parse("role-breaktime-coordinator").display_name(&people),
            "Breaktime Coordinator".to_string()
        );
    }
}
