//! Exam and event containers and their hour slots.
//!
//! # Responsibility
//! - Define the schedulable containers that own generated slots.
//! - Expose one container view so availability and statistics code treats
//!   exam slots and event slots uniformly.
//!
//! # Invariants
//! - A slot spans exactly one hour; slot `i + 1` starts where slot `i` ends.
//! - At most one slot per container is a preparation slot, always index 0,
//!   and only exam containers generate one.
//! - Slots are replaced wholesale on regeneration.

use crate::model::person::ValidationError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest and highest supported container duration in hours.
pub const MIN_DURATION_HOURS: u32 = 1;
pub const MAX_DURATION_HOURS: u32 = 12;

/// One hour-long assignable unit inside a container's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Derived id, `"{containerId}-slot-{index}"`.
    pub id: String,
    /// Owning exam or event id.
    pub container_id: String,
    pub start_time: DateTime<Utc>,
    /// Always `start_time` plus one hour.
    pub end_time: DateTime<Utc>,
    /// Assigned personnel ids, set semantics. May also hold a serialized
    /// coordinator role tag; see [`crate::model::assignee::Assignee`].
    #[serde(default)]
    pub person_ids: Vec<String>,
    #[serde(default)]
    pub is_preparation: bool,
}

/// Exam container. Slots are generated on demand from the duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub name: String,
    /// Examination hours, preparation hour excluded.
    pub duration: u32,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// Event container with an event-level volunteer roster on top of per-slot
/// assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    #[serde(default)]
    pub description: Option<String>,
    /// Event hours; events generate no preparation slot.
    pub duration: u32,
    pub required_volunteers: u32,
    /// Event-level roster, independent of per-slot assignment.
    #[serde(default)]
    pub volunteer_ids: Vec<String>,
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// Uniform read view over schedulable containers.
///
/// Availability and statistics never care whether a slot belongs to an exam
/// or an event; this is the seam that keeps them container-agnostic.
pub trait Container {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn slots(&self) -> &[Slot];
}

impl Container for Exam {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

impl Container for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

fn validate_duration(hours: u32) -> Result<(), ValidationError> {
    if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&hours) {
        return Err(ValidationError::DurationOutOfRange(hours));
    }
    Ok(())
}

fn validate_id_and_name(id: &str, name: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::MissingId);
    }
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

impl Exam {
    /// Checks caller-supplied fields before the exam reaches the reducer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id_and_name(&self.id, &self.name)?;
        validate_duration(self.duration)
    }
}

impl Event {
    /// Checks caller-supplied fields before the event reaches the reducer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id_and_name(&self.id, &self.name)?;
        validate_duration(self.duration)?;
        if self.required_volunteers < 1 {
            return Err(ValidationError::RequiredVolunteersOutOfRange(
                self.required_volunteers,
            ));
        }
        Ok(())
    }

    /// Nominal start instant, `date` plus `start_time` taken as UTC.
    pub fn start_instant(&self) -> DateTime<Utc> {
        self.date.and_time(self.start_time).and_utc()
    }
}
