//! Command vocabulary accepted by the state transition log.
//!
//! # Responsibility
//! - Name every mutation the engine supports; nothing mutates a snapshot
//!   except by one of these going through the reducer.
//!
//! # Invariants
//! - Commands are validated before construction at the session boundary;
//!   the reducer is never handed invalid payloads.

use crate::model::assignee::Assignee;
use crate::model::container::{Event, Exam};
use crate::model::person::{Person, PersonId};
use crate::model::snapshot::Snapshot;
use chrono::{DateTime, Utc};

/// One state transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddProctor(Person),
    /// Full replacement keyed on `id`.
    UpdateProctor(Person),
    DeleteProctor(PersonId),

    AddVolunteer(Person),
    UpdateVolunteer(Person),
    DeleteVolunteer(PersonId),

    AddExam(Exam),
    UpdateExam(Exam),
    DeleteExam(String),

    AddEvent(Event),
    UpdateEvent(Event),
    DeleteEvent(String),

    /// Regenerates the container's slots from its duration, discarding any
    /// prior assignments. Exams get a preparation slot, events do not.
    GenerateSlots {
        container_id: String,
        start: DateTime<Utc>,
    },

    AssignToSlot {
        container_id: String,
        slot_id: String,
        assignee: Assignee,
    },
    RemoveFromSlot {
        container_id: String,
        slot_id: String,
        assignee: Assignee,
    },

    AssignToEventRoster {
        event_id: String,
        person_id: PersonId,
    },
    RemoveFromEventRoster {
        event_id: String,
        person_id: PersonId,
    },

    SetAdminFlag(bool),

    /// Bulk replacement, used for persistence restore.
    LoadSnapshot(Snapshot),
}
