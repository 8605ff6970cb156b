//! Scheduling session: the single logical owner of the snapshot.
//!
//! # Responsibility
//! - Validate commands, run them through the reducer, and write the
//!   committed snapshot through to the store.
//! - Expose read-only derivations (availability, leaderboards) over the
//!   current snapshot.
//!
//! # Invariants
//! - Every command observes and replaces the entire snapshot as one unit.
//! - Write-through persistence is fire-and-forget: a store failure is logged
//!   and never rolls back the in-memory snapshot.

use crate::engine::availability::{available_for_all, available_people};
use crate::engine::command::Command;
use crate::engine::reducer;
use crate::engine::stats::{self, AssignedSlot, PersonStats};
use crate::model::assignee::Assignee;
use crate::model::container::{Event, Exam};
use crate::model::person::{ensure_unique_id, Person, ValidationError};
use crate::model::snapshot::Snapshot;
use crate::repo::snapshot_repo::SnapshotStore;
use chrono::{DateTime, Utc};
use log::{error, info};

/// Credential check collaborator for the admin-session flag.
///
/// The engine only needs a boolean gate; a deployment wanting real
/// authentication swaps this implementation without touching scheduling.
pub trait AdminGate {
    fn verify(&self, input: &str) -> bool;
}

/// Single shared static secret, compared verbatim.
pub struct StaticSecretGate {
    secret: String,
}

impl StaticSecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Default for StaticSecretGate {
    /// Shared secret carried over from earlier builds.
    fn default() -> Self {
        Self::new("admin123")
    }
}

impl AdminGate for StaticSecretGate {
    fn verify(&self, input: &str) -> bool {
        input == self.secret
    }
}

/// Snapshot owner applying commands atomically and sequentially.
pub struct SchedulerSession<S: SnapshotStore, G: AdminGate> {
    snapshot: Snapshot,
    store: S,
    gate: G,
}

impl<S: SnapshotStore, G: AdminGate> SchedulerSession<S, G> {
    /// Opens a session seeded from the store.
    ///
    /// A missing blob seeds the initial snapshot; a malformed or unreadable
    /// blob is logged and also falls back to the initial snapshot.
    pub fn open(store: S, gate: G) -> Self {
        let snapshot = match store.load() {
            Ok(Some(snapshot)) => {
                info!("event=session_open module=session status=ok source=store");
                snapshot
            }
            Ok(None) => {
                info!("event=session_open module=session status=ok source=seed");
                Snapshot::initial()
            }
            Err(err) => {
                error!("event=session_open module=session status=error source=seed error={err}");
                Snapshot::initial()
            }
        };

        Self {
            snapshot,
            store,
            gate,
        }
    }

    /// Current committed snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot.is_admin_logged_in
    }

    /// Applies one command and writes the committed snapshot through.
    ///
    /// The raw command surface; the named entry points below validate their
    /// payloads before calling this.
    pub fn apply(&mut self, command: Command) {
        self.snapshot = reducer::apply(&self.snapshot, command);
        if let Err(err) = self.store.save(&self.snapshot) {
            // In-memory state stays authoritative; the next successful save
            // persists it whole.
            error!("event=snapshot_save module=session status=error error={err}");
        }
    }

    pub fn add_proctor(&mut self, person: Person) -> Result<(), ValidationError> {
        person.validate()?;
        ensure_unique_id(
            self.snapshot.proctors.iter().map(|p| p.id.as_str()),
            &person.id,
        )?;
        self.apply(Command::AddProctor(person));
        Ok(())
    }

    pub fn update_proctor(&mut self, person: Person) -> Result<(), ValidationError> {
        person.validate()?;
        self.apply(Command::UpdateProctor(person));
        Ok(())
    }

    pub fn delete_proctor(&mut self, person_id: &str) {
        self.apply(Command::DeleteProctor(person_id.to_string()));
    }

    pub fn add_volunteer(&mut self, person: Person) -> Result<(), ValidationError> {
        person.validate()?;
        ensure_unique_id(
            self.snapshot.volunteers.iter().map(|p| p.id.as_str()),
            &person.id,
        )?;
        self.apply(Command::AddVolunteer(person));
        Ok(())
    }

    pub fn update_volunteer(&mut self, person: Person) -> Result<(), ValidationError> {
        person.validate()?;
        self.apply(Command::UpdateVolunteer(person));
        Ok(())
    }

    pub fn delete_volunteer(&mut self, person_id: &str) {
        self.apply(Command::DeleteVolunteer(person_id.to_string()));
    }

    pub fn add_exam(&mut self, exam: Exam) -> Result<(), ValidationError> {
        exam.validate()?;
        ensure_unique_id(
            self.snapshot.exams.iter().map(|e| e.id.as_str()),
            &exam.id,
        )?;
        self.apply(Command::AddExam(exam));
        Ok(())
    }

    pub fn update_exam(&mut self, exam: Exam) -> Result<(), ValidationError> {
        exam.validate()?;
        self.apply(Command::UpdateExam(exam));
        Ok(())
    }

    pub fn delete_exam(&mut self, exam_id: &str) {
        self.apply(Command::DeleteExam(exam_id.to_string()));
    }

    /// Adds an event and immediately generates its slot schedule from the
    /// event's nominal start.
    pub fn add_event(&mut self, event: Event) -> Result<(), ValidationError> {
        event.validate()?;
        ensure_unique_id(
            self.snapshot.events.iter().map(|e| e.id.as_str()),
            &event.id,
        )?;
        let container_id = event.id.clone();
        let start = event.start_instant();
        self.apply(Command::AddEvent(event));
        self.apply(Command::GenerateSlots {
            container_id,
            start,
        });
        Ok(())
    }

    /// Replaces an event wholesale and regenerates its slots, discarding
    /// prior slot assignments.
    pub fn update_event(&mut self, event: Event) -> Result<(), ValidationError> {
        event.validate()?;
        let container_id = event.id.clone();
        let start = event.start_instant();
        self.apply(Command::UpdateEvent(event));
        self.apply(Command::GenerateSlots {
            container_id,
            start,
        });
        Ok(())
    }

    pub fn delete_event(&mut self, event_id: &str) {
        self.apply(Command::DeleteEvent(event_id.to_string()));
    }

    /// Regenerates a container's slots from the given start instant.
    pub fn generate_slots(&mut self, container_id: &str, start: DateTime<Utc>) {
        self.apply(Command::GenerateSlots {
            container_id: container_id.to_string(),
            start,
        });
    }

    pub fn assign_to_slot(&mut self, container_id: &str, slot_id: &str, assignee: Assignee) {
        self.apply(Command::AssignToSlot {
            container_id: container_id.to_string(),
            slot_id: slot_id.to_string(),
            assignee,
        });
    }

    pub fn remove_from_slot(&mut self, container_id: &str, slot_id: &str, assignee: Assignee) {
        self.apply(Command::RemoveFromSlot {
            container_id: container_id.to_string(),
            slot_id: slot_id.to_string(),
            assignee,
        });
    }

    pub fn assign_to_event_roster(&mut self, event_id: &str, person_id: &str) {
        self.apply(Command::AssignToEventRoster {
            event_id: event_id.to_string(),
            person_id: person_id.to_string(),
        });
    }

    pub fn remove_from_event_roster(&mut self, event_id: &str, person_id: &str) {
        self.apply(Command::RemoveFromEventRoster {
            event_id: event_id.to_string(),
            person_id: person_id.to_string(),
        });
    }

    /// Replaces the whole snapshot, e.g. from an imported backup.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        self.apply(Command::LoadSnapshot(snapshot));
    }

    /// Verifies the credential and flips the admin flag on success.
    pub fn login(&mut self, input: &str) -> bool {
        if self.gate.verify(input) {
            info!("event=admin_login module=session status=ok");
            self.apply(Command::SetAdminFlag(true));
            true
        } else {
            info!("event=admin_login module=session status=denied");
            false
        }
    }

    pub fn logout(&mut self) {
        self.apply(Command::SetAdminFlag(false));
    }

    /// Proctors free at `target` across every container's slots.
    pub fn available_proctors(&self, target: DateTime<Utc>) -> Vec<&Person> {
        available_people(&self.snapshot.proctors, &self.snapshot, target)
    }

    /// Volunteers free at `target` across every container's slots.
    pub fn available_volunteers(&self, target: DateTime<Utc>) -> Vec<&Person> {
        available_people(&self.snapshot.volunteers, &self.snapshot, target)
    }

    /// Proctors free at every one of `targets`; bulk-assignment candidates.
    pub fn available_proctors_for_all(&self, targets: &[DateTime<Utc>]) -> Vec<&Person> {
        available_for_all(&self.snapshot.proctors, &self.snapshot, targets)
    }

    /// Volunteers free at every one of `targets`.
    pub fn available_volunteers_for_all(&self, targets: &[DateTime<Utc>]) -> Vec<&Person> {
        available_for_all(&self.snapshot.volunteers, &self.snapshot, targets)
    }

    /// Proctors ranked by points earned on exam slots.
    pub fn proctor_leaderboard(&self) -> Vec<PersonStats> {
        stats::person_stats(
            &self.snapshot.proctors,
            &self.snapshot.exams,
            self.snapshot.points_per_slot,
        )
    }

    /// Volunteers ranked by points earned on event slots.
    pub fn volunteer_leaderboard(&self) -> Vec<PersonStats> {
        stats::person_stats(
            &self.snapshot.volunteers,
            &self.snapshot.events,
            self.snapshot.points_per_slot,
        )
    }

    /// Every slot assigned to one person across exams and events, sorted by
    /// start time.
    pub fn assigned_slots(&self, person_id: &str) -> Vec<AssignedSlot> {
        let mut assigned = stats::assigned_slots(person_id, &self.snapshot.exams);
        assigned.extend(stats::assigned_slots(person_id, &self.snapshot.events));
        assigned.sort_by_key(|entry| entry.slot.start_time);
        assigned
    }
}
