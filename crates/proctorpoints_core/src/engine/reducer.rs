//! State transition log: the single authoritative snapshot-plus-command
//! function.
//!
//! # Responsibility
//! - Fold one command into the current snapshot and return the next one.
//!
//! # Invariants
//! - Total: every command returns a snapshot; references to missing entities
//!   produce a value-equal result, never a panic.
//! - The input snapshot is never mutated; the result is a structurally new
//!   value reflecting only the intended change.

use crate::engine::assignment;
use crate::engine::command::Command;
use crate::engine::slots::generate_slots;
use crate::model::person::Person;
use crate::model::snapshot::Snapshot;

fn replace_by_id(collection: &mut [Person], replacement: Person) {
    if let Some(existing) = collection
        .iter_mut()
        .find(|person| person.id == replacement.id)
    {
        *existing = replacement;
    }
}

/// Applies one command and returns the next snapshot.
pub fn apply(snapshot: &Snapshot, command: Command) -> Snapshot {
    let mut next = snapshot.clone();

    match command {
        Command::AddProctor(person) => next.proctors.push(person),
        Command::UpdateProctor(person) => replace_by_id(&mut next.proctors, person),
        Command::DeleteProctor(id) => {
            next.proctors.retain(|person| person.id != id);
            assignment::strip_person(&mut next, &id);
        }

        Command::AddVolunteer(person) => next.volunteers.push(person),
        Command::UpdateVolunteer(person) => replace_by_id(&mut next.volunteers, person),
        Command::DeleteVolunteer(id) => {
            next.volunteers.retain(|person| person.id != id);
            assignment::strip_person(&mut next, &id);
        }

        Command::AddExam(exam) => next.exams.push(exam),
        Command::UpdateExam(exam) => {
            if let Some(existing) = next.exam_mut(&exam.id) {
                *existing = exam;
            }
        }
        Command::DeleteExam(id) => next.exams.retain(|exam| exam.id != id),

        Command::AddEvent(event) => next.events.push(event),
        Command::UpdateEvent(event) => {
            if let Some(existing) = next.event_mut(&event.id) {
                *existing = event;
            }
        }
        Command::DeleteEvent(id) => next.events.retain(|event| event.id != id),

        Command::GenerateSlots {
            container_id,
            start,
        } => {
            // Exams schedule a preparation hour ahead of the examination
            // hours; events schedule the bare duration.
            if let Some(duration) = next.exam(&container_id).map(|exam| exam.duration) {
                if let Ok(slots) = generate_slots(&container_id, start, duration, true) {
                    if let Some(exam) = next.exam_mut(&container_id) {
                        exam.slots = slots;
                    }
                }
            } else if let Some(duration) = next.event(&container_id).map(|event| event.duration) {
                if let Ok(slots) = generate_slots(&container_id, start, duration, false) {
                    if let Some(event) = next.event_mut(&container_id) {
                        event.slots = slots;
                    }
                }
            }
        }

        Command::AssignToSlot {
            container_id,
            slot_id,
            assignee,
        } => assignment::assign_to_slot(&mut next, &container_id, &slot_id, assignee.storage_id()),
        Command::RemoveFromSlot {
            container_id,
            slot_id,
            assignee,
        } => {
            assignment::remove_from_slot(&mut next, &container_id, &slot_id, assignee.storage_id())
        }

        Command::AssignToEventRoster {
            event_id,
            person_id,
        } => assignment::assign_to_event_roster(&mut next, &event_id, &person_id),
        Command::RemoveFromEventRoster {
            event_id,
            person_id,
        } => assignment::remove_from_event_roster(&mut next, &event_id, &person_id),

        Command::SetAdminFlag(flag) => next.is_admin_logged_in = flag,

        Command::LoadSnapshot(loaded) => next = loaded,
    }

    next
}
