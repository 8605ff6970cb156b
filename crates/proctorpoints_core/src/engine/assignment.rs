//! Assignment mutation rules applied inside a state transition.
//!
//! # Responsibility
//! - Add/remove occupants on slots and event rosters with set semantics.
//! - Cascade personnel deletion so no dangling id survives a transition.
//!
//! # Invariants
//! - Duplicate add and absent remove are no-ops, never errors.
//! - Missing container/slot/person references are soft no-ops; legacy-shape
//!   tolerance lives in snapshot normalization, not here.
//!
//! These helpers run on the reducer's working copy only; callers outside the
//! reducer never see a half-applied snapshot.

use crate::model::snapshot::Snapshot;

/// Adds an occupant id to a slot, set-union semantics.
pub(crate) fn assign_to_slot(
    snapshot: &mut Snapshot,
    container_id: &str,
    slot_id: &str,
    occupant_id: &str,
) {
    if let Some(slot) = snapshot.slot_mut(container_id, slot_id) {
        if !slot.person_ids.iter().any(|id| id == occupant_id) {
            slot.person_ids.push(occupant_id.to_string());
        }
    }
}

/// Removes an occupant id from a slot if present.
pub(crate) fn remove_from_slot(
    snapshot: &mut Snapshot,
    container_id: &str,
    slot_id: &str,
    occupant_id: &str,
) {
    if let Some(slot) = snapshot.slot_mut(container_id, slot_id) {
        slot.person_ids.retain(|id| id != occupant_id);
    }
}

/// Adds a person to an event-level roster, set-union semantics.
pub(crate) fn assign_to_event_roster(snapshot: &mut Snapshot, event_id: &str, person_id: &str) {
    if let Some(event) = snapshot.event_mut(event_id) {
        if !event.volunteer_ids.iter().any(|id| id == person_id) {
            event.volunteer_ids.push(person_id.to_string());
        }
    }
}

/// Removes a person from an event-level roster if present.
pub(crate) fn remove_from_event_roster(snapshot: &mut Snapshot, event_id: &str, person_id: &str) {
    if let Some(event) = snapshot.event_mut(event_id) {
        event.volunteer_ids.retain(|id| id != person_id);
    }
}

/// Strips a deleted person's id from every slot and every event roster.
pub(crate) fn strip_person(snapshot: &mut Snapshot, person_id: &str) {
    for exam in &mut snapshot.exams {
        for slot in &mut exam.slots {
            slot.person_ids.retain(|id| id != person_id);
        }
    }
    for event in &mut snapshot.events {
        for slot in &mut event.slots {
            slot.person_ids.retain(|id| id != person_id);
        }
        event.volunteer_ids.retain(|id| id != person_id);
    }
}
