//! Derived statistics: hours, slot counts, points, leaderboard order.
//!
//! # Responsibility
//! - Fold slot assignments into per-person totals and a ranked listing.
//!
//! # Invariants
//! - One slot is one hour by construction, so `hours == slots` numerically;
//!   both are reported because callers present them separately.
//! - Ranking sorts descending by points; ties keep input order.

use crate::model::container::{Container, Slot};
use crate::model::person::Person;

/// Per-person derived totals for leaderboard display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonStats {
    pub person: Person,
    pub hours: u32,
    pub slots: u32,
    pub points: u32,
}

/// One assigned slot tagged with its container's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedSlot {
    pub slot: Slot,
    pub container_name: String,
}

fn count_assignments<C: Container>(person_id: &str, containers: &[C]) -> u32 {
    containers
        .iter()
        .flat_map(|container| container.slots())
        .filter(|slot| slot.person_ids.iter().any(|id| id == person_id))
        .count() as u32
}

/// Computes totals for every person and ranks them by points.
///
/// Pure derivation; safe to call at arbitrary frequency for display refresh.
pub fn person_stats<C: Container>(
    people: &[Person],
    containers: &[C],
    points_per_slot: u32,
) -> Vec<PersonStats> {
    let mut stats: Vec<PersonStats> = people
        .iter()
        .map(|person| {
            let slots = count_assignments(&person.id, containers);
            PersonStats {
                person: person.clone(),
                hours: slots,
                slots,
                points: slots * points_per_slot,
            }
        })
        .collect();

    // Stable sort: ties stay in input order, no secondary key.
    stats.sort_by(|a, b| b.points.cmp(&a.points));
    stats
}

/// Every slot assigned to `person_id` across `containers`, tagged with the
/// container name and sorted ascending by start time.
pub fn assigned_slots<C: Container>(person_id: &str, containers: &[C]) -> Vec<AssignedSlot> {
    let mut assigned: Vec<AssignedSlot> = containers
        .iter()
        .flat_map(|container| {
            container
                .slots()
                .iter()
                .filter(|slot| slot.person_ids.iter().any(|id| id == person_id))
                .map(|slot| AssignedSlot {
                    slot: slot.clone(),
                    container_name: container.name().to_string(),
                })
        })
        .collect();

    assigned.sort_by_key(|entry| entry.slot.start_time);
    assigned
}
