//! Conflict-aware availability over the full slot graph.
//!
//! # Responsibility
//! - Decide which personnel have no commitment overlapping a target instant.
//!
//! # Invariants
//! - The conflict window is a strict `< 1h` absolute difference between slot
//!   start and target; two commitments exactly 60 minutes apart do NOT
//!   conflict. This boundary is load-bearing; keep the strict comparison.
//! - Exam slots and event slots are examined uniformly.

use crate::model::person::Person;
use crate::model::snapshot::Snapshot;
use chrono::{DateTime, Utc};

const CONFLICT_WINDOW_SECONDS: i64 = 3600;

/// True when the person holds a commitment whose slot start lies within the
/// conflict window of `target`.
fn has_conflict(snapshot: &Snapshot, person_id: &str, target: DateTime<Utc>) -> bool {
    snapshot.all_slots().any(|slot| {
        slot.person_ids.iter().any(|id| id == person_id)
            && (slot.start_time - target).num_seconds().abs() < CONFLICT_WINDOW_SECONDS
    })
}

/// People from `people` with no conflicting commitment at `target`.
///
/// Read-only scan over every slot of every container; at this data scale no
/// index is needed.
pub fn available_people<'a>(
    people: &'a [Person],
    snapshot: &Snapshot,
    target: DateTime<Utc>,
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| !has_conflict(snapshot, &person.id, target))
        .collect()
}

/// People available at every one of `targets`.
///
/// Used for bulk assignment: a single conflicting commitment against any one
/// targeted slot excludes the person from the whole set.
pub fn available_for_all<'a>(
    people: &'a [Person],
    snapshot: &Snapshot,
    targets: &[DateTime<Utc>],
) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| {
            targets
                .iter()
                .all(|target| !has_conflict(snapshot, &person.id, *target))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{available_for_all, available_people};
    use crate::engine::slots::generate_slots;
    use crate::model::person::Person;
    use crate::model::snapshot::Snapshot;
    use chrono::{Duration, TimeZone, Utc};

    fn snapshot_with_assignment() -> (Snapshot, chrono::DateTime<Utc>) {
        let mut snapshot = Snapshot::initial();
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let mut slots = generate_slots("exam00", start, 4, true).unwrap();
        slots[0].person_ids.push("mosami".to_string());
        snapshot.exams[0].slots = slots;
        (snapshot, start)
    }

    #[test]
    fn assigned_person_is_excluded_at_the_same_instant() {
        let (snapshot, start) = snapshot_with_assignment();
        let available = available_people(&snapshot.proctors, &snapshot, start);
        assert!(available.iter().all(|person| person.id != "mosami"));
    }

    #[test]
    fn exactly_sixty_minutes_apart_counts_as_available() {
        let (snapshot, start) = snapshot_with_assignment();
        let available =
            available_people(&snapshot.proctors, &snapshot, start + Duration::hours(1));
        // The strict window check: the proctor assigned at 09:00 is free for
        // a 10:00 target even though the two commitments touch.
        assert!(available.iter().any(|person| person.id == "mosami"));
    }

    #[test]
    fn fifty_nine_minutes_apart_still_conflicts() {
        let (snapshot, start) = snapshot_with_assignment();
        let available =
            available_people(&snapshot.proctors, &snapshot, start + Duration::minutes(59));
        assert!(available.iter().all(|person| person.id != "mosami"));
    }

    #[test]
    fn two_hours_apart_is_no_conflict() {
        let (snapshot, start) = snapshot_with_assignment();
        let available =
            available_people(&snapshot.proctors, &snapshot, start + Duration::hours(2));
        assert!(available.iter().any(|person| person.id == "mosami"));
    }

    #[test]
    fn event_slots_conflict_the_same_way_exam_slots_do() {
        let mut snapshot = Snapshot::initial();
        let start = Utc.with_ymd_and_hms(2025, 9, 6, 9, 0, 0).unwrap();
        let mut slots = generate_slots("event00", start, 3, false).unwrap();
        slots[0].person_ids.push("neali".to_string());
        snapshot.events[0].slots = slots;

        let available = available_people(&snapshot.proctors, &snapshot, start);
        assert!(available.iter().all(|person| person.id != "neali"));
    }

    #[test]
    fn bulk_intersection_excludes_on_a_single_conflict() {
        let mut snapshot = Snapshot::initial();
        let nine = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
        let ten = nine + Duration::hours(1);

        // One commitment elsewhere at 08:30 conflicts with the 09:00 target
        // but not the 10:00 target.
        let mut other_slots = generate_slots("exam01", nine - Duration::minutes(30), 4, true)
            .unwrap();
        other_slots[0].person_ids.push("mosami".to_string());
        snapshot.exams[1].slots = other_slots;

        let single = available_people(&snapshot.proctors, &snapshot, ten);
        assert!(single.iter().any(|person| person.id == "mosami"));

        let bulk = available_for_all(&snapshot.proctors, &snapshot, &[nine, ten]);
        assert!(bulk.iter().all(|person| person.id != "mosami"));
    }
}
