use chrono::{Duration, TimeZone, Utc};
use proctorpoints_core::{apply, generate_slots, Assignee, Command, Snapshot};

#[test]
fn exam_schedule_is_duration_plus_preparation() {
    let snapshot = Snapshot::initial();
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();

    let next = apply(
        &snapshot,
        Command::GenerateSlots {
            container_id: "exam03".to_string(),
            start,
        },
    );

    let exam = next.exam("exam03").unwrap();
    assert_eq!(exam.slots.len(), 9);
    assert!(exam.slots[0].is_preparation);
    assert_eq!(exam.slots[0].start_time, start);

    for pair in exam.slots.windows(2) {
        assert_eq!(pair[0].end_time - pair[0].start_time, Duration::hours(1));
        assert_eq!(pair[1].start_time, pair[0].end_time);
    }
}

#[test]
fn event_schedule_has_no_preparation_slot() {
    let snapshot = Snapshot::initial();
    let start = Utc.with_ymd_and_hms(2025, 9, 6, 9, 0, 0).unwrap();

    let next = apply(
        &snapshot,
        Command::GenerateSlots {
            container_id: "event00".to_string(),
            start,
        },
    );

    let event = next.event("event00").unwrap();
    assert_eq!(event.slots.len(), 3);
    assert!(event.slots.iter().all(|slot| !slot.is_preparation));
}

#[test]
fn slot_ids_derive_from_container_and_index() {
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    let slots = generate_slots("exam01", start, 4, true).unwrap();

    for (index, slot) in slots.iter().enumerate() {
        assert_eq!(slot.id, format!("exam01-slot-{index}"));
        assert_eq!(slot.container_id, "exam01");
        assert!(slot.person_ids.is_empty());
    }
}

#[test]
fn regeneration_discards_prior_assignments() {
    let snapshot = Snapshot::initial();
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();

    let mut state = apply(
        &snapshot,
        Command::GenerateSlots {
            container_id: "exam01".to_string(),
            start,
        },
    );
    state = apply(
        &state,
        Command::AssignToSlot {
            container_id: "exam01".to_string(),
            slot_id: "exam01-slot-0".to_string(),
            assignee: Assignee::parse("mosami"),
        },
    );
    assert_eq!(state.exam("exam01").unwrap().slots[0].person_ids, vec!["mosami"]);

    let regenerated = apply(
        &state,
        Command::GenerateSlots {
            container_id: "exam01".to_string(),
            start: start + Duration::days(1),
        },
    );

    let exam = regenerated.exam("exam01").unwrap();
    assert!(exam.slots.iter().all(|slot| slot.person_ids.is_empty()));
}
