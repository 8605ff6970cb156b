use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use proctorpoints_core::db::open_db_in_memory;
use proctorpoints_core::{
    Assignee, Event, SchedulerSession, SqliteSnapshotStore, StaticSecretGate, ValidationError,
};

fn open_session(
    conn: &rusqlite::Connection,
) -> SchedulerSession<SqliteSnapshotStore<'_>, StaticSecretGate> {
    SchedulerSession::open(SqliteSnapshotStore::new(conn), StaticSecretGate::default())
}

fn science_fair() -> Event {
    Event {
        id: "event01".to_string(),
        name: "Science Fair".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 10, 18).unwrap(),
        start_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        description: Some("Annual school science fair".to_string()),
        duration: 4,
        required_volunteers: 3,
        volunteer_ids: Vec::new(),
        slots: Vec::new(),
    }
}

#[test]
fn adding_an_event_generates_its_schedule_from_the_event_start() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);

    session.add_event(science_fair()).unwrap();

    let event = session.snapshot().event("event01").unwrap();
    assert_eq!(event.slots.len(), 4);
    assert_eq!(
        event.slots[0].start_time,
        Utc.with_ymd_and_hms(2025, 10, 18, 13, 0, 0).unwrap()
    );
    assert!(event.slots.iter().all(|slot| !slot.is_preparation));
}

#[test]
fn updating_an_event_regenerates_and_discards_slot_assignments() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    session.add_event(science_fair()).unwrap();
    session.assign_to_slot("event01", "event01-slot-0", Assignee::parse("vol1"));

    let mut moved = science_fair();
    moved.start_time = NaiveTime::from_hms_opt(15, 0, 0).unwrap();
    session.update_event(moved).unwrap();

    let event = session.snapshot().event("event01").unwrap();
    assert_eq!(
        event.slots[0].start_time,
        Utc.with_ymd_and_hms(2025, 10, 18, 15, 0, 0).unwrap()
    );
    assert!(event.slots.iter().all(|slot| slot.person_ids.is_empty()));
}

#[test]
fn duplicate_event_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    session.add_event(science_fair()).unwrap();

    let err = session.add_event(science_fair()).unwrap_err();
    assert_eq!(err, ValidationError::DuplicateId("event01".to_string()));
}

#[test]
fn deleting_an_event_takes_its_roster_and_slots_with_it() {
    let conn = open_db_in_memory().unwrap();
    let mut session = open_session(&conn);
    session.add_event(science_fair()).unwrap();
    session.assign_to_event_roster("event01", "vol1");

    session.delete_event("event01");

    assert!(session.snapshot().event("event01").is_none());
    assert!(session
        .snapshot()
        .all_slots()
        .all(|slot| slot.container_id != "event01"));
}
