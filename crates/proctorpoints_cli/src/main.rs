//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `proctorpoints_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use chrono::{TimeZone, Utc};
use proctorpoints_core::db::open_db_in_memory;
use proctorpoints_core::{Assignee, SchedulerSession, SqliteSnapshotStore, StaticSecretGate};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let store = SqliteSnapshotStore::new(&conn);
    let mut session = SchedulerSession::open(store, StaticSecretGate::default());

    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    session.generate_slots("exam00", start);
    session.assign_to_slot("exam00", "exam00-slot-1", Assignee::parse("mosami"));

    println!("proctorpoints_core version={}", proctorpoints_core::core_version());
    println!(
        "exams={} proctors={} slots={}",
        session.snapshot().exams.len(),
        session.snapshot().proctors.len(),
        session.snapshot().all_slots().count()
    );
    if let Some(top) = session.proctor_leaderboard().first() {
        println!(
            "top={} slots={} points={}",
            top.person.name, top.slots, top.points
        );
    }

    Ok(())
}
