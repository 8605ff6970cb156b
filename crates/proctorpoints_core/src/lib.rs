//! Core scheduling engine for exam proctoring and event volunteering.
//! This crate is the single source of truth for assignment invariants.

pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use engine::availability::{available_for_all, available_people};
pub use engine::command::Command;
pub use engine::reducer::apply;
pub use engine::slots::{generate_slots, SlotGenerationError};
pub use engine::stats::{assigned_slots, person_stats, AssignedSlot, PersonStats};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::assignee::{Assignee, RoleTag};
pub use model::container::{Container, Event, Exam, Slot};
pub use model::person::{Person, PersonId, ValidationError};
pub use model::snapshot::Snapshot;
pub use repo::snapshot_repo::{
    SnapshotStore, SqliteSnapshotStore, StoreError, StoreResult, SNAPSHOT_KEY,
};
pub use service::session::{AdminGate, SchedulerSession, StaticSecretGate};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
