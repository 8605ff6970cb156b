//! Domain model for the scheduling engine.
//!
//! # Responsibility
//! - Define the entity shapes shared by the reducer, the derivations and the
//!   persistence blob.
//! - Keep caller-supplied field validation next to the data it guards.
//!
//! # Invariants
//! - Every entity is identified by a caller-supplied string id, unique
//!   within its collection.
//! - The snapshot is the only aggregate; entities never exist outside it.

pub mod assignee;
pub mod container;
pub mod person;
pub mod snapshot;
