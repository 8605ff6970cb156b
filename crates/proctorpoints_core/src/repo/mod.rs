//! Persistence layer abstractions and implementations.
//!
//! # Responsibility
//! - Define the blob-store contract the session persists through.
//! - Isolate SQLite and JSON details from engine and service code.
//!
//! # Invariants
//! - The snapshot travels through this layer as one opaque unit; partial
//!   writes of individual collections do not exist.

pub mod snapshot_repo;
