//! Session layer: command validation, persistence write-through, admin gate.
//!
//! # Responsibility
//! - Orchestrate reducer and store into the engine's public command surface.
//! - Keep UI collaborators decoupled from storage and reducer details.

pub mod session;
