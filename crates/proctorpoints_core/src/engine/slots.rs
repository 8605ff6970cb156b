//! Slot generation from a container duration.
//!
//! # Responsibility
//! - Produce the ordered hour-slot sequence for one container.
//!
//! # Invariants
//! - Slots are contiguous one-hour spans starting at the supplied instant.
//! - Slot 0 is the preparation hour when requested; exam hours follow it.
//! - Generated slots always come back unassigned; committing them (and
//!   thereby discarding prior assignments) is the reducer's job.

use crate::model::container::Slot;
use chrono::{DateTime, Duration, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection for out-of-contract generation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGenerationError {
    /// Duration below one hour produces no schedule.
    InvalidDuration(u32),
}

impl Display for SlotGenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDuration(hours) => {
                write!(f, "cannot generate slots for a {hours}-hour duration")
            }
        }
    }
}

impl Error for SlotGenerationError {}

/// Generates the slot sequence for one container.
///
/// With `include_preparation` the sequence is `duration_hours + 1` slots and
/// slot 0 carries the preparation flag; without it, exactly `duration_hours`
/// slots. Slot ids derive deterministically from the container id and index.
///
/// # Errors
/// - `InvalidDuration` when `duration_hours < 1`. Upper-bound validation is
///   the caller's concern at entity-creation time.
pub fn generate_slots(
    container_id: &str,
    start: DateTime<Utc>,
    duration_hours: u32,
    include_preparation: bool,
) -> Result<Vec<Slot>, SlotGenerationError> {
    if duration_hours < 1 {
        return Err(SlotGenerationError::InvalidDuration(duration_hours));
    }

    let total = duration_hours + u32::from(include_preparation);
    let mut slots = Vec::with_capacity(total as usize);
    for index in 0..total {
        let slot_start = start + Duration::hours(i64::from(index));
        slots.push(Slot {
            id: format!("{container_id}-slot-{index}"),
            container_id: container_id.to_string(),
            start_time: slot_start,
            end_time: slot_start + Duration::hours(1),
            person_ids: Vec::new(),
            is_preparation: include_preparation && index == 0,
        });
    }

    Ok(slots)
}
