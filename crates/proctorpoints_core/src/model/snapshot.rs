//! Aggregate snapshot: the unit of state transition and persistence.
//!
//! # Responsibility
//! - Hold every entity collection plus the admin-session flag and the points
//!   constant as one serializable value.
//! - Normalize legacy blobs at parse time so downstream code never sees
//!   missing collections.
//!
//! # Invariants
//! - The reducer is the only writer; no component mutates a committed
//!   snapshot in place.
//! - `points_per_slot` has no mutating command.

use crate::model::container::{Event, Exam, Slot};
use crate::model::person::Person;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

fn default_points_per_slot() -> u32 {
    10
}

/// Full serializable state of the scheduling engine at one point in time.
///
/// Every collection field defaults to empty on deserialization, which is the
/// load-time normalization that lets mutation code drop per-field defensive
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub proctors: Vec<Person>,
    #[serde(default)]
    pub volunteers: Vec<Person>,
    #[serde(default)]
    pub exams: Vec<Exam>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub is_admin_logged_in: bool,
    #[serde(default = "default_points_per_slot")]
    pub points_per_slot: u32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            proctors: Vec::new(),
            volunteers: Vec::new(),
            exams: Vec::new(),
            events: Vec::new(),
            is_admin_logged_in: false,
            points_per_slot: default_points_per_slot(),
        }
    }
}

impl Snapshot {
    /// Seed state used when the store holds no parseable snapshot: the fixed
    /// proctor roster, four exams with no slots yet, and one sample event.
    pub fn initial() -> Self {
        let proctors = [
            "Imqandyl", "fkuruthl", "neali", "Hankhali", "kqaddour", "mohkhan", "mosami",
            "abardhan", "aabashee", "aradwan", "mamuzamm", "ytapano", "absalem", "nakhalil",
            "maabdulr", "mbabayan", "aalbugar", "ghsaad", "Amagoury", "sngantch", "aali2",
            "aalbobak", "meid", "rradin-m", "Desteve", "Nosman", "hbasheer", "enoshahi",
            "nkunnath", "sgantch", "ffidha", "hassaleh", "dimirzoe", "tabadawi",
        ]
        .into_iter()
        .map(|id| {
            let mut name: String = id.to_string();
            if let Some(first) = name.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            Person {
                id: id.to_string(),
                name,
                email: Some(String::new()),
                skills: None,
            }
        })
        .collect();

        let exams = [
            ("exam00", "Exam00", 4),
            ("exam01", "Exam01", 4),
            ("exam02", "Exam02", 4),
            ("exam03", "Exam03", 8),
        ]
        .into_iter()
        .map(|(id, name, duration)| Exam {
            id: id.to_string(),
            name: name.to_string(),
            duration,
            slots: Vec::new(),
        })
        .collect();

        let events = vec![Event {
            id: "event00".to_string(),
            name: "Open House".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 6).expect("valid seed date"),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid seed time"),
            description: Some("Campus open house for prospective students".to_string()),
            duration: 3,
            required_volunteers: 2,
            volunteer_ids: Vec::new(),
            slots: Vec::new(),
        }];

        Self {
            proctors,
            volunteers: Vec::new(),
            exams,
            events,
            is_admin_logged_in: false,
            points_per_slot: default_points_per_slot(),
        }
    }

    /// Iterates every slot of every container, exams first.
    pub fn all_slots(&self) -> impl Iterator<Item = &Slot> {
        self.exams
            .iter()
            .flat_map(|exam| exam.slots.iter())
            .chain(self.events.iter().flat_map(|event| event.slots.iter()))
    }

    pub fn exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|exam| exam.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub(crate) fn exam_mut(&mut self, id: &str) -> Option<&mut Exam> {
        self.exams.iter_mut().find(|exam| exam.id == id)
    }

    pub(crate) fn event_mut(&mut self, id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|event| event.id == id)
    }

    /// Finds one slot by container and slot id across exams and events.
    pub(crate) fn slot_mut(&mut self, container_id: &str, slot_id: &str) -> Option<&mut Slot> {
        let exam_slots = self
            .exams
            .iter_mut()
            .filter(|exam| exam.id == container_id)
            .flat_map(|exam| exam.slots.iter_mut());
        let event_slots = self
            .events
            .iter_mut()
            .filter(|event| event.id == container_id)
            .flat_map(|event| event.slots.iter_mut());
        exam_slots
            .chain(event_slots)
            .find(|slot| slot.id == slot_id)
    }
}
