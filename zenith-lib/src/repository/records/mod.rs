//! Health records managed by Zenith.
//!
//! Each record kind owns one slot in the store and is persisted as a JSON
//! collection that gets replaced wholesale on every write. The associated
//! functions on each type implement the feature operations; the
//! [`Repository`](crate::Repository) is the public doorway to them.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::repository::store;

mod appointment;
mod feedback;
mod health_profile;
mod prescription;
mod reminder;

pub use appointment::{Appointment, AppointmentFilter, AppointmentStatus};
pub use feedback::{Feedback, FeedbackKind, Rating};
pub use health_profile::{BloodType, HealthProfile};
pub use prescription::{Prescription, PrescriptionStatus};
pub use reminder::Reminder;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Internal storage error: {0}")]
    Store(#[from] store::Error),
    #[error("A {0} is required")]
    EmptyField(&'static str),
}

/// A unique identifier that specifies a particular record.
///
/// Ids come from a persistent counter in the store and are never reused, so
/// two records created in the same instant cannot collide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// The raw counter value, e.g. for passing on a command line.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A persisted record kind, tied to the slot its collection lives in.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Key of the slot holding this kind's collection.
    const SLOT: &'static str;

    fn id(&self) -> RecordId;
}

/// Presence check shared by the creation operations.
fn require(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyField(field));
    }

    Ok(trimmed.to_string())
}
