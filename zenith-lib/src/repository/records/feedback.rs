use chrono::NaiveDate;
use derive_more::Display;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::debug;

use crate::repository::{
    records::{Record, RecordId, Result, require},
    store::Store,
};

/// What a piece of feedback is about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum FeedbackKind {
    Doctor,
    Service,
    Facility,
}

/// A 1 to 5 star rating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    /// Build a rating, clamping into the 1 to 5 range.
    pub fn new(stars: u8) -> Self {
        Self(stars.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::MAX
    }
}

/// A submitted piece of feedback. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Feedback {
    #[getset(get_copy = "pub")]
    id: RecordId,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    rating: Rating,
    #[serde(rename = "type")]
    #[getset(get_copy = "pub")]
    kind: FeedbackKind,
    #[getset(get = "pub")]
    message: String,
    #[getset(get_copy = "pub")]
    date: NaiveDate,
}

impl Feedback {
    pub(crate) fn submit(
        store: &Store,
        name: &str,
        rating: Rating,
        kind: FeedbackKind,
        message: &str,
        date: NaiveDate,
    ) -> Result<Self> {
        let name = require("name", name)?;
        let message = require("message", message)?;

        let feedback = Self {
            id: store.allocate_id()?,
            name,
            rating,
            kind,
            message,
            date,
        };
        store.append(feedback.clone())?;

        debug!("Submitted {} feedback from {}", feedback.kind, feedback.name);

        Ok(feedback)
    }

    pub(crate) fn list(store: &Store) -> Result<Vec<Self>> {
        Ok(store.load()?)
    }
}

impl Record for Feedback {
    const SLOT: &'static str = "feedbacks";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod test {
    use super::{FeedbackKind, Rating};
    use crate::{Repository, repository::records::Error};

    #[test]
    fn test_submit() {
        let repo = Repository::mock();

        let feedback = repo
            .submit_feedback("Ada", Rating::new(4), FeedbackKind::Doctor, "Very thorough")
            .unwrap();

        assert_eq!(feedback.rating().stars(), 4);
        assert_eq!(repo.feedbacks().unwrap(), vec![feedback]);
    }

    #[test]
    fn test_submit_requires_name_and_message() {
        let repo = Repository::mock();

        assert!(matches!(
            repo.submit_feedback("", Rating::default(), FeedbackKind::Service, "Fine"),
            Err(crate::Error::Records(Error::EmptyField("name")))
        ));
        assert!(matches!(
            repo.submit_feedback("Ada", Rating::default(), FeedbackKind::Service, " "),
            Err(crate::Error::Records(Error::EmptyField("message")))
        ));
        assert!(repo.feedbacks().unwrap().is_empty());
    }

    #[test]
    fn test_rating_clamps() {
        assert_eq!(Rating::new(0), Rating::MIN);
        assert_eq!(Rating::new(9), Rating::MAX);
        assert_eq!(Rating::new(3).stars(), 3);
    }
}
