use chrono::NaiveTime;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::repository::{
    records::{Record, RecordId, Result, require},
    store::Store,
};

/// A medication or activity reminder shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Reminder {
    #[getset(get_copy = "pub")]
    id: RecordId,
    #[getset(get = "pub")]
    title: String,
    #[getset(get_copy = "pub")]
    time: NaiveTime,
    #[getset(get_copy = "pub")]
    completed: bool,
}

impl Reminder {
    pub(crate) fn new(id: RecordId, title: &str, time: NaiveTime) -> Self {
        Self {
            id,
            title: title.to_string(),
            time,
            completed: false,
        }
    }

    /// Create a reminder and append it to the collection. New reminders
    /// always start out not completed.
    pub(crate) fn add(store: &Store, title: &str, time: NaiveTime) -> Result<Self> {
        let title = require("reminder title", title)?;

        let reminder = Self::new(store.allocate_id()?, &title, time);
        store.append(reminder.clone())?;

        debug!("Added reminder: {title}");

        Ok(reminder)
    }

    pub(crate) fn list(store: &Store) -> Result<Vec<Self>> {
        Ok(store.load()?)
    }

    pub(crate) fn remove(store: &Store, id: RecordId) -> Result<()> {
        store.remove::<Self>(id)?;

        debug!("Removed reminder {id}");

        Ok(())
    }
}

impl Record for Reminder {
    const SLOT: &'static str = "reminders";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveTime;

    use crate::{Repository, repository::records::Error};

    fn time(raw: &str) -> NaiveTime {
        NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
    }

    #[test]
    fn test_add() {
        let repo = Repository::mock();

        let reminder = repo.add_reminder("Take aspirin", time("08:00")).unwrap();

        assert!(!reminder.completed());
        let reminders = repo.reminders().unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders.first(), Some(&reminder));
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let repo = Repository::mock();

        let first = repo.add_reminder("Take aspirin", time("08:00")).unwrap();
        let second = repo.add_reminder("Take aspirin", time("08:00")).unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(repo.reminders().unwrap().len(), 2);
    }

    #[test]
    fn test_add_empty_title() {
        let repo = Repository::mock();

        assert!(matches!(
            repo.add_reminder("   ", time("08:00")),
            Err(crate::Error::Records(Error::EmptyField("reminder title")))
        ));
        assert!(repo.reminders().unwrap().is_empty());
    }

    #[test]
    fn test_remove() {
        let repo = Repository::mock();

        let keep = repo.add_reminder("Evening walk", time("18:30")).unwrap();
        let gone = repo.add_reminder("Take aspirin", time("08:00")).unwrap();

        repo.remove_reminder(gone.id()).unwrap();

        assert_eq!(repo.reminders().unwrap(), vec![keep]);
    }
}
