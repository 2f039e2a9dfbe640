use std::{collections::HashMap, fs, io, path::PathBuf, sync::Arc};

use derive_more::Deref;
use parking_lot::RwLock;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

use crate::{
    fs::state_dir,
    repository::records::{Record, RecordId},
};

/// Slot holding the id counter. It only ever moves forward.
const NEXT_ID_SLOT: &str = "nextId";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access slot storage: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode slot contents: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("No record with id {0}")]
    UnknownId(RecordId),
}

/// Handle to the slot store backing all persistent data.
///
/// Every piece of state lives in a string-keyed slot: record collections are
/// JSON arrays replaced wholesale on each write, scalar slots (the theme, the
/// remembered email) hold plain text. There is one writer at a time behind the
/// lock; all operations are synchronous.
#[derive(Debug, Clone, Deref)]
pub struct Store {
    #[deref]
    backend: Arc<RwLock<Backend>>,
}

#[derive(Debug)]
pub enum Backend {
    Dir(PathBuf),
    Memory(HashMap<String, String>),
}

impl Backend {
    fn read_slot(&self, slot: &str) -> Result<Option<String>> {
        match self {
            Backend::Dir(dir) => match fs::read_to_string(dir.join(slot)) {
                Ok(contents) => Ok(Some(contents)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            },
            Backend::Memory(slots) => Ok(slots.get(slot).cloned()),
        }
    }

    fn write_slot(&mut self, slot: &str, contents: &str) -> Result<()> {
        match self {
            Backend::Dir(dir) => {
                fs::create_dir_all(&*dir)?;
                fs::write(dir.join(slot), contents)?;
                Ok(())
            }
            Backend::Memory(slots) => {
                slots.insert(slot.to_string(), contents.to_string());
                Ok(())
            }
        }
    }

    fn remove_slot(&mut self, slot: &str) -> Result<()> {
        match self {
            Backend::Dir(dir) => match fs::remove_file(dir.join(slot)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(err.into()),
            },
            Backend::Memory(slots) => {
                slots.remove(slot);
                Ok(())
            }
        }
    }

    fn contains(&self, slot: &str) -> bool {
        match self {
            Backend::Dir(dir) => dir.join(slot).exists(),
            Backend::Memory(slots) => slots.contains_key(slot),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::at(state_dir().join("slots"))
    }

    /// Open a store rooted at the given directory.
    pub fn at(dir: PathBuf) -> Self {
        Self {
            backend: Arc::new(RwLock::new(Backend::Dir(dir))),
        }
    }

    /// Create a memory backed store for use in tests.
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        Self {
            backend: Arc::new(RwLock::new(Backend::Memory(HashMap::new()))),
        }
    }

    // Scalar slots

    pub fn read_text(&self, slot: &str) -> Result<Option<String>> {
        self.read().read_slot(slot)
    }

    pub fn write_text(&self, slot: &str, contents: &str) -> Result<()> {
        self.write().write_slot(slot, contents)
    }

    pub fn clear(&self, slot: &str) -> Result<()> {
        self.write().remove_slot(slot)
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.read().contains(slot)
    }

    /// Read a single JSON-encoded value from `slot`.
    ///
    /// An absent slot yields `None`. So does a slot whose contents no longer
    /// parse; corruption is logged and treated as absence rather than
    /// surfaced to every caller.
    pub fn read_value<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>> {
        let Some(contents) = self.read().read_slot(slot)? else {
            return Ok(None);
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("Discarding unreadable contents of slot '{slot}': {err}");
                Ok(None)
            }
        }
    }

    /// Serialize `value` into `slot`, replacing whatever was there.
    pub fn write_value<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let contents = serde_json::to_string(value)?;
        self.write().write_slot(slot, &contents)
    }

    // Record collections

    /// Load every record in `R`'s slot.
    ///
    /// An absent slot yields an empty collection, and so does one whose
    /// contents no longer parse.
    pub fn load<R: Record>(&self) -> Result<Vec<R>> {
        Ok(self.load_if_present()?.unwrap_or_default())
    }

    /// Like [`Store::load`], but distinguishes a slot that has never been
    /// written (`None`) from one holding an empty or unreadable collection.
    pub fn load_if_present<R: Record>(&self) -> Result<Option<Vec<R>>> {
        let Some(contents) = self.read().read_slot(R::SLOT)? else {
            return Ok(None);
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(Some(records)),
            Err(err) => {
                warn!("Discarding unreadable contents of slot '{}': {err}", R::SLOT);
                Ok(Some(Vec::new()))
            }
        }
    }

    /// Serialize `records` into `R`'s slot, replacing the prior collection.
    pub fn save_all<R: Record>(&self, records: &[R]) -> Result<()> {
        let contents = serde_json::to_string(records)?;
        self.write().write_slot(R::SLOT, &contents)
    }

    pub fn append<R: Record>(&self, record: R) -> Result<()> {
        let mut records = self.load::<R>()?;
        records.push(record);
        self.save_all(&records)
    }

    /// Apply `f` to the record with the given id and persist the whole
    /// collection. Returns the updated record.
    pub fn update<R, F>(&self, id: RecordId, f: F) -> Result<R>
    where
        R: Record,
        F: FnOnce(&mut R),
    {
        let mut records = self.load::<R>()?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(Error::UnknownId(id))?;

        f(record);
        let updated = record.clone();

        self.save_all(&records)?;

        Ok(updated)
    }

    pub fn remove<R: Record>(&self, id: RecordId) -> Result<()> {
        let mut records = self.load::<R>()?;
        let before = records.len();
        records.retain(|record| record.id() != id);

        if records.len() == before {
            return Err(Error::UnknownId(id));
        }

        self.save_all(&records)
    }

    /// Allocate the next [`RecordId`].
    ///
    /// The counter lives in its own slot and is bumped under the store's
    /// write lock, so records created back to back can never share an id.
    pub fn allocate_id(&self) -> Result<RecordId> {
        let mut backend = self.write();

        let next = backend
            .read_slot(NEXT_ID_SLOT)?
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(1);
        backend.write_slot(NEXT_ID_SLOT, &next.saturating_add(1).to_string())?;

        Ok(RecordId::from(next))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveTime;

    use super::*;
    use crate::repository::records::Reminder;

    fn time(raw: &str) -> NaiveTime {
        NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
    }

    #[test]
    fn test_allocate_id_is_monotonic() {
        let store = Store::in_memory();

        let first = store.allocate_id().unwrap();
        let second = store.allocate_id().unwrap();

        assert!(second > first);
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let store = Store::in_memory();

        assert!(store.load::<Reminder>().unwrap().is_empty());
        assert!(store.load_if_present::<Reminder>().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        let store = Store::in_memory();

        store.write_text(Reminder::SLOT, "{not json").unwrap();

        assert!(store.load::<Reminder>().unwrap().is_empty());
        // The slot was written, so it does not count as never-written
        assert_eq!(store.load_if_present::<Reminder>().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_update_unknown_id() {
        let store = Store::in_memory();
        let id = store.allocate_id().unwrap();

        assert!(matches!(
            store.update::<Reminder, _>(id, |_| {}),
            Err(Error::UnknownId(_))
        ));
        assert!(matches!(
            store.remove::<Reminder>(id),
            Err(Error::UnknownId(_))
        ));
    }

    #[test]
    fn test_save_round_trips_across_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let reminders = {
            let store = Store::at(dir.path().to_path_buf());
            let first = Reminder::new(store.allocate_id().unwrap(), "Take aspirin", time("08:00"));
            let second = Reminder::new(store.allocate_id().unwrap(), "Evening walk", time("18:30"));
            let reminders = vec![first, second];
            store.save_all(&reminders).unwrap();
            reminders
        };

        let reopened = Store::at(dir.path().to_path_buf());
        assert_eq!(reopened.load::<Reminder>().unwrap(), reminders);
    }

    #[test]
    fn test_counter_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let first = Store::at(dir.path().to_path_buf()).allocate_id().unwrap();
        let second = Store::at(dir.path().to_path_buf()).allocate_id().unwrap();

        assert!(second > first);
    }
}
