use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::repository::{
    records::{Record, RecordId, Result, require},
    store::Store,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PrescriptionStatus {
    Active,
    Completed,
}

/// A tracked medication.
///
/// Requesting a refill keeps the prescription active and bumps its refill
/// count; finishing a course is the separate [`Prescription::complete`]
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Prescription {
    #[getset(get_copy = "pub")]
    id: RecordId,
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    dosage: String,
    #[getset(get = "pub")]
    frequency: String,
    #[getset(get_copy = "pub")]
    status: PrescriptionStatus,
    #[serde(default)]
    #[getset(get_copy = "pub")]
    refills: u32,
}

impl Prescription {
    fn new(id: RecordId, name: &str, dosage: &str, frequency: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            status: PrescriptionStatus::Active,
            refills: 0,
        }
    }

    /// Create a prescription and append it to the collection. New
    /// prescriptions always start out active.
    pub(crate) fn add(store: &Store, name: &str, dosage: &str, frequency: &str) -> Result<Self> {
        let name = require("medication name", name)?;
        let dosage = require("dosage", dosage)?;
        let frequency = require("frequency", frequency)?;

        let prescription = Self::new(store.allocate_id()?, &name, &dosage, &frequency);
        store.append(prescription.clone())?;

        debug!("Added prescription: {name}");

        Ok(prescription)
    }

    /// The stored collection. A store that has never held prescriptions is
    /// seeded with the two defaults, which are persisted immediately.
    pub(crate) fn list_or_seed(store: &Store) -> Result<Vec<Self>> {
        if let Some(prescriptions) = store.load_if_present()? {
            return Ok(prescriptions);
        }

        let defaults = vec![
            Self::new(store.allocate_id()?, "Aspirin", "500mg", "Twice daily"),
            Self::new(store.allocate_id()?, "Vitamin D", "1000 IU", "Once daily"),
        ];
        store.save_all(&defaults)?;

        debug!("Seeded default prescriptions");

        Ok(defaults)
    }

    /// Request a refill. The prescription stays active.
    pub(crate) fn request_refill(store: &Store, id: RecordId) -> Result<Self> {
        let prescription = store.update(id, |prescription: &mut Self| {
            prescription.refills = prescription.refills.saturating_add(1);
        })?;

        debug!("Requested refill for prescription {id}");

        Ok(prescription)
    }

    /// Finish a course of medication.
    pub(crate) fn complete(store: &Store, id: RecordId) -> Result<Self> {
        let prescription = store.update(id, |prescription: &mut Self| {
            prescription.status = PrescriptionStatus::Completed;
        })?;

        debug!("Completed prescription {id}");

        Ok(prescription)
    }
}

impl Record for Prescription {
    const SLOT: &'static str = "prescriptions";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod test {
    use super::PrescriptionStatus;
    use crate::Repository;

    #[test]
    fn test_first_load_seeds_defaults() {
        let repo = Repository::mock();

        let prescriptions = repo.prescriptions().unwrap();

        assert_eq!(prescriptions.len(), 2);
        let aspirin = prescriptions.first().unwrap();
        assert_eq!(aspirin.name(), "Aspirin");
        assert_eq!(aspirin.dosage(), "500mg");
        assert_eq!(aspirin.frequency(), "Twice daily");
        let vitamin_d = prescriptions.get(1).unwrap();
        assert_eq!(vitamin_d.name(), "Vitamin D");
        assert_eq!(vitamin_d.dosage(), "1000 IU");
        assert_eq!(vitamin_d.frequency(), "Once daily");
        assert!(
            prescriptions
                .iter()
                .all(|p| p.status() == PrescriptionStatus::Active)
        );

        // Seeding happens once, not on every load
        assert_eq!(repo.prescriptions().unwrap(), prescriptions);
    }

    #[test]
    fn test_add() {
        let repo = Repository::mock();
        repo.prescriptions().unwrap();

        let added = repo
            .add_prescription("Lisinopril", "10mg", "Once daily")
            .unwrap();

        assert_eq!(added.status(), PrescriptionStatus::Active);
        assert_eq!(repo.prescriptions().unwrap().len(), 3);
    }

    #[test]
    fn test_refill_keeps_prescription_active() {
        let repo = Repository::mock();
        let prescriptions = repo.prescriptions().unwrap();
        let aspirin = prescriptions.first().unwrap();

        let refilled = repo.request_refill(aspirin.id()).unwrap();

        assert_eq!(refilled.status(), PrescriptionStatus::Active);
        assert_eq!(refilled.refills(), 1);
    }

    #[test]
    fn test_complete() {
        let repo = Repository::mock();
        let prescriptions = repo.prescriptions().unwrap();
        let aspirin = prescriptions.first().unwrap();

        let completed = repo.complete_prescription(aspirin.id()).unwrap();

        assert_eq!(completed.status(), PrescriptionStatus::Completed);

        // The other seeded prescription is untouched
        let reloaded = repo.prescriptions().unwrap();
        assert_eq!(
            reloaded.get(1).unwrap().status(),
            PrescriptionStatus::Active
        );
    }
}
