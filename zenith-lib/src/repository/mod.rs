use chrono::{Local, NaiveDate, NaiveTime};

use crate::{
    Result,
    repository::{auth::Identity, store::Store},
};

pub mod auth;
pub mod records;
pub mod session;
pub mod store;

pub use records::{
    Appointment, AppointmentFilter, AppointmentStatus, BloodType, Feedback, FeedbackKind,
    HealthProfile, Prescription, PrescriptionStatus, Rating, Record, RecordId, Reminder,
};
pub use session::{Session, ThemeMode};

/// Central access point for all persistent data.
///
/// The [`Repository`] owns the slot store and the session and provides a
/// single, consistent interface for reading and writing health records. Views
/// and CLI handlers hold a clone of it and never touch the store directly.
#[derive(Clone, Debug)]
pub struct Repository {
    store: Store,
    session: Session,
}

impl Repository {
    pub fn new() -> Result<Self> {
        let store = Store::new();
        let session = Session::load(store.clone())?;

        Ok(Self { store, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // Reminders

    pub fn reminders(&self) -> Result<Vec<Reminder>> {
        Ok(Reminder::list(&self.store)?)
    }

    pub fn add_reminder(&self, title: &str, time: NaiveTime) -> Result<Reminder> {
        Ok(Reminder::add(&self.store, title, time)?)
    }

    pub fn remove_reminder(&self, id: RecordId) -> Result<()> {
        Ok(Reminder::remove(&self.store, id)?)
    }

    // Appointments

    pub fn appointments(&self) -> Result<Vec<Appointment>> {
        Ok(Appointment::list(&self.store)?)
    }

    pub fn book_appointment(
        &self,
        doctor: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Appointment> {
        Ok(Appointment::book(&self.store, doctor, date, time)?)
    }

    pub fn cancel_appointment(&self, id: RecordId) -> Result<Appointment> {
        Ok(Appointment::cancel(&self.store, id)?)
    }

    pub fn complete_appointment(&self, id: RecordId) -> Result<Appointment> {
        Ok(Appointment::complete(&self.store, id)?)
    }

    // Prescriptions

    /// The stored prescriptions, seeding the defaults on the very first load.
    pub fn prescriptions(&self) -> Result<Vec<Prescription>> {
        Ok(Prescription::list_or_seed(&self.store)?)
    }

    pub fn add_prescription(
        &self,
        name: &str,
        dosage: &str,
        frequency: &str,
    ) -> Result<Prescription> {
        Ok(Prescription::add(&self.store, name, dosage, frequency)?)
    }

    pub fn request_refill(&self, id: RecordId) -> Result<Prescription> {
        Ok(Prescription::request_refill(&self.store, id)?)
    }

    pub fn complete_prescription(&self, id: RecordId) -> Result<Prescription> {
        Ok(Prescription::complete(&self.store, id)?)
    }

    // Feedback

    pub fn feedbacks(&self) -> Result<Vec<Feedback>> {
        Ok(Feedback::list(&self.store)?)
    }

    pub fn submit_feedback(
        &self,
        name: &str,
        rating: Rating,
        kind: FeedbackKind,
        message: &str,
    ) -> Result<Feedback> {
        let date = Local::now().date_naive();

        Ok(Feedback::submit(
            &self.store,
            name,
            rating,
            kind,
            message,
            date,
        )?)
    }

    // Health profile

    pub fn health_profile(&self) -> Result<HealthProfile> {
        Ok(HealthProfile::load(&self.store, self.session.user().as_ref())?)
    }

    pub fn save_health_profile(&self, profile: &HealthProfile) -> Result<()> {
        Ok(HealthProfile::save(&self.store, profile)?)
    }

    // Session

    pub fn sign_in(&self, identity: Identity, remember: bool) -> Result<()> {
        Ok(self.session.sign_in(identity, remember)?)
    }

    pub fn sign_out(&self) -> Result<()> {
        Ok(self.session.sign_out()?)
    }

    /// A mock [`Repository`] over an in-memory store, for tests.
    #[cfg(test)]
    pub(crate) fn mock() -> Self {
        let store = Store::in_memory();
        let session = Session::load(store.clone()).expect("an empty store must load");

        Self { store, session }
    }
}

#[cfg(test)]
mod test {
    use super::Repository;
    use crate::repository::auth::Identity;

    #[test]
    fn test_sign_in_then_out() {
        let repo = Repository::mock();
        assert!(!repo.session().is_signed_in());

        repo.sign_in(
            Identity {
                email: "ada@example.com".into(),
                name: "ada".into(),
            },
            false,
        )
        .unwrap();
        assert!(repo.session().is_signed_in());

        repo.sign_out().unwrap();
        assert!(!repo.session().is_signed_in());
    }

    #[test]
    fn test_features_do_not_share_slots() {
        let repo = Repository::mock();

        let time = chrono::NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        repo.add_reminder("Take aspirin", time).unwrap();

        assert!(repo.appointments().unwrap().is_empty());
        assert!(repo.feedbacks().unwrap().is_empty());
    }
}
