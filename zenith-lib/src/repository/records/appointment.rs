use chrono::{NaiveDate, NaiveTime};
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
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// A booked visit with a doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct Appointment {
    #[getset(get_copy = "pub")]
    id: RecordId,
    #[getset(get = "pub")]
    doctor: String,
    #[getset(get_copy = "pub")]
    date: NaiveDate,
    #[getset(get_copy = "pub")]
    time: NaiveTime,
    #[getset(get_copy = "pub")]
    status: AppointmentStatus,
}

impl Appointment {
    /// Book an appointment. New appointments always start out upcoming.
    pub(crate) fn book(
        store: &Store,
        doctor: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Self> {
        let doctor = require("doctor name", doctor)?;

        let appointment = Self {
            id: store.allocate_id()?,
            doctor,
            date,
            time,
            status: AppointmentStatus::Upcoming,
        };
        store.append(appointment.clone())?;

        debug!("Booked appointment with {}", appointment.doctor);

        Ok(appointment)
    }

    pub(crate) fn list(store: &Store) -> Result<Vec<Self>> {
        Ok(store.load()?)
    }

    pub(crate) fn cancel(store: &Store, id: RecordId) -> Result<Self> {
        let appointment = store.update(id, |appointment: &mut Self| {
            appointment.status = AppointmentStatus::Cancelled;
        })?;

        debug!("Cancelled appointment {id}");

        Ok(appointment)
    }

    pub(crate) fn complete(store: &Store, id: RecordId) -> Result<Self> {
        let appointment = store.update(id, |appointment: &mut Self| {
            appointment.status = AppointmentStatus::Completed;
        })?;

        debug!("Completed appointment {id}");

        Ok(appointment)
    }
}

impl Record for Appointment {
    const SLOT: &'static str = "appointments";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Which appointments a list view shows.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppointmentFilter {
    #[default]
    All,
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentFilter {
    pub fn matches(self, appointment: &Appointment) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => appointment.status() == AppointmentStatus::Upcoming,
            Self::Completed => appointment.status() == AppointmentStatus::Completed,
            Self::Cancelled => appointment.status() == AppointmentStatus::Cancelled,
        }
    }

    /// The matching subset of `appointments`, in their original order.
    pub fn apply(self, appointments: &[Appointment]) -> Vec<Appointment> {
        appointments
            .iter()
            .filter(|appointment| self.matches(appointment))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, NaiveTime};

    use super::{AppointmentFilter, AppointmentStatus};
    use crate::Repository;

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    fn time(raw: &str) -> NaiveTime {
        NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
    }

    #[test]
    fn test_book() {
        let repo = Repository::mock();

        let appointment = repo
            .book_appointment("Chen", date("2026-09-01"), time("10:15"))
            .unwrap();

        assert_eq!(appointment.status(), AppointmentStatus::Upcoming);
        assert_eq!(repo.appointments().unwrap().len(), 1);
    }

    #[test]
    fn test_cancel_leaves_other_records_unchanged() {
        let repo = Repository::mock();

        let cancelled = repo
            .book_appointment("Chen", date("2026-09-01"), time("10:15"))
            .unwrap();
        let untouched = repo
            .book_appointment("Okafor", date("2026-09-02"), time("14:00"))
            .unwrap();

        repo.cancel_appointment(cancelled.id()).unwrap();

        let appointments = repo.appointments().unwrap();
        let first = appointments.first().unwrap();
        assert_eq!(first.status(), AppointmentStatus::Cancelled);
        assert_eq!(first.doctor(), cancelled.doctor());
        assert_eq!(appointments.get(1), Some(&untouched));
    }

    #[test]
    fn test_complete() {
        let repo = Repository::mock();

        let appointment = repo
            .book_appointment("Chen", date("2026-09-01"), time("10:15"))
            .unwrap();

        let completed = repo.complete_appointment(appointment.id()).unwrap();

        assert_eq!(completed.status(), AppointmentStatus::Completed);
    }

    #[test]
    fn test_filter_matches_status_in_order() {
        let repo = Repository::mock();

        let first = repo
            .book_appointment("Chen", date("2026-09-01"), time("10:15"))
            .unwrap();
        let cancelled = repo
            .book_appointment("Okafor", date("2026-09-02"), time("14:00"))
            .unwrap();
        let second = repo
            .book_appointment("Laurent", date("2026-09-03"), time("09:30"))
            .unwrap();
        repo.cancel_appointment(cancelled.id()).unwrap();

        let appointments = repo.appointments().unwrap();
        let upcoming = AppointmentFilter::Upcoming.apply(&appointments);

        assert_eq!(upcoming, vec![first, second]);
        assert_eq!(AppointmentFilter::All.apply(&appointments).len(), 3);
        assert_eq!(AppointmentFilter::Cancelled.apply(&appointments).len(), 1);
    }
}
