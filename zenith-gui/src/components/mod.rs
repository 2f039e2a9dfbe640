use chrono::{NaiveDate, NaiveTime};

pub mod appointments;
pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod prescriptions;
pub mod profile;
pub mod wellness;

/// Accept times typed with or without seconds, e.g. "08:30" or "08:30:00".
pub(crate) fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();

    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Accept ISO dates, e.g. "2026-09-01".
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    raw.trim().parse().ok()
}
