//! Core library for Zenith, a desktop healthcare companion.
//!
//! All persistent state flows through the [`Repository`]: health records
//! (reminders, appointments, prescriptions, feedback, the health profile),
//! the session (theme and signed-in user), and the slot store that backs
//! them. The GUI and CLI crates only ever talk to the [`Repository`].

use thiserror::Error;

pub mod fs;
pub mod repository;
pub mod wellness;

pub use repository::Repository;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for [`Repository`] operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Records(#[from] repository::records::Error),
    #[error(transparent)]
    Store(#[from] repository::store::Error),
    #[error(transparent)]
    Auth(#[from] repository::auth::Error),
}
