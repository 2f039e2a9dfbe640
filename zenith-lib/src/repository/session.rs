//! Application-scoped session state.
//!
//! The theme preference and signed-in user are read from their slots once at
//! startup and held here; views receive the session through the repository
//! instead of reading the slots themselves.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use crate::repository::{
    auth::Identity,
    store::{Result, Store},
};

const THEME_SLOT: &str = "theme";
const USER_SLOT: &str = "user";
const REMEMBER_EMAIL_SLOT: &str = "rememberEmail";

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Session state shared by every view.
#[derive(Debug, Clone)]
pub struct Session {
    store: Store,
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    theme: ThemeMode,
    user: Option<Identity>,
    remember_email: Option<String>,
}

impl Session {
    /// Read the session slots once and build the shared state.
    ///
    /// An unreadable theme value falls back to the default rather than
    /// failing startup.
    pub(crate) fn load(store: Store) -> Result<Self> {
        let theme = store
            .read_text(THEME_SLOT)?
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_default();
        let user = store.read_value(USER_SLOT)?;
        let remember_email = store.read_text(REMEMBER_EMAIL_SLOT)?;

        Ok(Self {
            store,
            state: Arc::new(RwLock::new(State {
                theme,
                user,
                remember_email,
            })),
        })
    }

    pub fn theme(&self) -> ThemeMode {
        self.state.read().theme
    }

    pub fn set_theme(&self, theme: ThemeMode) -> Result<()> {
        self.store.write_text(THEME_SLOT, &theme.to_string())?;
        self.state.write().theme = theme;

        debug!("Theme set to {theme}");

        Ok(())
    }

    /// Flip between light and dark and persist the choice.
    pub fn toggle_theme(&self) -> Result<ThemeMode> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;

        Ok(theme)
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.read().user.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.read().user.is_some()
    }

    /// Email to prefill the login form with, if the user opted in.
    pub fn remember_email(&self) -> Option<String> {
        self.state.read().remember_email.clone()
    }

    pub(crate) fn sign_in(&self, identity: Identity, remember: bool) -> Result<()> {
        self.store.write_value(USER_SLOT, &identity)?;
        if remember {
            self.store
                .write_text(REMEMBER_EMAIL_SLOT, &identity.email)?;
            self.state.write().remember_email = Some(identity.email.clone());
        }
        self.state.write().user = Some(identity);

        debug!("Signed in");

        Ok(())
    }

    pub(crate) fn sign_out(&self) -> Result<()> {
        self.store.clear(USER_SLOT)?;
        self.state.write().user = None;

        debug!("Signed out");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Session, ThemeMode};
    use crate::repository::{auth::Identity, store::Store};

    fn identity() -> Identity {
        Identity {
            email: "ada@example.com".into(),
            name: "ada".into(),
        }
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = Store::in_memory();
        let session = Session::load(store.clone()).unwrap();

        assert_eq!(session.theme(), ThemeMode::Light);
        assert_eq!(session.toggle_theme().unwrap(), ThemeMode::Dark);

        // A fresh session over the same store sees the persisted choice
        let reloaded = Session::load(store).unwrap();
        assert_eq!(reloaded.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_sign_in_with_remember_stores_email() {
        let store = Store::in_memory();
        let session = Session::load(store.clone()).unwrap();

        session.sign_in(identity(), true).unwrap();

        let reloaded = Session::load(store).unwrap();
        assert_eq!(reloaded.user(), Some(identity()));
        assert_eq!(reloaded.remember_email().as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_sign_out_keeps_remembered_email() {
        let store = Store::in_memory();
        let session = Session::load(store.clone()).unwrap();
        session.sign_in(identity(), true).unwrap();

        session.sign_out().unwrap();

        assert!(!session.is_signed_in());
        let reloaded = Session::load(store).unwrap();
        assert!(reloaded.user().is_none());
        assert_eq!(reloaded.remember_email().as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_unreadable_theme_falls_back_to_default() {
        let store = Store::in_memory();
        store.write_text("theme", "sepia").unwrap();

        let session = Session::load(store).unwrap();

        assert_eq!(session.theme(), ThemeMode::Light);
    }
}
