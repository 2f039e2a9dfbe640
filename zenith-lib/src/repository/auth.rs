//! Sign-in seam for the identity provider.
//!
//! The hosted provider is an external service; everything here is the
//! client-side contract. Whatever implements [`IdentityProvider`] hands back
//! an [`Identity`], which the session persists in the `user` slot.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("The identity provider is unavailable: {0}")]
    Unavailable(String),
}

/// The signed-in user, as returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

/// A service that can authenticate the user.
pub trait IdentityProvider {
    /// Sign in with an email address and password.
    fn sign_in(&self, email: &str, password: &str) -> Result<Identity>;

    /// Sign in through the provider's federated flow.
    fn sign_in_federated(&self) -> Result<Identity>;
}

/// Provider that authenticates against local rules: any well-formed email
/// with a non-empty password is accepted, and the display name is the email's
/// local part. Deployments slot a hosted client behind the same trait.
#[derive(Debug, Default, Clone)]
pub struct LocalProvider {
    federated: Option<Identity>,
}

impl LocalProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link a federated account, making [`IdentityProvider::sign_in_federated`]
    /// succeed with `identity`.
    pub fn with_federated(identity: Identity) -> Self {
        Self {
            federated: Some(identity),
        }
    }
}

impl IdentityProvider for LocalProvider {
    fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        let (local_part, domain) = email.split_once('@').ok_or(Error::InvalidCredentials)?;
        if local_part.is_empty() || domain.is_empty() || password.is_empty() {
            return Err(Error::InvalidCredentials);
        }

        Ok(Identity {
            email: email.to_string(),
            name: local_part.to_string(),
        })
    }

    fn sign_in_federated(&self) -> Result<Identity> {
        self.federated.clone().ok_or_else(|| {
            Error::Unavailable("no federated account is linked on this device".to_string())
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Error, Identity, IdentityProvider, LocalProvider};

    #[test]
    fn test_sign_in_derives_name_from_email() {
        let provider = LocalProvider::new();

        let identity = provider.sign_in("ada@example.com", "hunter2").unwrap();

        assert_eq!(identity.name, "ada");
        assert_eq!(identity.email, "ada@example.com");
    }

    #[test]
    fn test_sign_in_rejects_malformed_credentials() {
        let provider = LocalProvider::new();

        assert!(matches!(
            provider.sign_in("not-an-email", "hunter2"),
            Err(Error::InvalidCredentials)
        ));
        assert!(matches!(
            provider.sign_in("ada@example.com", ""),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_federated_requires_linked_account() {
        assert!(matches!(
            LocalProvider::new().sign_in_federated(),
            Err(Error::Unavailable(_))
        ));

        let identity = Identity {
            email: "ada@example.com".into(),
            name: "Ada".into(),
        };
        let provider = LocalProvider::with_federated(identity.clone());
        assert_eq!(provider.sign_in_federated().unwrap(), identity);
    }
}
