use chrono::NaiveDate;
use getset::{CopyGetters, Getters, Setters};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::repository::{auth::Identity, records::Result, store::Store};

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum BloodType {
    #[default]
    #[serde(rename = "O+")]
    #[strum(serialize = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    #[strum(serialize = "O-")]
    ONegative,
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APositive,
    #[serde(rename = "A-")]
    #[strum(serialize = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    #[strum(serialize = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    #[strum(serialize = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    #[strum(serialize = "AB-")]
    AbNegative,
}

/// The per-device health profile.
///
/// A singleton rather than a collection: saving replaces the stored profile
/// outright.
#[derive(
    Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters, Setters,
)]
pub struct HealthProfile {
    #[getset(get = "pub", set = "pub")]
    name: String,
    #[getset(get = "pub", set = "pub")]
    email: String,
    #[getset(get = "pub", set = "pub")]
    phone: String,
    #[getset(get_copy = "pub", set = "pub")]
    dob: Option<NaiveDate>,
    #[serde(rename = "bloodType")]
    #[getset(get_copy = "pub", set = "pub")]
    blood_type: BloodType,
    #[getset(get = "pub", set = "pub")]
    height: String,
    #[getset(get = "pub", set = "pub")]
    weight: String,
    #[getset(get = "pub", set = "pub")]
    allergies: String,
}

impl HealthProfile {
    const SLOT: &'static str = "userProfile";

    /// The stored profile, or a fresh one prefilled from the signed-in
    /// identity when nothing has been saved yet.
    pub(crate) fn load(store: &Store, identity: Option<&Identity>) -> Result<Self> {
        if let Some(profile) = store.read_value(Self::SLOT)? {
            return Ok(profile);
        }

        let mut profile = Self::default();
        if let Some(identity) = identity {
            profile.name = identity.name.clone();
            profile.email = identity.email.clone();
        }

        Ok(profile)
    }

    /// Replace the stored profile with `profile`.
    pub(crate) fn save(store: &Store, profile: &Self) -> Result<()> {
        store.write_value(Self::SLOT, profile)?;

        debug!("Saved health profile");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::BloodType;
    use crate::{Repository, repository::auth::Identity};

    #[test]
    fn test_load_prefills_from_identity() {
        let repo = Repository::mock();
        repo.sign_in(
            Identity {
                email: "ada@example.com".into(),
                name: "ada".into(),
            },
            false,
        )
        .unwrap();

        let profile = repo.health_profile().unwrap();

        assert_eq!(profile.name(), "ada");
        assert_eq!(profile.email(), "ada@example.com");
        assert_eq!(profile.blood_type(), BloodType::OPositive);
    }

    #[test]
    fn test_save_overwrites_whole_profile() {
        let repo = Repository::mock();

        let mut profile = repo.health_profile().unwrap();
        profile.set_name("Ada Lovelace".into());
        profile.set_blood_type(BloodType::AbNegative);
        profile.set_height("170 cm".into());
        repo.save_health_profile(&profile).unwrap();

        let mut replacement = repo.health_profile().unwrap();
        assert_eq!(replacement.name(), "Ada Lovelace");
        replacement.set_height(String::new());
        repo.save_health_profile(&replacement).unwrap();

        let reloaded = repo.health_profile().unwrap();
        assert_eq!(reloaded.blood_type(), BloodType::AbNegative);
        assert_eq!(reloaded.height(), "");
    }

    #[test]
    fn test_blood_type_display_round_trips() {
        assert_eq!(BloodType::AbPositive.to_string(), "AB+");
        assert_eq!("AB+".parse::<BloodType>().unwrap(), BloodType::AbPositive);
    }
}
