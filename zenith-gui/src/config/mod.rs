use std::{fs, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use zenith_lib::{fs::config_dir, repository::AppointmentFilter, wellness::Category};

const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI's preferences
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// GUI-only preferences, serialized to TOML.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    pub appointments: Appointments,
    pub wellness: Wellness,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Appointments {
    /// The last selected status filter
    pub filter: AppointmentFilter,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Wellness {
    /// The last selected article category, if any
    pub category: Option<Category>,
}

impl GuiConfig {
    pub fn load() -> Self {
        let path = config_dir().join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path).unwrap();
            toml::from_str(&contents).unwrap_or_default()
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let contents = toml::to_string_pretty(self).unwrap();

        // Make sure config_dir exists
        fs::create_dir_all(config_dir()).unwrap();

        fs::write(config_dir().join(FILE_NAME), contents).unwrap();
    }
}
