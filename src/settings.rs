use kvstore::{KVDb, KVStoreError};
use serde::{Deserialize, Serialize};

use crate::constants::keys;

/// Temperature unit preference shown on the watch. `C` unless the
/// configuration tool explicitly set `F`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub enum Units {
    #[default]
    C,
    F,
}

/// Watch settings blob, written externally under a fixed key. Unknown or
/// missing fields fall back to defaults; there is no validation or migration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub owm_api_key: String,
    pub units: Units,
}

impl Settings {
    /// The weather API key, or None when unconfigured or blank.
    pub fn api_key(&self) -> Option<&str> {
        let key = self.owm_api_key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// Unit system parameter for the weather API request.
    pub fn units_param(&self) -> &'static str {
        match self.units {
            Units::F => "imperial",
            Units::C => "metric",
        }
    }
}

pub fn load(kvs: &KVDb) -> Result<Settings, KVStoreError> {
    Ok(kvs.get(keys::SETTINGS)?.unwrap_or_default())
}
