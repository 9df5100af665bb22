//! Content item records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LaunchError, Result};

/// The parts of a placed content item that launch helpers need
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Content item id
    pub id: String,

    /// Secret minted when the item was placed
    #[serde(default)]
    pub placement_secret: Option<String>,

    /// JSON object string of per-item settings
    #[serde(default)]
    pub settings: Option<String>,
}

impl ContentRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_placement_secret(mut self, secret: impl Into<String>) -> Self {
        self.placement_secret = Some(secret.into());
        self
    }

    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    /// Session key this item's launch code is stored under
    pub fn launch_code_key(&self) -> String {
        ltigate_crypto::launch_code_key(&self.id)
    }

    /// Launch code bound to this item's id and placement secret
    pub fn launch_code(&self) -> Result<String> {
        let secret = self
            .placement_secret
            .as_deref()
            .ok_or_else(|| LaunchError::MissingPlacementSecret(self.id.clone()))?;
        Ok(ltigate_crypto::launch_code(&self.id, secret)?)
    }

    /// Whether `code` was issued for this item
    ///
    /// An item without a placement secret accepts no code.
    pub fn check_launch_code(&self, code: &str) -> bool {
        match self.placement_secret.as_deref() {
            Some(secret) => ltigate_crypto::check_launch_code(&self.id, secret, code),
            None => {
                debug!(id = %self.id, "No placement secret, rejecting launch code");
                false
            }
        }
    }

    /// Settings parsed as a JSON object
    ///
    /// Missing or blank settings are an empty object.
    pub fn settings_object(&self) -> Result<Map<String, Value>> {
        let Some(settings) = self.settings.as_deref().filter(|s| !s.trim().is_empty()) else {
            return Ok(Map::new());
        };

        match serde_json::from_str::<Value>(settings)? {
            Value::Object(map) => Ok(map),
            _ => Err(LaunchError::SettingsNotObject),
        }
    }

    /// Replaces the settings with a serialized JSON object
    pub fn set_settings_object(&mut self, settings: Map<String, Value>) -> Result<()> {
        self.settings = Some(serde_json::to_string(&Value::Object(settings))?);
        Ok(())
    }
}
