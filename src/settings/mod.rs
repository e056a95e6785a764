pub mod io;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_ENV: &str = "ORDERDESK_API_BASE";

#[derive(Resource, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub api_base_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

/// Loads settings from the platform config directory, falling back to defaults
/// when the file is missing or unreadable.
pub fn load_or_default() -> AppSettings {
    match io::load_settings_from_file::<AppSettings>() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("AppSettings: falling back to defaults: {}", e);
            AppSettings::default()
        }
    }
}
