// src/api/plugin.rs

use bevy::prelude::*;

use super::client::ApiClient;
use crate::settings::{self, API_BASE_ENV};

/// Loads settings and inserts the shared `ApiClient` resource.
pub struct ApiPlugin;

impl Plugin for ApiPlugin {
    fn build(&self, app: &mut App) {
        let app_settings = settings::load_or_default();
        let base_url = std::env::var(API_BASE_ENV)
            .unwrap_or_else(|_| app_settings.api_base_url.clone());

        info!("ApiPlugin initialized with base URL {}", base_url);
        app.insert_resource(app_settings);
        app.insert_resource(ApiClient::new(base_url));
    }
}
