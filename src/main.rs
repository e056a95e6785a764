// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;

mod api;
mod assignments;
mod lookup;
mod reports;
mod settings;
mod ui;

use api::ApiPlugin;
use assignments::AssignmentsPlugin;
use lookup::LookupPlugin;
use reports::ReportsPlugin;
use ui::AppUiPlugin;

fn main() {
    dotenvy::dotenv().ok();

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Order Desk".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_tokio_tasks=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(ApiPlugin)
        .add_plugins(LookupPlugin)
        .add_plugins(ReportsPlugin)
        .add_plugins(AssignmentsPlugin)
        .add_plugins(AppUiPlugin)
        .run();
}
