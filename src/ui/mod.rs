// src/ui/mod.rs

use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use elements::workspace::workspace_ui;
use systems::handle_ui_feedback;

/// Latest operation outcome shown on the status line.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// User-visible outcome of an operation. Collapsed into `UiFeedbackState` by
/// `handle_ui_feedback`; never a dialog or a navigation change.
#[derive(Event, Debug, Clone)]
pub struct OperationFeedback {
    pub message: String,
    pub is_error: bool,
}

impl OperationFeedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Window chrome: status line plus the assignment and report panels.
pub struct AppUiPlugin;

impl Plugin for AppUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .add_event::<OperationFeedback>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, workspace_ui);

        info!("AppUiPlugin initialized.");
    }
}
