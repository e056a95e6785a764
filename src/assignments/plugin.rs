// src/assignments/plugin.rs

use bevy::prelude::*;

use super::events::{AssignmentSaveCompleted, AssignmentSubmitted};
use super::systems::{
    handle_assignment_save_results, handle_assignment_submissions, track_selection_changes,
};
use crate::api::types::SavedAssignmentDto;
use crate::ui::systems::forward_events;

/// State backing the vendor-assignment form. The id fields mirror the picker
/// selections via `SelectionChanged` events rather than reading picker state
/// directly.
#[derive(Resource, Default)]
pub struct AssignmentFormState {
    pub requisition_id: String,
    pub vendor_id: String,
    pub product_id: String,
    pub note: String,
    pub save_in_flight: bool,
    pub last_saved: Option<SavedAssignmentDto>,
}

pub struct AssignmentsPlugin;

impl Plugin for AssignmentsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AssignmentFormState>()
            .add_event::<AssignmentSubmitted>()
            .add_event::<AssignmentSaveCompleted>()
            .add_systems(
                Update,
                (
                    track_selection_changes,
                    handle_assignment_submissions,
                    forward_events::<AssignmentSaveCompleted>,
                    handle_assignment_save_results,
                )
                    .chain(),
            );

        info!("AssignmentsPlugin initialized.");
    }
}
