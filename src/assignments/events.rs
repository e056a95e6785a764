// src/assignments/events.rs

use bevy::prelude::Event;

use crate::api::types::{ApiError, AssignmentDraft, SavedAssignmentDto};

/// The user submitted the assignment form.
#[derive(Event, Debug, Clone)]
pub struct AssignmentSubmitted {
    pub draft: AssignmentDraft,
}

/// The backend answered the save request.
#[derive(Event, Debug, Clone)]
pub struct AssignmentSaveCompleted {
    pub result: Result<SavedAssignmentDto, ApiError>,
}
