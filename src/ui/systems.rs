// src/ui/systems.rs

use bevy::prelude::*;
use std::any;

use super::{OperationFeedback, UiFeedbackState};

/// Collapses this frame's feedback events into the status line. The first
/// non-error message wins; otherwise the last error sticks.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<OperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        if !event.is_error {
            break;
        }
    }
    if let Some((message, is_error)) = last_message {
        ui_feedback_state.last_message = message;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Bridge for background tasks: a task inserts `SendEvent<E>` on a scratch
/// entity from the main-thread callback, and `forward_events::<E>` turns it
/// into a regular Bevy event on the next update.
#[derive(Component)]
pub struct SendEvent<E: Event> {
    pub event: E,
}

pub fn forward_events<E: Event + Clone + std::fmt::Debug>(
    mut commands: Commands,
    mut writer: EventWriter<E>,
    query: Query<(Entity, &SendEvent<E>)>,
    mut event_type_name: Local<String>,
) {
    if event_type_name.is_empty() {
        *event_type_name = any::type_name::<E>()
            .split("::")
            .last()
            .unwrap_or("UnknownEvent")
            .to_string();
    }

    for (entity, send_event) in query.iter() {
        debug!("Forwarding '{}': {:?}", *event_type_name, send_event.event);
        writer.write(send_event.event.clone());
        commands.entity(entity).despawn();
    }
}
