// src/assignments/systems.rs

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use super::events::{AssignmentSaveCompleted, AssignmentSubmitted};
use super::plugin::AssignmentFormState;
use crate::api::ApiClient;
use crate::lookup::events::SelectionChanged;
use crate::lookup::{SelectorHub, SelectorId};
use crate::ui::systems::SendEvent;
use crate::ui::OperationFeedback;

/// Mirrors picker commits/clears into the form's id fields.
pub fn track_selection_changes(
    mut selections: EventReader<SelectionChanged>,
    mut form: ResMut<AssignmentFormState>,
) {
    for selection in selections.read() {
        let target = match selection.selector {
            SelectorId::AssignmentRequisition => &mut form.requisition_id,
            SelectorId::AssignmentVendor => &mut form.vendor_id,
            SelectorId::AssignmentProduct => &mut form.product_id,
            SelectorId::ReportRequisition => continue,
        };
        *target = selection.selected_id.clone();
        debug!(
            "Assignment form {:?} -> '{}'",
            selection.selector, selection.selected_id
        );
    }
}

pub fn handle_assignment_submissions(
    mut submissions: EventReader<AssignmentSubmitted>,
    mut form: ResMut<AssignmentFormState>,
    api: Res<ApiClient>,
    runtime: Res<TokioTasksRuntime>,
    mut commands: Commands,
) {
    for submission in submissions.read() {
        if form.save_in_flight {
            debug!("Assignment save already in flight, ignoring submission.");
            continue;
        }
        form.save_in_flight = true;
        info!(
            "Saving assignment of vendor '{}' to requisition '{}'",
            submission.draft.vendor_id, submission.draft.requisition_id
        );

        let draft = submission.draft.clone();
        let api = api.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.create_assignment(&draft).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<AssignmentSaveCompleted> {
                        event: AssignmentSaveCompleted { result },
                    });
            })
            .await;
        });
    }
}

pub fn handle_assignment_save_results(
    mut completions: EventReader<AssignmentSaveCompleted>,
    mut form: ResMut<AssignmentFormState>,
    mut hub: ResMut<SelectorHub>,
    mut feedback: EventWriter<OperationFeedback>,
) {
    for completion in completions.read() {
        form.save_in_flight = false;
        match &completion.result {
            Ok(saved) => {
                info!("Assignment {} saved.", saved.id);
                feedback.write(OperationFeedback::info(format!(
                    "Assignment {} saved.",
                    saved.id
                )));
                form.last_saved = Some(saved.clone());
                form.requisition_id.clear();
                form.vendor_id.clear();
                form.product_id.clear();
                form.note.clear();
                hub.state_mut(SelectorId::AssignmentRequisition).clear();
                hub.state_mut(SelectorId::AssignmentVendor).clear();
                hub.state_mut(SelectorId::AssignmentProduct).clear();
            }
            Err(e) => {
                error!("Assignment save failed: {}", e);
                feedback.write(OperationFeedback::error(format!(
                    "Assignment save failed: {e}"
                )));
            }
        }
    }
}
