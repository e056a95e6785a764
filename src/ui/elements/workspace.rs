// src/ui/elements/workspace.rs

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::assignment_panel::show_assignment_panel;
use super::report_panel::show_report_panel;
use crate::assignments::events::AssignmentSubmitted;
use crate::assignments::AssignmentFormState;
use crate::lookup::events::SelectionChanged;
use crate::lookup::SelectorHub;
use crate::reports::events::RequestReportDownload;
use crate::reports::ReportPanelState;
use crate::ui::UiFeedbackState;

#[allow(clippy::too_many_arguments)]
pub fn workspace_ui(
    mut contexts: EguiContexts,
    mut hub: ResMut<SelectorHub>,
    mut report_panel: ResMut<ReportPanelState>,
    mut form: ResMut<AssignmentFormState>,
    ui_feedback: Res<UiFeedbackState>,
    mut report_writer: EventWriter<RequestReportDownload>,
    mut submit_writer: EventWriter<AssignmentSubmitted>,
    mut selection_writer: EventWriter<SelectionChanged>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Order Desk");
            ui.separator();
            if !ui_feedback.last_message.is_empty() {
                let color = if ui_feedback.is_error {
                    egui::Color32::LIGHT_RED
                } else {
                    egui::Color32::LIGHT_GREEN
                };
                ui.label(egui::RichText::new(&ui_feedback.last_message).color(color));
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        show_assignment_panel(ui, &mut hub, &mut form, &mut submit_writer, &mut selection_writer);
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(12.0);
        show_report_panel(
            ui,
            &mut hub,
            &mut report_panel,
            &mut report_writer,
            &mut selection_writer,
        );
    });
}
