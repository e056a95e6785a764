// src/ui/elements/report_panel.rs

use bevy::prelude::*;
use bevy_egui::egui;

use crate::lookup::events::SelectionChanged;
use crate::lookup::widget::{
    emit_selection_events, remote_picker_ui, RemotePickerParams, REQUISITION_PICKER,
};
use crate::lookup::{SelectorHub, SelectorId};
use crate::reports::events::RequestReportDownload;
use crate::reports::{ReportMode, ReportPanelState, ReportParams};

pub(super) fn show_report_panel(
    ui: &mut egui::Ui,
    hub: &mut SelectorHub,
    state: &mut ReportPanelState,
    report_writer: &mut EventWriter<RequestReportDownload>,
    selection_writer: &mut EventWriter<SelectionChanged>,
) {
    ui.heading("Reports");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.radio_value(
            &mut state.mode,
            ReportMode::DateRangePurchaseOrders,
            "Purchase orders by date",
        );
        ui.radio_value(
            &mut state.mode,
            ReportMode::PendingRequisitions,
            "Pending requisitions",
        );
        ui.radio_value(
            &mut state.mode,
            ReportMode::RequisitionDetail,
            "Requisition detail",
        );
    });
    ui.add_space(4.0);

    match state.mode {
        ReportMode::DateRangePurchaseOrders => {
            ui.horizontal(|ui| {
                ui.label("From");
                ui.add(
                    egui::TextEdit::singleline(&mut state.start_date_input)
                        .desired_width(100.0)
                        .hint_text("YYYY-MM-DD"),
                );
                ui.label("To");
                ui.add(
                    egui::TextEdit::singleline(&mut state.end_date_input)
                        .desired_width(100.0)
                        .hint_text("YYYY-MM-DD"),
                );
            });
        }
        ReportMode::PendingRequisitions => {
            ui.label(
                egui::RichText::new("Exports every requisition still awaiting fulfilment.").weak(),
            );
        }
        ReportMode::RequisitionDetail => {
            ui.horizontal(|ui| {
                ui.label("Requisition");
                let output = remote_picker_ui(
                    ui,
                    RemotePickerParams {
                        id: egui::Id::new("report_requisition_picker"),
                        state: hub.state_mut(SelectorId::ReportRequisition),
                        binding: &REQUISITION_PICKER,
                    },
                );
                emit_selection_events(SelectorId::ReportRequisition, &output, selection_writer);
            });
        }
    }
    ui.add_space(6.0);

    let busy = state.download_in_flight;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(!busy, egui::Button::new("Download XLSX"))
            .clicked()
        {
            let requisition = hub.state(SelectorId::ReportRequisition);
            let params = ReportParams {
                mode: state.mode,
                start_date: state.start_date_input.clone(),
                end_date: state.end_date_input.clone(),
                requisition_id: requisition.selected_id.clone(),
                requisition_label: requisition.display_label("", REQUISITION_PICKER.render_label),
            };
            report_writer.write(RequestReportDownload { params });
        }
        if busy {
            ui.spinner();
            ui.label("Preparing report...");
        }
    });
}
