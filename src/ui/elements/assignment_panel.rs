// src/ui/elements/assignment_panel.rs

use bevy::prelude::*;
use bevy_egui::egui;

use crate::api::types::AssignmentDraft;
use crate::assignments::events::AssignmentSubmitted;
use crate::assignments::AssignmentFormState;
use crate::lookup::events::SelectionChanged;
use crate::lookup::widget::{
    emit_selection_events, remote_picker_ui, RemotePickerParams, PRODUCT_PICKER,
    REQUISITION_PICKER, VENDOR_PICKER,
};
use crate::lookup::{SelectorHub, SelectorId};

pub(super) fn show_assignment_panel(
    ui: &mut egui::Ui,
    hub: &mut SelectorHub,
    form: &mut AssignmentFormState,
    submit_writer: &mut EventWriter<AssignmentSubmitted>,
    selection_writer: &mut EventWriter<SelectionChanged>,
) {
    ui.heading("Vendor Assignment");
    ui.add_space(4.0);

    egui::Grid::new("assignment_grid")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Requisition");
            ui.horizontal(|ui| {
                let output = remote_picker_ui(
                    ui,
                    RemotePickerParams {
                        id: egui::Id::new("assignment_requisition_picker"),
                        state: hub.state_mut(SelectorId::AssignmentRequisition),
                        binding: &REQUISITION_PICKER,
                    },
                );
                emit_selection_events(SelectorId::AssignmentRequisition, &output, selection_writer);
            });
            ui.end_row();

            ui.label("Vendor");
            ui.horizontal(|ui| {
                let output = remote_picker_ui(
                    ui,
                    RemotePickerParams {
                        id: egui::Id::new("assignment_vendor_picker"),
                        state: hub.state_mut(SelectorId::AssignmentVendor),
                        binding: &VENDOR_PICKER,
                    },
                );
                emit_selection_events(SelectorId::AssignmentVendor, &output, selection_writer);
            });
            ui.end_row();

            ui.label("Product");
            ui.horizontal(|ui| {
                let output = remote_picker_ui(
                    ui,
                    RemotePickerParams {
                        id: egui::Id::new("assignment_product_picker"),
                        state: hub.state_mut(SelectorId::AssignmentProduct),
                        binding: &PRODUCT_PICKER,
                    },
                );
                emit_selection_events(SelectorId::AssignmentProduct, &output, selection_writer);
            });
            ui.end_row();

            ui.label("Note");
            ui.add(
                egui::TextEdit::singleline(&mut form.note)
                    .desired_width(240.0)
                    .hint_text("Optional note"),
            );
            ui.end_row();
        });
    ui.add_space(6.0);

    let ready =
        !form.requisition_id.is_empty() && !form.vendor_id.is_empty() && !form.save_in_flight;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(ready, egui::Button::new("Save Assignment"))
            .clicked()
        {
            let product_id = (!form.product_id.is_empty()).then(|| form.product_id.clone());
            submit_writer.write(AssignmentSubmitted {
                draft: AssignmentDraft {
                    requisition_id: form.requisition_id.clone(),
                    vendor_id: form.vendor_id.clone(),
                    product_id,
                    note: form.note.trim().to_string(),
                },
            });
        }
        if form.save_in_flight {
            ui.spinner();
        }

        if let Some(saved) = form.last_saved.clone() {
            if ui
                .button("Edit last")
                .on_hover_text("Reload the last saved assignment into the form")
                .clicked()
            {
                // Seed the pickers with the records the backend returned, so
                // labels render without another lookup round trip.
                hub.state_mut(SelectorId::AssignmentRequisition)
                    .set_selection(saved.requisition.id.clone(), Some(saved.requisition.clone()));
                hub.state_mut(SelectorId::AssignmentVendor)
                    .set_selection(saved.vendor.id.clone(), Some(saved.vendor.clone()));
                form.requisition_id = saved.requisition.id.clone();
                form.vendor_id = saved.vendor.id.clone();
                if let Some(product) = &saved.product {
                    hub.state_mut(SelectorId::AssignmentProduct)
                        .set_selection(product.id.clone(), Some(product.clone()));
                    form.product_id = product.id.clone();
                }
                form.note = saved.note.clone();
            }
        }
    });
}
