// src/lookup/widget.rs

use bevy::prelude::*;
use bevy_egui::egui::{self, Vec2};

use super::events::SelectionChanged;
use super::plugin::SelectorId;
use super::state::{panel_side, PanelSide, SelectorState, PANEL_MAX_HEIGHT};
use crate::api::types::LookupRecord;

const PICKER_WIDTH: f32 = 240.0;
const LIST_MAX_HEIGHT: f32 = 200.0;
const PANEL_GAP: f32 = 4.0;

/// Display strategy for one entity kind. The picker state machine is generic;
/// only label rendering differs between vendors, products and requisitions.
pub struct PickerBinding {
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub render_label: fn(&LookupRecord) -> String,
    pub render_result: fn(&LookupRecord) -> String,
}

fn vendor_label(record: &LookupRecord) -> String {
    match &record.code {
        Some(code) => format!("{} ({})", record.name, code),
        None => record.name.clone(),
    }
}

fn product_label(record: &LookupRecord) -> String {
    record.name.clone()
}

fn product_result_line(record: &LookupRecord) -> String {
    match record.stock_on_hand {
        Some(stock) => format!("{} ({} on hand)", record.name, stock),
        None => record.name.clone(),
    }
}

fn requisition_label(record: &LookupRecord) -> String {
    match &record.code {
        Some(code) => format!("{} · {}", code, record.name),
        None => record.name.clone(),
    }
}

pub const VENDOR_PICKER: PickerBinding = PickerBinding {
    placeholder: "-- Select vendor --",
    hint: "Search vendors...",
    render_label: vendor_label,
    render_result: vendor_label,
};

pub const PRODUCT_PICKER: PickerBinding = PickerBinding {
    placeholder: "-- Select product --",
    hint: "Search products...",
    render_label: product_label,
    render_result: product_result_line,
};

pub const REQUISITION_PICKER: PickerBinding = PickerBinding {
    placeholder: "-- Select requisition --",
    hint: "Search requisitions...",
    render_label: requisition_label,
    render_result: requisition_label,
};

pub struct RemotePickerParams<'a> {
    pub id: egui::Id,
    pub state: &'a mut SelectorState,
    pub binding: &'a PickerBinding,
}

#[derive(Default)]
pub struct RemotePickerOutput {
    /// The record the user just committed, if any.
    pub committed: Option<LookupRecord>,
    /// True when the user cleared the selection this frame.
    pub cleared: bool,
}

/// Renders one remote-search picker: a labelled trigger while closed, a search
/// box plus a floating result panel while open. The panel is re-anchored every
/// frame, so it tracks the anchor through scrolling and window resizes.
pub fn remote_picker_ui(ui: &mut egui::Ui, params: RemotePickerParams<'_>) -> RemotePickerOutput {
    let RemotePickerParams { id, state, binding } = params;
    let mut output = RemotePickerOutput::default();

    let row_height = ui.style().spacing.interact_size.y;
    let anchor_rect;

    if state.open {
        let mut query_text = state.query.clone();
        let search_response = ui.add_sized(
            [PICKER_WIDTH, row_height],
            egui::TextEdit::singleline(&mut query_text)
                .id(id.with("picker_search"))
                .hint_text(binding.hint),
        );
        if state.take_just_opened() {
            search_response.request_focus();
        }
        if search_response.changed() {
            state.set_query(query_text);
        }
        anchor_rect = search_response.rect;

        show_result_panel(ui, id, state, binding, anchor_rect, &mut output);

        let escape_pressed = ui.ctx().input(|i| i.key_pressed(egui::Key::Escape));
        if escape_pressed {
            state.close();
        }
    } else {
        let label = state.display_label(binding.placeholder, binding.render_label);
        let trigger = ui.add_sized([PICKER_WIDTH, row_height], egui::Button::new(label));
        anchor_rect = trigger.rect;
        if trigger.clicked() {
            state.open_panel();
        }
        if state.has_selection() {
            let clear_response = ui
                .small_button("✕")
                .on_hover_text("Clear selection");
            if clear_response.clicked() {
                state.clear();
                output.cleared = true;
            }
        }
    }

    output
}

fn show_result_panel(
    ui: &mut egui::Ui,
    id: egui::Id,
    state: &mut SelectorState,
    binding: &PickerBinding,
    anchor_rect: egui::Rect,
    output: &mut RemotePickerOutput,
) {
    let ctx = ui.ctx().clone();
    let viewport = ctx.screen_rect();
    let side = panel_side(anchor_rect.top(), anchor_rect.bottom(), viewport.height());

    let area = egui::Area::new(id.with("picker_panel")).order(egui::Order::Foreground);
    let area = match side {
        PanelSide::Below => area
            .fixed_pos(anchor_rect.left_bottom() + Vec2::new(0.0, PANEL_GAP))
            .pivot(egui::Align2::LEFT_TOP),
        PanelSide::Above => area
            .fixed_pos(anchor_rect.left_top() - Vec2::new(0.0, PANEL_GAP))
            .pivot(egui::Align2::LEFT_BOTTOM),
    };

    let mut clicked_record: Option<LookupRecord> = None;
    let area_response = area.show(&ctx, |panel_ui| {
        panel_ui.set_min_width(anchor_rect.width());
        panel_ui.set_max_width(anchor_rect.width());

        egui::Frame::popup(panel_ui.style()).show(panel_ui, |frame_ui| {
            egui::ScrollArea::vertical()
                .max_height(LIST_MAX_HEIGHT.min(PANEL_MAX_HEIGHT))
                .show(frame_ui, |list_ui| {
                    if state.loading {
                        list_ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label("Searching...");
                        });
                    } else if state.results.is_empty() {
                        list_ui.label(egui::RichText::new("No matches").weak());
                    }
                    for record in &state.results {
                        let is_selected = record.id == state.selected_id;
                        let line = (binding.render_result)(record);
                        if list_ui.selectable_label(is_selected, line).clicked() {
                            clicked_record = Some(record.clone());
                        }
                    }
                    if state.more_available {
                        list_ui.label(
                            egui::RichText::new("Refine the search to see more matches").weak(),
                        );
                    }
                });
        });
    });

    if let Some(record) = clicked_record {
        state.select(&record);
        output.committed = Some(record);
        return;
    }

    // Close on any press outside both the anchor and the panel. The committed
    // selection is untouched.
    let panel_rect = area_response.response.rect;
    let pressed_outside = ctx.input(|i| {
        i.pointer.any_pressed()
            && i.pointer
                .interact_pos()
                .is_some_and(|pos| !panel_rect.contains(pos) && !anchor_rect.contains(pos))
    });
    if pressed_outside {
        state.close();
    }
}

/// Turns a picker's per-frame output into `SelectionChanged` events for host
/// forms (the `(selectedId, record)` callback boundary).
pub fn emit_selection_events(
    selector: SelectorId,
    output: &RemotePickerOutput,
    writer: &mut EventWriter<SelectionChanged>,
) {
    if let Some(record) = &output.committed {
        writer.write(SelectionChanged {
            selector,
            selected_id: record.id.clone(),
            record: Some(record.clone()),
        });
    }
    if output.cleared {
        writer.write(SelectionChanged {
            selector,
            selected_id: String::new(),
            record: None,
        });
    }
}
