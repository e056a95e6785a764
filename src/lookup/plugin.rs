// src/lookup/plugin.rs

use bevy::prelude::*;

use super::events::{LookupCompleted, SelectionChanged};
use super::state::SelectorState;
use super::systems::{apply_lookup_results, dispatch_due_lookups};
use crate::api::types::EntityKind;
use crate::ui::systems::forward_events;

/// Identifies one picker instance in the window. Each instance owns its own
/// debounce timer and result cache; two instances never share state, even when
/// they search the same entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorId {
    AssignmentRequisition,
    AssignmentVendor,
    AssignmentProduct,
    ReportRequisition,
}

impl SelectorId {
    pub const ALL: [SelectorId; 4] = [
        SelectorId::AssignmentRequisition,
        SelectorId::AssignmentVendor,
        SelectorId::AssignmentProduct,
        SelectorId::ReportRequisition,
    ];

    pub fn entity_kind(self) -> EntityKind {
        match self {
            SelectorId::AssignmentRequisition | SelectorId::ReportRequisition => {
                EntityKind::Requisition
            }
            SelectorId::AssignmentVendor => EntityKind::Vendor,
            SelectorId::AssignmentProduct => EntityKind::Product,
        }
    }
}

/// All picker states, one per `SelectorId`.
#[derive(Resource, Default)]
pub struct SelectorHub {
    assignment_requisition: SelectorState,
    assignment_vendor: SelectorState,
    assignment_product: SelectorState,
    report_requisition: SelectorState,
}

impl SelectorHub {
    pub fn state(&self, id: SelectorId) -> &SelectorState {
        match id {
            SelectorId::AssignmentRequisition => &self.assignment_requisition,
            SelectorId::AssignmentVendor => &self.assignment_vendor,
            SelectorId::AssignmentProduct => &self.assignment_product,
            SelectorId::ReportRequisition => &self.report_requisition,
        }
    }

    pub fn state_mut(&mut self, id: SelectorId) -> &mut SelectorState {
        match id {
            SelectorId::AssignmentRequisition => &mut self.assignment_requisition,
            SelectorId::AssignmentVendor => &mut self.assignment_vendor,
            SelectorId::AssignmentProduct => &mut self.assignment_product,
            SelectorId::ReportRequisition => &mut self.report_requisition,
        }
    }
}

/// Remote-search pickers: debounced dispatch, stale-response discarding.
pub struct LookupPlugin;

impl Plugin for LookupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectorHub>()
            .add_event::<LookupCompleted>()
            .add_event::<SelectionChanged>()
            .add_systems(
                Update,
                (
                    dispatch_due_lookups,
                    forward_events::<LookupCompleted>,
                    apply_lookup_results,
                )
                    .chain(),
            );

        info!("LookupPlugin initialized ({} pickers).", SelectorId::ALL.len());
    }
}
