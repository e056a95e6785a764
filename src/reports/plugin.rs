// src/reports/plugin.rs

use bevy::prelude::*;

use super::descriptor::ReportMode;
use super::events::{ReportFetchCompleted, RequestReportDownload};
use super::systems::{handle_report_download_requests, handle_report_fetch_results};
use crate::ui::systems::forward_events;

/// UI-side state of the report panel. `download_in_flight` is the busy flag
/// that disables the trigger while a fetch is outstanding; a second click is
/// ignored, not queued.
#[derive(Resource, Default)]
pub struct ReportPanelState {
    pub mode: ReportMode,
    pub start_date_input: String,
    pub end_date_input: String,
    pub download_in_flight: bool,
}

/// Report download flow: descriptor validation, payload fetch, row assembly,
/// workbook emission.
pub struct ReportsPlugin;

impl Plugin for ReportsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ReportPanelState>()
            .add_event::<RequestReportDownload>()
            .add_event::<ReportFetchCompleted>()
            .add_systems(
                Update,
                (
                    handle_report_download_requests,
                    forward_events::<ReportFetchCompleted>,
                    handle_report_fetch_results,
                )
                    .chain(),
            );

        info!("ReportsPlugin initialized.");
    }
}
