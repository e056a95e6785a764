// src/reports/systems.rs

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use chrono::Local;
use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;
use thiserror::Error;

use super::assembler::{
    purchase_order_sheet, requisition_detail_rows, requisition_sheet, tabular_rows,
};
use super::descriptor::ReportDescriptor;
use super::events::{ReportFetchCompleted, RequestReportDownload};
use super::plugin::ReportPanelState;
use super::workbook::build_workbook;
use crate::api::types::ReportData;
use crate::api::ApiClient;
use crate::ui::systems::SendEvent;
use crate::ui::OperationFeedback;

const STAMP_FMT: &str = "%Y-%m-%d %H:%M";

/// Validates download requests and spawns the background fetch. Validation
/// failures surface on the feedback line without touching the network.
pub fn handle_report_download_requests(
    mut requests: EventReader<RequestReportDownload>,
    mut panel: ResMut<ReportPanelState>,
    api: Res<ApiClient>,
    runtime: Res<TokioTasksRuntime>,
    mut commands: Commands,
    mut feedback: EventWriter<OperationFeedback>,
) {
    for request in requests.read() {
        if panel.download_in_flight {
            debug!("Report download already in flight, ignoring request.");
            continue;
        }
        let descriptor = match ReportDescriptor::build(&request.params) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                feedback.write(OperationFeedback::error(e.to_string()));
                continue;
            }
        };

        panel.download_in_flight = true;
        info!("Fetching report data for {:?}", descriptor);

        let api = api.clone();
        let task_entity = commands.spawn_empty().id();
        runtime.spawn_background_task(move |mut ctx| async move {
            let result = api.fetch_report(&descriptor).await;
            ctx.run_on_main_thread(move |world_ctx| {
                world_ctx
                    .world
                    .commands()
                    .entity(task_entity)
                    .insert(SendEvent::<ReportFetchCompleted> {
                        event: ReportFetchCompleted { descriptor, result },
                    });
            })
            .await;
        });
    }
}

/// Assembles, serializes and saves finished reports; all outcomes land on the
/// feedback line.
pub fn handle_report_fetch_results(
    mut completions: EventReader<ReportFetchCompleted>,
    mut panel: ResMut<ReportPanelState>,
    mut feedback: EventWriter<OperationFeedback>,
) {
    for completion in completions.read() {
        panel.download_in_flight = false;
        match &completion.result {
            Err(e) => {
                error!("Report fetch failed: {}", e);
                feedback.write(OperationFeedback::error(format!("Report fetch failed: {e}")));
            }
            Ok(data) => match export_report(&completion.descriptor, data) {
                Ok(ExportOutcome::Saved { path, parent_count }) => {
                    let mut message = format!("Report saved to {}", path.display());
                    if parent_count == 0 {
                        message.push_str(" (no matching records)");
                    }
                    feedback.write(OperationFeedback::info(message));
                }
                Ok(ExportOutcome::Cancelled) => {
                    feedback.write(OperationFeedback::info("Export cancelled."));
                }
                Ok(ExportOutcome::NothingToExport) => {
                    feedback.write(OperationFeedback::info(
                        "Requisition not found; nothing to export.",
                    ));
                }
                Err(e) => {
                    error!("Report export failed: {}", e);
                    feedback.write(OperationFeedback::error(format!("Report export failed: {e}")));
                }
            },
        }
    }
}

enum ExportOutcome {
    Saved { path: PathBuf, parent_count: usize },
    Cancelled,
    NothingToExport,
}

#[derive(Error, Debug)]
enum ExportError {
    #[error("could not build workbook: {0}")]
    Workbook(#[from] XlsxError),
    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

fn export_report(
    descriptor: &ReportDescriptor,
    data: &ReportData,
) -> Result<ExportOutcome, ExportError> {
    let stamp = Local::now().format(STAMP_FMT).to_string();
    let (rows, parent_count) = match data {
        ReportData::PurchaseOrders(report) => {
            let sheet = purchase_order_sheet(report, descriptor.default_title(), &stamp);
            (tabular_rows(&sheet), report.orders.len())
        }
        ReportData::Requisitions(report) => {
            let sheet = requisition_sheet(report, descriptor.default_title(), &stamp);
            (tabular_rows(&sheet), report.requisitions.len())
        }
        ReportData::RequisitionDetail(None) => return Ok(ExportOutcome::NothingToExport),
        ReportData::RequisitionDetail(Some(requisition)) => {
            (requisition_detail_rows(requisition, &stamp), 1)
        }
    };

    let bytes = build_workbook(&rows)?;
    let file_name = format!("{}.xlsx", descriptor.file_stem());
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(&file_name)
        .add_filter("Excel Workbook", &["xlsx"])
        .save_file()
    else {
        return Ok(ExportOutcome::Cancelled);
    };

    std::fs::write(&path, &bytes).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("Report written to {:?} ({} rows)", path, rows.len());
    Ok(ExportOutcome::Saved { path, parent_count })
}
