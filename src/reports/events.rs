// src/reports/events.rs

use bevy::prelude::Event;

use super::descriptor::{ReportDescriptor, ReportParams};
use crate::api::types::{ApiError, ReportData};

/// The user hit "Download"; carries the raw panel parameters, validated into a
/// descriptor by the handler before anything touches the network.
#[derive(Event, Debug, Clone)]
pub struct RequestReportDownload {
    pub params: ReportParams,
}

/// The background fetch for a descriptor finished.
#[derive(Event, Debug, Clone)]
pub struct ReportFetchCompleted {
    pub descriptor: ReportDescriptor,
    pub result: Result<ReportData, ApiError>,
}
