// src/api/client.rs

use bevy::prelude::*;

use super::types::{
    ApiError, AssignmentDraft, EntityKind, PurchaseOrderReportDto, ReportData, RequisitionDto,
    RequisitionReportDto, SavedAssignmentDto, SearchResponse,
};
use crate::reports::descriptor::ReportDescriptor;

const DATE_FMT: &str = "%Y-%m-%d";

/// Thin async wrapper over the procurement backend. Cloned into background
/// tasks; `reqwest::Client` is internally reference-counted.
#[derive(Resource, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Free-text search over one entity family. Returns the first result page;
    /// ranking is the backend's concern.
    pub async fn search(&self, kind: EntityKind, query: &str) -> Result<SearchResponse, ApiError> {
        let response = self
            .http
            .get(self.endpoint(kind.search_path()))
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetches the raw nested payload for one validated report descriptor.
    pub async fn fetch_report(&self, descriptor: &ReportDescriptor) -> Result<ReportData, ApiError> {
        match descriptor {
            ReportDescriptor::DateRange { start, end } => {
                let report = self
                    .http
                    .get(self.endpoint("api/reports/purchase-orders"))
                    .query(&[
                        ("start", start.format(DATE_FMT).to_string()),
                        ("end", end.format(DATE_FMT).to_string()),
                    ])
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<PurchaseOrderReportDto>()
                    .await?;
                Ok(ReportData::PurchaseOrders(report))
            }
            ReportDescriptor::PendingRequisitions => {
                let report = self
                    .http
                    .get(self.endpoint("api/reports/requisitions"))
                    .query(&[("status", "pending")])
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<RequisitionReportDto>()
                    .await?;
                Ok(ReportData::Requisitions(report))
            }
            ReportDescriptor::RequisitionDetail { requisition_id, .. } => {
                let response = self
                    .http
                    .get(self.endpoint(&format!("api/requisitions/{}", requisition_id)))
                    .send()
                    .await?;
                if response.status() == reqwest::StatusCode::NOT_FOUND {
                    return Ok(ReportData::RequisitionDetail(None));
                }
                let requisition = response
                    .error_for_status()?
                    .json::<RequisitionDto>()
                    .await?;
                Ok(ReportData::RequisitionDetail(Some(requisition)))
            }
        }
    }

    pub async fn create_assignment(
        &self,
        draft: &AssignmentDraft,
    ) -> Result<SavedAssignmentDto, ApiError> {
        let response = self
            .http
            .post(self.endpoint("api/assignments"))
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
