// src/api/types.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The entity families the backend exposes for remote search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vendor,
    Product,
    Requisition,
}

impl EntityKind {
    pub fn search_path(self) -> &'static str {
        match self {
            EntityKind::Vendor => "api/vendors",
            EntityKind::Product => "api/products",
            EntityKind::Requisition => "api/requisitions",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Vendor => "vendor",
            EntityKind::Product => "product",
            EntityKind::Requisition => "requisition",
        }
    }
}

/// One candidate record from a remote search. `code` carries the short
/// vendor/requisition code; `stock_on_hand` is only populated for products.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub stock_on_hand: Option<f64>,
}

/// One page of search results. `next_page` is a continuation token; the picker
/// only renders the first page and hints when more results exist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<LookupRecord>,
    #[serde(default)]
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportHeaderDto {
    pub label: Option<String>,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderReportDto {
    #[serde(default)]
    pub header: ReportHeaderDto,
    #[serde(default)]
    pub summary: HashMap<String, f64>,
    #[serde(default)]
    pub orders: Vec<PurchaseOrderDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderDto {
    pub po_number: String,
    pub vendor_name: String,
    pub status: String,
    pub order_date: String,
    #[serde(default)]
    pub total_value: Option<f64>,
    #[serde(default)]
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_name: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub line_total: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionReportDto {
    #[serde(default)]
    pub header: ReportHeaderDto,
    #[serde(default)]
    pub summary: HashMap<String, f64>,
    #[serde(default)]
    pub requisitions: Vec<RequisitionDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionDto {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub department: String,
    pub status: String,
    #[serde(default)]
    pub requested_by: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub items: Vec<RequisitionItemDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequisitionItemDto {
    pub product_name: String,
    pub quantity: f64,
    pub estimated_unit_cost: f64,
}

/// The payload for one report download, shaped by the descriptor that requested
/// it. `RequisitionDetail(None)` means the backend had no matching requisition.
#[derive(Debug, Clone)]
pub enum ReportData {
    PurchaseOrders(PurchaseOrderReportDto),
    Requisitions(RequisitionReportDto),
    RequisitionDetail(Option<RequisitionDto>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDraft {
    pub requisition_id: String,
    pub vendor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAssignmentDto {
    pub id: String,
    pub requisition: LookupRecord,
    pub vendor: LookupRecord,
    #[serde(default)]
    pub product: Option<LookupRecord>,
    #[serde(default)]
    pub note: String,
}

/// Errors from the backend boundary. Variants carry `String` payloads so the
/// error stays `Clone` and can travel inside Bevy events.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("server returned status {0}")]
    Status(u16),
    #[error("could not reach the server: {0}")]
    Transport(String),
    #[error("unexpected response payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_tolerates_missing_fields() {
        let parsed: SearchResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.results.is_empty());
        assert!(parsed.next_page.is_none());

        let parsed: SearchResponse = serde_json::from_str(
            r#"{"results":[{"id":"v-1","name":"Acme Supply","code":"ACM"}],"nextPage":"2"}"#,
        )
        .unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].code.as_deref(), Some("ACM"));
        assert!(parsed.results[0].stock_on_hand.is_none());
        assert_eq!(parsed.next_page.as_deref(), Some("2"));
    }

    #[test]
    fn purchase_order_report_defaults_summary_and_items() {
        let parsed: PurchaseOrderReportDto = serde_json::from_str(
            r#"{
                "orders": [
                    {"poNumber":"PO-7","vendorName":"Acme","status":"open","orderDate":"2024-02-01"}
                ]
            }"#,
        )
        .unwrap();
        assert!(parsed.header.label.is_none());
        assert!(parsed.summary.is_empty());
        assert_eq!(parsed.orders.len(), 1);
        assert!(parsed.orders[0].items.is_empty());
        assert!(parsed.orders[0].total_value.is_none());
    }

    #[test]
    fn requisition_detail_parses_nested_items() {
        let parsed: RequisitionDto = serde_json::from_str(
            r#"{
                "code":"REQ-100","title":"Lab restock","status":"pending",
                "items":[{"productName":"Beaker","quantity":4,"estimatedUnitCost":2.5}]
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].quantity, 4.0);
        assert_eq!(parsed.department, "");
    }
}
