// src/reports/descriptor.rs

use chrono::NaiveDate;
use thiserror::Error;

const DATE_FMT: &str = "%Y-%m-%d";

/// Which report the user asked for, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    DateRangePurchaseOrders,
    PendingRequisitions,
    RequisitionDetail,
}

/// Raw parameter state captured from the report panel at download time.
#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    pub mode: ReportMode,
    pub start_date: String,
    pub end_date: String,
    pub requisition_id: String,
    pub requisition_label: String,
}

/// The validated, immutable description of one report download. Built exactly
/// once per download action; downstream stages dispatch on the variant instead
/// of re-deriving the mode from flags.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportDescriptor {
    DateRange { start: NaiveDate, end: NaiveDate },
    PendingRequisitions,
    RequisitionDetail { requisition_id: String, label: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    #[error("missing date range")]
    MissingDateRange,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("no requisition selected")]
    NoEntitySelected,
}

impl ReportDescriptor {
    pub fn build(params: &ReportParams) -> Result<Self, DescriptorError> {
        match params.mode {
            ReportMode::DateRangePurchaseOrders => {
                let start = params.start_date.trim();
                let end = params.end_date.trim();
                if start.is_empty() || end.is_empty() {
                    return Err(DescriptorError::MissingDateRange);
                }
                Ok(ReportDescriptor::DateRange {
                    start: parse_bound(start)?,
                    end: parse_bound(end)?,
                })
            }
            ReportMode::PendingRequisitions => Ok(ReportDescriptor::PendingRequisitions),
            ReportMode::RequisitionDetail => {
                let requisition_id = params.requisition_id.trim();
                if requisition_id.is_empty() {
                    return Err(DescriptorError::NoEntitySelected);
                }
                Ok(ReportDescriptor::RequisitionDetail {
                    requisition_id: requisition_id.to_string(),
                    label: params.requisition_label.trim().to_string(),
                })
            }
        }
    }

    /// Stable filename stem for this download; the same descriptor always
    /// yields the same stem.
    pub fn file_stem(&self) -> String {
        match self {
            ReportDescriptor::DateRange { start, end } => format!(
                "purchase_orders_{}_to_{}",
                start.format(DATE_FMT),
                end.format(DATE_FMT)
            ),
            ReportDescriptor::PendingRequisitions => "pending_requisitions".to_string(),
            ReportDescriptor::RequisitionDetail {
                requisition_id,
                label,
            } => {
                let name = if label.is_empty() { requisition_id } else { label };
                format!(
                    "requisition_{}",
                    name.split_whitespace().collect::<Vec<_>>().join("_")
                )
            }
        }
    }

    /// Sheet title used when the payload header carries no label of its own.
    pub fn default_title(&self) -> &'static str {
        match self {
            ReportDescriptor::DateRange { .. } => "Purchase Order Report",
            ReportDescriptor::PendingRequisitions => "Pending Requisitions Report",
            ReportDescriptor::RequisitionDetail { .. } => "Requisition Detail",
        }
    }
}

fn parse_bound(text: &str) -> Result<NaiveDate, DescriptorError> {
    NaiveDate::parse_from_str(text, DATE_FMT)
        .map_err(|_| DescriptorError::InvalidDate(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_range_params(start: &str, end: &str) -> ReportParams {
        ReportParams {
            mode: ReportMode::DateRangePurchaseOrders,
            start_date: start.to_string(),
            end_date: end.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn date_range_requires_both_bounds() {
        let err = ReportDescriptor::build(&date_range_params("2024-01-01", "")).unwrap_err();
        assert_eq!(err, DescriptorError::MissingDateRange);
        let err = ReportDescriptor::build(&date_range_params("", "2024-01-31")).unwrap_err();
        assert_eq!(err, DescriptorError::MissingDateRange);
    }

    #[test]
    fn unparseable_bound_fails_validation() {
        let err = ReportDescriptor::build(&date_range_params("01/02/2024", "2024-01-31"))
            .unwrap_err();
        assert_eq!(err, DescriptorError::InvalidDate("01/02/2024".to_string()));
    }

    #[test]
    fn detail_requires_a_selected_requisition() {
        let params = ReportParams {
            mode: ReportMode::RequisitionDetail,
            ..Default::default()
        };
        assert_eq!(
            ReportDescriptor::build(&params).unwrap_err(),
            DescriptorError::NoEntitySelected
        );
    }

    #[test]
    fn pending_mode_is_always_valid() {
        let params = ReportParams {
            mode: ReportMode::PendingRequisitions,
            ..Default::default()
        };
        assert_eq!(
            ReportDescriptor::build(&params).unwrap(),
            ReportDescriptor::PendingRequisitions
        );
    }

    #[test]
    fn date_range_stem_is_deterministic() {
        let build = || {
            ReportDescriptor::build(&date_range_params("2024-01-01", "2024-01-31"))
                .unwrap()
                .file_stem()
        };
        assert_eq!(build(), "purchase_orders_2024-01-01_to_2024-01-31");
        assert_eq!(build(), build());
    }

    #[test]
    fn detail_stem_collapses_label_whitespace() {
        let descriptor = ReportDescriptor::RequisitionDetail {
            requisition_id: "r-9".to_string(),
            label: "REQ-100 ·  Lab  restock".to_string(),
        };
        assert_eq!(descriptor.file_stem(), "requisition_REQ-100_·_Lab_restock");

        let unnamed = ReportDescriptor::RequisitionDetail {
            requisition_id: "r-9".to_string(),
            label: String::new(),
        };
        assert_eq!(unnamed.file_stem(), "requisition_r-9");
    }
}
