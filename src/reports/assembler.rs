// src/reports/assembler.rs
//
// Flattens nested report payloads into one ordered row sequence. Every bulk
// report shares the same skeleton: title, timestamp, blank, summary block,
// blank, column header, detail rows. The single-requisition detail sheet is
// the one deliberate exception (key-value block + items sub-table).

use std::collections::HashMap;

use crate::api::types::{PurchaseOrderReportDto, RequisitionDto, RequisitionReportDto};

/// Placeholder written into item cells of a parent that has no line items.
pub const ITEM_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Blank,
}

/// One sheet row; cells are position-significant, rows have no identity
/// beyond their position in the sequence.
pub type SheetRow = Vec<CellValue>;

fn text(value: impl Into<String>) -> CellValue {
    CellValue::Text(value.into())
}

/// A bulk report normalized for assembly: whatever the entity kind, the
/// skeleton below applies unchanged.
pub struct TabularSheet {
    pub title: String,
    pub generated_at: String,
    pub summary: Vec<(String, f64)>,
    pub columns: Vec<&'static str>,
    /// How many trailing entries of `columns` describe line items.
    pub item_column_count: usize,
    pub parents: Vec<ParentEntry>,
}

pub struct ParentEntry {
    pub cells: SheetRow,
    pub item_rows: Vec<SheetRow>,
}

/// Builds the full row sequence for a bulk report. Each parent contributes
/// `max(item_count, 1)` detail rows: childless parents still get one row, with
/// every item cell holding the placeholder dash.
pub fn tabular_rows(sheet: &TabularSheet) -> Vec<SheetRow> {
    let mut rows: Vec<SheetRow> = Vec::new();
    rows.push(vec![text(sheet.title.clone())]);
    rows.push(vec![text("Generated"), text(sheet.generated_at.clone())]);
    rows.push(Vec::new());
    for (label, value) in &sheet.summary {
        rows.push(vec![text(label.clone()), CellValue::Number(*value)]);
    }
    rows.push(Vec::new());
    rows.push(sheet.columns.iter().map(|c| text(*c)).collect());

    for parent in &sheet.parents {
        if parent.item_rows.is_empty() {
            let mut row = parent.cells.clone();
            row.extend((0..sheet.item_column_count).map(|_| text(ITEM_PLACEHOLDER)));
            rows.push(row);
        } else {
            for item_row in &parent.item_rows {
                let mut row = parent.cells.clone();
                row.extend(item_row.iter().cloned());
                rows.push(row);
            }
        }
    }
    rows
}

fn summary_entries(
    labels: &[(&str, &str)],
    aggregates: &HashMap<String, f64>,
) -> Vec<(String, f64)> {
    labels
        .iter()
        .map(|(label, key)| {
            (
                label.to_string(),
                aggregates.get(*key).copied().unwrap_or(0.0),
            )
        })
        .collect()
}

const PO_SUMMARY: [(&str, &str); 2] = [("Total POs", "totalOrders"), ("Total Value", "totalValue")];

const PO_COLUMNS: [&str; 9] = [
    "PO Number",
    "Vendor",
    "Status",
    "Order Date",
    "Order Total",
    "Product",
    "Qty",
    "Unit Price",
    "Line Total",
];

pub fn purchase_order_sheet(
    report: &PurchaseOrderReportDto,
    default_title: &str,
    default_stamp: &str,
) -> TabularSheet {
    let parents = report
        .orders
        .iter()
        .map(|order| ParentEntry {
            cells: vec![
                text(order.po_number.clone()),
                text(order.vendor_name.clone()),
                text(order.status.clone()),
                text(order.order_date.clone()),
                CellValue::Number(order.total_value.unwrap_or(0.0)),
            ],
            item_rows: order
                .items
                .iter()
                .map(|item| {
                    vec![
                        text(item.product_name.clone()),
                        CellValue::Number(item.quantity),
                        CellValue::Number(item.unit_price),
                        CellValue::Number(
                            item.line_total.unwrap_or(item.quantity * item.unit_price),
                        ),
                    ]
                })
                .collect(),
        })
        .collect();

    TabularSheet {
        title: report
            .header
            .label
            .clone()
            .unwrap_or_else(|| default_title.to_string()),
        generated_at: report
            .header
            .generated_at
            .clone()
            .unwrap_or_else(|| default_stamp.to_string()),
        summary: summary_entries(&PO_SUMMARY, &report.summary),
        columns: PO_COLUMNS.to_vec(),
        item_column_count: 4,
        parents,
    }
}

const REQ_SUMMARY: [(&str, &str); 2] = [
    ("Total Requisitions", "totalRequisitions"),
    ("Total Estimated Value", "totalEstimatedValue"),
];

const REQ_COLUMNS: [&str; 9] = [
    "Code",
    "Title",
    "Department",
    "Status",
    "Requested By",
    "Created",
    "Product",
    "Qty",
    "Est. Unit Cost",
];

pub fn requisition_sheet(
    report: &RequisitionReportDto,
    default_title: &str,
    default_stamp: &str,
) -> TabularSheet {
    let parents = report
        .requisitions
        .iter()
        .map(|req| ParentEntry {
            cells: vec![
                text(req.code.clone()),
                text(req.title.clone()),
                text(req.department.clone()),
                text(req.status.clone()),
                text(req.requested_by.clone()),
                text(req.created_at.clone()),
            ],
            item_rows: req
                .items
                .iter()
                .map(|item| {
                    vec![
                        text(item.product_name.clone()),
                        CellValue::Number(item.quantity),
                        CellValue::Number(item.estimated_unit_cost),
                    ]
                })
                .collect(),
        })
        .collect();

    TabularSheet {
        title: report
            .header
            .label
            .clone()
            .unwrap_or_else(|| default_title.to_string()),
        generated_at: report
            .header
            .generated_at
            .clone()
            .unwrap_or_else(|| default_stamp.to_string()),
        summary: summary_entries(&REQ_SUMMARY, &report.summary),
        columns: REQ_COLUMNS.to_vec(),
        item_column_count: 3,
        parents,
    }
}

const DETAIL_ITEM_COLUMNS: [&str; 4] = ["Product", "Qty", "Est. Unit Cost", "Line Estimate"];

/// Two-section sheet for one requisition: a key-value block for the
/// requisition's own fields, then an items sub-table with a trailing totals
/// row (item count, total estimated value).
pub fn requisition_detail_rows(req: &RequisitionDto, default_stamp: &str) -> Vec<SheetRow> {
    let mut rows: Vec<SheetRow> = Vec::new();
    rows.push(vec![text(format!("Requisition {}", req.code))]);
    rows.push(vec![text("Generated"), text(default_stamp)]);
    rows.push(Vec::new());

    let fields = [
        ("Code", req.code.as_str()),
        ("Title", req.title.as_str()),
        ("Department", req.department.as_str()),
        ("Status", req.status.as_str()),
        ("Requested By", req.requested_by.as_str()),
        ("Created", req.created_at.as_str()),
    ];
    for (label, value) in fields {
        rows.push(vec![text(label), text(value)]);
    }
    rows.push(Vec::new());

    rows.push(DETAIL_ITEM_COLUMNS.iter().map(|c| text(*c)).collect());
    let mut total_estimate = 0.0;
    for item in &req.items {
        let line_estimate = item.quantity * item.estimated_unit_cost;
        total_estimate += line_estimate;
        rows.push(vec![
            text(item.product_name.clone()),
            CellValue::Number(item.quantity),
            CellValue::Number(item.estimated_unit_cost),
            CellValue::Number(line_estimate),
        ]);
    }
    rows.push(vec![
        text("Totals"),
        CellValue::Number(req.items.len() as f64),
        CellValue::Blank,
        CellValue::Number(total_estimate),
    ]);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        OrderItemDto, PurchaseOrderDto, ReportHeaderDto, RequisitionItemDto,
        RequisitionReportDto,
    };

    fn order(po_number: &str, items: Vec<OrderItemDto>) -> PurchaseOrderDto {
        PurchaseOrderDto {
            po_number: po_number.to_string(),
            vendor_name: "Acme Supply".to_string(),
            status: "open".to_string(),
            order_date: "2024-01-10".to_string(),
            total_value: Some(100.0),
            items,
        }
    }

    fn item(product: &str, quantity: f64, unit_price: f64) -> OrderItemDto {
        OrderItemDto {
            product_name: product.to_string(),
            quantity,
            unit_price,
            line_total: None,
        }
    }

    /// Rows `tabular_rows` emits before the first detail row: title, stamp,
    /// blank, summary block, blank, header.
    fn skeleton_len(sheet: &TabularSheet) -> usize {
        3 + sheet.summary.len() + 2
    }

    fn po_report(orders: Vec<PurchaseOrderDto>, summary: &[(&str, f64)]) -> PurchaseOrderReportDto {
        PurchaseOrderReportDto {
            header: ReportHeaderDto::default(),
            summary: summary
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            orders,
        }
    }

    #[test]
    fn detail_row_count_is_sum_of_max_item_count_and_one() {
        let report = po_report(
            vec![
                order("PO-1", vec![item("Widget", 2.0, 5.0), item("Bolt", 10.0, 0.5)]),
                order("PO-2", vec![]),
                order("PO-3", vec![item("Washer", 4.0, 0.1)]),
            ],
            &[],
        );
        let sheet = purchase_order_sheet(&report, "Purchase Order Report", "2024-02-01 09:00");
        let rows = tabular_rows(&sheet);
        assert_eq!(rows.len(), skeleton_len(&sheet) + 2 + 1 + 1);
    }

    #[test]
    fn childless_parent_gets_one_row_of_dashes() {
        let report = po_report(vec![order("PO-2", vec![])], &[]);
        let sheet = purchase_order_sheet(&report, "Purchase Order Report", "stamp");
        let rows = tabular_rows(&sheet);

        let detail = &rows[skeleton_len(&sheet)];
        assert_eq!(detail.len(), PO_COLUMNS.len());
        assert_eq!(detail[0], CellValue::Text("PO-2".to_string()));
        for cell in &detail[5..] {
            assert_eq!(*cell, CellValue::Text(ITEM_PLACEHOLDER.to_string()));
        }
    }

    #[test]
    fn empty_report_still_emits_full_skeleton_with_zeroed_summary() {
        let report = po_report(vec![], &[]);
        let sheet = purchase_order_sheet(&report, "Purchase Order Report", "stamp");
        let rows = tabular_rows(&sheet);

        assert_eq!(rows.len(), skeleton_len(&sheet));
        // Summary rows sit after title, timestamp and one blank row.
        assert_eq!(
            rows[3],
            vec![
                CellValue::Text("Total POs".to_string()),
                CellValue::Number(0.0)
            ]
        );
        assert_eq!(
            rows[4],
            vec![
                CellValue::Text("Total Value".to_string()),
                CellValue::Number(0.0)
            ]
        );
    }

    #[test]
    fn two_orders_with_three_and_zero_items() {
        let report = po_report(
            vec![
                order(
                    "PO-1",
                    vec![
                        item("Widget", 2.0, 5.0),
                        item("Bolt", 10.0, 0.5),
                        item("Washer", 4.0, 0.1),
                    ],
                ),
                order("PO-2", vec![]),
            ],
            &[("totalOrders", 2.0), ("totalValue", 240.0)],
        );
        let sheet = purchase_order_sheet(&report, "Purchase Order Report", "stamp");
        let rows = tabular_rows(&sheet);

        assert_eq!(rows.len() - skeleton_len(&sheet), 4);
        assert_eq!(
            rows[3],
            vec![
                CellValue::Text("Total POs".to_string()),
                CellValue::Number(2.0)
            ]
        );
    }

    #[test]
    fn line_total_falls_back_to_quantity_times_price() {
        let report = po_report(vec![order("PO-1", vec![item("Widget", 2.0, 5.0)])], &[]);
        let sheet = purchase_order_sheet(&report, "Purchase Order Report", "stamp");
        let rows = tabular_rows(&sheet);
        let detail = &rows[skeleton_len(&sheet)];
        assert_eq!(detail[8], CellValue::Number(10.0));
    }

    #[test]
    fn header_label_and_stamp_override_defaults() {
        let mut report = po_report(vec![], &[]);
        report.header.label = Some("January POs".to_string());
        report.header.generated_at = Some("2024-02-01 08:00".to_string());
        let sheet = purchase_order_sheet(&report, "Purchase Order Report", "fallback");
        assert_eq!(sheet.title, "January POs");
        assert_eq!(sheet.generated_at, "2024-02-01 08:00");
    }

    #[test]
    fn requisition_sheet_shares_the_skeleton() {
        let report = RequisitionReportDto {
            header: ReportHeaderDto::default(),
            summary: HashMap::from([("totalRequisitions".to_string(), 1.0)]),
            requisitions: vec![RequisitionDto {
                code: "REQ-1".to_string(),
                title: "Lab restock".to_string(),
                department: "R&D".to_string(),
                status: "pending".to_string(),
                requested_by: "jmora".to_string(),
                created_at: "2024-01-05".to_string(),
                items: vec![],
            }],
        };
        let sheet = requisition_sheet(&report, "Pending Requisitions Report", "stamp");
        let rows = tabular_rows(&sheet);
        assert_eq!(rows.len(), skeleton_len(&sheet) + 1);
        let detail = &rows[skeleton_len(&sheet)];
        for cell in &detail[6..] {
            assert_eq!(*cell, CellValue::Text(ITEM_PLACEHOLDER.to_string()));
        }
    }

    #[test]
    fn detail_sheet_totals_count_items_and_sum_estimates() {
        let req = RequisitionDto {
            code: "REQ-100".to_string(),
            title: "Lab restock".to_string(),
            department: "R&D".to_string(),
            status: "pending".to_string(),
            requested_by: "jmora".to_string(),
            created_at: "2024-01-05".to_string(),
            items: vec![
                RequisitionItemDto {
                    product_name: "Beaker".to_string(),
                    quantity: 4.0,
                    estimated_unit_cost: 2.5,
                },
                RequisitionItemDto {
                    product_name: "Flask".to_string(),
                    quantity: 2.0,
                    estimated_unit_cost: 7.0,
                },
            ],
        };
        let rows = requisition_detail_rows(&req, "stamp");

        let totals = rows.last().unwrap();
        assert_eq!(totals[0], CellValue::Text("Totals".to_string()));
        assert_eq!(totals[1], CellValue::Number(2.0));
        assert_eq!(totals[3], CellValue::Number(24.0));

        // Key-value block precedes the items sub-table.
        assert_eq!(
            rows[3],
            vec![
                CellValue::Text("Code".to_string()),
                CellValue::Text("REQ-100".to_string())
            ]
        );
    }
}
