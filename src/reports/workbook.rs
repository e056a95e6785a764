// src/reports/workbook.rs

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::assembler::{CellValue, SheetRow};

pub const SHEET_NAME: &str = "Report";

/// Serializes the assembled rows into a single-sheet xlsx workbook, in memory.
/// Rows land in the file in exactly the order they were assembled; empty rows
/// stay as gaps so positions are preserved.
pub fn build_workbook(rows: &[SheetRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.set_column_width(0, 24.0)?;

    let title_format = Format::new().set_bold();
    for (row_index, row) in rows.iter().enumerate() {
        let row_index = row_index as u32;
        for (col_index, cell) in row.iter().enumerate() {
            let col_index = col_index as u16;
            match cell {
                CellValue::Text(value) if row_index == 0 => {
                    sheet.write_string_with_format(row_index, col_index, value, &title_format)?;
                }
                CellValue::Text(value) => {
                    sheet.write_string(row_index, col_index, value)?;
                }
                CellValue::Number(value) => {
                    sheet.write_number(row_index, col_index, *value)?;
                }
                CellValue::Blank => continue,
            }
        }
    }

    workbook.save_to_buffer()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_a_zip_container_for_a_small_sheet() {
        let rows = vec![
            vec![CellValue::Text("Purchase Order Report".to_string())],
            Vec::new(),
            vec![
                CellValue::Text("Total POs".to_string()),
                CellValue::Number(2.0),
            ],
            vec![CellValue::Blank, CellValue::Text("after blank".to_string())],
        ];
        let bytes = build_workbook(&rows).unwrap();
        assert!(!bytes.is_empty());
        // xlsx is a ZIP archive.
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn empty_row_set_is_still_a_valid_workbook() {
        let bytes = build_workbook(&[]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}
