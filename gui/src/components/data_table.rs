// Collapsible raw-data view over the full normalized table, pass-through
// columns included.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{CellValue, NormalizedTable};
use shared::utils::format_thousands;

use crate::config::theme::ChartPalette;

#[component]
pub fn DataTable(table: NormalizedTable) -> Element {
    let palette = ChartPalette::default_light();
    let row_count = table.rows.len();

    let header_cells: Vec<Element> = table
        .headers
        .iter()
        .map(|header| {
            let header = header.clone();
            rsx! {
                th {
                    style: "text-align: left; padding: 6px 10px; \
                            border-bottom: 2px solid {palette.grid};",
                    "{header}"
                }
            }
        })
        .collect();

    let body_rows: Vec<Element> = table
        .rows
        .iter()
        .map(|row| {
            let cells = row.iter().map(|cell| {
                let text = format_cell(cell);
                rsx! {
                    td {
                        style: "padding: 5px 10px; border-bottom: 1px solid {palette.grid};",
                        "{text}"
                    }
                }
            });
            rsx! {
                tr { {cells} }
            }
        })
        .collect();

    rsx! {
        details {
            style: "background: {palette.panel}; border-radius: 8px; padding: 12px 16px; margin-top: 16px;",
            summary {
                style: "cursor: pointer; font-size: 14px; font-weight: 600;",
                "Raw data ({row_count} rows)"
            }
            div {
                style: "overflow-x: auto; margin-top: 8px;",
                table {
                    style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                    thead {
                        tr { {header_cells.into_iter()} }
                    }
                    tbody {
                        {body_rows.into_iter()}
                    }
                }
            }
        }
    }
}

fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) if n.fract() == 0.0 => format_thousands(*n),
        CellValue::Number(n) => format!("{:.2}", n),
        CellValue::Missing => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&CellValue::Text("2024-01".into())), "2024-01");
        assert_eq!(format_cell(&CellValue::Number(1234.0)), "1,234");
        assert_eq!(format_cell(&CellValue::Number(11.111)), "11.11");
        assert_eq!(format_cell(&CellValue::Missing), "\u{2014}");
    }
}
