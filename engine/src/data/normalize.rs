use crate::data::csv_reader::RawTable;
use crate::error::PipelineError;
use shared::models::{CellValue, NormalizedTable};

/// The closed set of canonical fields the dashboard consumes. Input headers
/// are mapped onto these via [`CanonicalField::from_header`]; anything else
/// passes through as an opaque extra column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalField {
    Period,
    Sales,
    PriorYearSales,
    GrowthRatePct,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 4] = [
        CanonicalField::Period,
        CanonicalField::Sales,
        CanonicalField::PriorYearSales,
        CanonicalField::GrowthRatePct,
    ];

    /// Canonical header text after renaming.
    pub fn name(self) -> &'static str {
        match self {
            CanonicalField::Period => "period",
            CanonicalField::Sales => "sales",
            CanonicalField::PriorYearSales => "prior_year_sales",
            CanonicalField::GrowthRatePct => "growth_rate_pct",
        }
    }

    /// Synonym lookup over a trimmed header. Each canonical name maps to
    /// itself so normalization is idempotent.
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "월" | "month" | "Month" | "period" => Some(CanonicalField::Period),
            "매출액" | "매출" | "sales" | "Sales" => Some(CanonicalField::Sales),
            "전년동월" | "전년" | "prev" | "전년_동월" | "prior_year_sales" => {
                Some(CanonicalField::PriorYearSales)
            }
            "증감률" | "증감(%)" | "성장률" | "growth" | "growth_rate_pct" => {
                Some(CanonicalField::GrowthRatePct)
            }
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, CanonicalField::Period)
    }
}

/// Renames headers onto the canonical schema and coerces cell values.
///
/// Numeric canonical columns have commas and spaces stripped from every
/// cell; an empty remainder becomes `Missing`, an unparseable one fails with
/// `DataFormat` naming the column and the original cell text. The period
/// column is trimmed text whatever its original shape. Unrecognized columns
/// keep their cells verbatim. Values are never dropped by renaming.
pub fn normalize_table(raw: &RawTable) -> Result<NormalizedTable, PipelineError> {
    let fields: Vec<Option<CanonicalField>> = raw
        .headers
        .iter()
        .map(|h| CanonicalField::from_header(h.trim()))
        .collect();

    let headers: Vec<String> = raw
        .headers
        .iter()
        .zip(&fields)
        .map(|(h, f)| match f {
            Some(field) => field.name().to_string(),
            None => h.trim().to_string(),
        })
        .collect();

    let renamed = fields.iter().filter(|f| f.is_some()).count();
    tracing::debug!(
        total = raw.headers.len(),
        canonical = renamed,
        "normalized column headers"
    );

    let mut rows = Vec::with_capacity(raw.rows.len());
    for raw_row in &raw.rows {
        let mut row = Vec::with_capacity(raw_row.len());
        for (cell, field) in raw_row.iter().zip(&fields) {
            row.push(match field {
                Some(f) if f.is_numeric() => coerce_numeric(cell, f.name())?,
                Some(_) => CellValue::Text(cell.trim().to_string()),
                None => CellValue::Text(cell.clone()),
            });
        }
        rows.push(row);
    }

    Ok(NormalizedTable { headers, rows })
}

/// Strips thousands separators (commas and spaces) and parses the remainder
/// as `f64`. Empty after stripping means the cell is missing, not an error.
fn coerce_numeric(cell: &str, column: &str) -> Result<CellValue, PipelineError> {
    let stripped: String = cell.chars().filter(|c| *c != ',' && *c != ' ').collect();
    if stripped.is_empty() {
        return Ok(CellValue::Missing);
    }
    stripped
        .parse::<f64>()
        .map(CellValue::Number)
        .map_err(|_| PipelineError::DataFormat {
            column: column.to_string(),
            value: cell.to_string(),
        })
}

/// Stable sort by the period column, lexicographic ascending. A YYYY-MM
/// label makes this chronological; the label itself is never parsed.
pub fn sort_by_period(table: &mut NormalizedTable) {
    let Some(idx) = table.column_index(CanonicalField::Period.name()) else {
        return;
    };
    table.rows.sort_by(|a, b| {
        let pa = a.get(idx).and_then(|c| c.as_text()).unwrap_or("");
        let pb = b.get(idx).and_then(|c| c.as_text()).unwrap_or("");
        pa.cmp(pb)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_synonyms_rename_to_canonical() {
        let table = normalize_table(&raw(
            &["월", "매출", "전년_동월", "증감(%)"],
            &[&["2024-01", "1,000", "900", "11.1"]],
        ))
        .unwrap();
        assert_eq!(
            table.headers,
            vec!["period", "sales", "prior_year_sales", "growth_rate_pct"]
        );
    }

    #[test]
    fn test_headers_trimmed_before_lookup() {
        let table = normalize_table(&raw(&[" month ", " extra "], &[&["2024-01", "x"]])).unwrap();
        assert_eq!(table.headers, vec!["period", "extra"]);
    }

    #[test]
    fn test_normalization_idempotent() {
        let canonical = raw(
            &["period", "sales", "prior_year_sales", "growth_rate_pct"],
            &[&["2024-01", "100", "90", "11.1"]],
        );
        let once = normalize_table(&canonical).unwrap();
        let again = normalize_table(&RawTable {
            headers: once.headers.clone(),
            rows: vec![vec!["2024-01".into(), "100".into(), "90".into(), "11.1".into()]],
        })
        .unwrap();
        assert_eq!(once, again);
    }

    #[test]
    fn test_numeric_coercion_strips_separators() {
        let table = normalize_table(&raw(
            &["month", "sales", "prev", "growth"],
            &[&["2024-01", "1,234 ", " 2 345 ", "-3.5"]],
        ))
        .unwrap();
        assert_eq!(table.rows[0][1], CellValue::Number(1234.0));
        assert_eq!(table.rows[0][2], CellValue::Number(2345.0));
        assert_eq!(table.rows[0][3], CellValue::Number(-3.5));
    }

    #[test]
    fn test_empty_numeric_cell_is_missing() {
        let table = normalize_table(&raw(
            &["month", "sales", "prev", "growth"],
            &[&["2024-01", "", " , ", "1"]],
        ))
        .unwrap();
        assert_eq!(table.rows[0][1], CellValue::Missing);
        assert_eq!(table.rows[0][2], CellValue::Missing);
    }

    #[test]
    fn test_unparseable_numeric_cell_fails_with_column_and_value() {
        let err = normalize_table(&raw(
            &["month", "sales", "prev", "growth"],
            &[&["2024-01", "abc", "90", "1"]],
        ))
        .unwrap_err();
        match err {
            PipelineError::DataFormat { column, value } => {
                assert_eq!(column, "sales");
                assert_eq!(value, "abc");
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_period_stringified_and_trimmed() {
        let table = normalize_table(&raw(&["month"], &[&[" 2024-01 "]])).unwrap();
        assert_eq!(table.rows[0][0], CellValue::Text("2024-01".to_string()));
    }

    #[test]
    fn test_extra_columns_pass_through_verbatim() {
        let table = normalize_table(&raw(
            &["month", "sales", "region"],
            &[&["2024-01", "100", " Seoul "]],
        ))
        .unwrap();
        assert_eq!(table.headers[2], "region");
        assert_eq!(table.rows[0][2], CellValue::Text(" Seoul ".to_string()));
    }

    #[test]
    fn test_sort_by_period_lexicographic() {
        let mut table = normalize_table(&raw(
            &["month"],
            &[&["2023-01"], &["2023-03"], &["2023-02"]],
        ))
        .unwrap();
        sort_by_period(&mut table);
        let periods: Vec<_> = table
            .rows
            .iter()
            .map(|r| r[0].as_text().unwrap().to_string())
            .collect();
        assert_eq!(periods, vec!["2023-01", "2023-02", "2023-03"]);
    }
}
