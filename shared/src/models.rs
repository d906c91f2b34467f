use serde::{Deserialize, Serialize};

/// One monthly observation after normalization.
///
/// `growth_rate_pct` is carried exactly as supplied by the input file; it is
/// display data and is never recomputed from `sales` / `prior_year_sales`
/// (the two may disagree and the pipeline does not reconcile them).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    /// Opaque period label, e.g. "2024-03". Sorted as a string.
    pub period: String,
    pub sales: f64,
    pub prior_year_sales: f64,
    pub growth_rate_pct: f64,
}

/// A single normalized cell. `Missing` covers numeric cells that were empty
/// after separator stripping; pass-through columns keep their original text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// The full normalized table, canonical and pass-through columns alike,
/// rows sorted by period ascending. The raw-data view renders this directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl NormalizedTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregates derived once per upload.
///
/// Policies: an empty table yields zeroed totals/average and `None` extremes;
/// a zero (or absent) prior-year total yields `growth_pct == 0.0` rather than
/// NaN or infinity; ties on max/min pick the first row in sorted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub total_prior_year_sales: f64,
    pub average_sales: f64,
    /// Totals-based year-over-year growth, percent.
    pub growth_pct: f64,
    pub max_row: Option<SalesRow>,
    pub min_row: Option<SalesRow>,
}

/// Per-row year-over-year difference (`sales - prior_year_sales`), feeding
/// the horizontal bar chart. The divergence list is sorted ascending by
/// `diff`; the three largest rows are flagged high and the three smallest
/// low. Both flags can be set on the same row when the table has fewer than
/// six rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergenceRow {
    pub period: String,
    pub diff: f64,
    pub highlight_high: bool,
    pub highlight_low: bool,
}

impl DivergenceRow {
    pub fn highlighted(&self) -> bool {
        self.highlight_high || self.highlight_low
    }
}

/// Everything the presentation layer consumes for one upload. A new upload
/// replaces the whole model; nothing is persisted or updated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderModel {
    /// Typed rows in period order, for the line and growth-rate charts.
    pub rows: Vec<SalesRow>,
    /// Normalized table including pass-through columns, for the raw view.
    pub table: NormalizedTable,
    pub summary: SalesSummary,
    /// Sorted ascending by diff, with highlight flags applied.
    pub divergence: Vec<DivergenceRow>,
}
