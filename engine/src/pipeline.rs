use crate::data::normalize::{self, CanonicalField};
use crate::data::{csv_reader, schema};
use crate::error::PipelineError;
use crate::metrics;
use shared::models::{NormalizedTable, RenderModel, SalesRow};

/// The request-scoped entry point: one uploaded file in, one complete
/// `RenderModel` out. Runs the whole pipeline synchronously — ingestion,
/// normalization, validation, period ordering, metric derivation — and
/// either succeeds wholesale or fails with a typed error; there is no
/// partial dashboard. Each call owns its state, so a new upload simply
/// replaces the previous model.
pub fn build_dashboard(bytes: &[u8]) -> Result<RenderModel, PipelineError> {
    let raw = csv_reader::read_table(bytes)?;
    tracing::info!(
        rows = raw.rows.len(),
        columns = raw.headers.len(),
        "ingested uploaded CSV"
    );

    let mut table = normalize::normalize_table(&raw)?;
    schema::require_columns(&table)?;
    normalize::sort_by_period(&mut table);

    let rows = extract_rows(&table);
    let summary = metrics::summarize(&rows);
    let divergence = metrics::rank_divergence(&rows);

    tracing::info!(
        total_sales = summary.total_sales,
        total_prior_year_sales = summary.total_prior_year_sales,
        growth_pct = summary.growth_pct,
        "derived dashboard aggregates"
    );

    Ok(RenderModel {
        rows,
        table,
        summary,
        divergence,
    })
}

/// Projects the canonical columns of the sorted table into typed rows.
/// Missing numeric cells become NaN; the metric calculators exclude them.
fn extract_rows(table: &NormalizedTable) -> Vec<SalesRow> {
    let (Some(period), Some(sales), Some(prior), Some(growth)) = (
        table.column_index(CanonicalField::Period.name()),
        table.column_index(CanonicalField::Sales.name()),
        table.column_index(CanonicalField::PriorYearSales.name()),
        table.column_index(CanonicalField::GrowthRatePct.name()),
    ) else {
        // Unreachable after require_columns; kept total for standalone use.
        return Vec::new();
    };

    table
        .rows
        .iter()
        .map(|row| SalesRow {
            period: row[period].as_text().unwrap_or("").to_string(),
            sales: row[sales].as_number().unwrap_or(f64::NAN),
            prior_year_sales: row[prior].as_number().unwrap_or(f64::NAN),
            growth_rate_pct: row[growth].as_number().unwrap_or(f64::NAN),
        })
        .collect()
}
