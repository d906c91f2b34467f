use shared::models::{SalesRow, SalesSummary};

/// Computes the KPI aggregates from rows already sorted by period.
///
/// Missing values surface here as NaN and are excluded from sums, the mean
/// and extreme selection. An empty table yields zeroed totals and `None`
/// extremes so rendering never divides by zero. When the prior-year total is
/// zero the growth percentage is 0.0 by policy, never NaN or infinity.
pub fn summarize(rows: &[SalesRow]) -> SalesSummary {
    let total_sales: f64 = rows.iter().map(|r| r.sales).filter(|v| !v.is_nan()).sum();
    let total_prior_year_sales: f64 = rows
        .iter()
        .map(|r| r.prior_year_sales)
        .filter(|v| !v.is_nan())
        .sum();

    let counted = rows.iter().filter(|r| !r.sales.is_nan()).count();
    let average_sales = if counted > 0 {
        total_sales / counted as f64
    } else {
        0.0
    };

    let growth_pct = if total_prior_year_sales != 0.0 {
        (total_sales - total_prior_year_sales) / total_prior_year_sales * 100.0
    } else {
        0.0
    };

    // Strict comparisons keep the first row in sorted order on ties.
    let mut max_row: Option<&SalesRow> = None;
    let mut min_row: Option<&SalesRow> = None;
    for row in rows.iter().filter(|r| !r.sales.is_nan()) {
        if max_row.map_or(true, |m| row.sales > m.sales) {
            max_row = Some(row);
        }
        if min_row.map_or(true, |m| row.sales < m.sales) {
            min_row = Some(row);
        }
    }

    SalesSummary {
        total_sales,
        total_prior_year_sales,
        average_sales,
        growth_pct,
        max_row: max_row.cloned(),
        min_row: min_row.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(period: &str, sales: f64, prior: f64) -> SalesRow {
        SalesRow {
            period: period.to_string(),
            sales,
            prior_year_sales: prior,
            growth_rate_pct: 0.0,
        }
    }

    #[test]
    fn test_totals_and_growth() {
        let rows = vec![
            row("2024-01", 100.0, 90.0),
            row("2024-02", 200.0, 180.0),
            row("2024-03", 300.0, 270.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.total_sales, 600.0);
        assert_eq!(s.total_prior_year_sales, 540.0);
        assert_eq!(s.average_sales, 200.0);
        assert!((s.growth_pct - 11.111111).abs() < 1e-4);
    }

    #[test]
    fn test_zero_prior_year_total_gives_zero_growth() {
        let rows = vec![row("2024-01", 100.0, 0.0)];
        let s = summarize(&rows);
        assert_eq!(s.growth_pct, 0.0);
        assert!(s.growth_pct.is_finite());
    }

    #[test]
    fn test_empty_table() {
        let s = summarize(&[]);
        assert_eq!(s.total_sales, 0.0);
        assert_eq!(s.total_prior_year_sales, 0.0);
        assert_eq!(s.average_sales, 0.0);
        assert_eq!(s.growth_pct, 0.0);
        assert!(s.max_row.is_none());
        assert!(s.min_row.is_none());
    }

    #[test]
    fn test_max_min_rows() {
        let rows = vec![
            row("2024-01", 150.0, 0.0),
            row("2024-02", 300.0, 0.0),
            row("2024-03", 90.0, 0.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.max_row.unwrap().period, "2024-02");
        assert_eq!(s.min_row.unwrap().period, "2024-03");
    }

    #[test]
    fn test_tied_extremes_pick_first_in_order() {
        let rows = vec![
            row("2024-01", 100.0, 0.0),
            row("2024-02", 100.0, 0.0),
            row("2024-03", 100.0, 0.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.max_row.unwrap().period, "2024-01");
        assert_eq!(s.min_row.unwrap().period, "2024-01");
    }

    #[test]
    fn test_missing_values_excluded() {
        let rows = vec![
            row("2024-01", 100.0, 90.0),
            row("2024-02", f64::NAN, f64::NAN),
            row("2024-03", 300.0, 270.0),
        ];
        let s = summarize(&rows);
        assert_eq!(s.total_sales, 400.0);
        assert_eq!(s.total_prior_year_sales, 360.0);
        assert_eq!(s.average_sales, 200.0);
        assert_eq!(s.max_row.unwrap().period, "2024-03");
    }
}
