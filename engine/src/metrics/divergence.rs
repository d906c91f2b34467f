use shared::models::{DivergenceRow, SalesRow};

/// How many rows get flagged at each end of the divergence ranking.
const HIGHLIGHT_COUNT: usize = 3;

/// Ranks rows by year-over-year difference (`sales - prior_year_sales`),
/// ascending, and flags the three largest as high and the three smallest as
/// low. Rank position decides, not magnitude. With fewer than six rows the
/// two flag sets intersect; a single row carries both flags. NaN diffs (from
/// missing cells) order last via total ordering. The stable sort keeps tied
/// diffs in period order.
pub fn rank_divergence(rows: &[SalesRow]) -> Vec<DivergenceRow> {
    let mut ranked: Vec<DivergenceRow> = rows
        .iter()
        .map(|r| DivergenceRow {
            period: r.period.clone(),
            diff: r.sales - r.prior_year_sales,
            highlight_high: false,
            highlight_low: false,
        })
        .collect();

    ranked.sort_by(|a, b| a.diff.total_cmp(&b.diff));

    let n = ranked.len();
    let k = HIGHLIGHT_COUNT.min(n);
    for row in ranked.iter_mut().take(k) {
        row.highlight_low = true;
    }
    for row in ranked.iter_mut().skip(n - k) {
        row.highlight_high = true;
    }
    ranked
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
    fn test_sorted_ascending_by_diff() {
        let rows = vec![
            row("2024-01", 100.0, 50.0),  // +50
            row("2024-02", 100.0, 130.0), // -30
            row("2024-03", 100.0, 90.0),  // +10
        ];
        let ranked = rank_divergence(&rows);
        let diffs: Vec<f64> = ranked.iter().map(|r| r.diff).collect();
        assert_eq!(diffs, vec![-30.0, 10.0, 50.0]);
    }

    #[test]
    fn test_six_distinct_rows_flag_three_each_disjoint() {
        let rows: Vec<SalesRow> = (1..=6)
            .map(|i| row(&format!("2024-0{i}"), i as f64 * 10.0, 0.0))
            .collect();
        let ranked = rank_divergence(&rows);

        let high: Vec<&str> = ranked
            .iter()
            .filter(|r| r.highlight_high)
            .map(|r| r.period.as_str())
            .collect();
        let low: Vec<&str> = ranked
            .iter()
            .filter(|r| r.highlight_low)
            .map(|r| r.period.as_str())
            .collect();

        assert_eq!(high, vec!["2024-04", "2024-05", "2024-06"]);
        assert_eq!(low, vec!["2024-01", "2024-02", "2024-03"]);
        assert!(ranked.iter().all(|r| !(r.highlight_high && r.highlight_low)));
    }

    #[test]
    fn test_fewer_than_six_rows_sets_intersect() {
        let rows = vec![
            row("2024-01", 10.0, 0.0),
            row("2024-02", 20.0, 0.0),
            row("2024-03", 30.0, 0.0),
            row("2024-04", 40.0, 0.0),
        ];
        let ranked = rank_divergence(&rows);
        // Middle two rows sit in both the bottom-3 and the top-3.
        assert!(ranked[1].highlight_low && ranked[1].highlight_high);
        assert!(ranked[2].highlight_low && ranked[2].highlight_high);
        assert!(ranked[0].highlight_low && !ranked[0].highlight_high);
        assert!(ranked[3].highlight_high && !ranked[3].highlight_low);
    }

    #[test]
    fn test_single_row_carries_both_flags() {
        let ranked = rank_divergence(&[row("2024-01", 10.0, 5.0)]);
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].highlight_high);
        assert!(ranked[0].highlight_low);
        assert!(ranked[0].highlighted());
    }

    #[test]
    fn test_empty_rows() {
        assert!(rank_divergence(&[]).is_empty());
    }

    #[test]
    fn test_nan_diff_orders_last() {
        let rows = vec![
            row("2024-01", f64::NAN, 0.0),
            row("2024-02", 10.0, 0.0),
            row("2024-03", -10.0, 0.0),
        ];
        let ranked = rank_divergence(&rows);
        assert!(ranked[2].diff.is_nan());
        assert_eq!(ranked[0].period, "2024-03");
    }

    #[test]
    fn test_tied_diffs_keep_period_order() {
        let rows = vec![
            row("2024-02", 10.0, 0.0),
            row("2024-01", 10.0, 0.0),
        ];
        let ranked = rank_divergence(&rows);
        // Stable sort: ties keep the input order untouched.
        assert_eq!(ranked[0].period, "2024-02");
        assert_eq!(ranked[1].period, "2024-01");
    }
}
