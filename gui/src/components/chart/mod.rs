// SVG chart components plus the small scaling helpers they share.

pub mod diff_bars;
pub mod growth_bars;
pub mod indicator;
pub mod line;

pub use diff_bars::DiffBars;
pub use growth_bars::GrowthBars;
pub use indicator::TotalIndicator;
pub use line::SalesLines;

/// Minimum and maximum over the finite values of an iterator. `None` when
/// nothing finite remains (empty table, or all cells missing).
pub(crate) fn finite_bounds(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    bounds
}

/// Guards a value range against collapsing to zero, so scale factors stay
/// finite when every value is identical.
pub(crate) fn span(lo: f64, hi: f64) -> f64 {
    if hi - lo > 0.0 {
        hi - lo
    } else {
        1.0
    }
}

/// Builds an SVG polyline point string, "x1,y1 x2,y2 ...".
pub(crate) fn point_string(points: impl Iterator<Item = (f64, f64)>) -> String {
    let mut out = String::new();
    for (x, y) in points {
        out.push_str(&format!("{:.2},{:.2} ", x, y));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_bounds_skips_nan() {
        let bounds = finite_bounds([3.0, f64::NAN, -1.0, 2.0]);
        assert_eq!(bounds, Some((-1.0, 3.0)));
    }

    #[test]
    fn test_finite_bounds_empty() {
        assert_eq!(finite_bounds([]), None);
        assert_eq!(finite_bounds([f64::NAN]), None);
    }

    #[test]
    fn test_span_never_zero() {
        assert_eq!(span(5.0, 5.0), 1.0);
        assert_eq!(span(2.0, 7.0), 5.0);
    }

    #[test]
    fn test_point_string_format() {
        let s = point_string([(1.0, 2.0), (3.5, 4.25)].into_iter());
        assert_eq!(s, "1.00,2.00 3.50,4.25");
    }
}
