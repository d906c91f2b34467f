// Chart and layout palette. One fixed light palette for now; the struct
// keeps the door open for a selectable dark variant.

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPalette {
    pub background: &'static str,
    pub panel: &'static str,
    pub foreground: &'static str,
    pub grid: &'static str,
    /// Current-period sales line.
    pub sales_line: &'static str,
    /// Prior-year sales line (drawn dashed).
    pub prior_line: &'static str,
    /// Growth-rate bars at or above zero.
    pub bar_positive: &'static str,
    /// Growth-rate bars below zero.
    pub bar_negative: &'static str,
    /// Top-3 / bottom-3 divergence bars.
    pub bar_highlight: &'static str,
    /// All other divergence bars.
    pub bar_muted: &'static str,
}

impl ChartPalette {
    pub fn default_light() -> Self {
        Self {
            background: "#f5f7fa",
            panel: "#ffffff",
            foreground: "#2b3440",
            grid: "#d8dee8",
            sales_line: "rgba(58,174,216,0.9)",
            prior_line: "rgba(140,156,180,0.9)",
            bar_positive: "rgba(58,174,216,0.9)",
            bar_negative: "rgba(225,84,84,0.9)",
            bar_highlight: "rgba(255,176,32,0.95)",
            bar_muted: "rgba(200,210,225,0.7)",
        }
    }
}
