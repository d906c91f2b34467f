// Total-sales indicator panel: the headline figure with its delta against
// the prior-year total.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SalesSummary;
use shared::utils::{format_signed_pct, format_thousands};

use crate::config::theme::ChartPalette;

#[component]
pub fn TotalIndicator(summary: SalesSummary) -> Element {
    let palette = ChartPalette::default_light();
    let delta_color = if summary.growth_pct >= 0.0 {
        "#2e9e67"
    } else {
        "#c74a4a"
    };
    let total = format_thousands(summary.total_sales);
    let delta = format_signed_pct(summary.growth_pct);
    let prior_total = format_thousands(summary.total_prior_year_sales);

    rsx! {
        div {
            style: "background: {palette.panel}; border-radius: 8px; padding: 16px; \
                    display: flex; flex-direction: column; justify-content: center; \
                    align-items: center; text-align: center;",
            h3 { style: "margin: 0 0 12px 0; font-size: 15px;", "Total sales" }
            div {
                style: "font-size: 40px; font-weight: 600;",
                "{total}"
            }
            div {
                style: "font-size: 18px; color: {delta_color}; margin-top: 8px;",
                "{delta} vs. prior year"
            }
            div {
                style: "font-size: 13px; color: #5a6676; margin-top: 12px;",
                "Prior-year total: {prior_total}"
            }
        }
    }
}
