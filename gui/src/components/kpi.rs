// KPI summary cards: total, average, best and worst period.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SalesSummary;
use shared::utils::{format_signed_pct, format_thousands};

use crate::config::theme::ChartPalette;

#[component]
pub fn KpiRow(summary: SalesSummary) -> Element {
    let (max_value, max_period) = match &summary.max_row {
        Some(row) => (format_thousands(row.sales), row.period.clone()),
        None => ("\u{2014}".to_string(), String::new()),
    };
    let (min_value, min_period) = match &summary.min_row {
        Some(row) => (format_thousands(row.sales), row.period.clone()),
        None => ("\u{2014}".to_string(), String::new()),
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
            KpiCard {
                label: "Total sales".to_string(),
                value: format_thousands(summary.total_sales),
                detail: format!("{} vs. prior year", format_signed_pct(summary.growth_pct)),
            }
            KpiCard {
                label: "Average sales".to_string(),
                value: format_thousands(summary.average_sales),
                detail: String::new(),
            }
            KpiCard {
                label: "Best month".to_string(),
                value: max_value,
                detail: max_period,
            }
            KpiCard {
                label: "Worst month".to_string(),
                value: min_value,
                detail: min_period,
            }
        }
    }
}

#[component]
fn KpiCard(label: String, value: String, detail: String) -> Element {
    let palette = ChartPalette::default_light();

    rsx! {
        div {
            style: "background: {palette.panel}; border-radius: 8px; padding: 14px 16px;",
            div { style: "font-size: 12px; color: #5a6676;", "{label}" }
            div { style: "font-size: 24px; font-weight: 600; margin-top: 4px;", "{value}" }
            if !detail.is_empty() {
                div { style: "font-size: 12px; color: #5a6676; margin-top: 4px;", "{detail}" }
            }
        }
    }
}
