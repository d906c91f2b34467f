// Dual-line time series: current sales vs. prior-year sales, with markers.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SalesRow;
use shared::utils::format_thousands;

use super::{finite_bounds, point_string, span};
use crate::config::theme::ChartPalette;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 380.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 50.0;

#[component]
pub fn SalesLines(rows: Vec<SalesRow>) -> Element {
    let palette = ChartPalette::default_light();

    let Some((min_v, max_v)) =
        finite_bounds(rows.iter().flat_map(|r| [r.sales, r.prior_year_sales]))
    else {
        return rsx! {
            div {
                style: "background: {palette.panel}; border-radius: 8px; padding: 16px;",
                h3 { style: "margin: 0; font-size: 15px;", "Monthly sales vs. prior year" }
                p { style: "color: #5a6676; font-size: 13px;", "No numeric data to plot." }
            }
        };
    };

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let range = span(min_v, max_v);
    let n = rows.len();

    let x_at = |i: usize| {
        if n > 1 {
            MARGIN_LEFT + i as f64 * plot_w / (n - 1) as f64
        } else {
            MARGIN_LEFT + plot_w / 2.0
        }
    };
    let y_at = |v: f64| MARGIN_TOP + (max_v - v) * plot_h / range;

    let sales_points = point_string(
        rows.iter()
            .enumerate()
            .filter(|(_, r)| r.sales.is_finite())
            .map(|(i, r)| (x_at(i), y_at(r.sales))),
    );
    let prior_points = point_string(
        rows.iter()
            .enumerate()
            .filter(|(_, r)| r.prior_year_sales.is_finite())
            .map(|(i, r)| (x_at(i), y_at(r.prior_year_sales))),
    );

    let markers: Vec<Element> = rows
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            let x = x_at(i);
            let mut nodes = Vec::new();
            if row.sales.is_finite() {
                let cy = y_at(row.sales);
                nodes.push(rsx! {
                    circle { cx: "{x}", cy: "{cy}", r: "3.5", fill: palette.sales_line }
                });
            }
            if row.prior_year_sales.is_finite() {
                let cy = y_at(row.prior_year_sales);
                nodes.push(rsx! {
                    circle { cx: "{x}", cy: "{cy}", r: "3", fill: palette.prior_line }
                });
            }
            nodes
        })
        .collect();

    // Thin the axis labels when there are many periods.
    let label_step = (n / 12).max(1);
    let baseline = HEIGHT - MARGIN_BOTTOM;
    let label_y = baseline + 16.0;
    let x_labels: Vec<Element> = rows
        .iter()
        .enumerate()
        .filter(|(i, _)| i % label_step == 0)
        .map(|(i, row)| {
            let x = x_at(i);
            let period = row.period.clone();
            rsx! {
                text {
                    x: "{x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    font_size: "10",
                    fill: palette.foreground,
                    "{period}"
                }
            }
        })
        .collect();

    let axis_x = MARGIN_LEFT - 8.0;
    let max_label = format_thousands(max_v);
    let max_label_y = y_at(max_v) + 4.0;
    let min_label = format_thousands(min_v);
    let min_label_y = y_at(min_v) + 4.0;
    let right_edge = WIDTH - MARGIN_RIGHT;

    rsx! {
        div {
            style: "background: {palette.panel}; border-radius: 8px; padding: 16px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Monthly sales vs. prior year" }
            svg {
                width: "100%",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                line {
                    x1: "{MARGIN_LEFT}", y1: "{baseline}",
                    x2: "{right_edge}", y2: "{baseline}",
                    stroke: palette.grid, stroke_width: "1",
                }
                line {
                    x1: "{MARGIN_LEFT}", y1: "{MARGIN_TOP}",
                    x2: "{MARGIN_LEFT}", y2: "{baseline}",
                    stroke: palette.grid, stroke_width: "1",
                }

                polyline {
                    points: "{prior_points}",
                    fill: "none",
                    stroke: palette.prior_line,
                    stroke_width: "3",
                    stroke_dasharray: "5 4",
                }
                polyline {
                    points: "{sales_points}",
                    fill: "none",
                    stroke: palette.sales_line,
                    stroke_width: "3",
                }

                {markers.into_iter()}
                {x_labels.into_iter()}

                text {
                    x: "{axis_x}", y: "{max_label_y}",
                    text_anchor: "end", font_size: "10", fill: palette.foreground,
                    "{max_label}"
                }
                text {
                    x: "{axis_x}", y: "{min_label_y}",
                    text_anchor: "end", font_size: "10", fill: palette.foreground,
                    "{min_label}"
                }
            }
            div {
                style: "display: flex; gap: 16px; font-size: 12px; margin-top: 4px;",
                span { style: "color: {palette.sales_line};", "\u{25cf} Sales" }
                span { style: "color: {palette.prior_line};", "\u{25cf} Prior year" }
            }
        }
    }
}
