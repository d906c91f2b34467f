// Vertical bars for the supplied growth-rate column, colored by sign, with
// a dotted zero reference line.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::SalesRow;

use super::{finite_bounds, span};
use crate::config::theme::ChartPalette;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 48.0;

#[component]
pub fn GrowthBars(rows: Vec<SalesRow>) -> Element {
    let palette = ChartPalette::default_light();

    let Some((lo, hi)) = finite_bounds(rows.iter().map(|r| r.growth_rate_pct)) else {
        return rsx! {
            div {
                style: "background: {palette.panel}; border-radius: 8px; padding: 16px;",
                h3 { style: "margin: 0; font-size: 15px;", "Growth rate vs. prior year" }
                p { style: "color: #5a6676; font-size: 13px;", "No growth-rate data to plot." }
            }
        };
    };

    // Always include zero so bars have a baseline to grow from.
    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    let range = span(lo, hi);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let n = rows.len().max(1);
    let slot = plot_w / n as f64;
    let bar_w = slot * 0.7;

    let y_at = |v: f64| MARGIN_TOP + (hi - v) * plot_h / range;
    let zero_y = y_at(0.0);
    let label_step = (rows.len() / 12).max(1);
    let baseline = HEIGHT - MARGIN_BOTTOM;
    let label_y = baseline + 16.0;

    let bars: Vec<Element> = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.growth_rate_pct.is_finite())
        .map(|(i, row)| {
            let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_w) / 2.0;
            let top = y_at(row.growth_rate_pct.max(0.0));
            let height = (y_at(row.growth_rate_pct.min(0.0)) - top).abs();
            let fill = if row.growth_rate_pct >= 0.0 {
                palette.bar_positive
            } else {
                palette.bar_negative
            };
            rsx! {
                rect {
                    x: "{x}",
                    y: "{top}",
                    width: "{bar_w}",
                    height: "{height}",
                    fill: fill,
                }
            }
        })
        .collect();

    let x_labels: Vec<Element> = rows
        .iter()
        .enumerate()
        .filter(|(i, _)| i % label_step == 0)
        .map(|(i, row)| {
            let x = MARGIN_LEFT + i as f64 * slot + slot / 2.0;
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
    let hi_label = format!("{:.1}", hi);
    let hi_label_y = y_at(hi) + 4.0;
    let lo_label = format!("{:.1}", lo);
    let lo_label_y = y_at(lo) + 4.0;
    let right_edge = WIDTH - MARGIN_RIGHT;

    rsx! {
        div {
            style: "background: {palette.panel}; border-radius: 8px; padding: 16px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Growth rate vs. prior year (%)" }
            svg {
                width: "100%",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                {bars.into_iter()}
                {x_labels.into_iter()}

                // Zero reference line.
                line {
                    x1: "{MARGIN_LEFT}", y1: "{zero_y}",
                    x2: "{right_edge}", y2: "{zero_y}",
                    stroke: palette.foreground,
                    stroke_width: "1",
                    stroke_dasharray: "3 3",
                }

                text {
                    x: "{axis_x}", y: "{hi_label_y}",
                    text_anchor: "end", font_size: "10", fill: palette.foreground,
                    "{hi_label}"
                }
                text {
                    x: "{axis_x}", y: "{lo_label_y}",
                    text_anchor: "end", font_size: "10", fill: palette.foreground,
                    "{lo_label}"
                }
            }
        }
    }
}
