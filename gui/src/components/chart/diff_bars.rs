// Horizontal bars of year-over-year difference, sorted ascending, with the
// top-3 / bottom-3 rows highlighted.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::DivergenceRow;
use shared::utils::format_thousands;

use super::{finite_bounds, span};
use crate::config::theme::ChartPalette;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 76.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 32.0;

#[component]
pub fn DiffBars(divergence: Vec<DivergenceRow>) -> Element {
    let palette = ChartPalette::default_light();

    let Some((lo, hi)) = finite_bounds(divergence.iter().map(|d| d.diff)) else {
        return rsx! {
            div {
                style: "background: {palette.panel}; border-radius: 8px; padding: 16px;",
                h3 { style: "margin: 0; font-size: 15px;", "Year-over-year difference" }
                p { style: "color: #5a6676; font-size: 13px;", "No difference data to plot." }
            }
        };
    };

    let lo = lo.min(0.0);
    let hi = hi.max(0.0);
    let range = span(lo, hi);

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let n = divergence.len().max(1);
    let slot = plot_h / n as f64;
    let bar_h = (slot * 0.7).min(22.0);

    let x_at = |v: f64| MARGIN_LEFT + (v - lo) * plot_w / range;
    let zero_x = x_at(0.0);

    let bars: Vec<Element> = divergence
        .iter()
        .enumerate()
        .filter(|(_, d)| d.diff.is_finite())
        .map(|(i, row)| {
            let x = x_at(row.diff.min(0.0));
            let y = MARGIN_TOP + i as f64 * slot + (slot - bar_h) / 2.0;
            let width = (x_at(row.diff) - zero_x).abs();
            let fill = if row.highlighted() {
                palette.bar_highlight
            } else {
                palette.bar_muted
            };
            rsx! {
                rect {
                    x: "{x}",
                    y: "{y}",
                    width: "{width}",
                    height: "{bar_h}",
                    fill: fill,
                }
            }
        })
        .collect();

    let label_x = MARGIN_LEFT - 8.0;
    let period_labels: Vec<Element> = divergence
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let y = MARGIN_TOP + i as f64 * slot + slot / 2.0 + 3.0;
            let period = row.period.clone();
            rsx! {
                text {
                    x: "{label_x}",
                    y: "{y}",
                    text_anchor: "end",
                    font_size: "10",
                    fill: palette.foreground,
                    "{period}"
                }
            }
        })
        .collect();

    let bottom = HEIGHT - MARGIN_BOTTOM;
    let axis_y = bottom + 16.0;
    let lo_x = x_at(lo);
    let lo_label = format_thousands(lo);
    let hi_x = x_at(hi);
    let hi_label = format_thousands(hi);

    rsx! {
        div {
            style: "background: {palette.panel}; border-radius: 8px; padding: 16px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 15px;",
                "Year-over-year difference (top/bottom 3 highlighted)"
            }
            svg {
                width: "100%",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                {bars.into_iter()}
                {period_labels.into_iter()}

                line {
                    x1: "{zero_x}", y1: "{MARGIN_TOP}",
                    x2: "{zero_x}", y2: "{bottom}",
                    stroke: palette.foreground,
                    stroke_width: "1",
                    stroke_dasharray: "3 3",
                }

                text {
                    x: "{lo_x}", y: "{axis_y}",
                    text_anchor: "start", font_size: "10", fill: palette.foreground,
                    "{lo_label}"
                }
                text {
                    x: "{hi_x}", y: "{axis_y}",
                    text_anchor: "end", font_size: "10", fill: palette.foreground,
                    "{hi_label}"
                }
            }
        }
    }
}
