#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::chart::{DiffBars, GrowthBars, SalesLines, TotalIndicator};
use crate::components::{DataTable, ErrorBanner, KpiRow};
use crate::config::theme::ChartPalette;
use crate::state::app_state::DashboardState;

/// Root layout: upload sidebar on the left, dashboard pane on the right.
/// All dashboard state lives in one signal that each upload replaces.
#[component]
pub fn App() -> Element {
    let dashboard = use_signal(DashboardState::default);
    let palette = ChartPalette::default_light();

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; background: {palette.background}; \
                    color: {palette.foreground}; font-family: 'Segoe UI', sans-serif; margin: 0;",
            Sidebar { dashboard }
            main {
                style: "flex: 1; padding: 24px; overflow-y: auto;",
                Dashboard { dashboard }
            }
        }
    }
}

#[component]
fn Sidebar(mut dashboard: Signal<DashboardState>) -> Element {
    let loaded_note: Option<Element> = dashboard.read().file_name.clone().map(|name| {
        rsx! {
            p { style: "font-size: 12px; color: #5a6676;", "Loaded: {name}" }
        }
    });

    rsx! {
        aside {
            style: "width: 260px; padding: 24px 20px; background: #ffffff; \
                    border-right: 1px solid #d8dee8; box-sizing: border-box;",
            h2 { style: "margin-top: 0; font-size: 18px;", "Data upload" }
            p {
                style: "font-size: 13px; line-height: 1.5;",
                "Upload a CSV file with columns for period, sales, prior-year sales \
                 and growth rate."
            }
            input {
                r#type: "file",
                accept: ".csv",
                onchange: move |evt| async move {
                    let Some(file_engine) = evt.files() else { return };
                    let Some(name) = file_engine.files().into_iter().next() else { return };

                    match file_engine.read_file(&name).await {
                        Some(bytes) => {
                            tracing::info!(file = %name, size = bytes.len(), "processing uploaded file");
                            match engine::build_dashboard(&bytes) {
                                Ok(model) => dashboard.set(DashboardState::loaded(name, model)),
                                Err(err) => {
                                    tracing::warn!(file = %name, error = %err, "upload rejected");
                                    dashboard.set(DashboardState::failed(name, err.user_message()));
                                }
                            }
                        }
                        None => {
                            dashboard.set(DashboardState::failed(
                                name,
                                "The selected file could not be read.".to_string(),
                            ));
                        }
                    }
                },
            }
            {loaded_note}
            hr { style: "border: none; border-top: 1px solid #d8dee8; margin: 16px 0;" }
            p {
                style: "font-size: 12px; color: #5a6676; line-height: 1.6; margin: 0;",
                "\u{2022} A YYYY-MM period label is recommended"
                br {}
                "\u{2022} Thousands separators in numeric columns are stripped automatically"
            }
        }
    }
}

#[component]
fn Dashboard(dashboard: Signal<DashboardState>) -> Element {
    let (model, error) = {
        let state = dashboard.read();
        (state.model.clone(), state.error.clone())
    };

    if let Some(message) = error {
        return rsx! { ErrorBanner { message } };
    }

    let Some(model) = model else {
        return rsx! {
            p {
                style: "margin-top: 40px; text-align: center; color: #5a6676;",
                "Upload a CSV file from the sidebar to render the dashboard."
            }
        };
    };

    rsx! {
        KpiRow { summary: model.summary.clone() }
        div {
            style: "display: grid; grid-template-columns: 1.4fr 1fr; gap: 16px; margin-top: 16px;",
            SalesLines { rows: model.rows.clone() }
            TotalIndicator { summary: model.summary.clone() }
        }
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;",
            GrowthBars { rows: model.rows.clone() }
            DiffBars { divergence: model.divergence.clone() }
        }
        DataTable { table: model.table.clone() }
    }
}
