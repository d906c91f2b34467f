// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Monthly Sales Dashboard (Dioxus Desktop)...");

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Monthly Sales Dashboard")
            .with_inner_size(LogicalSize::new(1280.0, 820.0)),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(App);
}
