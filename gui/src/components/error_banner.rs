// Error banner shown instead of the dashboard when an upload is rejected.
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            style: "background: #fdecea; border: 1px solid #e15454; color: #8f2525; \
                    border-radius: 8px; padding: 16px 20px; margin-top: 16px;",
            strong { "Upload failed: " }
            "{message}"
            p {
                style: "margin: 8px 0 0 0; font-size: 13px;",
                "Fix the file and upload it again; nothing from this upload was kept."
            }
        }
    }
}
