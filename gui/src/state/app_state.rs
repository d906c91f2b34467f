// Session-scoped dashboard state held in a Dioxus signal. One upload fully
// replaces the whole struct; nothing survives across uploads or restarts.

use serde::{Deserialize, Serialize};
use shared::models::RenderModel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Name of the most recently uploaded file, shown in the sidebar.
    pub file_name: Option<String>,
    /// The render model when the last upload succeeded.
    pub model: Option<RenderModel>,
    /// User-facing message when the last upload failed. `model` and `error`
    /// are never both set.
    pub error: Option<String>,
}

impl DashboardState {
    pub fn loaded(file_name: String, model: RenderModel) -> Self {
        Self {
            file_name: Some(file_name),
            model: Some(model),
            error: None,
        }
    }

    pub fn failed(file_name: String, message: String) -> Self {
        Self {
            file_name: Some(file_name),
            model: None,
            error: Some(message),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_exclusive() {
        let failed = DashboardState::failed("a.csv".into(), "bad file".into());
        assert!(failed.model.is_none());
        assert!(failed.error.is_some());
        assert!(!failed.is_empty());

        assert!(DashboardState::default().is_empty());
    }
}
