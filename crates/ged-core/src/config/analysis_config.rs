//! Analysis defaults.

use serde::{Deserialize, Serialize};

use crate::models::AnalysisWindow;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Window used by project comparisons when none is requested. Default: all.
    pub window: Option<AnalysisWindow>,
}

impl AnalysisConfig {
    pub fn effective_window(&self) -> AnalysisWindow {
        self.window.unwrap_or_default()
    }
}
