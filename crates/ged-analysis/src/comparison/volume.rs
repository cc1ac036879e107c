//! Per-project document counts, computed in parallel.

use chrono::NaiveDate;
use ged_core::models::{AnalysisWindow, DocumentEvent};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::temporal::filter_window;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVolume {
    pub project: String,
    /// Dated documents deposited inside the window.
    pub document_count: u64,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
}

/// Count each project's deposits within `window` of its own first deposit.
///
/// Sorted by count descending, ties by project name.
pub fn compare_projects(
    projects: &[(&str, &[DocumentEvent])],
    window: AnalysisWindow,
) -> Vec<ProjectVolume> {
    let mut volumes: Vec<ProjectVolume> = projects
        .par_iter()
        .map(|(project, events)| {
            let windowed = filter_window(events, window);
            ProjectVolume {
                project: project.to_string(),
                document_count: windowed.events.len() as u64,
                window_start: windowed.start,
                window_end: windowed.end,
            }
        })
        .collect();

    volumes.sort_by(|a, b| {
        b.document_count
            .cmp(&a.document_count)
            .then_with(|| a.project.cmp(&b.project))
    });

    tracing::debug!(projects = volumes.len(), window = %window, "projects compared");
    volumes
}
