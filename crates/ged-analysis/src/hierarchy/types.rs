//! Grouping output types.

use ged_core::models::EventField;
use ged_core::types::collections::SmallVec2;
use serde::{Deserialize, Serialize};

/// Ordering of the returned groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOrder {
    /// Ascending group key (treemap consumers).
    #[default]
    Natural,
    /// Count descending, ties by ascending key (ranked bars).
    CountDescending,
}

/// Count of one group key tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalGroup {
    pub key: SmallVec2<String>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grouping {
    pub fields: SmallVec2<EventField>,
    /// Rows that passed the index filter.
    pub rows_matched: u64,
    pub groups: Vec<HierarchicalGroup>,
}

impl Grouping {
    pub fn total(&self) -> u64 {
        self.groups.iter().map(|g| g.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The grouping of one deposit year's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGrouping {
    pub year: i32,
    pub grouping: Grouping,
}
