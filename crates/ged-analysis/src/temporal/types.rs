//! Temporal output types.

use serde::{Deserialize, Serialize};

use super::period::YearMonth;

/// One month of one document type's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalPoint {
    pub period: YearMonth,
    /// Deposits in this month.
    pub count: u64,
    /// Deposits up to and including this month.
    pub cumulative: u64,
}

/// Monthly series of one document type, periods ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalSeries {
    pub document_type: String,
    pub points: Vec<TemporalPoint>,
}

impl TemporalSeries {
    /// Total deposits of the type (the last cumulative value).
    pub fn total(&self) -> u64 {
        self.points.last().map(|p| p.cumulative).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Flat `(period, type, count, cumulative)` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalRow {
    pub period: YearMonth,
    pub document_type: String,
    pub count: u64,
    pub cumulative: u64,
}

/// Flatten series into rows, keeping series order then period order.
pub fn flatten(series: &[TemporalSeries]) -> Vec<TemporalRow> {
    series
        .iter()
        .flat_map(|s| {
            s.points.iter().map(move |p| TemporalRow {
                period: p.period,
                document_type: s.document_type.clone(),
                count: p.count,
                cumulative: p.cumulative,
            })
        })
        .collect()
}
