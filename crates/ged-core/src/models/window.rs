//! Comparison windows anchored at a project's first deposit.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{FIRST_SIX_MONTHS_DAYS, FIRST_YEAR_DAYS};
use crate::errors::AnalysisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalysisWindow {
    #[serde(rename = "6m")]
    FirstSixMonths,
    #[serde(rename = "12m")]
    FirstYear,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl AnalysisWindow {
    /// Window length in days after the first deposit; `None` for the whole period.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::FirstSixMonths => Some(FIRST_SIX_MONTHS_DAYS),
            Self::FirstYear => Some(FIRST_YEAR_DAYS),
            Self::All => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstSixMonths => "6m",
            Self::FirstYear => "12m",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for AnalysisWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisWindow {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "6m" => Ok(Self::FirstSixMonths),
            "12m" | "1y" => Ok(Self::FirstYear),
            "all" => Ok(Self::All),
            _ => Err(AnalysisError::UnknownWindow {
                name: s.to_string(),
            }),
        }
    }
}
