//! Content cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TIME_TO_IDLE_SECS};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Keep parsed ledgers keyed by content hash. Default: true.
    pub enabled: Option<bool>,
    /// Maximum number of cached ledgers. Default: 16.
    pub max_entries: Option<u64>,
    /// Evict a ledger after this many idle seconds. Default: 3600.
    pub time_to_idle_secs: Option<u64>,
}

impl CacheConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_max_entries(&self) -> u64 {
        self.max_entries.unwrap_or(DEFAULT_CACHE_MAX_ENTRIES)
    }

    pub fn effective_time_to_idle_secs(&self) -> u64 {
        self.time_to_idle_secs
            .unwrap_or(DEFAULT_CACHE_TIME_TO_IDLE_SECS)
    }
}
