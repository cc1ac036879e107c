//! In-memory ledger cache using moka.

use std::sync::Arc;
use std::time::Duration;

use ged_core::config::CacheConfig;
use ged_core::errors::LoadError;
use ged_core::GedConfig;
use moka::sync::Cache;

use super::hasher::{config_fingerprint, hash_content};
use crate::ingest::Ledger;

/// Identity of a parse: what was read and how it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub content_hash: u64,
    pub config_fingerprint: u64,
}

impl CacheKey {
    pub fn new(bytes: &[u8], config: &GedConfig) -> Self {
        Self {
            content_hash: hash_content(bytes),
            config_fingerprint: config_fingerprint(config),
        }
    }
}

/// Parsed ledgers keyed by content identity.
///
/// Also remembers the last key seen per source name, so that a source whose
/// bytes changed drops its stale ledger instead of waiting for eviction.
pub struct LedgerCache {
    ledgers: Cache<CacheKey, Arc<Ledger>>,
    sources: Cache<String, CacheKey>,
}

impl LedgerCache {
    pub fn new(config: &CacheConfig) -> Self {
        let idle = Duration::from_secs(config.effective_time_to_idle_secs());
        let ledgers = Cache::builder()
            .max_capacity(config.effective_max_entries())
            .time_to_idle(idle)
            .build();
        let sources = Cache::builder()
            .max_capacity(config.effective_max_entries())
            .time_to_idle(idle)
            .build();
        Self { ledgers, sources }
    }

    /// Return the cached ledger for `key`, or run `load` and cache its result.
    ///
    /// Load errors are returned as-is and never cached.
    pub fn get_or_load<F>(
        &self,
        source: &str,
        key: CacheKey,
        load: F,
    ) -> Result<Arc<Ledger>, LoadError>
    where
        F: FnOnce() -> Result<Ledger, LoadError>,
    {
        if let Some(previous) = self.sources.get(source) {
            if previous != key {
                tracing::debug!(source, "source content changed; invalidating stale ledger");
                self.ledgers.invalidate(&previous);
            }
        }
        self.sources.insert(source.to_string(), key);

        if let Some(ledger) = self.ledgers.get(&key) {
            tracing::debug!(source, content_hash = key.content_hash, cache_hit = true, "ledger cache");
            return Ok(ledger);
        }
        tracing::debug!(source, content_hash = key.content_hash, cache_hit = false, "ledger cache");

        let ledger = Arc::new(load()?);
        self.ledgers.insert(key, Arc::clone(&ledger));
        Ok(ledger)
    }

    /// Look up a ledger without loading.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Ledger>> {
        self.ledgers.get(key)
    }

    /// Number of cached ledgers. Eventually consistent.
    pub fn entry_count(&self) -> u64 {
        self.ledgers.run_pending_tasks();
        self.ledgers.entry_count()
    }

    /// Drop every cached ledger.
    pub fn invalidate_all(&self) {
        self.ledgers.invalidate_all();
        self.sources.invalidate_all();
    }
}
