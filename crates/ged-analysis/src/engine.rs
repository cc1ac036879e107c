//! Engine facade: configuration plus the content-keyed ledger cache.
//!
//! The engine only loads. Every analysis is a free function over a
//! ledger's events and explicit selection parameters.

use std::path::Path;
use std::sync::Arc;

use ged_core::errors::LoadError;
use ged_core::GedConfig;

use crate::cache::{config_fingerprint, hash_content, CacheKey, LedgerCache};
use crate::ingest::{self, Ledger};

pub struct GedEngine {
    config: GedConfig,
    fingerprint: u64,
    cache: Option<LedgerCache>,
}

impl GedEngine {
    pub fn new(config: GedConfig) -> Self {
        let cache = config
            .cache
            .effective_enabled()
            .then(|| LedgerCache::new(&config.cache));
        Self {
            fingerprint: config_fingerprint(&config),
            config,
            cache,
        }
    }

    pub fn config(&self) -> &GedConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&LedgerCache> {
        self.cache.as_ref()
    }

    /// Parse `bytes` as the ledger named `source`, reusing a cached parse of
    /// identical content.
    pub fn load_bytes(&self, source: &str, bytes: &[u8]) -> Result<Arc<Ledger>, LoadError> {
        let load = || ingest::load_bytes(source, bytes, &self.config);
        match &self.cache {
            Some(cache) => {
                let key = CacheKey {
                    content_hash: hash_content(bytes),
                    config_fingerprint: self.fingerprint,
                };
                cache.get_or_load(source, key, load)
            }
            None => load().map(Arc::new),
        }
    }

    /// Read and parse a ledger file.
    pub fn load_path(&self, path: &Path) -> Result<Arc<Ledger>, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_bytes(&path.display().to_string(), &bytes)
    }
}
