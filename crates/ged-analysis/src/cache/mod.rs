//! Content-keyed ledger cache.
//!
//! Parsed ledgers are kept keyed by the xxh3 hash of the raw bytes plus a
//! fingerprint of the parsing configuration, so an unchanged source is
//! never parsed twice.

pub mod hasher;
pub mod ledger_cache;

pub use hasher::{config_fingerprint, hash_content};
pub use ledger_cache::{CacheKey, LedgerCache};
