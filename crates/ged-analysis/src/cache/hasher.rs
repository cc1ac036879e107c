//! Content hashing via xxh3.

use ged_core::GedConfig;
use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 64-bit hash of raw source bytes.
#[inline]
pub fn hash_content(content: &[u8]) -> u64 {
    xxh3_64(content)
}

/// Hash the parts of the config that change how bytes become events.
///
/// Effective values are hashed, so an explicit default and an unset field
/// fingerprint the same. Cache and analysis settings never change a parse.
pub fn config_fingerprint(config: &GedConfig) -> u64 {
    let parsing = (
        config.input.effective_delimiter(),
        config.input.effective_encoding(),
        config.input.effective_date_format(),
        config.input.effective_trim_fields(),
        [
            config.columns.effective_deposit_date(),
            config.columns.effective_document_type(),
            config.columns.effective_project(),
            config.columns.effective_emitter(),
            config.columns.effective_lot(),
            config.columns.effective_revision_index(),
            config.columns.effective_added_by(),
            config.columns.effective_document_label(),
        ],
    );
    let bytes = serde_json::to_vec(&parsing).unwrap_or_default();
    xxh3_64(&bytes)
}
