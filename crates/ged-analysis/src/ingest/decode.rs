//! Legacy text decoding via encoding_rs.

use std::borrow::Cow;

use ged_core::errors::LoadError;

/// Decode raw bytes with the encoding named by `label` (WHATWG label).
///
/// A byte-order mark overrides the label. Malformed sequences are replaced
/// with U+FFFD and logged; they never abort the load.
pub fn decode<'a>(bytes: &'a [u8], label: &str) -> Result<Cow<'a, str>, LoadError> {
    let encoding = encoding_rs::Encoding::for_label(label.as_bytes()).ok_or_else(|| {
        LoadError::UnsupportedEncoding {
            label: label.to_string(),
        }
    })?;

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "input contained byte sequences invalid for the encoding; replaced"
        );
    }
    Ok(text)
}
