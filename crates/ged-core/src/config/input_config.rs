//! Input decoding configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_DELIMITER, DEFAULT_ENCODING};

/// How raw ledger bytes are decoded and split into fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Field delimiter. Default: `;`.
    pub delimiter: Option<char>,
    /// WHATWG encoding label. Default: `iso-8859-1`.
    pub encoding: Option<String>,
    /// chrono format of the deposit date column. Default: `%d/%m/%Y`.
    pub date_format: Option<String>,
    /// Trim surrounding whitespace from every field. Default: true.
    pub trim_fields: Option<bool>,
}

impl InputConfig {
    pub fn effective_delimiter(&self) -> u8 {
        self.delimiter
            .filter(char::is_ascii)
            .map(|c| c as u8)
            .unwrap_or(DEFAULT_DELIMITER)
    }

    pub fn effective_encoding(&self) -> &str {
        self.encoding.as_deref().unwrap_or(DEFAULT_ENCODING)
    }

    pub fn effective_date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn effective_trim_fields(&self) -> bool {
        self.trim_fields.unwrap_or(true)
    }

    /// Resolve the configured encoding label.
    pub fn resolve_encoding(&self) -> Option<&'static encoding_rs::Encoding> {
        encoding_rs::Encoding::for_label(self.effective_encoding().as_bytes())
    }
}
