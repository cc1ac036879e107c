//! Row normalization: raw fields → validated `DocumentEvent`s.

use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use ged_core::config::{ColumnConfig, GedConfig};
use ged_core::errors::LoadError;
use ged_core::models::DocumentEvent;

use super::decode::decode;
use super::ledger::Ledger;
use super::schema::LedgerSchema;
use super::types::{NormalizationReport, NormalizedRows, RawRow};
use crate::cache::hasher::hash_content;

/// Converts positional records into events for one resolved schema.
pub struct RecordNormalizer<'a> {
    schema: LedgerSchema,
    date_format: &'a str,
    trim: bool,
}

impl<'a> RecordNormalizer<'a> {
    /// Validate `headers` and prepare a normalizer. Fails on a missing required column.
    pub fn new<S: AsRef<str>>(
        headers: &[S],
        columns: &ColumnConfig,
        date_format: &'a str,
        trim: bool,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            schema: LedgerSchema::resolve(headers, columns)?,
            date_format,
            trim,
        })
    }

    pub fn schema(&self) -> &LedgerSchema {
        &self.schema
    }

    /// Build one event from a field accessor, recording diagnostics in `report`.
    ///
    /// Fields beyond the end of a short record read as empty strings.
    pub fn normalize<'r, F>(&self, field: F, report: &mut NormalizationReport) -> DocumentEvent
    where
        F: Fn(usize) -> Option<&'r str>,
    {
        let text = |idx: usize| -> String {
            let raw = field(idx).unwrap_or("");
            let value = if self.trim { raw.trim() } else { raw };
            value.to_string()
        };
        let optional = |idx: Option<usize>| idx.map(&text).unwrap_or_default();

        let raw_date = text(self.schema.deposit_date);
        let deposit_date = parse_date(&raw_date, self.date_format);
        if deposit_date.is_none() {
            report.unparsable_dates += 1;
            tracing::debug!(value = %raw_date, "unparsable deposit date; kept with null date");
        }

        let event = DocumentEvent {
            project: text(self.schema.project),
            emitter: text(self.schema.emitter),
            document_type: text(self.schema.document_type),
            lot: text(self.schema.lot),
            revision_index: text(self.schema.revision_index),
            deposit_date,
            added_by: optional(self.schema.added_by),
            document_label: optional(self.schema.document_label),
        };

        let has_missing = [
            &event.project,
            &event.emitter,
            &event.document_type,
            &event.lot,
            &event.revision_index,
        ]
        .iter()
        .any(|v| v.is_empty());
        if has_missing {
            report.missing_values += 1;
        }

        event
    }
}

/// Parse a deposit date with the configured format; empty or malformed → `None`.
pub fn parse_date(raw: &str, format: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, format).ok()
}

/// Normalize rows given as header → value mappings.
///
/// The first row's keys define the source schema; a row lacking one of
/// those keys reads it as empty. No rows at all is a valid empty result.
pub fn normalize_rows(rows: &[RawRow], config: &GedConfig) -> Result<NormalizedRows, LoadError> {
    let Some(first) = rows.first() else {
        return Ok(NormalizedRows::default());
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let normalizer = RecordNormalizer::new(
        &headers,
        &config.columns,
        config.input.effective_date_format(),
        config.input.effective_trim_fields(),
    )?;

    let mut report = NormalizationReport {
        missing_optional_columns: normalizer.schema().missing_optional(&config.columns),
        ..Default::default()
    };
    let mut events = Vec::with_capacity(rows.len());
    for row in rows {
        report.rows_read += 1;
        let event = normalizer.normalize(
            |idx| headers.get(idx).and_then(|h| row.get(*h)).map(String::as_str),
            &mut report,
        );
        events.push(event);
    }

    Ok(NormalizedRows { events, report })
}

/// Normalize already-decoded delimited text.
pub fn normalize_str(text: &str, config: &GedConfig) -> Result<NormalizedRows, LoadError> {
    let start = Instant::now();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.input.effective_delimiter())
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            line: e.position().map(|p| p.line()).unwrap_or(1),
            message: e.to_string(),
        })?
        .clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(LoadError::EmptyInput);
    }
    let header_names: Vec<&str> = headers.iter().collect();

    let normalizer = RecordNormalizer::new(
        &header_names,
        &config.columns,
        config.input.effective_date_format(),
        config.input.effective_trim_fields(),
    )?;

    let mut report = NormalizationReport {
        missing_optional_columns: normalizer.schema().missing_optional(&config.columns),
        ..Default::default()
    };
    for column in &report.missing_optional_columns {
        tracing::warn!(column = %column, "optional column absent; values read as empty");
    }

    let mut events = Vec::new();
    for result in reader.records() {
        report.rows_read += 1;
        match result {
            Ok(record) => events.push(normalizer.normalize(|idx| record.get(idx), &mut report)),
            Err(e) => {
                report.rows_dropped += 1;
                tracing::warn!(
                    line = e.position().map(|p| p.line()).unwrap_or(0),
                    error = %e,
                    "dropping unreadable record"
                );
            }
        }
    }

    tracing::info!(
        rows_read = report.rows_read,
        rows_dropped = report.rows_dropped,
        unparsable_dates = report.unparsable_dates,
        missing_values = report.missing_values,
        normalize_duration_ms = start.elapsed().as_millis() as u64,
        "ledger normalized"
    );

    Ok(NormalizedRows { events, report })
}

/// Decode and normalize raw source bytes into a `Ledger`.
pub fn load_bytes(source: &str, bytes: &[u8], config: &GedConfig) -> Result<Ledger, LoadError> {
    let text = decode(bytes, config.input.effective_encoding())?;
    let NormalizedRows { events, report } = normalize_str(&text, config)?;
    Ok(Ledger {
        source: source.to_string(),
        content_hash: hash_content(bytes),
        events,
        report,
    })
}

/// Read, decode and normalize a ledger file.
pub fn load_path(path: &Path, config: &GedConfig) -> Result<Ledger, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_bytes(&path.display().to_string(), &bytes, config)
}
