//! Compiled defaults shared across the workspace.

/// Field delimiter of GED exports.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Text encoding of GED exports (WHATWG label).
pub const DEFAULT_ENCODING: &str = "iso-8859-1";

/// Day/month/year format of the deposit date column.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

// Default header names of a GED export.
pub const COLUMN_DEPOSIT_DATE: &str = "Date dépôt GED";
pub const COLUMN_DOCUMENT_TYPE: &str = "TYPE DE DOCUMENT";
pub const COLUMN_PROJECT: &str = "PROJET";
pub const COLUMN_EMITTER: &str = "EMET";
pub const COLUMN_LOT: &str = "LOT";
pub const COLUMN_REVISION_INDEX: &str = "INDICE";
pub const COLUMN_ADDED_BY: &str = "Ajouté par";
pub const COLUMN_DOCUMENT_LABEL: &str = "Libellé du document";

/// Decimal places of the percentage shown in annotated index labels.
pub const PERCENTAGE_DECIMALS: usize = 2;

/// Length of the "first six months" comparison window, in days.
pub const FIRST_SIX_MONTHS_DAYS: i64 = 180;

/// Length of the "first year" comparison window, in days.
pub const FIRST_YEAR_DAYS: i64 = 365;

/// Default number of parsed ledgers kept by the content cache.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 16;

/// Default idle lifetime of a cached ledger, in seconds.
pub const DEFAULT_CACHE_TIME_TO_IDLE_SECS: u64 = 3600;

/// Separator used when an identity's revision indices are joined for display.
pub const INDEX_LIST_SEPARATOR: &str = ", ";

/// Project config file name, looked up in the analysis root.
pub const PROJECT_CONFIG_FILE: &str = "ged.toml";
