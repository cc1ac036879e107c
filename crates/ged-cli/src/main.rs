//! `ged`: run GED ledger analyses from the command line.
//!
//! Every subcommand loads one export, optionally narrows it to a project,
//! runs one analysis and prints its result as pretty JSON on stdout.
//!
//! ```bash
//! ged summary export.csv
//! ged temporal export.csv --project "Tour Sud" --types PLAN,NOTE
//! ged groups export.csv --by lot,revision_index --index A --index B --ranked
//! ged groups export.csv --by added_by,document_type --per-year
//! ged lot export.csv --lot GO --window 12m
//! ged compare north.csv south.csv --window 6m
//! ```

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ged_core::config::{CliOverrides, GedConfig};
use ged_core::errors::{GedError, GedErrorCode};
use ged_core::{AnalysisWindow, EventField};

#[derive(Parser, Debug)]
#[command(name = "ged")]
#[command(about = "Analyze GED document-deposit ledgers", version)]
struct Cli {
    /// Directory searched for `ged.toml`
    #[arg(long, global = true, default_value = ".")]
    config: PathBuf,

    /// Text encoding of the export (WHATWG label)
    #[arg(long, global = true)]
    encoding: Option<String>,

    /// Field delimiter
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Deposit date format (chrono syntax)
    #[arg(long, global = true)]
    date_format: Option<String>,

    /// Disable the content-keyed ledger cache
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

/// The export to read and the project to keep.
#[derive(Args, Debug)]
struct Input {
    /// GED export file
    file: PathBuf,

    /// Keep only this project's events
    #[arg(long)]
    project: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load diagnostics and distinct values
    Summary(Input),

    /// Monthly and cumulative deposits per document type
    Temporal {
        #[command(flatten)]
        input: Input,
        /// Document types to chart (default: every type)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
    },

    /// Project → emitter → type → index flow graph
    Flow(Input),

    /// Grouped counts over one or two fields
    Groups {
        #[command(flatten)]
        input: Input,
        /// Grouping fields, e.g. `lot` or `lot,revision_index`
        #[arg(long, value_delimiter = ',', required = true)]
        by: Vec<EventField>,
        /// Keep only these revision indices (repeatable)
        #[arg(long = "index")]
        indices: Vec<String>,
        /// Sort by count descending instead of by key
        #[arg(long)]
        ranked: bool,
        /// One grouping per deposit year (undated rows are left out)
        #[arg(long)]
        per_year: bool,
    },

    /// Per-document version timelines and lot date ranges
    Lineage(Input),

    /// Sequential view of one lot
    Lot {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        lot: String,
        /// Restrict to 6m or 12m after the first deposit, or all
        #[arg(long)]
        window: Option<AnalysisWindow>,
    },

    /// Compare project volumes across exports
    Compare {
        /// GED export files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// 6m, 12m or all (default from config)
        #[arg(long)]
        window: Option<AnalysisWindow>,
    },
}

fn main() -> ExitCode {
    ged_core::tracing::init_tracing();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<GedError>() {
                Some(ged) => eprintln!("error: {}", ged.coded_string()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let window = match &cli.command {
        Command::Compare { window, .. } | Command::Lot { window, .. } => *window,
        _ => None,
    };
    let overrides = CliOverrides {
        delimiter: cli.delimiter,
        encoding: cli.encoding.clone(),
        date_format: cli.date_format.clone(),
        cache_enabled: cli.no_cache.then_some(false),
        window,
    };
    let config = GedConfig::load(&cli.config, Some(&overrides)).map_err(GedError::from)?;
    tracing::debug!(root = %cli.config.display(), "configuration resolved");

    let output = commands::execute(cli.command, config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
