//! sveltacular: run the positioning and fuzzy search engines from the shell.
//!
//! Useful for reproducing tooltip placement bugs from recorded DOM rects and
//! for tuning command palette queries against real item lists.

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use sveltacular_core::config::Config;
use sveltacular_core::error::exit_codes;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

/// Floating element positioning and fuzzy search
#[derive(Parser)]
#[command(name = "sveltacular")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Configuration file (defaults to sveltacular.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute where a floating element goes next to a reference element
    Position {
        /// Reference element rect as LEFT,TOP,WIDTH,HEIGHT
        #[arg(short, long, allow_hyphen_values = true)]
        reference: String,

        /// Floating element size as WIDTH,HEIGHT
        #[arg(short = 'F', long)]
        floating: String,

        /// Viewport size as WIDTH,HEIGHT
        #[arg(long)]
        viewport: Option<String>,

        /// Preferred placement, e.g. bottom, top-start, right-end
        #[arg(short, long)]
        placement: Option<String>,

        /// Gap between reference and floating element
        #[arg(long)]
        offset: Option<f64>,

        /// Minimum distance from the viewport edge
        #[arg(long)]
        padding: Option<f64>,

        /// Disable flipping to the opposite side
        #[arg(long)]
        no_flip: bool,

        /// Disable trying other alignments
        #[arg(long)]
        no_align: bool,

        /// Also compute the arrow offset
        #[arg(long)]
        arrow: bool,
    },

    /// Rank items by fuzzy match score
    Search {
        /// Search query
        query: String,

        /// Items to search (ignored when --file is given)
        items: Vec<String>,

        /// JSON file holding an array of strings and/or objects
        #[arg(long)]
        file: Option<PathBuf>,

        /// Object field to score on (repeatable)
        #[arg(short, long = "key")]
        keys: Vec<String>,

        /// Maximum results; 0 for all
        #[arg(short, long)]
        limit: Option<usize>,

        /// Minimum score to keep a result
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Case-sensitive matching
        #[arg(long)]
        case_sensitive: bool,

        /// Wrap matched characters in <mark> tags
        #[arg(long)]
        highlight: bool,
    },

    /// Score a single query against a single target
    Match {
        /// Search query
        query: String,

        /// Target text
        target: String,

        /// Case-sensitive matching
        #[arg(long)]
        case_sensitive: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sveltacular=debug,sveltacular_core=debug,sveltacular_position=trace,sveltacular_search=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = cli.format;

    let result = Config::load(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config| run(cli.command, &config, format));

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(exit_codes::NO_MATCH as u8),
        Err(e) => {
            let core = e.downcast_ref::<sveltacular_core::Error>();
            report_error(&e, core, format);
            let code = core.map_or(exit_codes::FAILURE, sveltacular_core::Error::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

/// Print a failure to stderr, as a structured report when JSON output was requested.
fn report_error(err: &anyhow::Error, core: Option<&sveltacular_core::Error>, format: Format) {
    if let (Format::Json, Some(core)) = (format, core) {
        if let Ok(json) = serde_json::to_string_pretty(&core.to_report()) {
            eprintln!("{}", json);
            return;
        }
    }
    eprintln!("{} {}", "Error:".red().bold(), err);
}

/// Dispatch a subcommand. `Ok(false)` means the command ran but found nothing.
fn run(command: Commands, config: &Config, format: Format) -> anyhow::Result<bool> {
    match command {
        Commands::Position {
            reference,
            floating,
            viewport,
            placement,
            offset,
            padding,
            no_flip,
            no_align,
            arrow,
        } => {
            let args = commands::position::PositionArgs {
                reference,
                floating,
                viewport,
                placement,
                offset,
                padding,
                no_flip,
                no_align,
                arrow,
            };
            commands::position::run(&args, &config.schema.position, format)
        }

        Commands::Search {
            query,
            items,
            file,
            keys,
            limit,
            threshold,
            case_sensitive,
            highlight,
        } => {
            let args = commands::search::SearchArgs {
                query,
                items,
                file,
                keys,
                limit,
                threshold,
                case_sensitive,
                highlight,
            };
            commands::search::run(&args, &config.schema.search, format)
        }

        Commands::Match {
            query,
            target,
            case_sensitive,
        } => commands::search::run_match(&query, &target, case_sensitive || config.schema.search.case_sensitive, format),
    }
}
