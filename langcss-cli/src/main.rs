use std::path::PathBuf;

use clap::Parser;
use langcss_cli::{CliOverrides, FileConfig, resolve_settings, run_generate_command};
use tracing_subscriber::EnvFilter;

/// Generate localized CSS stylesheets from CSV translation tables.
///
/// Every `<language>.csv` in SOURCE becomes `<language>.css` in DEST.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of leading lines ignored in every table
    #[arg(short, long)]
    skip_lines: Option<usize>,

    /// Language checked for completeness and emitted without a `body[lang]` scope
    #[arg(short, long)]
    default_language: Option<String>,

    /// TOML file providing defaults for the options above and the directories
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Directory scanned for `*.csv` tables [default: ./localize]
    source: Option<PathBuf>,

    /// Directory the stylesheets are written to [default: ./docs/localize]
    destination: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => FileConfig::default(),
    };

    let settings = resolve_settings(
        CliOverrides {
            skip_lines: args.skip_lines,
            default_language: args.default_language,
            source: args.source,
            destination: args.destination,
        },
        file_config,
    );

    if let Err(e) = run_generate_command(&settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
