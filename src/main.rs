//! CLI entry point for levtoken.
//!
//! Usage:
//!   levtoken <bull|bear> <start> <trough|peak> <end> <token_start>
//!   levtoken bull 130 81.564 84 20
//!
//! The report goes to stdout. Input errors (argument count, token kind,
//! unparseable or non-positive prices) print `Error: ...` to stderr and exit
//! with code 2; any other failure exits with code 1. The report is never
//! partially written. Earlier versions of this calculator printed the usage
//! message to stdout and exited 0.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use levtoken::Config;
use levtoken::cli::{self, OutputFormat};

#[derive(Parser)]
#[command(name = "levtoken")]
#[command(about = "End-of-day price of a 3x leveraged bull/bear token")]
#[command(version)]
struct Cli {
    /// Optional TOML file overriding model parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// bull|bear, start price, trough (bull) or peak (bear) price, end price, token start price
    #[arg(allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let opts = Cli::parse();

    let config = match opts.config.as_deref().map(Config::load).transpose() {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error loading config: {e}");
            process::exit(1);
        }
    };

    let format = if opts.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = cli::run(&opts.args, &config, format, &mut stdout) {
        eprintln!("Error: {e}");
        process::exit(if e.is_usage() { 2 } else { 1 });
    }
}
