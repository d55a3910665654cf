//! amz-scout - Fetch the first Amazon search result for a query as one line of JSON.

use amz_scout::amazon::regions::Region;
use amz_scout::commands::LookupCommand;
use amz_scout::config::Config;
use amz_scout::format;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-scout",
    version,
    about = "Fetch the first Amazon search result for a query",
    long_about = "Searches one Amazon storefront and prints the first listed product as a single JSON line, or `null` when nothing was found."
)]
struct Cli {
    /// Product search query
    #[arg(allow_hyphen_values = true)]
    query: String,

    /// Extra arguments from older callers, ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,

    /// Amazon region to search [default: in]
    #[arg(short, long)]
    region: Option<Region>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Usage errors exit with 1, not clap's default 2. Help goes to stderr;
    // stdout carries only the result line.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            eprint!("{}", e.render());
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Initialize logging; stdout carries only the result line
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?.with_env();
    if let Some(region) = cli.region {
        config.region = region;
    }

    let record = LookupCommand::new(config).execute(&cli.query).await;

    format::emit(&mut std::io::stdout().lock(), record.as_ref())
}
