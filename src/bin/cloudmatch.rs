//! Command-line front end for the offerings catalog.
//!
//! Usage:
//!   cloudmatch --platform AWS
//!   cloudmatch --platform AWS --category Storage
//!   cloudmatch --service "Object Storage" --description --table
//!   cloudmatch --solution "Amazon S3" --equivalent
//!
//! The parameter combination is checked before the dataset is read; the
//! identifiers are checked against the freshly loaded dataset before the
//! query runs. Results go to stdout as JSON lines, or as a table with
//! `--table`.

use anyhow::{Context, Result};
use clap::Parser;
use cloudmatch::{Query, QueryParams, load_records, resolve, resolve_dataset_path};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const ENV_LOG: &str = "CLOUDMATCH_LOG";

#[derive(Parser, Debug)]
#[command(name = "cloudmatch")]
#[command(about = "Look up cloud offerings and their equivalents on other platforms")]
struct Cli {
    /// Platform name, e.g. AWS.
    #[arg(long)]
    platform: Option<String>,
    /// Category name, e.g. Storage.
    #[arg(long)]
    category: Option<String>,
    /// Service classification, e.g. "Object Storage".
    #[arg(long)]
    service: Option<String>,
    /// Solution name, e.g. "Amazon S3".
    #[arg(long)]
    solution: Option<String>,
    /// List the solution's equivalents on other platforms.
    #[arg(long, requires = "solution")]
    equivalent: bool,
    /// Include the description column in solution listings.
    #[arg(long)]
    description: bool,
    /// Render a table instead of JSON lines.
    #[arg(long)]
    table: bool,
    /// Dataset path (overrides CLOUDMATCH_DATASET and the bundled data/clouds.csv).
    #[arg(long)]
    dataset: Option<PathBuf>,
}

impl Cli {
    fn params(&self) -> QueryParams {
        QueryParams {
            platform: self.platform.clone(),
            category: self.category.clone(),
            service: self.service.clone(),
            solution: self.solution.clone(),
            equivalent: self.equivalent,
            include_description: self.description,
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let query = Query::from_params(&cli.params())?;

    let dataset = resolve_dataset_path(cli.dataset.as_deref());
    info!(path = %dataset.display(), shape = query.name(), "running query");
    let records = load_records(&dataset)?;
    let output = resolve(&records, &query)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.table {
        out.write_all(output.render_table().as_bytes())
            .context("writing table to stdout")?;
    } else {
        output
            .write_json_lines(&mut out)
            .context("writing records to stdout")?;
    }
    out.flush().context("flushing stdout")?;
    Ok(())
}
