use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "insidermap")]
#[command(about = "Flatten insider-transaction filings into transaction-leg rows", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a JSON payload of filings into rows
    Flatten {
        /// Input JSON file (`-` reads stdin)
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to .insidermap.toml in this or a parent directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "INSIDERMAP_JOBS")]
        jobs: usize,

        /// Expand filings on a single thread
        #[arg(long = "sequential", visible_alias = "no-parallel")]
        sequential: bool,
    },
}

impl Cli {
    pub fn reads_stdin(input: &std::path::Path) -> bool {
        input.as_os_str() == "-"
    }
}
