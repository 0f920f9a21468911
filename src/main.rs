use anyhow::{Context, Result};
use clap::Parser;
use insidermap::cli::{Cli, Commands};
use insidermap::config::{load_config, load_config_from, FlattenConfig, ParallelConfig};
use insidermap::io::{create_writer, parse_payload, read_payload};
use insidermap::pipeline::flatten_with_config;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Flatten {
            input,
            format,
            output,
            config,
            jobs,
            sequential,
        } => {
            let config = resolve_config(config.as_deref(), jobs, sequential)?;
            let payload = if Cli::reads_stdin(&input) {
                parse_payload(std::io::stdin().lock()).context("Failed to parse stdin")?
            } else {
                read_payload(&input)
                    .with_context(|| format!("Failed to load {}", input.display()))?
            };

            let results = flatten_with_config(&payload, &config);

            let sink: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(std::io::stdout().lock())),
            };
            create_writer(sink, format).write_results(&results)?;
            Ok(())
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config(path: Option<&Path>, jobs: usize, sequential: bool) -> Result<FlattenConfig> {
    let mut config = match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    if sequential {
        config.parallelism = ParallelConfig::sequential();
    } else if jobs > 0 {
        config.parallelism = config.parallelism.with_jobs(jobs);
    }
    Ok(config)
}
