use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use f1flat::config::Config;
use f1flat::constants;
use f1flat::logging;
use f1flat::pipeline::processing::TracingObserver;
use f1flat::pipeline::{Pipeline, PipelineOptions};

#[derive(Parser)]
#[command(name = "f1flat")]
#[command(about = "Load the F1 results CSV dataset into a single indexed SQLite file")]
#[command(version)]
struct Cli {
    /// Directory holding the 14 source CSV files
    #[arg(long)]
    csv_dir: Option<PathBuf>,

    /// Output database path; any existing file there is replaced
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to ./f1flat.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON load report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Also write JSON logs to a daily file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Rows between progress log lines (0 disables them)
    #[arg(long)]
    progress_every: Option<u64>,
}

impl Cli {
    /// File settings first, command-line flags on top
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => Config::load_or_default(Path::new(constants::DEFAULT_CONFIG_PATH))?,
        };

        if let Some(dir) = &self.csv_dir {
            config.csv_dir = Some(dir.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(report) = &self.report {
            config.report = Some(report.clone());
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if let Some(every) = self.progress_every {
            config.progress_every = Some(every);
        }
        Ok(config)
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(PipelineOptions::from_config(config));
    let report = pipeline.run(&mut TracingObserver)?;

    if let Some(path) = &config.report {
        report
            .write_json(path)
            .with_context(|| format!("writing load report {}", path.display()))?;
        info!("💾 Saved load report to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let _guard = logging::init_logging(config.log_dir.as_deref());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ Load failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
