use anyhow::{Context as _, Result};
use clap::Parser;
use sales_cleaner::config::PipelineConfig;
use sales_cleaner::pipeline::run_pipeline;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sales-cleaner",
    version,
    about = "Clean a raw sales CSV into an analysis-ready table"
)]
pub struct Cli {
    /// Path to a JSON config file. Flags below override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Raw input file. Defaults to data/raw/sales_data_raw.csv
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Cleaned output file. Defaults to data/processed/sales_data_clean.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of cleaned rows to print (0 to disable)
    #[arg(long)]
    pub preview: Option<usize>,

    /// Create the output directory if it doesn't exist
    #[arg(long)]
    pub create_dirs: bool,

    /// Also write rotating log files to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Builds the effective config: defaults, then the config file, then flags.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(input) = &self.input {
            config.source_path.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.sink_path.clone_from(output);
        }
        if let Some(rows) = self.preview {
            config.preview_rows = rows;
        }
        if self.create_dirs {
            config.create_sink_dir = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[expect(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.pipeline_config()?;
    tracing::info!(
        "Cleaning {} -> {}",
        config.source_path.display(),
        config.sink_path.display()
    );

    let report = run_pipeline(&config).context("Cleaning failed")?;

    if config.preview_rows > 0 {
        println!("Cleaning complete. First few rows:");
        println!("{}", report.preview);
    } else {
        println!("Cleaning complete.");
    }
    println!("{}", report.summary());
    Ok(())
}
