// Estimator CLI
//
// Purpose: Print the estimate, advisories and optional sections for one household
// Usage: cargo run --bin estimate -- --residents 4 --all

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use water_usage_estimator::{
    EstimateOptions, EstimatorConfig, JsonFormatter, MarkdownFormatter, UsageEstimator,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

/// Daily household water usage estimator
#[derive(Parser)]
#[command(name = "estimate")]
#[command(about = "Estimate daily household water usage from the number of residents", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of residents in the household
    #[arg(short, long, default_value_t = 4)]
    residents: u32,

    /// Seed for the synthetic sample (overrides the config file)
    #[arg(short, long, env = "WATER_SEED")]
    seed: Option<u32>,

    /// Configuration file path (JSON)
    #[arg(short, long, env = "WATER_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Show the regression equation
    #[arg(long)]
    show_equation: bool,

    /// Show the first rows of the sample
    #[arg(long)]
    show_sample: bool,

    /// Show the prediction line and sample summary
    #[arg(long)]
    show_chart: bool,

    /// Hide the general conservation tips
    #[arg(long)]
    hide_tips: bool,

    /// Enable every optional section
    #[arg(long)]
    all: bool,

    /// Write the full synthetic sample to a CSV file
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "WATER_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let mut config = EstimatorConfig::load_or_default(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let estimator = UsageEstimator::new(config)?;

    if let Some(path) = &cli.export_csv {
        estimator
            .sample()
            .write_csv(path)
            .with_context(|| format!("Failed to export sample to {:?}", path))?;
    }

    let options = if cli.all {
        EstimateOptions::full()
    } else {
        EstimateOptions {
            show_equation: cli.show_equation,
            show_sample: cli.show_sample,
            show_chart: cli.show_chart,
            show_tips: !cli.hide_tips,
        }
    };

    let estimate = estimator.estimate_with(cli.residents, options)?;

    let output = match cli.format {
        OutputFormat::Markdown => MarkdownFormatter::format(&estimate, &options),
        OutputFormat::Json => JsonFormatter::format(&estimate)?,
    };
    println!("{}", output);

    Ok(())
}
