//! seqbench - sequence container insert/delete benchmarks
//!
//! Usage:
//!   seqbench run [--config <yaml> | --scenario <name>] [--count <n>] [--pattern <p>]... [--style <s>]
//!   seqbench config [--config <yaml> | --scenario <name>]
//!
//! Without `--config`, the built-in scenario is used (`combined` by default).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (e.g., `debug`, `seqbench=debug`). Logs go to
//!   stderr; stdout carries only the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seqbench::bench::{AccessPattern, MonotonicClock, ReportStyle};
use seqbench::config::{Scenario, SuiteConfig, parse_pattern, parse_report_style, parse_scenario};
use seqbench::error::BenchmarkError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seqbench")]
#[command(about = "Insert/delete throughput of elementary sequence containers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite and print timings
    Run(RunArgs),
    /// Print the effective configuration as YAML
    Config(ConfigArgs),
}

/// Arguments for the run subcommand
#[derive(Args, Debug)]
struct RunArgs {
    /// Suite configuration YAML file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Built-in scenario (combined|split|standard), used when no file is given
    #[arg(long, value_parser = parse_scenario, conflicts_with = "config")]
    scenario: Option<Scenario>,

    /// Override the number of values inserted and deleted per run
    #[arg(long, short = 'n')]
    count: Option<u32>,

    /// Override the patterns to run (forward|reverse), repeatable
    #[arg(long, short = 'p', value_parser = parse_pattern)]
    pattern: Vec<AccessPattern>,

    /// Override the report style (combined|split)
    #[arg(long, short = 's', value_parser = parse_report_style)]
    style: Option<ReportStyle>,
}

/// Arguments for the config subcommand
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Suite configuration YAML file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Built-in scenario (combined|split|standard), used when no file is given
    #[arg(long, value_parser = parse_scenario, conflicts_with = "config")]
    scenario: Option<Scenario>,
}

fn load_config(path: Option<&PathBuf>, scenario: Option<Scenario>) -> Result<SuiteConfig> {
    let config = match path {
        Some(path) => SuiteConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => scenario.unwrap_or_default().config(),
    };
    Ok(config)
}

/// Renders a fatal run failure with its full cause chain.
fn fatal_diagnostic(error: BenchmarkError) -> String {
    format!("Memory allocation failed: {:#}", anyhow::Error::from(error))
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_ref(), args.scenario)?;
    if let Some(count) = args.count {
        config.operation_count = count;
    }
    if !args.pattern.is_empty() {
        config.patterns = args.pattern;
    }
    if let Some(style) = args.style {
        config.report_style = style;
    }
    config.validate()?;

    tracing::info!(
        operation_count = config.operation_count,
        entries = config.entries.len(),
        "starting suite"
    );

    match config.to_suite().run(MonotonicClock::new()) {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(error @ BenchmarkError::Container { .. }) => {
            eprintln!("{}", fatal_diagnostic(error));
            std::process::exit(1);
        }
        Err(error) => Err(error.into()),
    }
}

fn show_config(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_ref(), args.scenario)?;
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seqbench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Config(args) => show_config(&args),
    }
}
