use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use linehound::{report, scan, RunResult, ScanConfig};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Concurrent directory-tree scanner for literal text patterns
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Literal pattern to search for (no regex semantics)
    pattern: String,

    /// Root directory to scan
    #[arg(short = 'd', long = "dir", default_value = ".")]
    dir: PathBuf,

    /// Number of worker threads (default: CPU cores)
    #[arg(short = 't', long)]
    threads: Option<NonZeroUsize>,

    /// Worker-activity log output file (default: linehound.log)
    #[arg(short = 'l', long)]
    log_file: Option<PathBuf>,

    /// Match results output file (default: linehound.txt)
    #[arg(short = 'r', long)]
    results_file: Option<PathBuf>,

    /// Print summary statistics only; skip writing the output files
    #[arg(short, long)]
    stats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn build_config(cli: Cli) -> anyhow::Result<ScanConfig> {
    let defaults = ScanConfig::default();
    let config_path = cli.config;

    let cli_config = ScanConfig {
        pattern: cli.pattern,
        root_path: cli.dir,
        thread_count: cli.threads.unwrap_or(defaults.thread_count),
        results_file: cli.results_file.unwrap_or(defaults.results_file),
        activity_file: cli.log_file.unwrap_or(defaults.activity_file),
        stats_only: cli.stats,
        log_level: cli.log_level.unwrap_or(defaults.log_level),
    };

    match config_path {
        Some(path) => Ok(ScanConfig::load_from(Some(&path))
            .with_context(|| format!("failed to load config from {}", path.display()))?
            .merge_with_cli(cli_config)),
        None => Ok(cli_config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(cli)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let started = Instant::now();
    let result = scan(&config)?;

    if !config.stats_only {
        report::write_results(&result, &config.results_file)?;
        report::write_activity_log(&result, &config.activity_file)?;
    }

    print_summary(&result, &config, started.elapsed());
    Ok(())
}

fn print_summary(result: &RunResult, config: &ScanConfig, elapsed: Duration) {
    println!(
        "Searched files: {}",
        result.files_searched.to_string().green()
    );
    println!(
        "Files with pattern: {}",
        result.files_with_pattern.to_string().green()
    );
    println!(
        "Pattern occurrences: {}",
        result.pattern_occurrences.to_string().green()
    );
    if !config.stats_only {
        println!(
            "Result file: {}",
            config.results_file.display().to_string().blue()
        );
        println!(
            "Log file: {}",
            config.activity_file.display().to_string().blue()
        );
    }
    println!("Used threads: {}", config.thread_count);

    // Sub-millisecond noise is not interesting in the summary line
    let elapsed = Duration::from_millis(elapsed.as_millis() as u64);
    println!("Elapsed time: {}", humantime::format_duration(elapsed));
}
