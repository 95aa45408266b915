use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Configuration for a scan run.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of
/// precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.linehound.yaml` in the current directory
/// 3. Global `$HOME/.config/linehound/config.yaml`
///
/// # Configuration Format
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Literal pattern to search for
/// pattern: "TODO"
///
/// # Root directory to scan
/// root_path: "."
///
/// # Worker thread count (default: CPU cores)
/// thread_count: 4
///
/// # Output artifacts
/// results_file: "linehound.txt"
/// activity_file: "linehound.log"
///
/// # Show only statistics
/// stats_only: false
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "warn"
/// ```
///
/// # CLI Integration
///
/// When using the CLI, command-line arguments take precedence over config
/// file values. The merging behavior is defined in the `merge_with_cli`
/// method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// The literal pattern to search for. No regex semantics: the pattern
    /// matches as a contiguous byte sequence within a line.
    #[serde(default)]
    pub pattern: String,

    /// Root directory to start the scan from
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Number of worker threads to use.
    /// Defaults to the number of CPU cores if not specified.
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Where the per-match results artifact is written
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,

    /// Where the ranked worker-activity artifact is written
    #[serde(default = "default_activity_file")]
    pub activity_file: PathBuf,

    /// Whether to only print summary statistics instead of writing the
    /// results and activity artifacts
    #[serde(default)]
    pub stats_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_results_file() -> PathBuf {
    PathBuf::from("linehound.txt")
}

fn default_activity_file() -> PathBuf {
    PathBuf::from("linehound.log")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: String::new(),
            root_path: default_root_path(),
            thread_count: default_thread_count(),
            results_file: default_results_file(),
            activity_file: default_activity_file(),
            stats_only: false,
            log_level: default_log_level(),
        }
    }
}

impl ScanConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("linehound/config.yaml")),
            // Local config
            Some(PathBuf::from(".linehound.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: ScanConfig) -> Self {
        // CLI values take precedence over config file values
        if !cli_config.pattern.is_empty() {
            self.pattern = cli_config.pattern;
        }
        if cli_config.root_path != default_root_path() {
            self.root_path = cli_config.root_path;
        }
        // Always use CLI thread count if specified
        self.thread_count = cli_config.thread_count;
        if cli_config.results_file != default_results_file() {
            self.results_file = cli_config.results_file;
        }
        if cli_config.activity_file != default_activity_file() {
            self.activity_file = cli_config.activity_file;
        }
        if cli_config.stats_only {
            self.stats_only = true;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
