//! prose-tools: Sentence-level semantic diff for edited prose
//!
//! Compares a draft against its corrected version and reports what happened
//! to every sentence.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use prose_tools::{
    cli,
    config::{
        AlignmentConfig, AppConfig, BehaviorConfig, DiffConfig, DiffPaths, FilterConfig,
        NormalizeConfig, OutputConfig, SegmentConfig,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nOutput Formats:",
        "\n  summary, side-by-side, json, html",
        "\n\nFeatures:",
        "\n  Sentence alignment, merge/split detection, content-word similarity"
    )
}

#[derive(Parser)]
#[command(name = "prose-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Sentence-level semantic diff for edited prose", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success, no changes (or --fail-on-change not set)
    1  Changes detected (with --fail-on-change)
    2  Error occurred

EXAMPLES:
    # Quick diff with auto-detected output
    prose-tools diff draft.txt corrected.txt

    # Side-by-side view in the terminal
    prose-tools diff draft.txt corrected.txt -o side-by-side

    # CI check: fail when the proofread changed anything
    prose-tools diff draft.txt corrected.txt -o summary --fail-on-change

    # Export JSON for processing
    prose-tools diff draft.txt corrected.txt -o json > changes.json

    # Clean up a raw entry without diffing
    prose-tools normalize entry.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the original text (`-` reads stdin)
    original: PathBuf,

    /// Path to the corrected text (`-` reads stdin)
    corrected: PathBuf,

    /// Output format (auto detects TTY: summary if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Alignment preset (strict, balanced, permissive)
    #[arg(long, default_value = "balanced")]
    preset: String,

    /// Similarity threshold override (0.0-1.0)
    #[arg(long)]
    threshold: Option<f64>,

    /// Only show changed sentences (hide unchanged)
    #[arg(long)]
    only_changes: bool,

    /// Only show summary statistics, no per-sentence rows
    #[arg(long)]
    stats_only: bool,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,
}

/// Arguments for the `normalize` subcommand
#[derive(Parser)]
struct NormalizeArgs {
    /// Path to the text to normalize (`-` reads stdin)
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `segment` subcommand
#[derive(Parser)]
struct SegmentArgs {
    /// Path to the text to segment (`-` reads stdin)
    input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Emit sentences as a JSON array instead of one per line
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two versions of a text sentence by sentence
    Diff(DiffArgs),

    /// Normalize a text into one sentence per line
    Normalize(NormalizeArgs),

    /// Split a text into sentences
    Segment(SegmentArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .prose-tools.yaml in the current directory
    Init,
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Diff(args) => {
            let cli_overrides = AppConfig {
                alignment: AlignmentConfig {
                    preset: args.preset,
                    threshold: args.threshold,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                filtering: FilterConfig {
                    only_changes: args.only_changes,
                    stats_only: args.stats_only,
                },
                behavior: BehaviorConfig {
                    fail_on_change: args.fail_on_change,
                    quiet: cli.quiet,
                },
            };
            let (merged, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli_overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let config = DiffConfig {
                paths: DiffPaths {
                    original: args.original,
                    corrected: args.corrected,
                },
                output: merged.output,
                alignment: merged.alignment,
                filtering: merged.filtering,
                behavior: merged.behavior,
            };

            cli::run_diff(config)
        }

        Commands::Normalize(args) => {
            let config = NormalizeConfig {
                input: args.input,
                output: args.output_file,
            };
            cli::run_normalize(config)
        }

        Commands::Segment(args) => {
            let config = SegmentConfig {
                input: args.input,
                output: args.output_file,
                json: args.json,
            };
            cli::run_segment(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "prose-tools", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = prose_tools::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    prose_tools::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("prose-tools").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in prose_tools::config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match prose_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".prose-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = prose_tools::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}
