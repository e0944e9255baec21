//! icp-tools: Ideal Customer Profile configuration and lead scoring tool
//!
//! Manages ICP documents (JSON/YAML), keeps weight groups balanced, and
//! scores leads against the profile's weighted criteria.

#![allow(clippy::too_many_lines, clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use icp_tools::{
    cli::{
        run_adjust, run_normalize, run_score, run_suggest, run_validate, AdjustConfig,
        NormalizeConfig, ScoreConfig, SuggestConfig, ValidateConfig,
    },
    config::{AppConfig, ConfigPreset, Validatable},
    reports::ReportFormat,
    suggestions::SuggestionCategory,
    weights::OverallCategory,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nProfile Formats:",
        "\n  JSON, YAML (legacy document layouts migrated on read)",
        "\n\nOutput Formats:",
        "\n  text, json, summary",
        "\n\nFeatures:",
        "\n  Weight normalization, lead scoring, fit bands, autocomplete suggestions"
    )
}

#[derive(Parser)]
#[command(name = "icp-tools")]
#[command(version, long_version = build_long_version())]
#[command(about = "Ideal Customer Profile configuration and lead scoring tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below minimum / validation failed
    3  Error occurred

EXAMPLES:
    # Score a lead against a profile
    icp-tools score --profile icp.json --ratings lead.json --lead \"Acme Corp\"

    # CI/CD gate: fail when the lead scores below 60
    icp-tools score --profile icp.json --ratings lead.json -o json --min-score 60

    # Rebalance every weight group in place
    icp-tools normalize icp.json --write

    # Bump the individual weight to 40% and redistribute the rest
    icp-tools adjust icp.json --category individual --value 40 --write

    # Autocomplete an industry name
    icp-tools suggest industries \"fin\"")]
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
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Path to the ICP profile (JSON or YAML)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Path to the lead's rating sheet (criterion -> high/medium/low/none)
    #[arg(short, long)]
    ratings: PathBuf,

    /// Display name for the lead in reports
    #[arg(short, long, default_value = "lead")]
    lead: String,

    /// Output format (auto detects TTY: text if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Hide the per-category breakdown
    #[arg(long)]
    no_breakdown: bool,

    /// Hide improvement recommendations
    #[arg(long)]
    no_recommendations: bool,

    /// Exit with code 1 if the score is below this threshold (0-100)
    #[arg(long)]
    min_score: Option<f32>,
}

/// Arguments for the `normalize` subcommand
#[derive(Parser)]
struct NormalizeArgs {
    /// Path to the ICP profile (JSON or YAML)
    profile: PathBuf,

    /// Rewrite the profile in place instead of printing to stdout
    #[arg(short, long)]
    write: bool,

    /// Output file path (stdout if not specified; ignored with --write)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `adjust` subcommand
#[derive(Parser)]
struct AdjustArgs {
    /// Path to the ICP profile (JSON or YAML)
    profile: PathBuf,

    /// Overall category to change
    #[arg(short, long, value_enum)]
    category: OverallCategory,

    /// New weight for the category (0-100)
    #[arg(long)]
    value: u32,

    /// Rewrite the profile in place instead of printing to stdout
    #[arg(short, long)]
    write: bool,

    /// Output file path (stdout if not specified; ignored with --write)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `validate` subcommand
#[derive(Parser)]
struct ValidateArgs {
    /// Path to the ICP profile (JSON or YAML)
    profile: PathBuf,

    /// Output format (auto detects TTY: text if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Treat unbalanced weight groups as errors, not warnings
    #[arg(long)]
    strict_weights: bool,
}

/// Arguments for the `suggest` subcommand
#[derive(Parser)]
struct SuggestArgs {
    /// Suggestion catalog to search
    #[arg(value_enum)]
    category: SuggestionCategory,

    /// Query prefix (empty lists the whole catalog)
    #[arg(default_value = "")]
    query: String,

    /// Maximum number of suggestions
    #[arg(short, long, default_value = "10")]
    limit: usize,

    /// Output format (text prints one suggestion per line)
    #[arg(short, long, default_value = "text")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a lead's ratings against a profile
    Score(ScoreArgs),

    /// Rescale every weight group in a profile so each sums to 100
    Normalize(NormalizeArgs),

    /// Set one overall weight and redistribute the remainder equally
    Adjust(AdjustArgs),

    /// Check a profile for structural problems and unbalanced weights
    Validate(ValidateArgs),

    /// Autocomplete a criteria value from the curated catalogs
    Suggest(SuggestArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    #[command(name = "schema")]
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
    /// Generate an example .icp-tools.yaml in the current directory
    Init {
        /// Start from a named preset instead of the annotated example
        /// (default, ci-cd, strict)
        #[arg(long)]
        preset: Option<String>,
    },
}

fn main() -> Result<()> {
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
        Commands::Score(args) => {
            // Layer CLI args over any discovered config file
            let mut overrides = AppConfig::default();
            overrides.output.format = args.output;
            overrides.output.file.clone_from(&args.output_file);
            overrides.output.no_color = cli.no_color;
            overrides.scoring.min_score = args.min_score;
            overrides.scoring.profile_path.clone_from(&args.profile);
            overrides.behavior.quiet = cli.quiet;
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let errors = config.validate();
            if !errors.is_empty() {
                for error in &errors {
                    tracing::error!("{error}");
                }
                anyhow::bail!("invalid configuration ({} error(s))", errors.len());
            }

            let profile_path = config.scoring.profile_path.clone().context(
                "No profile specified. Pass --profile or set scoring.profile_path in config.",
            )?;
            let min_score = if config.behavior.fail_below_min_score || args.min_score.is_some() {
                config.scoring.min_score
            } else {
                None
            };

            let exit_code = run_score(ScoreConfig {
                profile_path,
                ratings_path: args.ratings,
                lead_name: args.lead,
                output: config.output.format,
                output_file: config.output.file.clone(),
                hide_breakdown: args.no_breakdown,
                hide_recommendations: args.no_recommendations,
                min_score,
                no_color: config.output.no_color,
                quiet: config.behavior.quiet,
            })?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Normalize(args) => {
            let exit_code = run_normalize(NormalizeConfig {
                profile_path: args.profile,
                write: args.write,
                output_file: args.output_file,
                quiet: cli.quiet,
            })?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Adjust(args) => {
            let exit_code = run_adjust(AdjustConfig {
                profile_path: args.profile,
                category: args.category,
                value: args.value,
                write: args.write,
                output_file: args.output_file,
                quiet: cli.quiet,
            })?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Validate(args) => {
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &AppConfig::default());
            let exit_code = run_validate(ValidateConfig {
                profile_path: args.profile,
                output: args.output,
                output_file: args.output_file,
                strict_weights: args.strict_weights || config.behavior.strict_weights,
                quiet: cli.quiet,
            })?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Suggest(args) => {
            let exit_code = run_suggest(SuggestConfig {
                category: args.category,
                query: args.query,
                limit: args.limit,
                output: args.output,
                output_file: args.output_file,
                quiet: cli.quiet,
            })?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "icp-tools", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = icp_tools::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    icp_tools::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("icp-tools").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".icp-tools.yaml",
                    ".icp-tools.yml",
                    "icp-tools.yaml",
                    "icp-tools.yml",
                    ".icp-toolsrc",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match icp_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init { preset } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".icp-tools.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = match preset.as_deref() {
                    Some(name) => {
                        let preset = ConfigPreset::from_name(name).with_context(|| {
                            let known: Vec<&str> =
                                ConfigPreset::all().iter().map(|p| p.name()).collect();
                            format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
                        })?;
                        let yaml = serde_yaml_ng::to_string(&AppConfig::from_preset(preset))
                            .context("failed to serialize preset config")?;
                        format!("# icp-tools configuration ({} preset: {})\n{yaml}", preset, preset.description())
                    }
                    None => icp_tools::config::generate_full_example_config(),
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
