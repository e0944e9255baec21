//! Normalize and adjust command handlers.
//!
//! `normalize` rescales every weight group in a profile so each sums to 100.
//! `adjust` sets one overall weight and redistributes the remainder evenly.

use crate::pipeline::{exit_codes, parse_profile_with_context, write_output, OutputTarget};
use crate::weights::OverallCategory;
use anyhow::Result;
use std::path::PathBuf;

/// Normalize command configuration
pub struct NormalizeConfig {
    pub profile_path: PathBuf,
    pub write: bool,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the normalize command, returning the desired exit code.
pub fn run_normalize(config: NormalizeConfig) -> Result<i32> {
    let mut document = parse_profile_with_context(&config.profile_path)?;

    let statuses = document.customer_icp.weights.rescale_all()?;

    if !config.quiet {
        for (group, status) in &statuses {
            eprintln!("{group}: {status}");
        }
    }

    emit_profile(&document, &config.profile_path, config.write, config.output_file, config.quiet)
}

/// Adjust command configuration
pub struct AdjustConfig {
    pub profile_path: PathBuf,
    pub category: OverallCategory,
    pub value: u32,
    pub write: bool,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the adjust command, returning the desired exit code.
pub fn run_adjust(config: AdjustConfig) -> Result<i32> {
    let mut document = parse_profile_with_context(&config.profile_path)?;

    let overall = &mut document.customer_icp.weights.overall;
    let status = overall.set_and_redistribute(config.category, config.value);

    tracing::info!(
        "Set {} to {}, redistributed remaining categories",
        config.category.name(),
        overall.get(config.category)
    );

    if !config.quiet {
        for category in OverallCategory::all() {
            eprintln!("{}: {}%", category.name(), overall.get(*category));
        }
        eprintln!("overall: {status}");
    }

    emit_profile(&document, &config.profile_path, config.write, config.output_file, config.quiet)
}

/// Write the updated profile back in place, to a file, or to stdout.
fn emit_profile(
    document: &crate::model::IcpDocument,
    profile_path: &std::path::Path,
    write_in_place: bool,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    if write_in_place {
        crate::parsers::write_profile(document, profile_path)?;
        if !quiet {
            tracing::info!("Updated profile written to {}", profile_path.display());
        }
        return Ok(exit_codes::SUCCESS);
    }

    let content = crate::parsers::write_profile_str(document)?;
    let target = OutputTarget::from_option(output_file);
    write_output(&content, &target, quiet)?;
    Ok(exit_codes::SUCCESS)
}
