//! Score command handler.
//!
//! Implements the `score` subcommand for rating a lead against a profile.

use crate::model::IcpDocument;
use crate::pipeline::{
    auto_detect_format, exit_codes, parse_profile_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::reports::{render_json, render_summary, render_text, ReportFormat, ScoreReportOptions};
use crate::scoring::{LeadScore, LeadScorer, RatingSet};
use anyhow::Result;
use std::path::PathBuf;

/// Score command configuration
pub struct ScoreConfig {
    pub profile_path: PathBuf,
    pub ratings_path: PathBuf,
    pub lead_name: String,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub hide_breakdown: bool,
    pub hide_recommendations: bool,
    pub min_score: Option<f32>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let document = parse_profile_with_context(&config.profile_path)?;
    let ratings = crate::parsers::parse_ratings(&config.ratings_path)?;

    let score = score_lead(&document, &ratings)?;

    tracing::info!(
        "Scored lead '{}': {:.1}/100 ({})",
        config.lead_name,
        score.total,
        score.band.label()
    );

    let output_target = OutputTarget::from_option(config.output_file.clone());
    let format = auto_detect_format(config.output, &output_target);

    let output_text = match format {
        ReportFormat::Json => render_json(&score, &config.lead_name),
        ReportFormat::Summary => render_summary(&score, &config.lead_name),
        _ => render_text(
            &score,
            &config.lead_name,
            ScoreReportOptions {
                show_breakdown: !config.hide_breakdown,
                show_recommendations: !config.hide_recommendations,
                use_color: should_use_color(config.no_color),
            },
        ),
    };

    write_output(&output_text, &output_target, config.quiet)?;

    // Check minimum score threshold
    if let Some(threshold) = config.min_score {
        if score.total < f64::from(threshold) {
            tracing::error!(
                "Lead score {:.1} is below minimum threshold {:.1}",
                score.total,
                threshold
            );
            return Ok(exit_codes::THRESHOLD_NOT_MET);
        }
    }

    Ok(exit_codes::SUCCESS)
}

/// Score a rating set against the profile's overall weights.
fn score_lead(document: &IcpDocument, ratings: &RatingSet) -> crate::error::Result<LeadScore> {
    let scorer = LeadScorer::new(document.customer_icp.weights.overall);
    scorer.score(ratings)
}
