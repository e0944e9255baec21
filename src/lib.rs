//! **A library for defining Ideal Customer Profiles and scoring leads against them.**
//!
//! `icp-tools` manages Ideal Customer Profile (ICP) documents: weighted scoring
//! criteria, targeting lists, and minimum requirements that describe the kind of
//! customer a sales team wants to find. It powers both a command-line interface
//! (CLI) and a Rust library for programmatic integration.
//!
//! Profiles are plain JSON or YAML documents. The library normalizes legacy
//! document layouts on read, keeps every weight group summing to 100%, and
//! scores individual leads against the profile's weighted criteria.
//!
//! ## Key Features
//!
//! - **Profile Management**: Parses ICP documents from JSON or YAML, including
//!   automatic migration of legacy document layouts.
//! - **Weight Normalization**: Rescales weight groups proportionally so each
//!   sums to 100%, and redistributes overall weights when one category changes.
//! - **Lead Scoring**: Rates a lead's sub-criteria (high/medium/low/none) and
//!   produces a 0-100 fit score with a per-category breakdown and prioritized
//!   recommendations.
//! - **Autocomplete Suggestions**: Curated catalogs with prefix and fuzzy
//!   matching for industries, technologies, job titles, and other criteria.
//! - **Flexible Reporting**: Renders score reports as colored text, compact
//!   summaries, or JSON for machine consumption.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Defines [`IcpProfile`], the central document structure, and
//!   its criteria lists and minimum requirements.
//! - **[`weights`]**: Weight groups and the normalization policies that keep
//!   them summing to 100%.
//! - **[`scoring`]**: The [`LeadScorer`], which turns a [`scoring::RatingSet`]
//!   into a [`scoring::LeadScore`] with band, breakdown, and recommendations.
//! - **[`parsers`]**: Profile and rating-sheet readers for JSON and YAML, with
//!   legacy layout migration.
//! - **[`suggestions`]**: Curated autocomplete catalogs per criteria category.
//! - **[`reports`]**: Score report renderers for text, summary, and JSON output.
//!
//! ## Getting Started: Scoring a Lead
//!
//! ```no_run
//! use std::path::Path;
//! use icp_tools::parsers::{parse_profile, parse_ratings};
//! use icp_tools::scoring::LeadScorer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = parse_profile(Path::new("icp-profile.json"))?;
//!     let ratings = parse_ratings(Path::new("lead-ratings.json"))?;
//!
//!     let scorer = LeadScorer::new(document.customer_icp.weights.overall);
//!     let score = scorer.score(&ratings)?;
//!
//!     println!("{:.1}/100 ({})", score.total, score.band.label());
//!     Ok(())
//! }
//! ```
//!
//! ### Normalizing Weights
//!
//! ```
//! use icp_tools::weights::{IcpWeights, OverallWeights};
//!
//! let mut weights = IcpWeights::default();
//! weights.overall = OverallWeights {
//!     company: 50,
//!     individual: 50,
//!     technical: 50,
//!     market: 50,
//! }; // sums to 200
//!
//! let statuses = weights.rescale_all().unwrap();
//! assert!(statuses.iter().all(|(_, status)| status.balanced));
//! assert_eq!(weights.overall.company, 25);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `icp-tools` library crate. If you are looking
//! for the command-line tool, please refer to the project's README or install
//! it via `cargo install icp-tools`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: u32↔f64/f32 casts appear in weight and score math — all
    // values are bounded to 0..=100 in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report render functions are inherently long
    clippy::too_many_lines,
    // Config structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    // Variable names like `min`/`max` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod suggestions;
pub mod weights;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, OutputConfig, ScoringConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, IcpError, OptionContext, Result};
pub use model::{CriteriaSet, IcpDocument, IcpProfile, MinimumRequirements};
pub use parsers::{parse_profile, parse_profile_str, parse_ratings, ProfileFormat};
pub use reports::ReportFormat;
pub use scoring::{FitBand, LeadScore, LeadScorer, Rating, RatingSet};
pub use suggestions::{suggest, SuggestionCategory};
pub use weights::{IcpWeights, OverallCategory, OverallWeights, WeightStatus};
