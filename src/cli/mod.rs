//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod normalize;
mod score;
mod suggest;
mod validate;

pub use normalize::{run_adjust, run_normalize, AdjustConfig, NormalizeConfig};
pub use score::{run_score, ScoreConfig};
pub use suggest::{run_suggest, SuggestConfig};
pub use validate::{run_validate, ValidateConfig, ValidationFinding};
