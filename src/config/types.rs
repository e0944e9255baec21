//! Configuration types for icp-tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reports::ReportFormat;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files.
///
/// CLI arguments always override file settings; see
/// [`AppConfig::from_file_with_overrides`](crate::config::file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Scoring defaults
    pub scoring: ScoringConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the minimum acceptable score.
    pub const fn min_score(mut self, min_score: f32) -> Self {
        self.config.scoring.min_score = Some(min_score);
        self
    }

    /// Set the default profile path.
    pub fn profile_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.scoring.profile_path = Some(path.into());
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Treat unbalanced weight groups as validation errors.
    pub const fn strict_weights(mut self, strict: bool) -> Self {
        self.config.behavior.strict_weights = strict;
        self
    }

    /// Build the final configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Component configurations
// ============================================================================

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Scoring defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Minimum acceptable score (0-100); exit non-zero below it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f32>,
    /// Default profile file used when the command omits one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit non-zero when the score is below `scoring.min_score`
    pub fail_below_min_score: bool,
    /// Treat unbalanced weight groups as validation errors
    pub strict_weights: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .min_score(75.0)
            .strict_weights(true)
            .quiet(true)
            .build();

        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.scoring.min_score, Some(75.0));
        assert!(config.behavior.strict_weights);
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.format, ReportFormat::Auto);
        assert!(config.scoring.min_score.is_none());
        assert!(!config.behavior.strict_weights);
    }

    #[test]
    fn test_serde_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("output:\n  no_color: true\n").unwrap();
        assert!(config.output.no_color);
        assert_eq!(config.output.format, ReportFormat::Auto);
    }
}
