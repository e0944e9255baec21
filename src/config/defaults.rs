//! Default configurations and presets for icp-tools.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default interactive settings
    Default,
    /// CI/CD: machine-readable output, fail below the score threshold
    CiCd,
    /// Strict: unbalanced weight groups are errors
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Interactive defaults suitable for local use",
            Self::CiCd => "Machine-readable output optimized for CI/CD pipelines",
            Self::Strict => "Treats unbalanced weight groups as hard errors",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Strict => Self::strict_preset(),
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Quiet mode to reduce noise
    /// - Fail below the configured minimum score
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            scoring: ScoringConfig::default(),
            behavior: BehaviorConfig {
                quiet: true,
                fail_below_min_score: true,
                strict_weights: false,
            },
        }
    }

    /// Strict preset: unbalanced weight groups fail validation.
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            behavior: BehaviorConfig {
                strict_weights: true,
                ..BehaviorConfig::default()
            },
            ..Self::default()
        }
    }
}
