//! Unified error types for icp-tools.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for icp-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IcpError {
    /// Errors during profile or ratings parsing
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during weight normalization
    #[error("Weight normalization failed: {0}")]
    Weights(#[source] WeightErrorKind),

    /// Errors during lead scoring
    #[error("Scoring failed: {0}")]
    Scoring(#[source] ScoringErrorKind),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Document has no customer_icp root object")]
    MissingRoot,

    #[error("Unrecognized rating label: '{label}' (expected high, medium, low, or none)")]
    UnknownRatingLabel { label: String },

    #[error("Unknown sub-criterion: '{criterion}'")]
    UnknownCriterion { criterion: String },
}

/// Specific weight normalization error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WeightErrorKind {
    #[error("All weights in group '{group}' are zero; cannot rescale")]
    AllZero { group: String },
}

/// Specific scoring error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoringErrorKind {
    #[error("Missing rating for sub-criterion '{criterion}'")]
    MissingRating { criterion: String },

    #[error("Unknown sub-criterion '{criterion}' in ratings input")]
    UnknownCriterion { criterion: String },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for icp-tools operations
pub type Result<T> = std::result::Result<T, IcpError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl IcpError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a scoring error for a missing rating
    pub fn missing_rating(criterion: impl Into<String>) -> Self {
        Self::Scoring(ScoringErrorKind::MissingRating {
            criterion: criterion.into(),
        })
    }

    /// Create a weight error for an all-zero group
    pub fn all_zero_weights(group: impl Into<String>) -> Self {
        Self::Weights(WeightErrorKind::AllZero {
            group: group.into(),
        })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for IcpError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for IcpError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml_ng::Error> for IcpError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<IcpError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: IcpError, new_ctx: &str) -> IcpError {
    match err {
        IcpError::Parse {
            context: existing,
            source,
        } => IcpError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        IcpError::Io {
            path,
            message,
            source,
        } => IcpError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        IcpError::Config(msg) => IcpError::Config(chain_context(new_ctx, &msg)),
        IcpError::Validation(msg) => IcpError::Validation(chain_context(new_ctx, &msg)),
        // Weight and scoring errors carry their own structured context
        other @ (IcpError::Weights(_) | IcpError::Scoring(_)) => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| IcpError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| IcpError::Validation(f().into()))
    }
}
