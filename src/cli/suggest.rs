//! Suggest command handler.
//!
//! Implements the `suggest` subcommand for autocompleting profile field values.

use crate::pipeline::{exit_codes, write_output, OutputTarget};
use crate::reports::ReportFormat;
use crate::suggestions::{suggest, SuggestionCategory};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

/// Suggest command configuration
pub struct SuggestConfig {
    pub category: SuggestionCategory,
    pub query: String,
    pub limit: usize,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the suggest command, returning the desired exit code.
pub fn run_suggest(config: SuggestConfig) -> Result<i32> {
    let matches = suggest(config.category, &config.query, config.limit);

    tracing::debug!(
        "{} suggestions for '{}' in {}",
        matches.len(),
        config.query,
        config.category.name()
    );

    let output_text = match config.output {
        ReportFormat::Json => {
            let output = json!({
                "category": config.category.name(),
                "query": config.query,
                "suggestions": matches,
            });
            serde_json::to_string_pretty(&output).unwrap_or_default()
        }
        _ => matches.join("\n"),
    };

    let target = OutputTarget::from_option(config.output_file);
    write_output(&output_text, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_suggest_writes_matches() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("suggestions.txt");

        let config = SuggestConfig {
            category: SuggestionCategory::Departments,
            query: "eng".to_string(),
            limit: 5,
            output: ReportFormat::Text,
            output_file: Some(out.clone()),
            quiet: true,
        };
        assert_eq!(run_suggest(config).unwrap(), exit_codes::SUCCESS);

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("Engineering"));
    }
}
