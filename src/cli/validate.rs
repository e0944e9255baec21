//! Validate command handler.
//!
//! Checks a profile for structural problems and unbalanced weight groups.

use crate::model::IcpProfile;
use crate::pipeline::{
    auto_detect_format, exit_codes, parse_profile_with_context, write_output, OutputTarget,
};
use crate::reports::ReportFormat;
use crate::weights::WeightStatus;
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

/// Validate command configuration
pub struct ValidateConfig {
    pub profile_path: PathBuf,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub strict_weights: bool,
    pub quiet: bool,
}

/// A single validation finding.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationFinding {
    /// Where the problem was found (e.g. a weight group name)
    pub location: String,
    /// Human-readable description
    pub message: String,
    /// Whether this finding fails validation in strict mode only
    pub strict_only: bool,
}

/// Run the validate command, returning the desired exit code.
pub fn run_validate(config: ValidateConfig) -> Result<i32> {
    let document = parse_profile_with_context(&config.profile_path)?;
    let findings = collect_findings(&document.customer_icp);

    let failed = findings
        .iter()
        .any(|f| !f.strict_only || config.strict_weights);

    let output_target = OutputTarget::from_option(config.output_file.clone());
    let format = auto_detect_format(config.output, &output_target);

    let output_text = match format {
        ReportFormat::Json => format_json(&config, &findings, failed),
        _ => format_text(&config, &document.customer_icp, &findings, failed),
    };
    write_output(&output_text, &output_target, config.quiet)?;

    if failed {
        return Ok(exit_codes::THRESHOLD_NOT_MET);
    }
    Ok(exit_codes::SUCCESS)
}

/// Collect validation findings for a profile.
fn collect_findings(profile: &IcpProfile) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for (group, status) in weight_statuses(profile) {
        if !status.balanced {
            findings.push(ValidationFinding {
                location: format!("weights.{group}"),
                message: format!("group sums to {}% instead of 100%", status.total),
                strict_only: true,
            });
        }
    }

    let reqs = &profile.minimum_requirements;
    if reqs.employee_count_min > reqs.employee_count_max {
        findings.push(ValidationFinding {
            location: "minimum_requirements".to_string(),
            message: format!(
                "employee_count_min ({}) exceeds employee_count_max ({})",
                reqs.employee_count_min, reqs.employee_count_max
            ),
            strict_only: false,
        });
    }

    if profile.criteria.is_empty() && profile.job_titles.is_empty() {
        findings.push(ValidationFinding {
            location: "criteria".to_string(),
            message: "profile defines no targeting criteria or job titles".to_string(),
            strict_only: true,
        });
    }

    findings
}

/// Weight status for each group, in display order.
fn weight_statuses(profile: &IcpProfile) -> [(&'static str, WeightStatus); 4] {
    let weights = &profile.weights;
    [
        ("company", weights.company.status()),
        ("individual", weights.individual.status()),
        ("technical", weights.technical.status()),
        ("overall", weights.overall.status()),
    ]
}

fn format_json(config: &ValidateConfig, findings: &[ValidationFinding], failed: bool) -> String {
    let output = json!({
        "tool": "icp-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "profile": config.profile_path.file_name().unwrap_or_default().to_string_lossy(),
        "valid": !failed,
        "strict_weights": config.strict_weights,
        "findings": findings,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

fn format_text(
    config: &ValidateConfig,
    profile: &IcpProfile,
    findings: &[ValidationFinding],
    failed: bool,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Profile: {}",
        config
            .profile_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
    ));
    lines.push(String::new());

    lines.push("Weight groups:".to_string());
    for (group, status) in weight_statuses(profile) {
        lines.push(format!("  {group:<12} {status}"));
    }
    lines.push(String::new());

    if findings.is_empty() {
        lines.push("No problems found.".to_string());
    } else {
        lines.push("Findings:".to_string());
        for finding in findings {
            let marker = if finding.strict_only && !config.strict_weights {
                "warning"
            } else {
                "error"
            };
            lines.push(format!(
                "  [{marker}] {}: {}",
                finding.location, finding.message
            ));
        }
        lines.push(String::new());
        lines.push(if failed {
            "Validation FAILED.".to_string()
        } else {
            "Validation passed with warnings.".to_string()
        });
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IcpProfile;

    #[test]
    fn test_default_profile_has_no_hard_findings() {
        let profile = IcpProfile::default();
        let findings = collect_findings(&profile);
        // Default profile has balanced weights but no criteria yet.
        assert!(findings.iter().all(|f| f.strict_only));
    }

    #[test]
    fn test_unbalanced_group_is_strict_only() {
        let mut profile = IcpProfile::default();
        profile.weights.overall.company = 50;
        let findings = collect_findings(&profile);
        let weight_finding = findings
            .iter()
            .find(|f| f.location == "weights.overall")
            .unwrap();
        assert!(weight_finding.strict_only);
        assert!(weight_finding.message.contains("120%"));
    }

    #[test]
    fn test_inverted_employee_range_is_hard_error() {
        let mut profile = IcpProfile::default();
        profile.minimum_requirements.employee_count_min = 500;
        profile.minimum_requirements.employee_count_max = 100;
        let findings = collect_findings(&profile);
        assert!(findings
            .iter()
            .any(|f| f.location == "minimum_requirements" && !f.strict_only));
    }
}
