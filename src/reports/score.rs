//! Lead score report rendering.

use serde_json::json;

use crate::scoring::{FitBand, LeadScore, SCORING_ENGINE_VERSION};

/// Options controlling text report contents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreReportOptions {
    pub show_breakdown: bool,
    pub show_recommendations: bool,
    pub use_color: bool,
}

/// Render a lead score as a JSON document with a tool envelope.
#[must_use]
pub fn render_json(score: &LeadScore, lead_name: &str) -> String {
    let output = json!({
        "tool": "icp-tools",
        "version": env!("CARGO_PKG_VERSION"),
        "engine": SCORING_ENGINE_VERSION,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "lead": lead_name,
        "score": score,
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

/// Render a lead score as a one-line summary.
#[must_use]
pub fn render_summary(score: &LeadScore, lead_name: &str) -> String {
    format!(
        "{}: {:.1}/100 ({})",
        lead_name,
        score.total,
        score.band.label()
    )
}

/// Render a lead score as a human-readable text report.
#[must_use]
pub fn render_text(score: &LeadScore, lead_name: &str, options: ScoreReportOptions) -> String {
    let mut lines = Vec::new();

    let (band_color, reset) = if options.use_color {
        let color = match score.band {
            FitBand::High => "\x1b[32m",   // Green
            FitBand::Medium => "\x1b[33m", // Yellow
            FitBand::Low => "\x1b[31m",    // Red
        };
        (color, "\x1b[0m")
    } else {
        ("", "")
    };

    lines.push(format!("Lead Score Report: {lead_name}"));
    lines.push(String::new());
    lines.push(format!(
        "Total: {}{:.1}/100 ({}){}",
        band_color,
        score.total,
        score.band.label(),
        reset
    ));
    lines.push(format!("  {}", score.band.description()));
    lines.push(String::new());

    if options.show_breakdown {
        lines.push("Category Breakdown:".to_string());
        for (category, contribution) in &score.breakdown {
            lines.push(format!("  {category:<12} {contribution:>5.1}"));
        }
        lines.push(String::new());
    }

    if options.show_recommendations && !score.recommendations.is_empty() {
        lines.push("Recommendations:".to_string());
        for rec in score.recommendations.iter().take(10) {
            let priority_indicator = if options.use_color {
                match rec.priority {
                    1 => "\x1b[31m[P1]\x1b[0m",
                    2 => "\x1b[33m[P2]\x1b[0m",
                    _ => "[P3+]",
                }
            } else {
                match rec.priority {
                    1 => "[P1]",
                    2 => "[P2]",
                    _ => "[P3+]",
                }
            };
            if rec.potential_gain > 0.0 {
                lines.push(format!(
                    "  {} {} (+{:.1} potential)",
                    priority_indicator, rec.message, rec.potential_gain
                ));
            } else {
                lines.push(format!("  {} {}", priority_indicator, rec.message));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
