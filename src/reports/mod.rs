//! Report generation for scores and profile status.

mod score;
mod types;

pub use score::{render_json, render_summary, render_text, ScoreReportOptions};
pub use types::ReportFormat;
