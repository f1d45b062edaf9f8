pub mod json;
pub mod md;
pub mod text;

use chrono::Utc;
use serde::Serialize;

use crate::aggregate::{SemesterOutcome, SubjectSkip, Summary};
use crate::error::CgpaError;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct CgpaReport {
    pub generated_at: String,
    pub semesters: Vec<SemesterOutcome>,
    pub skips: Vec<SubjectSkip>,
    pub contributing: usize,
    /// `null` in JSON for the no-contributing-semesters case; the display
    /// string keeps the NaN rendering.
    pub cgpa: Option<f64>,
    pub cgpa_display: String,
}

impl CgpaReport {
    pub fn new(summary: Summary) -> Self {
        let cgpa_display = format_points(summary.cgpa_value());
        Self {
            generated_at: Utc::now().to_rfc3339(),
            cgpa: summary.cgpa,
            cgpa_display,
            contributing: summary.contributing,
            semesters: summary.semesters,
            skips: summary.skips,
        }
    }
}

/// Two-decimal display; NaN renders as "NaN".
pub fn format_points(value: f64) -> String {
    format!("{value:.2}")
}

pub fn render(report: &CgpaReport, format: OutputFormat) -> Result<String, CgpaError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Json => json::to_json(report).map_err(CgpaError::Json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_points_rounds_to_two_decimals() {
        assert_eq!(format_points(9.0), "9.00");
        assert_eq!(format_points(8.75), "8.75");
        assert_eq!(format_points(25.0 / 3.0), "8.33");
    }

    #[test]
    fn format_points_preserves_nan() {
        assert_eq!(format_points(f64::NAN), "NaN");
    }
}
