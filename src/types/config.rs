use serde::Deserialize;

/// Presentation defaults. The grade scale and the aggregation itself take
/// nothing from configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CgpaConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    /// Treat skipped entries as blocking in `cgpa check`.
    #[serde(default)]
    pub strict: bool,
}
