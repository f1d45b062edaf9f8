use crate::report::CgpaReport;

pub fn to_json(report: &CgpaReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
