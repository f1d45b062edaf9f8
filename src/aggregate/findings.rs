use serde::Serialize;

use super::Summary;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

/// One finding per excluded entry, plus a blocking finding when nothing
/// contributes at all. The aggregation itself never fails; this is the
/// explicit surface for everything it silently left out.
pub fn findings(summary: &Summary) -> Vec<Finding> {
    let mut findings = Vec::new();

    for skip in &summary.skips {
        let grade = skip
            .grade
            .as_deref()
            .map(|grade| format!(" (grade \"{grade}\")"))
            .unwrap_or_default();
        findings.push(Finding {
            id: format!("subject.{}", skip.reason.slug()),
            title: "Subject excluded from SGPA".to_string(),
            body: format!(
                "Semester {}, subject {}{}: {}.",
                skip.semester_index + 1,
                skip.subject_index + 1,
                grade,
                skip.reason.describe()
            ),
            blocking: false,
        });
    }

    for outcome in &summary.semesters {
        if let Some(reason) = outcome.excluded {
            findings.push(Finding {
                id: format!("semester.{}", reason.slug()),
                title: "Semester excluded from CGPA".to_string(),
                body: format!("Semester {}: {}.", outcome.index + 1, reason.describe()),
                blocking: false,
            });
        }
    }

    if summary.contributing == 0 {
        findings.push(Finding {
            id: "transcript.no_contributing".to_string(),
            title: "No semester contributes".to_string(),
            body: "No semester produced a valid SGPA; the CGPA is not a number.".to_string(),
            blocking: true,
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::transcript::{Semester, Subject, Transcript};

    #[test]
    fn clean_transcript_has_no_findings() {
        let transcript = Transcript::new().with_semester(Semester::direct(8.5));
        assert!(findings(&aggregate(&transcript)).is_empty());
    }

    #[test]
    fn skipped_subjects_become_warnings() {
        let transcript = Transcript::new().with_semester(
            Semester::grades()
                .with_subject(Subject::new("AA", 4.0))
                .with_subject(Subject::new("XX", 4.0)),
        );

        let findings = findings(&aggregate(&transcript));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "subject.unknown_grade");
        assert!(!findings[0].blocking);
        assert!(findings[0].body.contains("Semester 1, subject 2"));
    }

    #[test]
    fn empty_transcript_is_blocking() {
        let findings = findings(&aggregate(&Transcript::new()));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].id, "transcript.no_contributing");
        assert!(findings[0].blocking);
    }

    #[test]
    fn excluded_semester_reports_both_levels() {
        let transcript =
            Transcript::new().with_semester(Semester::grades().with_subject(Subject::new("XX", 4.0)));

        let findings = findings(&aggregate(&transcript));
        assert!(findings.iter().any(|finding| finding.id == "subject.unknown_grade"));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "semester.no_credited_subjects"));
        assert!(findings
            .iter()
            .any(|finding| finding.id == "transcript.no_contributing" && finding.blocking));
    }
}
