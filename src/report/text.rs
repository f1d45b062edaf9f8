use crate::report::{format_points, CgpaReport};
use crate::transcript::SemesterMode;

pub fn to_text(report: &CgpaReport) -> String {
    let mut output = String::new();

    for outcome in &report.semesters {
        let line = match (outcome.sgpa, outcome.excluded) {
            (Some(sgpa), _) => match outcome.mode {
                SemesterMode::Grades => format!(
                    "Semester {} ({}): SGPA {} across {} credits\n",
                    outcome.index + 1,
                    outcome.mode,
                    format_points(sgpa),
                    outcome.credits
                ),
                SemesterMode::DirectSgpa => format!(
                    "Semester {} ({}): SGPA {}\n",
                    outcome.index + 1,
                    outcome.mode,
                    format_points(sgpa)
                ),
            },
            (None, reason) => format!(
                "Semester {} ({}): excluded{}\n",
                outcome.index + 1,
                outcome.mode,
                reason
                    .map(|reason| format!(" ({})", reason.describe()))
                    .unwrap_or_default()
            ),
        };
        output.push_str(&line);
    }

    for skip in &report.skips {
        output.push_str(&format!(
            "skipped: semester {}, subject {}: {}\n",
            skip.semester_index + 1,
            skip.subject_index + 1,
            skip.reason.describe()
        ));
    }

    output.push_str(&format!(
        "CGPA: {} over {} contributing semester{}\n",
        report.cgpa_display,
        report.contributing,
        if report.contributing == 1 { "" } else { "s" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::transcript::{Semester, Subject, Transcript};

    #[test]
    fn text_report_lists_semesters_and_result() {
        let transcript = Transcript::new()
            .with_semester(
                Semester::grades()
                    .with_subject(Subject::new("AA", 4.0))
                    .with_subject(Subject::new("BB", 4.0)),
            )
            .with_semester(Semester::direct("8.5"));
        let report = CgpaReport::new(aggregate(&transcript));

        let rendered = to_text(&report);
        assert!(rendered.contains("Semester 1 (grades): SGPA 9.00 across 8 credits"));
        assert!(rendered.contains("Semester 2 (direct-sgpa): SGPA 8.50"));
        assert!(rendered.contains("CGPA: 8.75 over 2 contributing semesters"));
    }

    #[test]
    fn text_report_shows_nan_for_empty_transcripts() {
        let report = CgpaReport::new(aggregate(&Transcript::new()));
        let rendered = to_text(&report);
        assert!(rendered.contains("CGPA: NaN over 0 contributing semesters"));
    }

    #[test]
    fn text_report_mentions_skipped_subjects() {
        let transcript = Transcript::new().with_semester(
            Semester::grades()
                .with_subject(Subject::new("AA", 4.0))
                .with_subject(Subject::new("XX", 4.0)),
        );
        let report = CgpaReport::new(aggregate(&transcript));

        let rendered = to_text(&report);
        assert!(rendered.contains("skipped: semester 1, subject 2: grade is not on the scale"));
    }
}
