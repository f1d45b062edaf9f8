use crate::report::{format_points, CgpaReport};

pub fn to_markdown(report: &CgpaReport) -> String {
    let mut output = String::new();
    output.push_str("# CGPA Report\n\n");
    output.push_str(&format!("Generated: {}\n\n", report.generated_at));

    output.push_str("## Semesters\n\n");
    if report.semesters.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for outcome in &report.semesters {
            match outcome.sgpa {
                Some(sgpa) => output.push_str(&format!(
                    "- semester {} ({}): SGPA {}\n",
                    outcome.index + 1,
                    outcome.mode,
                    format_points(sgpa)
                )),
                None => output.push_str(&format!(
                    "- semester {} ({}): excluded{}\n",
                    outcome.index + 1,
                    outcome.mode,
                    outcome
                        .excluded
                        .map(|reason| format!(" ({})", reason.describe()))
                        .unwrap_or_default()
                )),
            }
        }
        output.push('\n');
    }

    output.push_str("## Skipped Entries\n\n");
    if report.skips.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for skip in &report.skips {
            output.push_str(&format!(
                "- semester {}, subject {}: {}\n",
                skip.semester_index + 1,
                skip.subject_index + 1,
                skip.reason.describe()
            ));
        }
        output.push('\n');
    }

    output.push_str("## Result\n\n");
    output.push_str(&format!(
        "CGPA: {} ({} of {} semesters contributing)\n",
        report.cgpa_display,
        report.contributing,
        report.semesters.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::transcript::{Semester, Transcript};

    #[test]
    fn markdown_report_contains_sections() {
        let transcript = Transcript::new().with_semester(Semester::direct(8.5));
        let report = CgpaReport::new(aggregate(&transcript));

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# CGPA Report"));
        assert!(rendered.contains("## Semesters"));
        assert!(rendered.contains("## Skipped Entries"));
        assert!(rendered.contains("## Result"));
        assert!(rendered.contains("CGPA: 8.50 (1 of 1 semesters contributing)"));
    }

    #[test]
    fn markdown_report_marks_excluded_semesters() {
        let transcript = Transcript::new().with_semester(Semester::direct("oops"));
        let report = CgpaReport::new(aggregate(&transcript));

        let rendered = to_markdown(&report);
        assert!(rendered.contains("excluded (the entered SGPA did not parse as a number)"));
        assert!(rendered.contains("CGPA: NaN"));
    }
}
