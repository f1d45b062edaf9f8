pub mod findings;

use serde::Serialize;

use crate::scale;
use crate::transcript::value::RawValue;
use crate::transcript::{Semester, SemesterMode, Subject, Transcript};

/// Why a subject was left out of its semester's weighted average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingGrade,
    UnknownGrade,
    MissingCredits,
    InvalidCredits,
}

impl SkipReason {
    pub fn slug(self) -> &'static str {
        match self {
            SkipReason::MissingGrade => "missing_grade",
            SkipReason::UnknownGrade => "unknown_grade",
            SkipReason::MissingCredits => "missing_credits",
            SkipReason::InvalidCredits => "invalid_credits",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::MissingGrade => "no grade entered",
            SkipReason::UnknownGrade => "grade is not on the scale",
            SkipReason::MissingCredits => "no credits entered",
            SkipReason::InvalidCredits => "credits did not parse as a non-negative number",
        }
    }
}

/// A subject excluded from the aggregate. Indexes are zero-based; renderers
/// show them one-based.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectSkip {
    pub semester_index: usize,
    pub subject_index: usize,
    pub grade: Option<String>,
    pub reason: SkipReason,
}

/// Why a whole semester contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcludeReason {
    InvalidSgpa,
    NoCreditedSubjects,
}

impl ExcludeReason {
    pub fn slug(self) -> &'static str {
        match self {
            ExcludeReason::InvalidSgpa => "invalid_sgpa",
            ExcludeReason::NoCreditedSubjects => "no_credited_subjects",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ExcludeReason::InvalidSgpa => "the entered SGPA did not parse as a number",
            ExcludeReason::NoCreditedSubjects => "no subject carried both a valid grade and credits",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SemesterOutcome {
    pub index: usize,
    pub mode: SemesterMode,
    /// Effective SGPA; `None` when the semester is excluded.
    pub sgpa: Option<f64>,
    /// Total counted credits (grades mode; 0.0 in direct mode).
    pub credits: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<ExcludeReason>,
}

/// Full aggregation outcome: the CGPA plus everything that was excluded on
/// the way. Excluded entries are reported, never fatal.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub semesters: Vec<SemesterOutcome>,
    pub skips: Vec<SubjectSkip>,
    pub contributing: usize,
    /// `None` when no semester contributed; `cgpa_value` maps that back to
    /// the bare 0/0 result.
    pub cgpa: Option<f64>,
}

impl Summary {
    /// The aggregate as a plain number. With zero contributing semesters
    /// this is the result of 0/0, i.e. NaN, by design.
    pub fn cgpa_value(&self) -> f64 {
        self.cgpa.unwrap_or(f64::NAN)
    }

    pub fn has_exclusions(&self) -> bool {
        !self.skips.is_empty() || self.semesters.iter().any(|outcome| outcome.excluded.is_some())
    }
}

/// Reduce a transcript to its CGPA: the unweighted arithmetic mean of the
/// effective per-semester SGPAs. Semesters without a valid SGPA are left
/// out of the mean entirely, not counted as zero.
pub fn aggregate(transcript: &Transcript) -> Summary {
    let mut semesters = Vec::with_capacity(transcript.semesters.len());
    let mut skips = Vec::new();
    let mut sgpa_sum = 0.0;
    let mut contributing = 0usize;

    for (index, semester) in transcript.semesters.iter().enumerate() {
        let outcome = match semester.mode {
            SemesterMode::DirectSgpa => direct_outcome(index, semester),
            SemesterMode::Grades => grades_outcome(index, semester, &mut skips),
        };
        if let Some(sgpa) = outcome.sgpa {
            sgpa_sum += sgpa;
            contributing += 1;
        }
        semesters.push(outcome);
    }

    let cgpa = (contributing > 0).then(|| sgpa_sum / contributing as f64);
    Summary {
        semesters,
        skips,
        contributing,
        cgpa,
    }
}

/// Bare reduction used by callers that only want the number. NaN when no
/// semester contributes.
pub fn compute_cgpa(transcript: &Transcript) -> f64 {
    aggregate(transcript).cgpa_value()
}

fn direct_outcome(index: usize, semester: &Semester) -> SemesterOutcome {
    let sgpa = semester.sgpa.as_ref().and_then(RawValue::parse_decimal);
    SemesterOutcome {
        index,
        mode: SemesterMode::DirectSgpa,
        sgpa,
        credits: 0.0,
        excluded: sgpa.is_none().then_some(ExcludeReason::InvalidSgpa),
    }
}

fn grades_outcome(index: usize, semester: &Semester, skips: &mut Vec<SubjectSkip>) -> SemesterOutcome {
    let mut credits_sum = 0.0;
    let mut weighted_sum = 0.0;

    for (subject_index, subject) in semester.subjects.iter().enumerate() {
        match subject_entry(subject) {
            Ok((points, credits)) => {
                credits_sum += credits;
                weighted_sum += f64::from(points) * credits;
            }
            Err(reason) => skips.push(SubjectSkip {
                semester_index: index,
                subject_index,
                grade: subject.grade.clone(),
                reason,
            }),
        }
    }

    let sgpa = (credits_sum > 0.0).then(|| weighted_sum / credits_sum);
    SemesterOutcome {
        index,
        mode: SemesterMode::Grades,
        sgpa,
        credits: credits_sum,
        excluded: sgpa.is_none().then_some(ExcludeReason::NoCreditedSubjects),
    }
}

fn subject_entry(subject: &Subject) -> std::result::Result<(u32, f64), SkipReason> {
    let grade = subject.grade.as_deref().ok_or(SkipReason::MissingGrade)?;
    let points = scale::points(grade).ok_or(SkipReason::UnknownGrade)?;
    let credits = subject.credits.as_ref().ok_or(SkipReason::MissingCredits)?;
    let credits = credits.parse_credits().ok_or(SkipReason::InvalidCredits)?;
    Ok((points, credits))
}
