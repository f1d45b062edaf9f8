pub mod load;
pub mod value;

use std::fmt;

use serde::{Deserialize, Serialize};

use value::RawValue;

/// One course in a semester. Fields hold whatever the user entered; the
/// aggregator decides what counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<RawValue>,
}

#[allow(dead_code)]
impl Subject {
    pub fn new(grade: impl Into<String>, credits: impl Into<RawValue>) -> Self {
        Self {
            grade: Some(grade.into()),
            credits: Some(credits.into()),
        }
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_credits(mut self, credits: impl Into<RawValue>) -> Self {
        self.credits = Some(credits.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemesterMode {
    #[default]
    Grades,
    DirectSgpa,
}

impl fmt::Display for SemesterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SemesterMode::Grades => "grades",
            SemesterMode::DirectSgpa => "direct-sgpa",
        })
    }
}

/// Either a list of graded subjects or a directly entered SGPA. `subjects`
/// is consulted only in grades mode, `sgpa` only in direct mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Semester {
    #[serde(default)]
    pub mode: SemesterMode,
    #[serde(default, rename = "subject", skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sgpa: Option<RawValue>,
}

#[allow(dead_code)]
impl Semester {
    pub fn grades() -> Self {
        Self::default()
    }

    pub fn direct(sgpa: impl Into<RawValue>) -> Self {
        Self {
            mode: SemesterMode::DirectSgpa,
            subjects: Vec::new(),
            sgpa: Some(sgpa.into()),
        }
    }

    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Removing an out-of-range index is a no-op.
    pub fn without_subject(mut self, index: usize) -> Self {
        if index < self.subjects.len() {
            self.subjects.remove(index);
        }
        self
    }

    pub fn with_sgpa(mut self, sgpa: impl Into<RawValue>) -> Self {
        self.sgpa = Some(sgpa.into());
        self
    }

    pub fn toggled_mode(mut self) -> Self {
        self.mode = match self.mode {
            SemesterMode::Grades => SemesterMode::DirectSgpa,
            SemesterMode::DirectSgpa => SemesterMode::Grades,
        };
        self
    }
}

/// Ordered semesters as entered. Order is irrelevant to the final CGPA but
/// preserved for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default, rename = "semester")]
    pub semesters: Vec<Semester>,
}

#[allow(dead_code)]
impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semesters.push(semester);
        self
    }

    /// Removing an out-of-range index is a no-op.
    pub fn without_semester(mut self, index: usize) -> Self {
        if index < self.semesters.len() {
            self.semesters.remove(index);
        }
        self
    }
}

/// Starter transcript written by `cgpa init`: one grades-mode semester and
/// one direct-entry semester.
pub fn template() -> Transcript {
    Transcript::new()
        .with_semester(
            Semester::grades()
                .with_subject(Subject::new("AA", 4.0))
                .with_subject(Subject::new("BB", 4.0)),
        )
        .with_semester(Semester::direct("8.5"))
}
