use std::fmt;

/// Letter grades on the fixed ten-point scale, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    AA,
    AB,
    BB,
    BC,
    CC,
    CD,
    DD,
    FF,
}

pub const ALL_GRADES: [Grade; 8] = [
    Grade::AA,
    Grade::AB,
    Grade::BB,
    Grade::BC,
    Grade::CC,
    Grade::CD,
    Grade::DD,
    Grade::FF,
];

impl Grade {
    pub fn points(self) -> u32 {
        match self {
            Grade::AA => 10,
            Grade::AB => 9,
            Grade::BB => 8,
            Grade::BC => 7,
            Grade::CC => 6,
            Grade::CD => 5,
            Grade::DD => 4,
            Grade::FF => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::AA => "AA",
            Grade::AB => "AB",
            Grade::BB => "BB",
            Grade::BC => "BC",
            Grade::CC => "CC",
            Grade::CD => "CD",
            Grade::DD => "DD",
            Grade::FF => "FF",
        }
    }

    /// Recognize a grade from free text; `None` for anything off the scale.
    pub fn parse(text: &str) -> Option<Grade> {
        let text = text.trim();
        ALL_GRADES
            .iter()
            .copied()
            .find(|grade| grade.as_str().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point lookup over free text, the form of the scale the aggregator uses.
pub fn points(grade: &str) -> Option<u32> {
    Grade::parse(grade).map(Grade::points)
}
