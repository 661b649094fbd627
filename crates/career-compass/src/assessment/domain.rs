use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Stable identifier of a catalog question.
pub type QuestionId = u32;

/// A scored trait family with a fixed declaration order.
///
/// The declaration order is the tie-break order used whenever two traits carry
/// the same tally, so `ORDERED` must list the variants exactly as the catalog
/// introduces them.
pub trait Axis: Copy + Ord + Hash + fmt::Debug + Serialize + Send + Sync + 'static {
    const ORDERED: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ORDERED
            .iter()
            .copied()
            .find(|axis| axis.label() == label)
    }
}

/// Option letters offered by catalog questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionKey {
    A,
    B,
    C,
    D,
    E,
}

impl OptionKey {
    pub const fn ordered() -> [Self; 5] {
        [Self::A, Self::B, Self::C, Self::D, Self::E]
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    pub fn from_char(value: char) -> Option<Self> {
        match value.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }

    /// Position of the letter among the offered options (A = 0).
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for OptionKey {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_char(letter),
            _ => None,
        }
        .ok_or_else(|| ParseLabelError::new("option", value))
    }
}

/// The four questionnaire sections, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Mbti,
    Riasec,
    Strengths,
    Scenario,
}

impl Section {
    pub const fn ordered() -> [Self; 4] {
        [Self::Mbti, Self::Riasec, Self::Strengths, Self::Scenario]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mbti => "Personality Assessment",
            Self::Riasec => "Career Interests Assessment",
            Self::Strengths => "Strengths & Behavioral Traits",
            Self::Scenario => "Workplace Scenarios",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mbti => "mbti",
            Self::Riasec => "riasec",
            Self::Strengths => "strengths",
            Self::Scenario => "scenario",
        }
    }

    /// One-based position shown as "Section n/4".
    pub const fn number(self) -> usize {
        self as usize + 1
    }
}

impl FromStr for Section {
    type Err = ParseLabelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|section| section.slug() == normalized)
            .ok_or_else(|| ParseLabelError::new("section", value))
    }
}

/// MBTI preference letters; each consecutive pair forms one dichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MbtiLetter {
    I,
    E,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl MbtiLetter {
    /// The four dichotomies in type-string order.
    pub const DICHOTOMIES: [(Self, Self); 4] = [
        (Self::I, Self::E),
        (Self::S, Self::N),
        (Self::T, Self::F),
        (Self::J, Self::P),
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "Introversion",
            Self::E => "Extraversion",
            Self::S => "Sensing",
            Self::N => "Intuition",
            Self::T => "Thinking",
            Self::F => "Feeling",
            Self::J => "Judging",
            Self::P => "Perceiving",
        }
    }
}

impl Axis for MbtiLetter {
    const ORDERED: &'static [Self] = &[
        Self::I,
        Self::E,
        Self::S,
        Self::N,
        Self::T,
        Self::F,
        Self::J,
        Self::P,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::E => "E",
            Self::S => "S",
            Self::N => "N",
            Self::T => "T",
            Self::F => "F",
            Self::J => "J",
            Self::P => "P",
        }
    }
}

/// Holland interest codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiasecCode {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl RiasecCode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "Realistic",
            Self::I => "Investigative",
            Self::A => "Artistic",
            Self::S => "Social",
            Self::E => "Enterprising",
            Self::C => "Conventional",
        }
    }
}

impl Axis for RiasecCode {
    const ORDERED: &'static [Self] = &[Self::R, Self::I, Self::A, Self::S, Self::E, Self::C];

    fn label(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::I => "I",
            Self::A => "A",
            Self::S => "S",
            Self::E => "E",
            Self::C => "C",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    Resilience,
    Organization,
    Creativity,
    Leadership,
}

impl Axis for Strength {
    const ORDERED: &'static [Self] = &[
        Self::Resilience,
        Self::Organization,
        Self::Creativity,
        Self::Leadership,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Resilience => "Resilience",
            Self::Organization => "Organization",
            Self::Creativity => "Creativity",
            Self::Leadership => "Leadership",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkplaceTrait {
    Leadership,
    Empathy,
    Organization,
    Creativity,
    Realism,
}

impl Axis for WorkplaceTrait {
    const ORDERED: &'static [Self] = &[
        Self::Leadership,
        Self::Empathy,
        Self::Organization,
        Self::Creativity,
        Self::Realism,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Leadership => "Leadership",
            Self::Empathy => "Empathy",
            Self::Organization => "Organization",
            Self::Creativity => "Creativity",
            Self::Realism => "Realism",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_keys_parse_case_insensitively() {
        assert_eq!("a".parse::<OptionKey>(), Ok(OptionKey::A));
        assert_eq!(" E ".parse::<OptionKey>(), Ok(OptionKey::E));
        assert!("F".parse::<OptionKey>().is_err());
        assert!("AB".parse::<OptionKey>().is_err());
    }

    #[test]
    fn axis_labels_resolve_back_to_variants() {
        assert_eq!(
            Strength::from_label("Creativity"),
            Some(Strength::Creativity)
        );
        assert_eq!(MbtiLetter::from_label("N"), Some(MbtiLetter::N));
        assert_eq!(RiasecCode::from_label("Q"), None);
        assert_eq!(
            WorkplaceTrait::from_label(" Realism"),
            Some(WorkplaceTrait::Realism)
        );
    }

    #[test]
    fn sections_parse_from_slugs() {
        assert_eq!("RIASEC".parse::<Section>(), Ok(Section::Riasec));
        assert_eq!(Section::Scenario.number(), 4);
        assert!("chat".parse::<Section>().is_err());
    }
}
