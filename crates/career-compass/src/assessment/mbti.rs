use super::answers::AnswerSet;
use super::catalog::MBTI_QUESTIONS;
use super::domain::{Axis, MbtiLetter};
use super::tally::{tally_pairs, AxisTally, TieBreak, DICHOTOMY_TIE_BREAK};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Personality section outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MbtiResult {
    #[serde(rename = "type")]
    pub mbti_type: String,
    pub description: String,
    pub details: AxisTally<MbtiLetter>,
    pub careers: Vec<String>,
}

impl MbtiResult {
    /// Share of the votes won by the preferred letter on each dichotomy.
    ///
    /// Axes without any votes report an even 50%.
    pub fn preference_strengths(&self) -> Vec<PreferenceStrength> {
        MbtiLetter::DICHOTOMIES
            .iter()
            .zip(self.mbti_type.chars())
            .filter_map(|(&(first, second), letter)| {
                let preferred = MbtiLetter::from_label(&letter.to_string())?;
                if preferred != first && preferred != second {
                    return None;
                }

                let total = self.details.get(first) + self.details.get(second);
                let percent = if total == 0 {
                    50
                } else {
                    ((self.details.get(preferred) as f64 / total as f64) * 100.0).round() as u8
                };

                Some(PreferenceStrength {
                    dichotomy: format!("{}/{}", first.label(), second.label()),
                    preferred,
                    preferred_name: preferred.name(),
                    percent,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceStrength {
    pub dichotomy: String,
    pub preferred: MbtiLetter,
    pub preferred_name: &'static str,
    pub percent: u8,
}

struct MbtiProfile {
    code: &'static str,
    description: &'static str,
    careers: &'static [&'static str],
}

const MBTI_PROFILES: &[MbtiProfile] = &[
    MbtiProfile {
        code: "INTJ",
        description: "The Architect - Strategic, innovative, and with a natural drive to improve systems and processes.",
        careers: &[
            "Data Scientist",
            "Software Architect",
            "Management Consultant",
            "Financial Analyst",
            "Investment Banker",
        ],
    },
    MbtiProfile {
        code: "INTP",
        description: "The Logician - Inventive, curious, and creative problem-solver with a strong desire for logical accuracy.",
        careers: &[
            "Research Scientist",
            "Software Developer",
            "Systems Analyst",
            "Mathematician",
            "Economist",
        ],
    },
    MbtiProfile {
        code: "ENTJ",
        description: "The Commander - Bold, decisive, and strategic leader with a talent for organization and long-term planning.",
        careers: &[
            "Executive",
            "Management Consultant",
            "Lawyer",
            "Entrepreneur",
            "Business Analyst",
        ],
    },
    MbtiProfile {
        code: "ENTP",
        description: "The Debater - Quick-thinking, innovative, and adaptable with a passion for intellectual challenges.",
        careers: &[
            "Entrepreneur",
            "Creative Director",
            "Marketing Strategist",
            "Business Developer",
            "Political Consultant",
        ],
    },
    MbtiProfile {
        code: "INFJ",
        description: "The Advocate - Idealistic, principled, and with deep insights into human connections and motivations.",
        careers: &[
            "Psychologist",
            "Writer",
            "HR Manager",
            "Social Worker",
            "Educational Consultant",
        ],
    },
    MbtiProfile {
        code: "INFP",
        description: "The Mediator - Empathetic, creative, and driven by personal values and a desire for authenticity.",
        careers: &[
            "Writer",
            "Counselor",
            "UX Designer",
            "Librarian",
            "Social Media Manager",
        ],
    },
    MbtiProfile {
        code: "ENFJ",
        description: "The Protagonist - Charismatic, empathetic leader who naturally inspires and supports others.",
        careers: &[
            "Teacher",
            "HR Director",
            "Marketing Manager",
            "Public Relations Specialist",
            "Nonprofit Manager",
        ],
    },
    MbtiProfile {
        code: "ENFP",
        description: "The Campaigner - Enthusiastic, creative, and socially adept with a passion for possibilities.",
        careers: &[
            "Creative Director",
            "Journalist",
            "Event Planner",
            "Marketing Specialist",
            "Career Counselor",
        ],
    },
    MbtiProfile {
        code: "ISTJ",
        description: "The Logistician - Practical, detail-oriented, and reliable with a strong sense of duty.",
        careers: &[
            "Accountant",
            "Project Manager",
            "Financial Analyst",
            "Quality Assurance Specialist",
            "Database Administrator",
        ],
    },
    MbtiProfile {
        code: "ISFJ",
        description: "The Defender - Dedicated, warm-hearted, and protective with a deep commitment to responsibility.",
        careers: &[
            "Nurse",
            "Elementary Teacher",
            "HR Specialist",
            "Administrative Manager",
            "Social Worker",
        ],
    },
    MbtiProfile {
        code: "ESTJ",
        description: "The Executive - Practical, decisive, and focused on creating order and enforcing standards.",
        careers: &[
            "Operations Manager",
            "Financial Manager",
            "Sales Manager",
            "Insurance Agent",
            "Military Officer",
        ],
    },
    MbtiProfile {
        code: "ESFJ",
        description: "The Consul - Caring, social, and process-oriented with a drive for harmony and connection.",
        careers: &[
            "Nurse",
            "School Teacher",
            "HR Manager",
            "Customer Service Manager",
            "Event Planner",
        ],
    },
    MbtiProfile {
        code: "ISTP",
        description: "The Virtuoso - Practical problem-solver with a mastery of tools and an adventurous spirit.",
        careers: &[
            "Engineer",
            "Forensic Scientist",
            "Mechanic",
            "Pilot",
            "Software Developer",
        ],
    },
    MbtiProfile {
        code: "ISFP",
        description: "The Adventurer - Artistic, sensitive, and with a strong aesthetic sense and appreciation for experiences.",
        careers: &[
            "Graphic Designer",
            "Fashion Designer",
            "Photographer",
            "Physical Therapist",
            "Landscape Architect",
        ],
    },
    MbtiProfile {
        code: "ESTP",
        description: "The Entrepreneur - Energetic, action-oriented risk-taker with an eye for opportunity.",
        careers: &[
            "Sales Executive",
            "Marketing Manager",
            "Entrepreneur",
            "Project Manager",
            "Police Officer",
        ],
    },
    MbtiProfile {
        code: "ESFP",
        description: "The Entertainer - Spontaneous, energetic, and people-oriented with a talent for enjoyment.",
        careers: &[
            "Event Planner",
            "Sales Representative",
            "Public Relations Specialist",
            "Tour Guide",
            "Fitness Trainer",
        ],
    },
];

const FALLBACK_DESCRIPTION: &str =
    "A unique combination of personality traits that influence your approach to work and life.";

const FALLBACK_CAREERS: &[&str] = &[
    "Analyst",
    "Consultant",
    "Researcher",
    "Creative Professional",
    "Specialist",
];

/// Description and careers for a four-letter type, or the generic profile
/// when the code is not one of the sixteen types.
pub fn profile_for(code: &str) -> (&'static str, &'static [&'static str]) {
    MBTI_PROFILES
        .iter()
        .find(|profile| profile.code == code)
        .map(|profile| (profile.description, profile.careers))
        .unwrap_or((FALLBACK_DESCRIPTION, FALLBACK_CAREERS))
}

pub(crate) fn score_mbti(answers: &AnswerSet, tie_break: TieBreak) -> MbtiResult {
    let details: AxisTally<MbtiLetter> = tally_pairs(MBTI_QUESTIONS, answers);

    let mbti_type: String = MbtiLetter::DICHOTOMIES
        .iter()
        .map(|&(first, second)| tie_break.resolve(&details, first, second).label())
        .collect();

    let (description, careers) = profile_for(&mbti_type);
    debug!(%mbti_type, votes = details.total(), "mbti type resolved");

    MbtiResult {
        mbti_type,
        description: description.to_string(),
        details,
        careers: careers.iter().map(|career| career.to_string()).collect(),
    }
}

/// Scores the personality section with the documented first-listed tie-break.
pub fn calculate_mbti_type(answers: &AnswerSet) -> MbtiResult {
    score_mbti(answers, DICHOTOMY_TIE_BREAK)
}
