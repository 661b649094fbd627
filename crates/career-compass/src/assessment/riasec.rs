use super::answers::AnswerSet;
use super::catalog::RIASEC_QUESTIONS;
use super::domain::{Axis, RiasecCode};
use super::tally::{tally_pairs, AxisTally};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interest section outcome. `dominant` and `secondary` are the two highest
/// ranked codes and are always distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecResult {
    pub dominant: RiasecCode,
    pub secondary: RiasecCode,
    pub scores: AxisTally<RiasecCode>,
    pub careers: Vec<String>,
}

impl RiasecResult {
    /// Two-letter Holland code, e.g. `"RI"`.
    pub fn code(&self) -> String {
        format!("{}{}", self.dominant.label(), self.secondary.label())
    }
}

const COMBINATION_CAREERS: &[(&str, &[&str])] = &[
    (
        "RI",
        &[
            "Research Scientist",
            "Medical Researcher",
            "Engineer",
            "Technical Analyst",
            "Systems Analyst",
        ],
    ),
    (
        "RA",
        &[
            "Architect",
            "Technical Designer",
            "Audio Engineer",
            "Carpenter",
            "Photographer",
        ],
    ),
    (
        "RS",
        &[
            "Athletic Trainer",
            "Physical Therapist",
            "Park Ranger",
            "Emergency Medical Technician",
            "Occupational Therapist",
        ],
    ),
    (
        "RE",
        &[
            "Construction Manager",
            "Agricultural Manager",
            "Police Officer",
            "Military Officer",
            "Sports Coach",
        ],
    ),
    (
        "RC",
        &[
            "Engineering Technician",
            "Quality Control Analyst",
            "Carpenter",
            "Surveyor",
            "Network Administrator",
        ],
    ),
    (
        "IR",
        &[
            "Biomedical Engineer",
            "Environmental Scientist",
            "Robotics Engineer",
            "Software Developer",
            "Veterinarian",
        ],
    ),
    (
        "IA",
        &[
            "Medical Illustrator",
            "Anthropologist",
            "Neuroscientist",
            "Technical Writer",
            "Game Designer",
        ],
    ),
    (
        "IS",
        &[
            "Physician",
            "Psychologist",
            "Pharmacist",
            "Nutritionist",
            "Research Psychologist",
        ],
    ),
    (
        "IE",
        &[
            "Medical Scientist",
            "Computer Systems Analyst",
            "Management Consultant",
            "Operations Research Analyst",
            "Environmental Engineer",
        ],
    ),
    (
        "IC",
        &[
            "Mathematician",
            "Statistician",
            "Financial Analyst",
            "Actuary",
            "Database Administrator",
        ],
    ),
    (
        "AR",
        &[
            "Landscape Architect",
            "Fashion Designer",
            "Chef",
            "Interior Designer",
            "Sculptor",
        ],
    ),
    (
        "AI",
        &[
            "Film Director",
            "Music Composer",
            "Writer",
            "Multimedia Artist",
            "Art Director",
        ],
    ),
    (
        "AS",
        &[
            "Art Therapist",
            "Music Therapist",
            "Drama Teacher",
            "Dance Instructor",
            "Speech Pathologist",
        ],
    ),
    (
        "AE",
        &[
            "Creative Director",
            "Producer",
            "Public Relations Specialist",
            "Fashion Merchandiser",
            "Advertising Executive",
        ],
    ),
    (
        "AC",
        &[
            "Web Designer",
            "Technical Writer",
            "Editor",
            "Court Reporter",
            "Medical Illustrator",
        ],
    ),
    (
        "SR",
        &[
            "Dental Hygienist",
            "Massage Therapist",
            "Fitness Instructor",
            "Recreational Therapist",
            "Elementary School Teacher",
        ],
    ),
    (
        "SI",
        &[
            "School Counselor",
            "Speech Pathologist",
            "Dietitian",
            "Occupational Therapist",
            "School Psychologist",
        ],
    ),
    (
        "SA",
        &[
            "Special Education Teacher",
            "Dance Therapist",
            "Music Therapist",
            "Speech Pathologist",
            "Art Therapist",
        ],
    ),
    (
        "SE",
        &[
            "Healthcare Administrator",
            "School Principal",
            "Social Service Manager",
            "Training Manager",
            "Public Health Educator",
        ],
    ),
    (
        "SC",
        &[
            "School Administrator",
            "Medical Records Technician",
            "Dental Assistant",
            "Library Technician",
            "Insurance Claims Clerk",
        ],
    ),
    (
        "ER",
        &[
            "Real Estate Agent",
            "Sports Agent",
            "Retail Store Manager",
            "Chef",
            "Flight Attendant",
        ],
    ),
    (
        "EI",
        &[
            "Corporate Lawyer",
            "Economist",
            "Management Consultant",
            "Market Research Analyst",
            "Political Scientist",
        ],
    ),
    (
        "EA",
        &[
            "Art Director",
            "Public Relations Manager",
            "Advertising Executive",
            "Entertainment Agent",
            "Marketing Manager",
        ],
    ),
    (
        "ES",
        &[
            "Sales Manager",
            "Hospital Administrator",
            "Hotel Manager",
            "Retail Manager",
            "Restaurant Manager",
        ],
    ),
    (
        "EC",
        &[
            "Executive Administrative Assistant",
            "Office Manager",
            "Project Manager",
            "Property Manager",
            "Retail Buyer",
        ],
    ),
    (
        "CR",
        &[
            "Building Inspector",
            "Air Traffic Controller",
            "Dental Assistant",
            "Electrical Engineering Technician",
            "Food Service Manager",
        ],
    ),
    (
        "CI",
        &[
            "Accountant",
            "Budget Analyst",
            "Actuary",
            "Financial Analyst",
            "Auditor",
        ],
    ),
    (
        "CA",
        &[
            "Technical Writer",
            "Web Developer",
            "Desktop Publisher",
            "Legal Secretary",
            "Medical Transcriptionist",
        ],
    ),
    (
        "CS",
        &[
            "Medical Records Technician",
            "Bookkeeper",
            "Library Assistant",
            "Paralegal",
            "Receptionist",
        ],
    ),
    (
        "CE",
        &[
            "Office Manager",
            "Project Manager",
            "Court Reporter",
            "Administrative Services Manager",
            "Compensation Manager",
        ],
    ),
];

const SINGLE_CODE_CAREERS: &[(&str, &[&str])] = &[
    (
        "R",
        &[
            "Engineer",
            "Carpenter",
            "Mechanic",
            "Electrician",
            "Construction Worker",
        ],
    ),
    (
        "I",
        &[
            "Scientist",
            "Researcher",
            "Doctor",
            "Systems Analyst",
            "Professor",
        ],
    ),
    ("A", &["Artist", "Designer", "Writer", "Musician", "Actor"]),
    (
        "S",
        &[
            "Teacher",
            "Counselor",
            "Nurse",
            "Social Worker",
            "Therapist",
        ],
    ),
    (
        "E",
        &[
            "Manager",
            "Salesperson",
            "Entrepreneur",
            "Lawyer",
            "Real Estate Agent",
        ],
    ),
    (
        "C",
        &[
            "Accountant",
            "Administrative Assistant",
            "Banker",
            "Data Entry Specialist",
            "Bookkeeper",
        ],
    ),
];

const GENERIC_CAREERS: &[&str] = &[
    "Analyst",
    "Specialist",
    "Technician",
    "Associate",
    "Coordinator",
];

/// Careers for a Holland code.
///
/// Looks up the full two-letter combination first, then the dominant letter
/// alone, then a generic list.
pub fn careers_for_code(code: &str) -> &'static [&'static str] {
    if let Some((_, careers)) = COMBINATION_CAREERS
        .iter()
        .find(|(combination, _)| *combination == code)
    {
        return careers;
    }

    let dominant = code.get(..1).unwrap_or_default();
    SINGLE_CODE_CAREERS
        .iter()
        .find(|(letter, _)| *letter == dominant)
        .map(|(_, careers)| *careers)
        .unwrap_or(GENERIC_CAREERS)
}

/// Scores the interest section. Ties rank in declaration order R, I, A, S, E, C.
pub fn calculate_riasec_type(answers: &AnswerSet) -> RiasecResult {
    let scores: AxisTally<RiasecCode> = tally_pairs(RIASEC_QUESTIONS, answers);

    let ranked = scores.top(2);
    let dominant = ranked.first().copied().unwrap_or(RiasecCode::R);
    let secondary = ranked.get(1).copied().unwrap_or(RiasecCode::I);

    let code = format!("{}{}", dominant.label(), secondary.label());
    debug!(%code, votes = scores.total(), "riasec code resolved");

    RiasecResult {
        dominant,
        secondary,
        careers: careers_for_code(&code)
            .iter()
            .map(|career| career.to_string())
            .collect(),
        scores,
    }
}
