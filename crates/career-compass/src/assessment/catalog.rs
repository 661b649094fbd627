use super::domain::{OptionKey, QuestionId, Section};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single labeled choice within a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: OptionKey,
    pub label: &'static str,
}

/// Immutable questionnaire entry.
///
/// `category` names the axis the question scores: a `First/Second` pair for the
/// two-option sections (option A votes for the first trait, option B for the
/// second) or `Workplace` for the five-option scenario questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub section: Section,
    pub text: &'static str,
    pub category: &'static str,
    #[serde(serialize_with = "serialize_options")]
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn offers(&self, key: OptionKey) -> bool {
        self.options.iter().any(|option| option.key == key)
    }

    pub fn option_label(&self, key: OptionKey) -> Option<&'static str> {
        self.options
            .iter()
            .find(|option| option.key == key)
            .map(|option| option.label)
    }

    /// Splits a `First/Second` category into its two trait labels.
    pub fn category_pair(&self) -> Option<(&'static str, &'static str)> {
        self.category.split_once('/')
    }
}

fn serialize_options<S>(options: &&'static [AnswerOption], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(options.len()))?;
    for option in options.iter() {
        map.serialize_entry(&option.key, option.label)?;
    }
    map.end()
}

const fn two(a: &'static str, b: &'static str) -> [AnswerOption; 2] {
    [
        AnswerOption {
            key: OptionKey::A,
            label: a,
        },
        AnswerOption {
            key: OptionKey::B,
            label: b,
        },
    ]
}

const fn five(
    a: &'static str,
    b: &'static str,
    c: &'static str,
    d: &'static str,
    e: &'static str,
) -> [AnswerOption; 5] {
    [
        AnswerOption {
            key: OptionKey::A,
            label: a,
        },
        AnswerOption {
            key: OptionKey::B,
            label: b,
        },
        AnswerOption {
            key: OptionKey::C,
            label: c,
        },
        AnswerOption {
            key: OptionKey::D,
            label: d,
        },
        AnswerOption {
            key: OptionKey::E,
            label: e,
        },
    ]
}

pub const MBTI_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        section: Section::Mbti,
        text: "Do you prefer working:",
        category: "I/E",
        options: &two(
            "Alone (I prefer having my own space and time)",
            "In a group (I enjoy collaborating with others)",
        ),
    },
    Question {
        id: 2,
        section: Section::Mbti,
        text: "When solving a problem, do you focus on:",
        category: "S/N",
        options: &two(
            "Details and facts (I pay attention to specifics)",
            "Concepts and possibilities (I look at the big picture)",
        ),
    },
    Question {
        id: 3,
        section: Section::Mbti,
        text: "Do you make decisions based on:",
        category: "T/F",
        options: &two(
            "Logic and analysis (I prioritize objective reasoning)",
            "Feelings and empathy (I consider how decisions affect people)",
        ),
    },
    Question {
        id: 4,
        section: Section::Mbti,
        text: "Are you more comfortable with:",
        category: "J/P",
        options: &two(
            "A structured plan (I like order and organization)",
            "Flexible spontaneity (I prefer to adapt as I go)",
        ),
    },
    Question {
        id: 5,
        section: Section::Mbti,
        text: "After a social event, do you feel:",
        category: "I/E",
        options: &two(
            "Drained and need alone time (I need to recharge)",
            "Energized and refreshed (I gain energy from socializing)",
        ),
    },
    Question {
        id: 6,
        section: Section::Mbti,
        text: "Do you rely on:",
        category: "S/N",
        options: &two(
            "Past experiences (I trust what has worked before)",
            "Future possibilities (I'm drawn to new options)",
        ),
    },
    Question {
        id: 7,
        section: Section::Mbti,
        text: "Do you prioritize:",
        category: "T/F",
        options: &two(
            "Fairness and consistency (I value objective standards)",
            "Compassion and harmony (I value understanding individual needs)",
        ),
    },
    Question {
        id: 8,
        section: Section::Mbti,
        text: "Do you prefer to:",
        category: "J/P",
        options: &two(
            "Plan and organize (I like knowing what comes next)",
            "Improvise and go with the flow (I enjoy spontaneity)",
        ),
    },
];

pub const RIASEC_QUESTIONS: &[Question] = &[
    Question {
        id: 9,
        section: Section::Riasec,
        text: "Do you enjoy:",
        category: "R/I",
        options: &two(
            "Building and fixing things (hands-on activities)",
            "Analyzing data and solving problems (analytical thinking)",
        ),
    },
    Question {
        id: 10,
        section: Section::Riasec,
        text: "Are you more interested in:",
        category: "A/S",
        options: &two(
            "Creative writing and arts (expressing yourself)",
            "Helping people and teaching (supporting others)",
        ),
    },
    Question {
        id: 11,
        section: Section::Riasec,
        text: "Do you prefer:",
        category: "E/C",
        options: &two(
            "Leading and persuading others (taking charge)",
            "Working with structured data and organizing (creating order)",
        ),
    },
    Question {
        id: 12,
        section: Section::Riasec,
        text: "Would you rather spend your day:",
        category: "R/I",
        options: &two(
            "Working with machinery or physical tools",
            "Conducting research or investigating complex issues",
        ),
    },
    Question {
        id: 13,
        section: Section::Riasec,
        text: "Do you prefer:",
        category: "A/S",
        options: &two(
            "Expressing yourself through art",
            "Caring for others' well-being",
        ),
    },
    Question {
        id: 14,
        section: Section::Riasec,
        text: "Are you drawn to:",
        category: "E/C",
        options: &two(
            "Entrepreneurship and business ventures",
            "Routine office tasks and record-keeping",
        ),
    },
    Question {
        id: 15,
        section: Section::Riasec,
        text: "Do you enjoy:",
        category: "R/I",
        options: &two(
            "Outdoor physical activities",
            "Complex problem-solving challenges",
        ),
    },
    Question {
        id: 16,
        section: Section::Riasec,
        text: "Would you rather work in:",
        category: "A/S",
        options: &two("The creative industry", "Community service or healthcare"),
    },
];

pub const STRENGTHS_QUESTIONS: &[Question] = &[
    Question {
        id: 17,
        section: Section::Strengths,
        text: "When facing challenges, do you tend to:",
        category: "Resilience/Creativity",
        options: &two(
            "Keep pushing forward (Resilience)",
            "Seek creative alternatives (Creativity)",
        ),
    },
    Question {
        id: 18,
        section: Section::Strengths,
        text: "Do you prefer:",
        category: "Organization/Creativity",
        options: &two(
            "Sticking to a detailed plan (Organization)",
            "Thinking outside the box (Creativity)",
        ),
    },
    Question {
        id: 19,
        section: Section::Strengths,
        text: "When working in a team, are you more likely to:",
        category: "Leadership/Organization",
        options: &two(
            "Step up and take charge (Leadership)",
            "Ensure everything is on track (Organization)",
        ),
    },
    Question {
        id: 20,
        section: Section::Strengths,
        text: "In stressful situations, do you:",
        category: "Resilience/Creativity",
        options: &two(
            "Remain calm and composed (Resilience)",
            "Rely on creative solutions (Creativity)",
        ),
    },
    Question {
        id: 21,
        section: Section::Strengths,
        text: "Are you better at:",
        category: "Organization/Resilience",
        options: &two(
            "Meticulous planning and execution (Organization)",
            "Adapting quickly to changes (Resilience)",
        ),
    },
    Question {
        id: 22,
        section: Section::Strengths,
        text: "When making decisions, do you prioritize:",
        category: "Leadership/Organization",
        options: &two(
            "Strategic vision and influence (Leadership)",
            "Practical and detailed execution (Organization)",
        ),
    },
    Question {
        id: 23,
        section: Section::Strengths,
        text: "Do you thrive in:",
        category: "Leadership/Creativity",
        options: &two(
            "Leading and motivating others (Leadership)",
            "Coming up with innovative ideas (Creativity)",
        ),
    },
];

pub const SCENARIO_QUESTIONS: &[Question] = &[
    Question {
        id: 24,
        section: Section::Scenario,
        text: "You are assigned a group project. Do you:",
        category: "Workplace",
        options: &five(
            "Take charge and lead the team (Leadership)",
            "Support and collaborate with team members (Empathy)",
            "Organize the workflow efficiently (Organization)",
            "Suggest creative solutions (Creativity)",
            "Focus on practical, goal-oriented tasks (Realism)",
        ),
    },
    Question {
        id: 25,
        section: Section::Scenario,
        text: "In a high-pressure situation, you are most likely to:",
        category: "Workplace",
        options: &five(
            "Calmly manage the situation (Resilience)",
            "Motivate and support your team (Empathy)",
            "Come up with creative solutions (Creativity)",
            "Stick to a structured plan (Organization)",
            "Focus on realistic and logical steps (Realism)",
        ),
    },
    Question {
        id: 26,
        section: Section::Scenario,
        text: "Your manager gives you a new project with no guidelines. You:",
        category: "Workplace",
        options: &five(
            "Quickly take initiative and organize tasks (Leadership)",
            "Ask questions and collaborate with peers (Empathy)",
            "Think outside the box for creative solutions (Creativity)",
            "Create a step-by-step plan (Organization)",
            "Analyze the project goals pragmatically (Realism)",
        ),
    },
    Question {
        id: 27,
        section: Section::Scenario,
        text: "When working on a team project, you prioritize:",
        category: "Workplace",
        options: &five(
            "Leading and guiding the team (Leadership)",
            "Supporting and collaborating with peers (Empathy)",
            "Bringing in innovative solutions (Creativity)",
            "Ensuring structure and order (Organization)",
            "Sticking to practical and achievable goals (Realism)",
        ),
    },
    Question {
        id: 28,
        section: Section::Scenario,
        text: "During a conflict, you are more likely to:",
        category: "Workplace",
        options: &five(
            "Take charge and resolve it diplomatically (Leadership)",
            "Empathize and understand all perspectives (Empathy)",
            "Suggest creative compromises (Creativity)",
            "Rely on established processes (Organization)",
            "Focus on logical and practical solutions (Realism)",
        ),
    },
    Question {
        id: 29,
        section: Section::Scenario,
        text: "When given a complex task, you:",
        category: "Workplace",
        options: &five(
            "Lead the project with confidence (Leadership)",
            "Work collaboratively with teammates (Empathy)",
            "Use innovative techniques to solve it (Creativity)",
            "Break it into clear, organized steps (Organization)",
            "Stay practical and goal-oriented (Realism)",
        ),
    },
    Question {
        id: 30,
        section: Section::Scenario,
        text: "When presented with a new technology, you:",
        category: "Workplace",
        options: &five(
            "Experiment with creative uses (Creativity)",
            "Lead workshops or training (Leadership)",
            "Collaborate with others to learn (Empathy)",
            "Systematically organize the information (Organization)",
            "Test its practical applications (Realism)",
        ),
    },
];

/// Ordered view over every section of the questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct QuestionCatalog {
    sections: [(Section, &'static [Question]); 4],
}

impl QuestionCatalog {
    pub const fn standard() -> Self {
        Self {
            sections: [
                (Section::Mbti, MBTI_QUESTIONS),
                (Section::Riasec, RIASEC_QUESTIONS),
                (Section::Strengths, STRENGTHS_QUESTIONS),
                (Section::Scenario, SCENARIO_QUESTIONS),
            ],
        }
    }

    pub fn section(&self, section: Section) -> &'static [Question] {
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, questions)| *questions)
            .unwrap_or(&[])
    }

    pub fn questions(&self) -> impl Iterator<Item = &'static Question> + '_ {
        self.sections
            .iter()
            .flat_map(|&(_, questions)| questions.iter())
    }

    pub fn question(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections
            .iter()
            .map(|(_, questions)| questions.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
