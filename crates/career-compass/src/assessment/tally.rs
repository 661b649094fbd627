use super::answers::AnswerSet;
use super::catalog::Question;
use super::domain::{Axis, OptionKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::debug;

/// Resolution rule for a two-letter dichotomy whose counts are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The first-listed letter of the pair wins (`I` over `E`).
    FirstListed,
    /// The second-listed letter of the pair wins (`E` over `I`).
    SecondListed,
}

/// Default dichotomy policy: first-listed letter wins a tie, so an empty
/// answer set resolves to `ISTJ`.
pub const DICHOTOMY_TIE_BREAK: TieBreak = TieBreak::FirstListed;

impl TieBreak {
    pub fn resolve<T: Axis>(self, tally: &AxisTally<T>, first: T, second: T) -> T {
        let (first_count, second_count) = (tally.get(first), tally.get(second));
        if first_count > second_count {
            first
        } else if second_count > first_count {
            second
        } else {
            match self {
                Self::FirstListed => first,
                Self::SecondListed => second,
            }
        }
    }
}

/// Vote counts for every trait of one axis family.
///
/// Every declared trait is always present, so a serialized tally lists zero
/// counts explicitly and in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTally<T: Axis> {
    counts: BTreeMap<T, u32>,
}

impl<T: Axis> AxisTally<T> {
    pub fn new() -> Self {
        Self {
            counts: T::ORDERED.iter().map(|axis| (*axis, 0)).collect(),
        }
    }

    pub fn increment(&mut self, axis: T) {
        *self.counts.entry(axis).or_insert(0) += 1;
    }

    pub fn get(&self, axis: T) -> u32 {
        self.counts.get(&axis).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, u32)> + '_ {
        T::ORDERED.iter().map(|axis| (*axis, self.get(*axis)))
    }

    /// Traits sorted by descending count; equal counts keep declaration order.
    pub fn ranked(&self) -> Vec<(T, u32)> {
        let mut entries: Vec<(T, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The `n` highest-ranked traits, clamped to the size of the family.
    pub fn top(&self, n: usize) -> Vec<T> {
        self.ranked()
            .into_iter()
            .take(n.min(T::ORDERED.len()))
            .map(|(axis, _)| axis)
            .collect()
    }
}

impl<T: Axis> Default for AxisTally<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Axis> Serialize for AxisTally<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(axis, count)| (axis.label(), count)))
    }
}

impl<'de, T: Axis> Deserialize<'de> for AxisTally<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut tally = Self::new();
        for (label, count) in raw {
            let axis = T::from_label(&label).ok_or_else(|| {
                serde::de::Error::custom(format!("unknown trait label '{label}'"))
            })?;
            tally.counts.insert(axis, count);
        }
        Ok(tally)
    }
}

/// Tallies two-option questions whose category names a `First/Second` pair.
///
/// Option A votes for the first trait and option B for the second; questions
/// without an answer, or whose category does not name two known traits, add
/// nothing.
pub(crate) fn tally_pairs<T: Axis>(questions: &[Question], answers: &AnswerSet) -> AxisTally<T> {
    let mut tally = AxisTally::new();

    for question in questions {
        let Some(answer) = answers.get(question.id) else {
            continue;
        };

        let pair = question
            .category_pair()
            .and_then(|(first, second)| Some((T::from_label(first)?, T::from_label(second)?)));
        let Some((first, second)) = pair else {
            debug!(
                question_id = question.id,
                category = question.category,
                "category does not name a scored pair"
            );
            continue;
        };

        match answer {
            OptionKey::A => tally.increment(first),
            OptionKey::B => tally.increment(second),
            other => debug!(
                question_id = question.id,
                option = %other,
                "option outside the two-way choice ignored"
            ),
        }
    }

    tally
}
