//! Ranking policies for the word index.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::index::WordIndex;
use crate::types::Word;

/// Which keys order the index. Every key sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortPolicy {
    /// Importance score, then occurrence count (`iaf`).
    #[serde(rename = "iaf")]
    ImportanceAndFrequency,
    /// Occurrence count, then importance score (`fai`).
    #[serde(rename = "fai")]
    FrequencyAndImportance,
    /// Occurrence count only (`f`).
    #[serde(rename = "f")]
    Frequency,
}

impl SortPolicy {
    /// Parse a policy from its short name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "iaf" => Some(Self::ImportanceAndFrequency),
            "fai" => Some(Self::FrequencyAndImportance),
            "f" => Some(Self::Frequency),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ImportanceAndFrequency => "iaf",
            Self::FrequencyAndImportance => "fai",
            Self::Frequency => "f",
        }
    }

    /// Ordering of two words under this policy, highest first.
    pub fn compare(&self, a: &Word, b: &Word) -> Ordering {
        match self {
            Self::ImportanceAndFrequency => {
                by_importance(b, a).then_with(|| b.count().cmp(&a.count()))
            }
            Self::FrequencyAndImportance => {
                b.count().cmp(&a.count()).then_with(|| by_importance(b, a))
            }
            Self::Frequency => b.count().cmp(&a.count()),
        }
    }
}

/// Unset scores rank below every assigned score.
fn by_importance(a: &Word, b: &Word) -> Ordering {
    a.importance_or_unset().total_cmp(&b.importance_or_unset())
}

/// Reorder the index in place. Each call recomputes the order from current
/// field values.
pub fn sort(index: &mut WordIndex, policy: SortPolicy) {
    index.reorder_by(|a, b| policy.compare(a, b));
}

/// Sort by a policy name. A missing or unrecognized name leaves the order
/// unchanged. Returns the policy applied, if any.
pub fn sort_by_name(index: &mut WordIndex, name: Option<&str>) -> Option<SortPolicy> {
    let name = name?;
    match SortPolicy::from_name(name) {
        Some(policy) => {
            sort(index, policy);
            Some(policy)
        }
        None => {
            log::warn!("Unknown sort order '{}', keeping insertion order", name);
            None
        }
    }
}
