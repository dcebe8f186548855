pub mod builtin;

use serde::Serialize;
use std::fmt;

/// A literal rewrite applied to the whole normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub from: &'static str,
    pub to: &'static str,
}

/// How the raw occurrence count of a rating token becomes an instance count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum CountPolicy {
    /// Every occurrence is one breaker.
    Raw,
    /// The drawing repeats the token `n` times per breaker.
    DivideBy(usize),
    /// The drawing holds exactly `n` breakers of this rating.
    Fixed(usize),
}

impl CountPolicy {
    pub fn apply(&self, raw_occurrences: usize) -> usize {
        match self {
            CountPolicy::Raw => raw_occurrences,
            CountPolicy::DivideBy(n) => raw_occurrences / n,
            CountPolicy::Fixed(n) => *n,
        }
    }
}

impl fmt::Display for CountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountPolicy::Raw => write!(f, "raw"),
            CountPolicy::DivideBy(n) => write!(f, "divide_by({n})"),
            CountPolicy::Fixed(n) => write!(f, "fixed({n})"),
        }
    }
}

/// Classification applied to every breaker of one rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingPolicy {
    pub breaker_type: &'static str,
    pub poles: &'static str,
    pub count: CountPolicy,
}

/// A rating-keyed exception to `builtin::DEFAULT_POLICY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOverride {
    pub rating: &'static str,
    pub policy: RatingPolicy,
}

/// Policy for `rating`: the first exact match in the override table, else the default.
pub fn policy_for(rating: &str) -> &'static RatingPolicy {
    builtin::RATING_OVERRIDES
        .iter()
        .find(|o| o.rating == rating)
        .map(|o| &o.policy)
        .unwrap_or(&builtin::DEFAULT_POLICY)
}
