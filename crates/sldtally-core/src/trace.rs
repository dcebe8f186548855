use crate::rules::CountPolicy;
use serde::Serialize;

/// How one distinct rating token became a number of breaker instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingTrace {
    pub rating: String,
    /// Occurrences of the literal token anywhere in the normalized text.
    pub raw_occurrences: usize,
    pub breaker_type: String,
    pub poles: String,
    pub policy: CountPolicy,
    pub emitted: usize,
}

impl RatingTrace {
    /// Whether a rating-keyed override changed the raw count.
    pub fn is_adjusted(&self) -> bool {
        self.emitted != self.raw_occurrences
    }

    pub fn message(&self) -> String {
        if self.is_adjusted() {
            format!(
                "{}: {} occurrence(s), {} -> {} {} {}",
                self.rating,
                self.raw_occurrences,
                self.policy,
                self.emitted,
                self.breaker_type,
                self.poles
            )
        } else {
            format!(
                "{}: {} occurrence(s) -> {} {} {}",
                self.rating, self.raw_occurrences, self.emitted, self.breaker_type, self.poles
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(raw: usize, policy: CountPolicy, emitted: usize) -> RatingTrace {
        RatingTrace {
            rating: "1200A".into(),
            raw_occurrences: raw,
            breaker_type: "ACB".into(),
            poles: "3P".into(),
            policy,
            emitted,
        }
    }

    #[test]
    fn test_adjusted_message_names_policy() {
        let t = trace(9, CountPolicy::DivideBy(3), 3);
        assert!(t.is_adjusted());
        assert_eq!(t.message(), "1200A: 9 occurrence(s), divide_by(3) -> 3 ACB 3P");
    }

    #[test]
    fn test_unadjusted_message() {
        let t = trace(2, CountPolicy::Raw, 2);
        assert!(!t.is_adjusted());
        assert_eq!(t.message(), "1200A: 2 occurrence(s) -> 2 ACB 3P");
    }

    #[test]
    fn test_policy_serializes_tagged() {
        let json = serde_json::to_value(trace(9, CountPolicy::DivideBy(3), 3)).unwrap();
        assert_eq!(json["policy"]["kind"], "divide_by");
        assert_eq!(json["policy"]["value"], 3);
    }
}
