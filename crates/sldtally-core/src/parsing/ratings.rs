use crate::model::BreakerInstance;
use crate::rules::policy_for;
use crate::trace::RatingTrace;
use regex::Regex;
use std::sync::LazyLock;

static RATING_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{1,5}A\b").unwrap());

/// Breaker instances inferred from normalized text, with per-rating reasoning.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub instances: Vec<BreakerInstance>,
    pub trace: Vec<RatingTrace>,
}

/// Distinct rating tokens in first-seen order.
pub fn distinct_ratings(text: &str) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for m in RATING_TOKEN.find_iter(text) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }
    seen
}

/// Infer one `BreakerInstance` per physical breaker in normalized SLD text.
pub fn extract_breakers(normalized: &str) -> Vec<BreakerInstance> {
    extract_breakers_traced(normalized).instances
}

/// Like `extract_breakers`, also reporting how each rating was counted.
///
/// The provisional count for a rating is the number of times its token
/// occurs as a plain substring, so "50A" is also counted inside "250A".
/// Rating-keyed overrides then adjust that count.
pub fn extract_breakers_traced(normalized: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for rating in distinct_ratings(normalized) {
        let raw_occurrences = normalized.matches(rating).count();
        let policy = policy_for(rating);
        let emitted = policy.count.apply(raw_occurrences);

        tracing::debug!(
            rating,
            raw_occurrences,
            policy = %policy.count,
            emitted,
            "counted rating"
        );

        extraction.instances.extend(
            std::iter::repeat_with(|| {
                BreakerInstance::new(policy.breaker_type, rating, policy.poles)
            })
            .take(emitted),
        );
        extraction.trace.push(RatingTrace {
            rating: rating.to_string(),
            raw_occurrences,
            breaker_type: policy.breaker_type.to_string(),
            poles: policy.poles.to_string(),
            policy: policy.count,
            emitted,
        });
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(token: &str, n: usize) -> String {
        vec![token; n].join(" ")
    }

    #[test]
    fn test_distinct_ratings_first_seen_order() {
        let ratings = distinct_ratings("100A 250A 100A 50A 250A");
        assert_eq!(ratings, vec!["100A", "250A", "50A"]);
    }

    #[test]
    fn test_rating_token_boundaries() {
        // Six digits is too long, and embedded tokens are not ratings.
        assert!(distinct_ratings("123456A").is_empty());
        assert!(distinct_ratings("X100A").is_empty());
        assert!(distinct_ratings("100AB").is_empty());
        assert_eq!(distinct_ratings("(63A)"), vec!["63A"]);
    }

    #[test]
    fn test_1200a_divided_by_three() {
        let instances = extract_breakers(&repeat("1200A", 9));
        assert_eq!(instances.len(), 3);
        for instance in &instances {
            assert_eq!(instance, &BreakerInstance::new("ACB", "1200A", "3P"));
        }
    }

    #[test]
    fn test_1200a_below_three_yields_none() {
        assert!(extract_breakers("1200A 1200A").is_empty());
    }

    #[test]
    fn test_200a_forced_to_one() {
        let instances = extract_breakers(&repeat("200A", 5));
        assert_eq!(instances, vec![BreakerInstance::new("MCCB", "200A", "3P")]);
    }

    #[test]
    fn test_default_rating_counts_occurrences() {
        let instances = extract_breakers("MCCB 100A MCCB 100A MCCB 100A");
        assert_eq!(instances.len(), 3);
        assert!(instances
            .iter()
            .all(|b| b.breaker_type == "MCCB" && b.rating == "100A" && b.poles == "3P"));
    }

    #[test]
    fn test_substring_occurrences_are_counted() {
        // "50A" occurs inside "250A" as well as on its own.
        let extraction = extract_breakers_traced("250A 50A");
        let fifty = extraction.trace.iter().find(|t| t.rating == "50A").unwrap();
        assert_eq!(fifty.raw_occurrences, 2);
        assert_eq!(fifty.emitted, 2);
    }

    #[test]
    fn test_instances_follow_discovery_order() {
        let instances = extract_breakers("250A 1200A 1200A 1200A 100A");
        let ratings: Vec<&str> = instances.iter().map(|b| b.rating.as_str()).collect();
        assert_eq!(ratings, vec!["250A", "1200A", "100A"]);
    }

    #[test]
    fn test_trace_matches_instances() {
        let extraction = extract_breakers_traced("1200A 1200A 1200A 200A 200A 63A");
        let emitted: usize = extraction.trace.iter().map(|t| t.emitted).sum();
        assert_eq!(emitted, extraction.instances.len());
        assert_eq!(extraction.trace[0].raw_occurrences, 3);
        // "200A" also occurs inside each "1200A".
        assert_eq!(extraction.trace[1].raw_occurrences, 5);
        assert_eq!(extraction.trace[1].emitted, 1);
    }

    #[test]
    fn test_no_ratings() {
        let extraction = extract_breakers_traced("MAIN SWITCHBOARD");
        assert!(extraction.instances.is_empty());
        assert!(extraction.trace.is_empty());
    }
}
