//! Correction tables tuned to one single-line diagram family.
//!
//! The override counts reflect how that drawing annotates breakers. They
//! are not derivable from the text and should be checked against new
//! drawings before being extended.

use crate::rules::{CountPolicy, RatingOverride, RatingPolicy, Substitution};

/// Misreadings of the "MCCB" label, applied in order.
///
/// Order matters: "HC" runs before "HCCB", so the latter only fires on text
/// the earlier rules leave behind.
pub const SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        from: "HCCS",
        to: "MCCB",
    },
    Substitution {
        from: "HC",
        to: "MCCB",
    },
    Substitution {
        from: "HCCB",
        to: "MCCB",
    },
    Substitution {
        from: "A/5 A",
        to: "A",
    },
    Substitution {
        from: "MOL",
        to: "MCCB",
    },
];

/// Units whose numeric prefix is a power or voltage, never a current rating.
///
/// Alternation order is preserved in the regex, so "V" wins over "VOLT".
pub const AUXILIARY_UNITS: &[&str] = &["KW", "W", "V", "VOLT"];

/// Relay and terminal codes that would otherwise look like ratings.
pub const NOISE_FRAGMENTS: &[&str] = &["50,50,51,", "C100, 8-10"];

pub const DEFAULT_POLICY: RatingPolicy = RatingPolicy {
    breaker_type: "MCCB",
    poles: "3P",
    count: CountPolicy::Raw,
};

pub const RATING_OVERRIDES: &[RatingOverride] = &[
    // Incomer: the rating is printed once per phase.
    RatingOverride {
        rating: "1200A",
        policy: RatingPolicy {
            breaker_type: "ACB",
            poles: "3P",
            count: CountPolicy::DivideBy(3),
        },
    },
    RatingOverride {
        rating: "200A",
        policy: RatingPolicy {
            breaker_type: "MCCB",
            poles: "3P",
            count: CountPolicy::Fixed(1),
        },
    },
];
