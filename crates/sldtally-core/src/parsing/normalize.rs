use crate::rules::builtin::{AUXILIARY_UNITS, NOISE_FRAGMENTS, SUBSTITUTIONS};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static SPACE_BEFORE_AMPS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*A\b").unwrap());

static AUXILIARY_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\d{{1,5}}\s*({})", AUXILIARY_UNITS.join("|"))).unwrap()
});

/// Upper bound on rewrite passes; drawing text settles in one or two.
const MAX_REWRITE_PASSES: usize = 8;

/// Rewrite raw single-line diagram text into the canonical form the
/// rating extractor expects.
///
/// Steps:
/// 1. Upper-case
/// 2. Turn every CR and LF into a space
/// 3. Collapse whitespace runs
/// 4. Apply the ordered literal substitutions
/// 5. Glue "A" unit markers onto the preceding number ("200 A" -> "200A")
/// 6. Drop power and voltage quantities ("480V", "15 KW")
/// 7. Drop known relay/terminal noise fragments
/// 8. Trim and collapse the gaps left by steps 6 and 7
///
/// Removing a quantity or fragment can expose new matches for earlier
/// steps ("100 480V A" becomes "100 A"), so steps 4 to 8 repeat until a
/// pass changes nothing. The result is a fixed point of this function.
pub fn normalize_sld_text(raw: &str) -> String {
    let mut text = raw.to_uppercase();

    text = text.replace(['\r', '\n'], " ");
    text = WHITESPACE_RUN.replace_all(&text, " ").into_owned();

    for _ in 0..MAX_REWRITE_PASSES {
        let next = rewrite_pass(&text);
        if next == text {
            return text;
        }
        text = next;
    }

    tracing::warn!(passes = MAX_REWRITE_PASSES, "normalized text did not settle");
    text
}

/// Steps 4 to 8 over upper-cased, single-line text.
fn rewrite_pass(input: &str) -> String {
    let mut text = input.to_string();

    for sub in SUBSTITUTIONS {
        text = text.replace(sub.from, sub.to);
    }

    text = SPACE_BEFORE_AMPS.replace_all(&text, "A").into_owned();
    text = AUXILIARY_QUANTITY.replace_all(&text, " ").into_owned();

    for fragment in NOISE_FRAGMENTS {
        text = text.replace(fragment, " ");
    }

    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}
