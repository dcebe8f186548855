use sldtally_core::error::SldError;
use sldtally_core::rules::builtin;

pub fn list() -> Result<(), SldError> {
    println!("Text corrections (applied in order after upper-casing):\n");
    for (i, sub) in builtin::SUBSTITUTIONS.iter().enumerate() {
        println!("  {}. {:<8} -> {}", i + 1, format!("\"{}\"", sub.from), sub.to);
    }
    println!();

    println!(
        "Auxiliary quantities removed: <1-5 digits> followed by {}",
        builtin::AUXILIARY_UNITS.join(", ")
    );
    println!(
        "Noise fragments removed: {}",
        builtin::NOISE_FRAGMENTS
            .iter()
            .map(|f| format!("\"{f}\""))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();

    println!("Rating overrides:\n");
    println!("  {:<8}  {:<6}  {:<6}  Count", "Rating", "Type", "Poles");
    println!("  {}", "-".repeat(40));
    for o in builtin::RATING_OVERRIDES {
        println!(
            "  {:<8}  {:<6}  {:<6}  {}",
            o.rating, o.policy.breaker_type, o.policy.poles, o.policy.count
        );
    }
    let default = &builtin::DEFAULT_POLICY;
    println!(
        "  {:<8}  {:<6}  {:<6}  {}",
        "(other)", default.breaker_type, default.poles, default.count
    );
    println!();
    println!("Overrides reflect how one drawing family repeats rating labels.");
    println!("Check them against new drawings before relying on the counts.");

    Ok(())
}
