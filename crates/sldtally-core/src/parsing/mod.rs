pub mod normalize;
pub mod ratings;

pub use normalize::normalize_sld_text;
pub use ratings::{extract_breakers, extract_breakers_traced, Extraction};
