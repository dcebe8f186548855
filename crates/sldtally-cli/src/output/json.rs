use serde::Serialize;
use sldtally_core::error::SldError;

pub fn print<T: Serialize>(value: &T) -> Result<(), SldError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
