use std::path::PathBuf;

use sldtally_core::abbreviations::load_abbreviations;
use sldtally_core::error::SldError;

use crate::commands::load_document;
use crate::output;

pub fn run(input_file: PathBuf, output_format: &str, layout: bool) -> Result<(), SldError> {
    let document = load_document(&input_file, layout)?;
    let table = load_abbreviations(&document);

    match output_format {
        "json" => output::json::print(&table)?,
        _ => output::table::print_abbreviations(&table),
    }

    Ok(())
}
