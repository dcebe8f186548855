use std::path::PathBuf;

use sldtally_core::error::SldError;
use sldtally_core::export;

use crate::commands::load_document;
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    xlsx_file: Option<PathBuf>,
    sheet_name: &str,
    layout: bool,
    verbose: bool,
) -> Result<(), SldError> {
    let document = load_document(&input_file, layout)?;
    let result = sldtally_core::summarize_document(&document)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => output::table::print_summary(&result, verbose),
    }

    if let Some(path) = xlsx_file {
        export::write_xlsx(&result.summary, &path, sheet_name)?;
        eprintln!(
            "Wrote {} row(s) to sheet '{}' in {}",
            result.summary.records.len(),
            sheet_name,
            path.display()
        );
    }

    Ok(())
}
