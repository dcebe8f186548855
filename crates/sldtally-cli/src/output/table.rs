use sldtally_core::model::{AbbreviationTable, SUMMARY_COLUMNS};
use sldtally_core::PipelineOutput;

pub fn print_summary(result: &PipelineOutput, verbose: bool) {
    let summary = &result.summary;

    if summary.is_empty() {
        println!("No breakers found on page {}.", sldtally_core::SLD_PAGE);
    } else {
        let rows: Vec<[String; 4]> = summary.records.iter().map(|r| r.cells()).collect();
        let widths = column_widths(&rows);

        print_row(&SUMMARY_COLUMNS.map(String::from), &widths);
        println!(
            "  {}",
            "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1))
        );
        for row in &rows {
            print_row(row, &widths);
        }
        println!();
        println!(
            "  Total: {} breaker(s) in {} group(s)",
            summary.total_count(),
            summary.records.len()
        );
    }

    if verbose {
        println!();
        println!("  Ratings found:");
        for t in &result.trace {
            let marker = if t.is_adjusted() { " *" } else { "" };
            println!("    {}{}", t.message(), marker);
        }
        if result.abbreviations.is_empty() {
            println!();
            println!("  No abbreviation legend found; types shown as raw codes.");
        }
    }
}

pub fn print_abbreviations(table: &AbbreviationTable) {
    if table.is_empty() {
        println!("No abbreviation legend found.");
        return;
    }

    let max_code = table
        .entries()
        .iter()
        .map(|e| e.code.chars().count())
        .max()
        .unwrap_or(4);

    for entry in table.entries() {
        println!("  {:<width$}  {}", entry.code, entry.description, width = max_code);
    }
}

/// Widest cell per column, header included. Count is right-aligned.
fn column_widths(rows: &[[String; 4]]) -> [usize; 4] {
    let mut widths = SUMMARY_COLUMNS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn print_row(row: &[String; 4], widths: &[usize; 4]) {
    println!(
        "  {:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}",
        row[0],
        row[1],
        row[2],
        row[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths_cover_header_and_cells() {
        let rows = vec![[
            "Molded Case Circuit Breaker".to_string(),
            "1200A".to_string(),
            "3P".to_string(),
            "12".to_string(),
        ]];
        let widths = column_widths(&rows);
        assert_eq!(widths, [27, 7, 5, 5]);
    }
}
