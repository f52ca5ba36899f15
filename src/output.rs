//! Writing scraped results to disk and stdout

use crate::error::Result;
use crate::parse::{ProjectCard, ScrapedTable};
use std::io::Write;
use std::path::Path;

/// UTF-8 byte-order mark, so spreadsheet tools pick the right encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write a table as CSV with a leading byte-order mark and a header row
pub fn write_csv(table: &ScrapedTable, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv_to(table, file)?;
    log::debug!("Wrote {} rows to {}", table.len(), path.as_ref().display());
    Ok(())
}

/// Same as [`write_csv`] for any writer
pub fn write_csv_to<W: Write>(table: &ScrapedTable, mut writer: W) -> Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&table.columns)?;
    for row in &table.rows {
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Print cards as one JSON object per line under a heading naming the source
pub fn print_cards<W: Write>(cards: &[ProjectCard], source: &str, limit: usize, mut out: W) -> Result<()> {
    writeln!(out, "First {} projects from {}:", limit, source)?;
    for card in cards {
        let line = serde_json::to_string(card).map_err(std::io::Error::other)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the first `n` rows of a table, one `header: value` list per row
pub fn print_preview<W: Write>(table: &ScrapedTable, n: usize, mut out: W) -> Result<()> {
    for record in table.records().take(n) {
        let line = record
            .iter()
            .map(|(header, value)| format!("{}: {}", header, value))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
