use crate::error::TableError;
use crate::parse::stripped_text;
use indexmap::IndexMap;
use scraper::Html;

/// One data row keyed by column header, in column order
pub type TableRow = IndexMap<String, String>;

/// A results table with every row aligned to the column list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedTable {
    /// Column headers, sized to the first data row
    pub columns: Vec<String>,

    /// Cell texts; each row has exactly `columns.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl ScrapedTable {
    /// Build a table whose width is the first row's cell count.
    ///
    /// Headers beyond that width are dropped and missing ones become `Column N`.
    /// Later rows are padded with empty cells or cut to the same width.
    pub fn aligned(mut headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        if headers.is_empty() {
            return Err(TableError::NoHeaders);
        }
        let width = rows.first().ok_or(TableError::NoRows)?.len();

        if headers.len() > width {
            headers.truncate(width);
        }
        while headers.len() < width {
            headers.push(format!("Column {}", headers.len() + 1));
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Ok(Self { columns: headers, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as header -> cell mappings. A repeated header keeps its last cell.
    pub fn records(&self) -> impl Iterator<Item = TableRow> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect()
        })
    }
}

/// Parse the outer HTML of a results table.
///
/// Headers are the `th` cells under `thead`. Data rows are every `tr` after the first
/// one, each made of its descendant `td`/`th` cells; rows without cells are skipped.
pub fn parse_table(table_html: &str) -> Result<ScrapedTable, TableError> {
    let fragment = Html::parse_fragment(table_html);

    let headers: Vec<String> = fragment
        .select(crate::selector!("thead"))
        .next()
        .map(|thead| thead.select(crate::selector!("th")).map(stripped_text).collect())
        .unwrap_or_default();

    let rows: Vec<Vec<String>> = fragment
        .select(crate::selector!("tr"))
        .skip(1)
        .map(|tr| {
            tr.select(crate::selector!("td, th"))
                .map(stripped_text)
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect();

    ScrapedTable::aligned(headers, rows)
}
