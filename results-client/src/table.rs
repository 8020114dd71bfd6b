//! Extraction of the results table from the HTML page.

use scraper::{ElementRef, Html, Selector};

use crate::fetch::EmptyReason;

/// One table row: cell texts in document order.
pub type ResultRow = Vec<String>;

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}

/// Cell text trimmed, with internal whitespace runs (including newlines) collapsed to one space,
/// so a cell can never break the tab/newline row format.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rows of the first `<table>` in `html`. Rows with no non-empty cell are dropped.
pub fn extract_first_table(html: &str) -> Result<Vec<ResultRow>, EmptyReason> {
    let document = Html::parse_document(html);
    let table = document
        .select(&selector("table"))
        .next()
        .ok_or(EmptyReason::NoTable)?;

    let cell_selector = selector("td, th");
    let rows: Vec<ResultRow> = table
        .select(&selector("tr"))
        .map(|row| row.select(&cell_selector).map(cell_text).collect::<ResultRow>())
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();

    if rows.is_empty() {
        return Err(EmptyReason::NoRows);
    }
    Ok(rows)
}

/// Tab-joined cells, newline-terminated rows.
pub fn format_rows(rows: &[ResultRow]) -> String {
    rows.iter().fold(String::new(), |mut out, row| {
        out.push_str(&row.join("\t"));
        out.push('\n');
        out
    })
}
