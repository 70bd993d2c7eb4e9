use crate::types::{SeismicRecord, TableLayout};

use scraper::{ElementRef, Html, Selector};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid row tag '{0}'")]
    InvalidSelector(String),
    #[error("Header row not found: no element matches '{0}'")]
    MissingHeader(String),
    #[error("Expected {expected} data row(s) after the header, found {found}")]
    MissingRows { expected: usize, found: usize },
    #[error("Row {row} has {found} cell(s), expected at least 3")]
    MissingCells { row: usize, found: usize },
    #[error("Row {row} has an empty '{field}' cell")]
    EmptyCell { row: usize, field: &'static str },
}

const FIELDS: [&str; 3] = ["date", "time", "magnitude"];

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Nearest enclosing `<table>`, used to keep data rows inside the header's table.
fn enclosing_table(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "table")
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::InvalidSelector(css.to_string()))
}

/// Extracts `layout.rows` records from the felt-earthquakes table.
///
/// The page contract is: the first `<{header_tag} class="header">` element
/// marks the column titles and the data rows are the `{header_tag}` elements
/// that follow it in document order within the same `<table>`. Each data row
/// carries at least three `td` cells holding date, time and magnitude. Any
/// deviation is an error; partial results are never returned.
pub fn parse_seismic_table(
    html: &str,
    layout: &TableLayout,
) -> Result<Vec<SeismicRecord>, ParseError> {
    let document = Html::parse_document(html);

    let header_css = format!("{}.header", layout.header_tag);
    let header_selector = selector(&header_css)?;
    let row_selector = selector(&layout.header_tag)?;
    let cell_selector = Selector::parse("td").unwrap();

    let header = document
        .select(&header_selector)
        .next()
        .ok_or_else(|| ParseError::MissingHeader(header_css.clone()))?;
    let header_table = enclosing_table(header).map(|table| table.id());

    let rows: Vec<ElementRef> = document
        .select(&row_selector)
        .skip_while(|row| row.id() != header.id())
        .skip(1)
        .filter(|row| !row.ancestors().any(|node| node.id() == header.id()))
        .filter(|row| enclosing_table(*row).map(|table| table.id()) == header_table)
        .take(layout.rows)
        .collect();

    if rows.len() < layout.rows {
        return Err(ParseError::MissingRows {
            expected: layout.rows,
            found: rows.len(),
        });
    }

    let mut records = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.into_iter().enumerate() {
        let cells: Vec<String> = row.select(&cell_selector).map(elem_text).collect();
        if cells.len() < FIELDS.len() {
            return Err(ParseError::MissingCells {
                row: row_index,
                found: cells.len(),
            });
        }

        if let Some(field) = FIELDS
            .iter()
            .zip(&cells)
            .find_map(|(field, value)| value.is_empty().then_some(*field))
        {
            return Err(ParseError::EmptyCell {
                row: row_index,
                field,
            });
        }

        let mut cells = cells.into_iter();
        records.push(SeismicRecord {
            date: cells.next().unwrap_or_default(),
            time: cells.next().unwrap_or_default(),
            magnitude: cells.next().unwrap_or_default(),
        });
    }

    log::debug!("Parsed {} seismic record(s)", records.len());
    Ok(records)
}
