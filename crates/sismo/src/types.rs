use std::fmt::Display;

use serde::Serialize;

/// One row of the felt-earthquakes table. Values are kept exactly as the
/// page renders them (trimmed), no unit or calendar parsing is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeismicRecord {
    pub date: String,
    pub time: String,
    pub magnitude: String,
}

impl Display for SeismicRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} magnitude {}", self.date, self.time, self.magnitude)
    }
}

/// Where the data rows live on the page: the first `<header_tag class="header">`
/// element anchors the table and the next `rows` elements of the same tag are
/// read as records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub header_tag: String,
    pub rows: usize,
}

impl TableLayout {
    pub fn new(header_tag: impl Into<String>, rows: usize) -> Self {
        Self {
            header_tag: header_tag.into(),
            rows,
        }
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::new("tr", 1)
    }
}
