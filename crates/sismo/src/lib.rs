mod parser;
pub mod scraper;
pub mod storage;
pub mod sync;
pub mod types;

#[cfg(test)]
mod test_support;

pub use parser::{ParseError, parse_seismic_table};
pub use scraper::{ScraperError, SeismicScraper};
pub use storage::{S3Settings, S3Store, SnapshotStore, StoreError};
pub use sync::{SyncError, SyncOutcome, read_snapshot, synchronize};
pub use types::{SeismicRecord, TableLayout};
