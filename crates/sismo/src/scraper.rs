use crate::parser::{ParseError, parse_seismic_table};
use crate::types::{SeismicRecord, TableLayout};

use reqwest::{Client, StatusCode};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Request to {url} failed with status code: {status}")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

impl ScraperError {
    /// Network and HTTP status failures, as opposed to a page whose markup no
    /// longer matches the expected table.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ScraperError::RequestError(_) | ScraperError::UnexpectedStatus { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct SeismicScraper {
    client: Client,
}

impl SeismicScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client })
    }

    /// Single GET, no retries. Anything but `200 OK` is reported as
    /// [`ScraperError::UnexpectedStatus`].
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        log::info!("Fetching seismic table from {}...", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }

    pub async fn fetch_latest(
        &self,
        url: &str,
        layout: &TableLayout,
    ) -> Result<Vec<SeismicRecord>, ScraperError> {
        let html = self.fetch_page(url).await?;
        let records = parse_seismic_table(&html, layout)?;
        Ok(records)
    }
}
