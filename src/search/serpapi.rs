use std::time::Duration as StdDuration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{PageFetcher, PageOutcome};
use crate::entities::job_listing::RawListing;
use crate::error::FetchError;

const SEARCH_ENDPOINT: &str = "https://serpapi.com/search";
const RESULT_LANGUAGE: &str = "en";
const RESULT_COUNTRY: &str = "us";

/// Google Jobs page fetcher backed by SerpApi.
pub struct SerpApiFetcher {
    client: Client,
    api_key: String,
    endpoint: String,
}

// The provider's response is polymorphic over two outcomes, keyed by which
// field is present.
#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    jobs_results: Option<Vec<RawListing>>,
    #[serde(default)]
    error: Option<String>,
}

impl SerpApiFetcher {
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(StdDuration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Points the fetcher at a different endpoint. Used by tests.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }
}

#[async_trait]
impl PageFetcher for SerpApiFetcher {
    async fn fetch_page(
        &self,
        term: &str,
        location: &str,
        offset: u32,
    ) -> Result<PageOutcome, FetchError> {
        let offset = offset.to_string();
        let params = [
            ("engine", "google_jobs"),
            ("q", term),
            ("location", location),
            ("start", offset.as_str()),
            ("hl", RESULT_LANGUAGE),
            ("gl", RESULT_COUNTRY),
            ("api_key", self.api_key.as_str()),
        ];

        let response = self.client.get(&self.endpoint).query(&params).send().await?;

        // The error payload arrives with non-2xx statuses too, so decode the
        // body before judging the status line.
        let body: SearchResponse = response.json().await?;
        match (body.jobs_results, body.error) {
            (Some(listings), _) => Ok(PageOutcome::Listings(listings)),
            (None, Some(reason)) => {
                debug!("provider returned terminal payload: {}", reason);
                Ok(PageOutcome::Exhausted)
            }
            (None, None) => Err(FetchError::UnexpectedPayload(
                "response carried neither jobs_results nor error".to_string(),
            )),
        }
    }
}
