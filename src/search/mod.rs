pub mod serpapi;

pub use serpapi::SerpApiFetcher;

use async_trait::async_trait;

use crate::entities::job_listing::RawListing;
use crate::error::FetchError;

/// Listings per result page. Fixed by the search provider, not configurable.
pub const PAGE_SIZE: u32 = 10;

/// Outcome of one paginated search call. The provider answers with either a
/// page of listings or an in-band error payload; the latter is its terminal
/// signal (it does not distinguish genuine exhaustion from other upstream
/// failures, and neither do we).
#[derive(Debug)]
pub enum PageOutcome {
    Listings(Vec<RawListing>),
    Exhausted,
}

/// One paginated call against the job-search provider.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(
        &self,
        term: &str,
        location: &str,
        offset: u32,
    ) -> Result<PageOutcome, FetchError>;
}
