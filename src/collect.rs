use chrono::NaiveDate;
use tracing::info;

use crate::entities::job_listing::Model;
use crate::normalize::normalize;
use crate::search::{PageFetcher, PageOutcome, PAGE_SIZE};

/// Collects every listing obtainable for one (search term, location) pair.
///
/// Pages are requested at increasing offsets until the provider's terminal
/// payload; there is no page-count bound beyond that. Records come back in
/// page order, normalized but not yet deduplicated.
pub async fn collect_term(
    fetcher: &dyn PageFetcher,
    term: &str,
    location: &str,
    scrape_date: NaiveDate,
) -> Result<Vec<Model>, Box<dyn std::error::Error + Send + Sync>> {
    let mut records = Vec::new();
    let mut offset = 0;

    loop {
        match fetcher.fetch_page(term, location, offset).await? {
            PageOutcome::Exhausted => break,
            PageOutcome::Listings(listings) => {
                info!(
                    "Fetched {} listings for '{}' in {} (offset {})",
                    listings.len(),
                    term,
                    location,
                    offset
                );
                for raw in listings {
                    records.push(normalize(raw, term, scrape_date)?);
                }
                offset += PAGE_SIZE;
            }
        }
    }

    Ok(records)
}

/// Runs `collect_term` for every search term against one location and
/// concatenates the results in term order. A listing matching several terms
/// appears once per term, each tagged with the term that found it; no
/// cross-term deduplication happens here.
pub async fn collect_location(
    fetcher: &dyn PageFetcher,
    terms: &[String],
    location: &str,
    scrape_date: NaiveDate,
) -> Result<Vec<Model>, Box<dyn std::error::Error + Send + Sync>> {
    let mut all = Vec::new();
    for term in terms {
        let mut records = collect_term(fetcher, term, location, scrape_date).await?;
        info!(
            "Collected {} records for '{}' in {}",
            records.len(),
            term,
            location
        );
        all.append(&mut records);
    }
    Ok(all)
}
