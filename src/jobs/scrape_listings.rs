use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use tracing::info;

use crate::collect::collect_location;
use crate::config::Config;
use crate::dedup::{existing_job_ids, filter_new};
use crate::entities::JobListing;
use crate::search::PageFetcher;

/// Runs the full scrape: every configured search term for every configured
/// location, deduplicated against the store and appended to it.
///
/// Locations are processed strictly in order. The first error propagates
/// and halts the remaining locations; there is no rollback and no retry.
pub async fn run_scrape_listings(
    db: &DatabaseConnection,
    fetcher: &dyn PageFetcher,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Fixed once here so every record of this run shares the same date.
    let scrape_date = Utc::now().date_naive();

    for location in &config.locations {
        info!("Collecting listings for {}", location);

        let batch = collect_location(fetcher, &config.search_terms, location, scrape_date).await?;
        let collected = batch.len();

        let existing = existing_job_ids(db).await?;
        let fresh = filter_new(batch, &existing);
        let inserted = fresh.len();

        if fresh.is_empty() {
            info!("{}: collected {}, nothing new to insert", location, collected);
            continue;
        }

        // Append-only load. The table's primary key on job_id backstops the
        // read-then-insert window against any concurrent writer.
        let models = fresh.into_iter().map(|model| model.into_active_model());
        JobListing::insert_many(models).exec(db).await?;

        info!(
            "{}: collected {}, dropped {} duplicates, inserted {}",
            location,
            collected,
            collected - inserted,
            inserted
        );
    }

    Ok(())
}
