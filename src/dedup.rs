use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QuerySelect};
use tracing::info;

use crate::entities::job_listing::{Column, Model};
use crate::entities::JobListing;

/// Reads the full set of stored primary keys in one column scan.
///
/// Fine at the volumes this pipeline sees (tens of records per location);
/// does not scale to large tables.
pub async fn existing_job_ids(db: &DatabaseConnection) -> Result<HashSet<String>, DbErr> {
    let ids: Vec<String> = JobListing::find()
        .select_only()
        .column(Column::JobId)
        .into_tuple()
        .all(db)
        .await?;

    Ok(ids.into_iter().collect())
}

/// Retains the records whose `job_id` is not yet stored.
///
/// Only filters against the store: duplicates *within* the batch survive.
/// The removed count is reported, not treated as an error.
pub fn filter_new(batch: Vec<Model>, existing: &HashSet<String>) -> Vec<Model> {
    let before = batch.len();
    let fresh: Vec<Model> = batch
        .into_iter()
        .filter(|record| !existing.contains(&record.job_id))
        .collect();

    info!(
        "Deduplication dropped {} of {} collected listings",
        before - fresh.len(),
        before
    );
    fresh
}
