use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::entities::job_listing::{Model, RawListing};
use crate::error::NormalizeError;

const VIA_PREFIX: &str = "via ";

const SECTION_QUALIFICATIONS: &str = "Qualifications";
const SECTION_RESPONSIBILITIES: &str = "Responsibilities";
const SECTION_BENEFITS: &str = "Benefits";

/// Maps one raw listing onto the flat `job_listings` schema.
///
/// `scrape_date` is the run's current date, fixed once per run so every
/// record of the same run carries the same `date_scraped` (and so derived
/// `date_posted` values are consistent across the run).
pub fn normalize(
    raw: RawListing,
    search_term: &str,
    scrape_date: NaiveDate,
) -> Result<Model, NormalizeError> {
    let (qualifications, responsibilities, benefits, items) = split_highlights(&raw)?;

    let via = strip_via(&raw.via, &raw.job_id)?;

    let ext = raw.detected_extensions;
    let date_posted = match ext.posted_at.as_deref() {
        Some(age) => match parse_age_days(age) {
            Some(days) => Some(scrape_date - Duration::days(days)),
            None => {
                debug!(
                    "listing {}: could not parse day count from posted_at '{}'",
                    raw.job_id, age
                );
                None
            }
        },
        None => None,
    };

    Ok(Model {
        job_id: raw.job_id,
        search_term: search_term.to_string(),
        title: raw.title,
        company_name: raw.company_name,
        location: raw.location,
        description: raw.description,
        qualifications,
        responsibilities,
        benefits,
        items,
        via,
        posted_at: ext.posted_at,
        schedule_type: ext.schedule_type,
        work_from_home: ext.work_from_home,
        salary: ext.salary,
        date_posted,
        date_scraped: scrape_date,
    })
}

type HighlightFields = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// Splits `job_highlights` into (qualifications, responsibilities, benefits,
/// items). The shape of the first element decides the branch: no `title` key
/// means the whole listing carries one untitled bullet group, which lands in
/// `items`; otherwise the titled sections are scanned and `items` stays unset.
fn split_highlights(raw: &RawListing) -> Result<HighlightFields, NormalizeError> {
    let first = match raw.job_highlights.first() {
        Some(first) => first,
        None => return Err(NormalizeError::EmptyHighlights(raw.job_id.clone())),
    };

    if first.title.is_none() {
        let items = first.items.as_deref().map(join_items);
        return Ok((None, None, None, items));
    }

    let mut qualifications = None;
    let mut responsibilities = None;
    let mut benefits = None;
    for highlight in &raw.job_highlights {
        if let (Some(title), Some(items)) = (&highlight.title, &highlight.items) {
            let joined = join_items(items);
            // A repeated section title overwrites: last occurrence wins.
            match title.as_str() {
                SECTION_QUALIFICATIONS => qualifications = Some(joined),
                SECTION_RESPONSIBILITIES => responsibilities = Some(joined),
                SECTION_BENEFITS => benefits = Some(joined),
                _ => {}
            }
        }
    }
    Ok((qualifications, responsibilities, benefits, None))
}

/// Concatenates bullet strings, each followed by a line break.
fn join_items(items: &[String]) -> String {
    let mut joined = String::new();
    for item in items {
        joined.push_str(item);
        joined.push('\n');
    }
    joined
}

/// Strips the provider's fixed "via " prefix by position.
fn strip_via(via: &str, job_id: &str) -> Result<String, NormalizeError> {
    match via.get(VIA_PREFIX.len()..) {
        Some(rest) => Ok(rest.to_string()),
        None => Err(NormalizeError::ViaTooShort(job_id.to_string())),
    }
}

/// Parses the leading integer token of an age string like "3 days ago".
fn parse_age_days(age: &str) -> Option<i64> {
    age.split_whitespace().next()?.parse().ok()
}
