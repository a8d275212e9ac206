use std::fmt;

/// Errors produced while normalizing one raw listing.
#[derive(Debug)]
pub enum NormalizeError {
    /// The listing carried an empty `job_highlights` list. The provider
    /// always ships at least one highlight group for a real listing, so an
    /// empty list means the record is malformed.
    EmptyHighlights(String),
    /// The `via` field was too short to carry the expected "via " prefix.
    ViaTooShort(String),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::EmptyHighlights(job_id) => {
                write!(f, "listing {}: job_highlights is empty", job_id)
            }
            NormalizeError::ViaTooShort(job_id) => {
                write!(f, "listing {}: via field shorter than its prefix", job_id)
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Errors from the page-fetcher boundary. The provider's in-band error
/// payload is NOT one of these: that is the normal terminal signal of a
/// paginated query and is surfaced as `PageOutcome::Exhausted`.
#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    /// The response body carried neither a results list nor an error payload.
    UnexpectedPayload(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "search request failed: {}", e),
            FetchError::UnexpectedPayload(msg) => write!(f, "unexpected search payload: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err)
    }
}
