use std::env;

// Lists are semicolon-separated because location strings carry commas
// ("Denver, Colorado").
const DEFAULT_SEARCH_TERMS: &str = "data analyst;data scientist;data engineer";
const DEFAULT_LOCATIONS: &str = "Denver, Colorado";

/// Static configuration for the pipeline, read once from the environment
/// (after `.env` loading) at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub serpapi_key: String,
    pub database_url: String,
    pub search_terms: Vec<String>,
    pub locations: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let serpapi_key =
            env::var("SERPAPI_KEY").map_err(|_| "SERPAPI_KEY must be set in .env or environment")?;
        if serpapi_key.is_empty() {
            return Err("SERPAPI_KEY cannot be empty".into());
        }

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env or environment")?;

        let search_terms = parse_list(
            &env::var("SEARCH_TERMS").unwrap_or_else(|_| DEFAULT_SEARCH_TERMS.to_string()),
        );
        if search_terms.is_empty() {
            return Err("SEARCH_TERMS cannot be empty".into());
        }

        let locations = parse_list(
            &env::var("SEARCH_LOCATIONS").unwrap_or_else(|_| DEFAULT_LOCATIONS.to_string()),
        );
        if locations.is_empty() {
            return Err("SEARCH_LOCATIONS cannot be empty".into());
        }

        Ok(Self {
            serpapi_key,
            database_url,
            search_terms,
            locations,
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
