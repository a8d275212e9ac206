pub mod scrape_listings;

pub use scrape_listings::run_scrape_listings;
