use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tokio::time::interval;
use tracing::{error, info};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use jobintel::config::Config;
use jobintel::jobs::run_scrape_listings;
use jobintel::search::SerpApiFetcher;

const SCRAPE_INTERVAL_SECS: u64 = 24 * 60 * 60;

#[tokio::main]
async fn main() {
    // Initialise tracing (INFO level)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load .env (if present) so SERPAPI_KEY / DATABASE_URL from file are visible
    let _ = dotenv();

    // Command-line flags
    let args: Vec<String> = env::args().collect();
    let run_once = args.iter().any(|a| a == "--once");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(?e, "invalid configuration");
            return;
        }
    };

    let db = match Database::connect(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(?e, "failed to connect to database");
            return;
        }
    };

    // Bring the schema up to date before the first run
    if let Err(e) = Migrator::up(&db, None).await {
        error!(?e, "failed to apply migrations");
        return;
    }

    let fetcher = match SerpApiFetcher::new(config.serpapi_key.clone()) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(?e, "failed to build search client");
            return;
        }
    };

    // Run the scrape once if the flag is set
    if run_once {
        if let Err(e) = run_scrape_listings(&db, &fetcher, &config).await {
            error!(?e, "scrape-listings job failed");
        }
        return;
    }

    info!("Worker starting; running the scrape every 24 hours");

    let mut ticker = interval(Duration::from_secs(SCRAPE_INTERVAL_SECS));
    loop {
        ticker.tick().await;
        info!("Running scheduled scrape...");
        if let Err(e) = run_scrape_listings(&db, &fetcher, &config).await {
            error!(?e, "scrape-listings job failed");
        }
        info!("Scheduled scrape finished.");
    }
}
