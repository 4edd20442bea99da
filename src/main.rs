use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pokedex_crawler::config::Config;
use pokedex_crawler::crawler::Crawler;
use pokedex_crawler::database::Database;
use pokedex_crawler::fetcher::HttpFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    info!("Starting pokedex crawl at {}", config.start_url);

    let database = Database::new(&config.database_url)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;

    let fetcher = HttpFetcher::new(config.request_timeout)?;

    let crawler = Crawler::new(fetcher, database)
        .with_request_delay(config.request_delay)
        .with_max_pages(config.max_pages);

    crawler.run(config.start_url).await?;

    Ok(())
}
