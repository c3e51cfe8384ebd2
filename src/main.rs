use anyhow::Result;
use sp500scraper::{Config, HttpFetcher, Scraper};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new(&config)?;
    let scraper = Scraper::new(config, fetcher);
    info!(
        url = %scraper.config().source_url,
        out = %scraper.config().output_dir.display(),
        "configured"
    );

    // ─── 3) run ──────────────────────────────────────────────────────
    let outcome = match scraper.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("scrape aborted: {}", e);
            std::process::exit(1);
        }
    };

    if !outcome.is_success() {
        std::process::exit(1);
    }
    info!("all done");
    Ok(())
}
