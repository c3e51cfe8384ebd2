pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod run;

pub use config::Config;
pub use error::{ExportError, Result, ScrapeError};
pub use fetch::{HttpFetcher, PageSource};
pub use run::{RunOutcome, Scraper};
