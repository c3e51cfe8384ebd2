// src/bin/verify.rs
//! Check an exported constituents file: present, non-empty, parseable.
//!
//! Usage: verify [FILE]
//! Without FILE, checks the file a default run would write today.

use anyhow::{bail, Context, Result};
use sp500scraper::{
    output::{file_name, file_size, is_valid_file, read_table},
    Config,
};
use std::{collections::HashSet, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let cfg = Config::from_env()?;
            cfg.output_dir
                .join(file_name(&cfg.base_name, cfg.timestamp, &cfg.extension))
        }
    };

    if !is_valid_file(&path) {
        bail!("file [{}] does NOT exist!", path.display());
    }

    let table = read_table(&path).with_context(|| format!("reading {}", path.display()))?;

    let mut seen = HashSet::new();
    let dupes: Vec<&str> = table
        .iter()
        .map(|c| c.symbol.as_str())
        .filter(|s| !seen.insert(*s))
        .collect();
    if !dupes.is_empty() {
        warn!(count = dupes.len(), symbols = ?dupes, "duplicate symbols");
    }

    println!(
        "{: <40} {:>10} {:>12}",
        "File", "Rows", "Bytes"
    );
    println!("{:-<64}", "");
    println!(
        "{: <40} {:>10} {:>12}",
        path.display(),
        table.len(),
        file_size(&path)
    );
    info!(rows = table.len(), "verified");
    Ok(())
}
