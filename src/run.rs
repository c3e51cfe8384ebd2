// src/run.rs

use std::path::{Path, PathBuf};
use tracing::{dispatcher, error, info, info_span, Dispatch};

use crate::config::Config;
use crate::error::{ExportError, Result};
use crate::extract::extract_table;
use crate::fetch::PageSource;
use crate::output::{export_table, file_name, is_valid_file, ExportSummary};

/// How a run that got as far as writing ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Written and validated.
    Created {
        path: PathBuf,
        summary: ExportSummary,
    },
    /// Writing failed; validation was skipped.
    ExportFailed { path: PathBuf, error: ExportError },
    /// Writing reported success but the file is missing or empty.
    Invalid { path: PathBuf },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Created { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            RunOutcome::Created { path, .. }
            | RunOutcome::ExportFailed { path, .. }
            | RunOutcome::Invalid { path } => path,
        }
    }
}

/// fetch → extract → name → export → validate, once.
pub struct Scraper<S> {
    config: Config,
    source: S,
    dispatch: Dispatch,
}

impl<S: PageSource> Scraper<S> {
    /// Logs go to whatever dispatcher is current when this is called.
    pub fn new(config: Config, source: S) -> Self {
        Self {
            config,
            source,
            dispatch: dispatcher::get_default(|d| d.clone()),
        }
    }

    /// Send this scraper's logs to `dispatch` instead.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch or extraction failures are returned as `Err` before any file is
    /// opened. Export and validation failures are logged and reported
    /// through the outcome.
    pub fn run(&self) -> Result<RunOutcome> {
        dispatcher::with_default(&self.dispatch, || self.run_stages())
    }

    fn run_stages(&self) -> Result<RunOutcome> {
        let cfg = &self.config;
        let span = info_span!("scrape", url = %cfg.source_url, table = %cfg.table_id);
        let _enter = span.enter();

        // 1) fetch + extract
        let html = self.source.fetch(&cfg.source_url)?;
        let table = extract_table(&html, &cfg.table_tag, &cfg.table_id)?;
        info!(rows = table.len(), "extracted constituents");

        // 2) name
        let path = cfg
            .output_dir
            .join(file_name(&cfg.base_name, cfg.timestamp, &cfg.extension));

        // 3) export; a failed write never reaches validation
        let summary = match export_table(&table, &path, cfg.include_index) {
            Ok(summary) => summary,
            Err(error) => {
                error!("file [{}] could not be written: {}", path.display(), error);
                return Ok(RunOutcome::ExportFailed { path, error });
            }
        };

        // 4) validate
        if !is_valid_file(&path) {
            error!("file [{}] does NOT exist!", path.display());
            return Ok(RunOutcome::Invalid { path });
        }

        info!("file [{}] has been created!", path.display());
        Ok(RunOutcome::Created { path, summary })
    }
}
