// src/extract/schema.rs

use serde::Deserialize;

use crate::error::{Result, ScrapeError};

/// One index member, one field per source column, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Constituent {
    pub symbol: String,
    pub security: String,
    pub sec_filings: String,
    pub gics_sector: String,
    pub sub_industry: String,
    pub headquarters: String,
    pub date_added: String,
    pub cik: String,
    pub founded: String,
}

/// Constituents in source document order. Duplicates are kept.
pub type Table = Vec<Constituent>;

impl Constituent {
    pub const HEADERS: [&'static str; 9] = [
        "symbol",
        "security",
        "sec_filings",
        "gics_sector",
        "sub_industry",
        "headquarters",
        "date_added",
        "cik",
        "founded",
    ];

    /// Map `cells` positionally; `row` is only used for the error.
    pub fn from_cells(row: usize, cells: Vec<String>) -> Result<Self> {
        let cells: [String; 9] = cells.try_into().map_err(|cells: Vec<String>| {
            ScrapeError::SchemaMismatch {
                row,
                expected: Self::HEADERS.len(),
                found: cells.len(),
            }
        })?;
        let [symbol, security, sec_filings, gics_sector, sub_industry, headquarters, date_added, cik, founded] =
            cells;
        Ok(Self {
            symbol,
            security,
            sec_filings,
            gics_sector,
            sub_industry,
            headquarters,
            date_added,
            cik,
            founded,
        })
    }

    /// Values in header order.
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.symbol,
            &self.security,
            &self.sec_filings,
            &self.gics_sector,
            &self.sub_industry,
            &self.headquarters,
            &self.date_added,
            &self.cik,
            &self.founded,
        ]
    }
}

/// Bind every raw row to the schema, failing on the first row of the wrong width.
pub fn bind_rows(rows: Vec<Vec<String>>) -> Result<Table> {
    rows.into_iter()
        .enumerate()
        .map(|(i, cells)| Constituent::from_cells(i, cells))
        .collect()
}
