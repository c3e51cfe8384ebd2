// src/extract/table.rs

use tracing::{debug, instrument, trace};

use super::dom::{self, Document};
use super::schema::{bind_rows, Table};
use crate::error::{Result, ScrapeError};

/// Pull every data row out of the body of the first `tag` element with `id`.
///
/// Rows are the `tr` children of the first `tbody` inside the target; cells are
/// the row's `td` descendants with surrounding whitespace trimmed. Rows without
/// any `td` (header or spacer rows) are dropped. Width is not checked here.
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn extract_rows(html: &str, tag: &str, id: &str) -> Result<Vec<Vec<String>>> {
    let doc = Document::parse(html);

    // 1) locate the target by identifier, not by position
    let target = doc
        .find_element(tag, id)?
        .ok_or_else(|| ScrapeError::Extraction(format!("target {tag} #{id} not found")))?;

    // 2) its body section
    let body = dom::descendants_by_tag(target, "tbody")?
        .into_iter()
        .next()
        .ok_or_else(|| ScrapeError::Extraction(format!("{tag} #{id} has no tbody")))?;

    // 3) walk the rows in document order
    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for tr in dom::child_elements(body, "tr") {
        let cells: Vec<String> = dom::descendants_by_tag(tr, "td")?
            .into_iter()
            .map(|td| dom::text_content(td).trim().to_string())
            .collect();
        if cells.is_empty() {
            dropped += 1;
            continue;
        }
        trace!(cells = cells.len(), first = %cells[0], "row");
        rows.push(cells);
    }

    debug!(rows = rows.len(), dropped, "extracted rows");
    Ok(rows)
}

/// `extract_rows` followed by strict binding to the constituent schema.
pub fn extract_table(html: &str, tag: &str, id: &str) -> Result<Table> {
    bind_rows(extract_rows(html, tag, id)?)
}
