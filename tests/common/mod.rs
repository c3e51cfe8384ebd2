#![allow(dead_code)]

use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing::Dispatch;

/// In-memory log sink for a single scraper.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A dispatcher writing plain INFO+ lines into the returned buffer.
pub fn capture_logs() -> (Dispatch, LogBuffer) {
    let buf = LogBuffer::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    (Dispatch::new(subscriber), buf)
}

fn data_row(symbol: &str, security: &str, hq: &str) -> String {
    format!(
        "<tr>\
           <td><a rel=\"nofollow\" class=\"external text\" href=\"https://www.nyse.com/quote/XNYS:{symbol}\">{symbol}</a></td>\
           <td><a href=\"/wiki/{security}\">{security}</a></td>\
           <td><a href=\"https://www.sec.gov/cgi-bin/browse-edgar?CIK={symbol}\">reports</a></td>\
           <td>Industrials</td>\
           <td>Industrial Conglomerates</td>\
           <td>{hq}</td>\
           <td>1957-03-04</td>\
           <td>0000066740</td>\
           <td>1902</td>\
         </tr>"
    )
}

/// Page shaped like the real list: a decoy table, then `#constituents`
/// with one header-only row and three data rows.
pub fn constituents_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>List of S&amp;P 500 companies</title></head>
<body>
<p>The S&amp;P 500 stock market index ...</p>
<table class="wikitable"><tbody><tr><td>Decoy</td></tr></tbody></table>
<table class="wikitable sortable" id="constituents">
<tbody>
<tr><th>Symbol</th><th>Security</th><th>SEC filings</th><th>GICS Sector</th><th>GICS Sub-Industry</th>
<th>Headquarters Location</th><th>Date first added</th><th>CIK</th><th>Founded</th></tr>
{}
{}
{}
</tbody>
</table>
</body></html>"#,
        data_row("MMM", "3M", "Saint Paul, Minnesota"),
        data_row("AOS", "A. O. Smith", "Milwaukee, Wisconsin"),
        data_row("ABT", "Abbott", "North Chicago, Illinois"),
    )
}
