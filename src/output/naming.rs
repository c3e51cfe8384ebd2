// src/output/naming.rs

use chrono::{Local, NaiveDate};

pub const DEFAULT_EXTENSION: &str = ".csv";

/// `YYYYMMDD` for `date`.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `<base>_<YYYYMMDD><ext>` when `timestamp` is set, else `<base><ext>`.
pub fn file_name_on(base: &str, timestamp: bool, ext: &str, date: NaiveDate) -> String {
    if timestamp {
        format!("{}_{}{}", base, date_stamp(date), ext)
    } else {
        format!("{}{}", base, ext)
    }
}

/// Same as [`file_name_on`], stamped with today's local date.
pub fn file_name(base: &str, timestamp: bool, ext: &str) -> String {
    file_name_on(base, timestamp, ext, Local::now().date_naive())
}
