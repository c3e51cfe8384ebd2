pub mod export;
pub mod naming;
pub mod validate;

pub use export::{export_table, read_table, ExportSummary, UTF8_BOM};
pub use naming::{date_stamp, file_name, file_name_on, DEFAULT_EXTENSION};
pub use validate::{file_size, is_valid_file};
