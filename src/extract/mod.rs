pub mod dom;
pub mod schema;
pub mod table;

pub use schema::{bind_rows, Constituent, Table};
pub use table::{extract_rows, extract_table};
