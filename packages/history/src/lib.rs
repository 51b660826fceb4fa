pub mod error;
pub mod locate;
pub mod reader;
pub mod registry;
pub mod scan;
pub mod types;

pub use error::HistoryError;
pub use reader::{read_rows, ReadSummary, RowStream, ROW_BUFFER_CAPACITY};
pub use registry::QueryDescriptor;
pub use rusqlite::Connection;
pub use scan::scan_row;
pub use types::{Row, Value};
