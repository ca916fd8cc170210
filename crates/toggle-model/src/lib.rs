pub mod bounds;
pub mod error;
pub mod row;

pub use bounds::{BoundedRows, MAX_ROWS, MIN_ROWS};
pub use error::{ModelError, Result};
pub use row::{Row, RowEntry, RowId};
