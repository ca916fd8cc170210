//! Ordered collection of togglable rows.
//!
//! [`RowStore`] owns the rows and keeps two invariants after every call:
//!
//! - the row count stays within [`MIN_ROWS`]..=[`MAX_ROWS`];
//! - at most `len() - 1` rows are switched on.
//!
//! When a mutation would break the second rule, the store switches rows off
//! through the [`demotion`] algorithm and reports that it did so.

pub mod demotion;
pub mod picker;
pub mod store;

pub use demotion::enforce_max_on;
pub use picker::{Picker, RandomPicker};
pub use store::{RowStore, StoreStatus};
pub use toggle_model::{BoundedRows, MAX_ROWS, MIN_ROWS, Row, RowEntry, RowId};
