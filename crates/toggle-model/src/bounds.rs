//! Row count bounds.

use crate::error::{ModelError, Result};
use crate::row::RowEntry;

/// Fewest rows a collection may hold.
pub const MIN_ROWS: usize = 3;

/// Most rows a collection may hold.
pub const MAX_ROWS: usize = 7;

/// Row entries whose count is known to be within [`MIN_ROWS`]..=[`MAX_ROWS`].
///
/// This is the only input accepted for wholesale replacement of a store's
/// rows, so the length bound is checked once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedRows(Vec<RowEntry>);

impl BoundedRows {
    pub fn new(entries: Vec<RowEntry>) -> Result<Self> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&entries.len()) {
            return Err(ModelError::RowCountOutOfBounds {
                found: entries.len(),
                min: MIN_ROWS,
                max: MAX_ROWS,
            });
        }
        Ok(Self(entries))
    }

    pub fn as_slice(&self) -> &[RowEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries that are switched on.
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|entry| entry.is_on).count()
    }

    pub fn into_inner(self) -> Vec<RowEntry> {
        self.0
    }
}

impl TryFrom<Vec<RowEntry>> for BoundedRows {
    type Error = ModelError;

    fn try_from(entries: Vec<RowEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a BoundedRows {
    type Item = &'a RowEntry;
    type IntoIter = std::slice::Iter<'a, RowEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
