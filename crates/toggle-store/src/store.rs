//! The row store.

use std::fmt;

use toggle_model::{BoundedRows, MAX_ROWS, MIN_ROWS, Row, RowEntry, RowId};
use tracing::debug;

use crate::demotion::enforce_max_on;
use crate::picker::{Picker, RandomPicker};

/// Owned, ordered collection of rows.
///
/// Every method leaves the store with `MIN_ROWS..=MAX_ROWS` rows and at
/// least one row switched off. Calls that cannot apply (adding past the
/// maximum, removing past the minimum, naming an unknown row) change
/// nothing and do not fail.
#[derive(Debug, Clone)]
pub struct RowStore<P = RandomPicker> {
    rows: Vec<Row>,
    last_id: u64,
    picker: P,
}

impl RowStore<RandomPicker> {
    /// A store with [`MIN_ROWS`] blank rows and random demotion.
    pub fn new() -> Self {
        Self::with_picker(RandomPicker::from_entropy())
    }
}

impl Default for RowStore<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Picker> RowStore<P> {
    /// A store with [`MIN_ROWS`] blank rows using `picker` for demotion.
    pub fn with_picker(picker: P) -> Self {
        let mut store = Self {
            rows: Vec::with_capacity(MAX_ROWS),
            last_id: 0,
            picker,
        };
        for _ in 0..MIN_ROWS {
            let id = store.mint_id();
            store.rows.push(Row::blank(id));
        }
        store
    }

    fn mint_id(&mut self) -> RowId {
        self.last_id += 1;
        RowId::new(self.last_id)
    }

    fn position(&self, row_id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == row_id)
    }

    /// Append a blank row. Returns `false` when already at [`MAX_ROWS`].
    pub fn add_row(&mut self) -> bool {
        if !self.can_add() {
            debug!(rows = self.rows.len(), "add ignored at maximum");
            return false;
        }
        let id = self.mint_id();
        self.rows.push(Row::blank(id));
        debug!(row = %id, rows = self.rows.len(), "row added");
        true
    }

    /// Drop the last row. Returns `true` if a row had to be switched off to
    /// keep one row off.
    pub fn remove_row(&mut self) -> bool {
        if !self.can_remove() {
            debug!(rows = self.rows.len(), "remove ignored at minimum");
            return false;
        }
        if let Some(row) = self.rows.pop() {
            debug!(row = %row.id(), rows = self.rows.len(), "row removed");
        }
        enforce_max_on(&mut self.rows, None, &mut self.picker)
    }

    /// Set the label of `row_id`. Returns whether the row exists.
    pub fn update_text(&mut self, row_id: RowId, text: impl Into<String>) -> bool {
        match self.position(row_id) {
            Some(index) => {
                self.rows[index].text = text.into();
                true
            }
            None => {
                debug!(row = %row_id, "text update for unknown row ignored");
                false
            }
        }
    }

    /// Flip `row_id`. Returns `true` if another row (or, failing that, this
    /// one) had to be switched off.
    pub fn toggle_row(&mut self, row_id: RowId) -> bool {
        let Some(index) = self.position(row_id) else {
            debug!(row = %row_id, "toggle for unknown row ignored");
            return false;
        };
        let row = &mut self.rows[index];
        row.is_on = !row.is_on;
        debug!(row = %row_id, is_on = row.is_on, "row toggled");
        enforce_max_on(&mut self.rows, Some(row_id), &mut self.picker)
    }

    /// Replace every row with `entries`, minting fresh ids. Returns `true`
    /// if rows had to be switched off.
    pub fn replace_all(&mut self, entries: BoundedRows) -> bool {
        let mut rows = Vec::with_capacity(MAX_ROWS);
        for entry in entries.into_inner() {
            let id = self.mint_id();
            rows.push(Row::new(id, entry.text, entry.is_on));
        }
        self.rows = rows;
        debug!(rows = self.rows.len(), active = self.active_count(), "rows replaced");
        enforce_max_on(&mut self.rows, None, &mut self.picker)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, row_id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == row_id)
    }

    /// Row at a zero-based display position.
    pub fn row_at(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a store never holds fewer than [`MIN_ROWS`] rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_on).count()
    }

    pub fn max_on(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn can_add(&self) -> bool {
        self.rows.len() < MAX_ROWS
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > MIN_ROWS
    }

    /// Id-less snapshot in display order.
    pub fn entries(&self) -> Vec<RowEntry> {
        self.rows.iter().map(RowEntry::from).collect()
    }

    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            rows: self.len(),
            max_on: self.max_on(),
            active: self.active_count(),
        }
    }
}

/// Counts shown alongside the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    pub rows: usize,
    pub max_on: usize,
    pub active: usize,
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rows: {} | Max ON: {} | Currently ON: {}",
            self.rows, self.max_on, self.active
        )
    }
}
