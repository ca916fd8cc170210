//! Row identity and row state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a row inside one store.
///
/// Ids are minted by the owning store from a monotonic counter, so an id is
/// never handed out twice by the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowId(u64);

impl RowId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// A labeled, togglable row owned by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: RowId,
    pub text: String,
    pub is_on: bool,
}

impl Row {
    pub fn new(id: RowId, text: impl Into<String>, is_on: bool) -> Self {
        Self {
            id,
            text: text.into(),
            is_on,
        }
    }

    /// A fresh row: empty label, switched off.
    pub fn blank(id: RowId) -> Self {
        Self::new(id, String::new(), false)
    }

    pub fn id(&self) -> RowId {
        self.id
    }
}

/// The id-less part of a row, as carried by share tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEntry {
    pub text: String,
    #[serde(rename = "isOn")]
    pub is_on: bool,
}

impl RowEntry {
    pub fn new(text: impl Into<String>, is_on: bool) -> Self {
        Self {
            text: text.into(),
            is_on,
        }
    }
}

impl From<&Row> for RowEntry {
    fn from(row: &Row) -> Self {
        Self {
            text: row.text.clone(),
            is_on: row.is_on,
        }
    }
}
