//! Tests for toggle-model types.

use toggle_model::{BoundedRows, MAX_ROWS, MIN_ROWS, ModelError, Row, RowEntry, RowId};

fn entries(count: usize) -> Vec<RowEntry> {
    (0..count)
        .map(|index| RowEntry::new(format!("row {index}"), index % 2 == 0))
        .collect()
}

#[test]
fn bounded_rows_accepts_every_length_in_range() {
    for count in MIN_ROWS..=MAX_ROWS {
        let rows = BoundedRows::new(entries(count)).expect("length in range");
        assert_eq!(rows.len(), count);
    }
}

#[test]
fn bounded_rows_rejects_too_few() {
    let error = BoundedRows::new(entries(MIN_ROWS - 1)).unwrap_err();
    assert_eq!(
        error,
        ModelError::RowCountOutOfBounds {
            found: MIN_ROWS - 1,
            min: MIN_ROWS,
            max: MAX_ROWS,
        }
    );
}

#[test]
fn bounded_rows_rejects_too_many() {
    let error = BoundedRows::try_from(entries(MAX_ROWS + 1)).unwrap_err();
    assert!(matches!(
        error,
        ModelError::RowCountOutOfBounds { found, .. } if found == MAX_ROWS + 1
    ));
}

#[test]
fn bounded_rows_counts_active_entries() {
    let rows = BoundedRows::new(entries(5)).unwrap();
    // indices 0, 2, 4 are on
    assert_eq!(rows.active_count(), 3);
}

#[test]
fn blank_row_is_off_and_empty() {
    let row = Row::blank(RowId::new(1));
    assert_eq!(row.id(), RowId::new(1));
    assert!(row.text.is_empty());
    assert!(!row.is_on);
}

#[test]
fn row_id_displays_with_prefix() {
    assert_eq!(RowId::new(12).to_string(), "row-12");
}

#[test]
fn row_entry_round_trips_through_json() {
    let entry = RowEntry::new("ünïcødé ✓", true);
    let json = serde_json::to_string(&entry).expect("serialize entry");
    let round: RowEntry = serde_json::from_str(&json).expect("deserialize entry");
    assert_eq!(round, entry);
}
