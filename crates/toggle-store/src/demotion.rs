//! Restores the max-on rule after a mutation.

use toggle_model::{Row, RowId};
use tracing::debug;

use crate::picker::Picker;

/// Switch rows off until at most `rows.len() - 1` of them are on.
///
/// Each round picks one of the rows that are currently on. When `preferred`
/// names an on row and at least one other row is on, the preferred row is
/// left out of the draw. Returns `true` if any row was switched off.
pub fn enforce_max_on<P>(rows: &mut [Row], preferred: Option<RowId>, picker: &mut P) -> bool
where
    P: Picker + ?Sized,
{
    let allowed = rows.len().saturating_sub(1);
    let mut active = rows.iter().filter(|row| row.is_on).count();
    let mut switched_off_any = false;

    while active > allowed {
        let on_rows: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_on)
            .map(|(index, _)| index)
            .collect();

        let mut candidates = on_rows.clone();
        if let Some(keep) = preferred {
            let excluding: Vec<usize> = on_rows
                .iter()
                .copied()
                .filter(|&index| rows[index].id() != keep)
                .collect();
            if !excluding.is_empty() {
                candidates = excluding;
            }
        }

        // A misbehaving picker must not index out of bounds.
        let choice = picker.pick(candidates.len()).min(candidates.len() - 1);
        let target = &mut rows[candidates[choice]];
        target.is_on = false;
        debug!(
            row = %target.id(),
            candidates = candidates.len(),
            active = active - 1,
            allowed,
            "switched row off"
        );
        switched_off_any = true;
        active -= 1;
    }

    switched_off_any
}
