//! Property and scenario tests for the row store.

use proptest::prelude::*;
use toggle_store::{
    BoundedRows, MAX_ROWS, MIN_ROWS, Picker, RandomPicker, Row, RowEntry, RowId, RowStore,
};

#[derive(Debug, Clone)]
enum Op {
    Add,
    Remove,
    Toggle(usize),
    Text(usize, String),
    Replace(Vec<bool>),
    ToggleUnknown,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        3 => Just(Op::Remove),
        6 => (0..MAX_ROWS).prop_map(Op::Toggle),
        1 => (0..MAX_ROWS, ".{0,8}").prop_map(|(index, text)| Op::Text(index, text)),
        1 => prop::collection::vec(any::<bool>(), MIN_ROWS..=MAX_ROWS).prop_map(Op::Replace),
        1 => Just(Op::ToggleUnknown),
    ]
}

fn assert_invariants(store: &RowStore) {
    assert!((MIN_ROWS..=MAX_ROWS).contains(&store.len()));
    assert!(store.active_count() < store.len());
    assert_eq!(store.max_on(), store.len() - 1);
}

fn ids_of<P: Picker>(store: &RowStore<P>) -> Vec<RowId> {
    store.rows().iter().map(Row::id).collect()
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut store = RowStore::with_picker(RandomPicker::seeded(seed));
        assert_invariants(&store);
        for op in ops {
            let demoted = match op {
                Op::Add => store.add_row(),
                Op::Remove => store.remove_row(),
                Op::Toggle(index) => match store.row_at(index).map(Row::id) {
                    Some(id) => store.toggle_row(id),
                    None => false,
                },
                Op::Text(index, text) => {
                    if let Some(id) = store.row_at(index).map(Row::id) {
                        store.update_text(id, text);
                    }
                    false
                }
                Op::Replace(states) => {
                    let entries = states.into_iter().map(|on| RowEntry::new("", on)).collect();
                    let rows = BoundedRows::new(entries).expect("strategy keeps length in range");
                    store.replace_all(rows)
                }
                Op::ToggleUnknown => store.toggle_row(RowId::new(u64::MAX)),
            };
            assert_invariants(&store);
            if demoted {
                prop_assert_eq!(store.active_count(), store.max_on());
            }
        }
    }

    #[test]
    fn toggled_row_survives_demotion(seed in any::<u64>(), extra in 0..=(MAX_ROWS - MIN_ROWS)) {
        let mut store = RowStore::with_picker(RandomPicker::seeded(seed));
        for _ in 0..extra {
            store.add_row();
        }
        let ids = ids_of(&store);
        let (last, rest) = ids.split_last().expect("store is never empty");
        for id in rest {
            store.toggle_row(*id);
        }
        prop_assert_eq!(store.active_count(), store.max_on());
        prop_assert!(store.toggle_row(*last));
        prop_assert!(store.get(*last).expect("row exists").is_on);
        prop_assert_eq!(store.active_count(), store.max_on());
    }
}

#[test]
fn add_at_maximum_leaves_rows_untouched() {
    let mut store = RowStore::with_picker(RandomPicker::seeded(1));
    while store.add_row() {}
    let id = store.rows()[0].id();
    store.update_text(id, "first");
    store.toggle_row(id);
    let before = store.rows().to_vec();
    assert!(!store.add_row());
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn remove_at_minimum_leaves_rows_untouched() {
    let mut store = RowStore::with_picker(RandomPicker::seeded(1));
    let id = store.rows()[2].id();
    store.toggle_row(id);
    let before = store.rows().to_vec();
    assert!(!store.remove_row());
    assert_eq!(store.rows(), before.as_slice());
}

#[test]
fn toggling_all_three_default_rows_keeps_one_off() {
    let mut store = RowStore::new();
    let ids = ids_of(&store);
    assert!(!store.toggle_row(ids[0]));
    assert!(!store.toggle_row(ids[1]));
    assert!(store.toggle_row(ids[2]));

    assert_eq!(store.active_count(), 2);
    assert_eq!(store.rows().iter().filter(|row| !row.is_on).count(), 1);
    assert!(store.get(ids[2]).unwrap().is_on);
}

#[test]
fn demotion_picks_among_other_rows_only() {
    let mut picks = Vec::new();
    let mut store = RowStore::with_picker(|len: usize| {
        picks.push(len);
        len - 1
    });
    let ids = ids_of(&store);
    store.toggle_row(ids[0]);
    store.toggle_row(ids[1]);
    assert!(store.toggle_row(ids[2]));
    // Rows 1 and 2 were eligible; the stub chose the last of them.
    assert!(store.get(ids[0]).unwrap().is_on);
    assert!(!store.get(ids[1]).unwrap().is_on);
    assert!(store.get(ids[2]).unwrap().is_on);
    drop(store);
    assert_eq!(picks, vec![2]);
}
