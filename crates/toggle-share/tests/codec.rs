//! Round-trip and rejection tests for share tokens.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use proptest::prelude::*;
use toggle_model::{BoundedRows, MAX_ROWS, MIN_ROWS, RowEntry};
use toggle_share::{DecodeError, decode, encode};
use toggle_store::{RandomPicker, Row, RowStore};

fn wrap(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

fn blank_rows(count: usize) -> String {
    vec!["{}"; count].join(",")
}

proptest! {
    #[test]
    fn decode_reverses_encode(
        rows in prop::collection::vec((any::<String>(), any::<bool>()), MIN_ROWS..=MAX_ROWS),
    ) {
        let entries: Vec<RowEntry> = rows
            .into_iter()
            .map(|(text, on)| RowEntry::new(text, on))
            .collect();
        let token = encode(&entries);
        prop_assert!(token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
        let decoded = decode(&token).expect("encoded rows decode");
        prop_assert_eq!(decoded.into_inner(), entries);
    }

    #[test]
    fn decode_never_panics(token in ".{0,64}") {
        let _ = decode(&token);
    }
}

#[test]
fn store_state_survives_a_share() {
    let mut store = RowStore::with_picker(RandomPicker::seeded(9));
    store.add_row();
    let ids: Vec<_> = store.rows().iter().map(Row::id).collect();
    store.update_text(ids[0], "Kitchen");
    store.update_text(ids[3], "Garage 🚗");
    store.toggle_row(ids[0]);
    store.toggle_row(ids[3]);

    let token = encode(&store.entries());
    let mut restored = RowStore::with_picker(RandomPicker::seeded(10));
    assert!(!restored.replace_all(decode(&token).unwrap()));
    assert_eq!(restored.entries(), store.entries());
}

#[test]
fn toggling_every_default_row_then_sharing() {
    let mut store = RowStore::new();
    let ids: Vec<_> = store.rows().iter().map(Row::id).collect();
    for id in &ids {
        store.toggle_row(*id);
    }
    assert_eq!(store.active_count(), 2);

    let decoded = decode(&encode(&store.entries())).unwrap();
    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded.active_count(), 2);
    assert!(decoded.as_slice().iter().all(|row| row.text.is_empty()));
}

#[test]
fn all_on_share_is_demoted_on_restore() {
    let entries = vec![RowEntry::new("", true); 4];
    let token = encode(&entries);
    let rows = decode(&token).unwrap();
    assert_eq!(rows.active_count(), 4);

    let mut store = RowStore::new();
    assert!(store.replace_all(rows));
    assert_eq!(store.active_count(), 3);
}

#[test]
fn rejects_invalid_base64() {
    assert!(matches!(decode("not base64!"), Err(DecodeError::Base64(_))));
    // A single leftover character cannot be a base64 quantum.
    assert!(matches!(decode("abcde"), Err(DecodeError::Base64(_))));
}

#[test]
fn rejects_text_that_is_not_json() {
    let token = wrap("rows: three");
    assert!(matches!(decode(&token), Err(DecodeError::Json(_))));
}

#[test]
fn rejects_empty_token() {
    assert!(matches!(decode(""), Err(DecodeError::Json(_))));
}

#[test]
fn rejects_other_versions() {
    for version in ["0", "2", "null", "true"] {
        let token = wrap(&format!(r#"{{"v":{version},"rows":[{}]}}"#, blank_rows(3)));
        assert!(
            matches!(decode(&token), Err(DecodeError::UnsupportedVersion(_))),
            "version {version} should be rejected"
        );
    }
}

#[test]
fn rejects_too_few_rows() {
    let token = wrap(&format!(r#"{{"v":1,"rows":[{}]}}"#, blank_rows(MIN_ROWS - 1)));
    assert!(matches!(
        decode(&token),
        Err(DecodeError::TooFewRows { found, .. }) if found == MIN_ROWS - 1
    ));
}

#[test]
fn truncates_rows_beyond_maximum() {
    let rows = (0..MAX_ROWS + 3)
        .map(|index| format!(r#"{{"text":"{index}","isOn":false}}"#))
        .collect::<Vec<_>>()
        .join(",");
    let token = wrap(&format!(r#"{{"v":1,"rows":[{rows}]}}"#));
    let decoded: BoundedRows = decode(&token).unwrap();
    assert_eq!(decoded.len(), MAX_ROWS);
    assert_eq!(decoded.as_slice()[MAX_ROWS - 1].text, (MAX_ROWS - 1).to_string());
}

#[test]
fn encode_has_no_padding_for_any_length() {
    for text in ["", "a", "ab", "abc"] {
        let token = encode(&vec![RowEntry::new(text, false); MIN_ROWS]);
        assert!(!token.contains('='));
    }
}
