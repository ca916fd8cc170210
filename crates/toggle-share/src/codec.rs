//! Token encoding and decoding.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value, json};
use toggle_model::{BoundedRows, MAX_ROWS, MIN_ROWS, RowEntry};
use tracing::{debug, trace};

use crate::error::DecodeError;

/// Share format version written by [`encode`] and required by [`decode`].
pub const FORMAT_VERSION: u64 = 1;

/// Standard alphabet, padding required, stray low bits in the final
/// quantum accepted.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Encode rows, in order, into an unpadded URL-safe token.
pub fn encode(rows: &[RowEntry]) -> String {
    let payload = json!({
        "v": FORMAT_VERSION,
        "rows": rows
            .iter()
            .map(|row| json!({ "text": row.text, "isOn": row.is_on }))
            .collect::<Vec<_>>(),
    });
    let text = payload.to_string();
    trace!(bytes = text.len(), rows = rows.len(), "encoding share payload");
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a token back into row entries.
///
/// Accepts URL-safe or standard alphabet, with or without padding. Rows
/// beyond [`MAX_ROWS`] are dropped; fewer than [`MIN_ROWS`] is rejected.
/// The result may still have every row switched on; pass it through the
/// store's `replace_all` before treating it as live state.
pub fn decode(token: &str) -> Result<BoundedRows, DecodeError> {
    let bytes = LENIENT_STANDARD.decode(restore_standard_alphabet(token))?;
    let text = String::from_utf8(bytes)?;
    let payload: Value = serde_json::from_str(&text)?;
    let rows = validate_payload(&payload)?;

    if rows.len() > MAX_ROWS {
        debug!(found = rows.len(), kept = MAX_ROWS, "dropping rows beyond maximum");
    }
    let kept = &rows[..rows.len().min(MAX_ROWS)];
    if kept.len() < MIN_ROWS {
        return Err(DecodeError::TooFewRows {
            found: kept.len(),
            min: MIN_ROWS,
        });
    }

    let entries = kept
        .iter()
        .enumerate()
        .map(|(index, value)| coerce_entry(index, value))
        .collect::<Result<Vec<RowEntry>, DecodeError>>()?;
    BoundedRows::new(entries).map_err(|_| DecodeError::TooFewRows {
        found: kept.len(),
        min: MIN_ROWS,
    })
}

fn restore_standard_alphabet(token: &str) -> String {
    let mut normalized: String = token
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    // Padding follows the length alone, so short-padded input is completed.
    let missing = (4 - normalized.len() % 4) % 4;
    normalized.extend(std::iter::repeat_n('=', missing));
    normalized
}

fn validate_payload(payload: &Value) -> Result<&[Value], DecodeError> {
    let object = payload.as_object().ok_or(DecodeError::NotAnObject)?;
    check_version(object)?;
    match object.get("rows") {
        Some(Value::Array(rows)) => Ok(rows),
        _ => Err(DecodeError::RowsNotAList),
    }
}

fn check_version(object: &Map<String, Value>) -> Result<(), DecodeError> {
    match object.get("v") {
        Some(version) if version.as_f64() == Some(FORMAT_VERSION as f64) => Ok(()),
        Some(version) => Err(DecodeError::UnsupportedVersion(version.to_string())),
        None => Err(DecodeError::UnsupportedVersion("missing".to_string())),
    }
}

/// Build an entry from one untrusted row value.
///
/// - `text`: kept when it is a string, otherwise empty.
/// - `isOn`: see [`is_truthy`]; a missing field is off.
/// - `null` has no fields to read and rejects the token.
/// - any other non-object yields a blank, off entry.
fn coerce_entry(index: usize, value: &Value) -> Result<RowEntry, DecodeError> {
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Err(DecodeError::InvalidRow { index }),
        _ => return Ok(RowEntry::default()),
    };
    let text = fields
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let is_on = fields.get("isOn").is_some_and(is_truthy);
    Ok(RowEntry { text, is_on })
}

/// Loose boolean reading of a JSON value.
///
/// `false`, `null`, zero and the empty string are off; every other value,
/// including empty arrays and objects, is on.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
