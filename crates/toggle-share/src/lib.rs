//! Share tokens for toggle row state.
//!
//! A token is the row list serialized as versioned JSON and wrapped in
//! unpadded URL-safe base64, so it can sit directly in a query string:
//!
//! ```text
//! { "v": 1, "rows": [ { "text": "...", "isOn": true }, ... ] }
//! ```
//!
//! [`encode`] never fails. [`decode`] is total: any malformed input comes
//! back as a [`DecodeError`] and should be treated as an invalid share.

pub mod codec;
pub mod error;
pub mod link;

pub use codec::{FORMAT_VERSION, decode, encode};
pub use error::DecodeError;
pub use link::{STATE_PARAM, builder_link, is_shared_view, share_link, state_from_url};
