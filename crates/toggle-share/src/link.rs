//! Placement of share tokens on URLs.

use url::Url;

/// Query parameter that carries the share token.
pub const STATE_PARAM: &str = "state";

/// `base` with its `state` parameter set to `token`.
///
/// An existing `state` parameter keeps its position and any duplicates are
/// dropped; other parameters and the fragment are left alone.
pub fn share_link(base: &Url, token: &str) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut placed = false;
    for (key, value) in base.query_pairs() {
        if key == STATE_PARAM {
            if !placed {
                pairs.push((STATE_PARAM.to_string(), token.to_string()));
                placed = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !placed {
        pairs.push((STATE_PARAM.to_string(), token.to_string()));
    }

    let mut url = base.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}

/// The "make your own" link: `url` without any `state` parameter or fragment.
pub fn builder_link(url: &Url) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != STATE_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut clean = url.clone();
    if kept.is_empty() {
        clean.set_query(None);
    } else {
        clean.query_pairs_mut().clear().extend_pairs(kept);
    }
    clean.set_fragment(None);
    clean
}

/// The token carried by `url`, if any. An empty value counts as absent.
pub fn state_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == STATE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Whether `url` opens the shared (toggle-only) view.
pub fn is_shared_view(url: &Url) -> bool {
    url.query_pairs().any(|(key, _)| key == STATE_PARAM)
}
