//! A store plus the messages a user sees after each step.

use toggle_share::{builder_link, decode, encode, is_shared_view, share_link, state_from_url};
use toggle_store::{Picker, RandomPicker, Row, RowId, RowStore, StoreStatus};
use tracing::{debug, info, warn};
use url::Url;

use crate::action::Action;
use crate::logging::redact_value;

pub const TOGGLE_DEMOTED: &str =
    "Not all toggles can be ON. One active toggle was turned OFF automatically.";
pub const REMOVE_DEMOTED: &str = "A toggle was turned OFF to keep at least one toggle OFF.";
pub const RESTORE_DEMOTED: &str =
    "Shared data had all toggles ON. One toggle was turned OFF to apply rules.";
pub const SHARE_LOADED: &str = "Shared output loaded from link.";
pub const SHARE_INVALID: &str = "Share link is invalid. Default state loaded.";

/// A message line, optionally flagged as a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: &'static str,
    pub warning: bool,
}

impl Message {
    pub const fn info(text: &'static str) -> Self {
        Self {
            text,
            warning: false,
        }
    }

    pub const fn warning(text: &'static str) -> Self {
        Self {
            text,
            warning: true,
        }
    }
}

/// Result of applying one [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The action exists but not in the current view.
    NotInSharedView,
}

#[derive(Debug)]
pub struct Session<P = RandomPicker> {
    store: RowStore<P>,
    shared_view: bool,
    event: Option<Message>,
    share: Option<Message>,
}

impl<P: Picker> Session<P> {
    pub fn with_store(store: RowStore<P>) -> Self {
        Self {
            store,
            shared_view: false,
            event: None,
            share: None,
        }
    }

    /// Enter the view selected by `url`, restoring its token if it has one.
    pub fn open(&mut self, url: &Url) {
        self.shared_view = is_shared_view(url);
        if let Some(token) = state_from_url(url) {
            self.restore(&token);
        }
    }

    /// Restore rows from a share token. On failure the current rows stay.
    pub fn restore(&mut self, token: &str) {
        match decode(token) {
            Ok(rows) => {
                let count = rows.len();
                if self.store.replace_all(rows) {
                    self.event = Some(Message::warning(RESTORE_DEMOTED));
                }
                self.share = Some(Message::info(SHARE_LOADED));
                info!(rows = count, active = self.store.active_count(), "share restored");
            }
            Err(error) => {
                warn!(%error, "share link rejected");
                self.share = Some(Message::warning(SHARE_INVALID));
            }
        }
    }

    pub fn apply(&mut self, action: &Action) -> Outcome {
        if self.shared_view && !action.allowed_in_shared_view() {
            debug!(%action, "action ignored in shared view");
            return Outcome::NotInSharedView;
        }
        match action {
            Action::Add => {
                if self.store.add_row() {
                    self.event = None;
                }
            }
            Action::Remove => {
                if self.store.can_remove() {
                    let demoted = self.store.remove_row();
                    self.event = demoted.then_some(Message::warning(REMOVE_DEMOTED));
                }
            }
            Action::Toggle(number) => {
                if let Some(id) = self.row_id(*number) {
                    let demoted = self.store.toggle_row(id);
                    self.event = demoted.then_some(Message::warning(TOGGLE_DEMOTED));
                }
            }
            Action::Text(number, value) => {
                if let Some(id) = self.row_id(*number) {
                    debug!(row = %id, text = redact_value(value), "label set");
                    self.store.update_text(id, value.clone());
                }
            }
        }
        Outcome::Applied
    }

    fn row_id(&self, number: usize) -> Option<RowId> {
        let id = number
            .checked_sub(1)
            .and_then(|index| self.store.row_at(index))
            .map(Row::id);
        if id.is_none() {
            debug!(number, rows = self.store.len(), "no such row");
        }
        id
    }

    pub fn store(&self) -> &RowStore<P> {
        &self.store
    }

    pub fn is_shared_view(&self) -> bool {
        self.shared_view
    }

    pub fn event_message(&self) -> Option<&Message> {
        self.event.as_ref()
    }

    pub fn share_message(&self) -> Option<&Message> {
        self.share.as_ref()
    }

    pub fn status(&self) -> StoreStatus {
        self.store.status()
    }

    pub fn token(&self) -> String {
        encode(&self.store.entries())
    }

    /// Share link for the current rows on top of `base`.
    pub fn share_link(&self, base: &Url) -> Url {
        share_link(base, &self.token())
    }

    /// The "make your own" link, offered only in the shared view.
    pub fn builder_link(&self, current: &Url) -> Option<Url> {
        self.shared_view.then(|| builder_link(current))
    }
}
