use anyhow::Result;
use toggle_cli::action::Action;
use toggle_cli::session::{Outcome, Session};
use toggle_share::{builder_link, share_link};
use toggle_store::{RandomPicker, RowStore};
use tracing::{info, info_span};
use url::Url;

use crate::cli::{EditArgs, ShowArgs};
use crate::types::SessionResult;

/// Where an edit starts from.
enum ShareInput {
    Link(Url),
    Token(String),
}

impl ShareInput {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        match Url::parse(input) {
            Ok(url) => Self::Link(url),
            Err(_) => Self::Token(input.to_string()),
        }
    }

    /// A URL carrying the token, placing bare tokens on `base`.
    fn into_url(self, base: &Url) -> Url {
        match self {
            Self::Link(url) => url,
            Self::Token(token) => share_link(base, &token),
        }
    }
}

fn new_session(seed: Option<u64>) -> Session {
    let picker = seed.map_or_else(RandomPicker::from_entropy, RandomPicker::seeded);
    Session::with_store(RowStore::with_picker(picker))
}

pub fn run_edit(args: &EditArgs) -> Result<SessionResult> {
    let span = info_span!("edit", actions = args.actions.len());
    let _guard = span.enter();

    let mut session = new_session(args.seed);
    let current = match &args.from {
        Some(input) => {
            let url = ShareInput::parse(input).into_url(&args.base_url);
            session.open(&url);
            url
        }
        None => args.base_url.clone(),
    };

    let mut ignored: Vec<Action> = Vec::new();
    for action in &args.actions {
        if session.apply(action) == Outcome::NotInSharedView {
            ignored.push(action.clone());
        }
    }

    let share = session.share_link(&current);
    info!(active = session.store().active_count(), "share link ready");
    Ok(SessionResult {
        builder: session.builder_link(&current),
        session,
        share,
        ignored,
        output: args.output,
    })
}

pub fn run_show(args: &ShowArgs) -> Result<SessionResult> {
    let span = info_span!("show");
    let _guard = span.enter();

    let url = ShareInput::parse(&args.link).into_url(&args.base_url);
    let mut session = new_session(args.seed);
    session.open(&url);
    Ok(SessionResult {
        builder: session.builder_link(&url),
        share: session.share_link(&url),
        session,
        ignored: Vec::new(),
        output: args.output,
    })
}

pub fn run_builder(url: &Url) -> Url {
    let builder = builder_link(url);
    info!(%builder, "builder link");
    builder
}
