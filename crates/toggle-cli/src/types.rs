use toggle_cli::action::Action;
use toggle_cli::session::Session;
use url::Url;

use crate::cli::OutputArg;

/// Everything printed after an `edit` or `show` run.
pub struct SessionResult {
    pub session: Session,
    pub share: Url,
    /// "Make your own" link, present in the shared view.
    pub builder: Option<Url>,
    /// Actions refused because the shared view only allows toggling.
    pub ignored: Vec<Action>,
    pub output: OutputArg,
}
