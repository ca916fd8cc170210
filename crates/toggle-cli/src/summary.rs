use std::io::Write;

use anyhow::{Context, Result};
use toggle_cli::render::{message_line, plain_lines, rows_table};

use crate::cli::OutputArg;
use crate::types::SessionResult;

pub fn print_session(result: &SessionResult, out: &mut impl Write) -> Result<()> {
    let session = &result.session;
    match result.output {
        OutputArg::Table => {
            writeln!(out, "{}", rows_table(session))?;
            writeln!(out, "{}", session.status())?;
            for line in [
                message_line(session.event_message()),
                message_line(session.share_message()),
            ]
            .into_iter()
            .flatten()
            {
                writeln!(out, "{line}")?;
            }
        }
        OutputArg::Plain => {
            for line in plain_lines(session) {
                writeln!(out, "{line}")?;
            }
        }
    }
    for action in &result.ignored {
        writeln!(out, "warning: `{action}` is not available in the shared view")?;
    }
    writeln!(out, "Share link: {}", result.share)?;
    if let Some(builder) = &result.builder {
        writeln!(out, "Make your own: {builder}")?;
    }
    out.flush().context("flush output")
}
