//! User actions given on the command line.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One user action, addressed by 1-based row number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Toggle(usize),
    Text(usize, String),
}

impl Action {
    /// Whether the action is available in the shared view.
    pub fn allowed_in_shared_view(&self) -> bool {
        matches!(self, Self::Toggle(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionParseError {
    #[error("unknown action `{0}` (expected add, remove, toggle:N or text:N=VALUE)")]
    Unknown(String),
    #[error("`{0}` is not a row number (rows are numbered from 1)")]
    BadRowNumber(String),
    #[error("`{0}` is missing `=VALUE`")]
    MissingValue(String),
}

fn row_number(raw: &str) -> Result<usize, ActionParseError> {
    match raw.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ActionParseError::BadRowNumber(raw.to_string())),
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = match input.split_once(':') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (input, None),
        };
        match (verb.trim().to_ascii_lowercase().as_str(), rest) {
            ("add", None) => Ok(Self::Add),
            ("remove", None) => Ok(Self::Remove),
            ("toggle", Some(number)) => Ok(Self::Toggle(row_number(number)?)),
            ("text", Some(rest)) => {
                let (number, value) = rest
                    .split_once('=')
                    .ok_or_else(|| ActionParseError::MissingValue(input.to_string()))?;
                Ok(Self::Text(row_number(number)?, value.to_string()))
            }
            _ => Err(ActionParseError::Unknown(input.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Remove => f.write_str("remove"),
            Self::Toggle(number) => write!(f, "toggle:{number}"),
            Self::Text(number, _) => write!(f, "text:{number}"),
        }
    }
}
