//! Diagnostics recorded by the parser.
//!
//! Parsing never fails outright. Every problem becomes one [`ParseError`]
//! appended to the parser's log, and the `Display` form of each entry is the
//! human-readable message shown to users.

use serde::Serialize;
use thiserror::Error;

/// A single entry in the parser's error log.
///
/// # Examples
///
/// ```
/// use command_args_core::ParseError;
///
/// let err = ParseError::UnknownArgument {
///     token: "-z".to_string(),
/// };
/// assert_eq!(err.to_string(), "Unknown argument: -z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// An option was registered without a target cell; it was skipped.
    #[error("Variable is null for {}/{}", render_short(.short), .long.as_deref().unwrap_or(""))]
    NullTarget {
        short: Option<char>,
        long: Option<String>,
    },
    /// A value option was the last token on the command line.
    #[error("{token} requires an argument, but there are no more arguments to parse.")]
    MissingValue { token: String },
    /// An option-shaped token matched nothing in the registry.
    #[error("Unknown argument: {token}")]
    UnknownArgument { token: String },
    /// A positional argument arrived but no argument list was attached.
    #[error("Adding argument {token}: No argument list to add to.")]
    NoArgumentList { token: String },
}

fn render_short(short: &Option<char>) -> String {
    short.map(String::from).unwrap_or_default()
}

impl ParseError {
    /// Returns true for the one error class that stops a parse early.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingValue { .. })
    }
}
