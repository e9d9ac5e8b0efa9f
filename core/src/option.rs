//! Option descriptors held by the parser's registry.

use std::fmt;

use crate::cell::{FlagCell, ValueCell};

/// What an option does when it matches.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Binding<'a> {
    /// Writes a fixed boolean into the target.
    Flag { target: &'a FlagCell, set_to: bool },
    /// Captures the following token into the target.
    Value { target: &'a ValueCell },
}

/// A registered option: its names and the cell it writes into.
///
/// Matching compares whole tokens, so `-v` matches short name `v` and
/// `--verbose` matches long name `verbose`. An option with neither name never
/// matches anything.
#[derive(Debug, Clone)]
pub(crate) struct ArgOption<'a> {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) binding: Binding<'a>,
}

impl<'a> ArgOption<'a> {
    pub(crate) fn new(short: Option<char>, long: Option<&str>, binding: Binding<'a>) -> Self {
        Self {
            short,
            long: long.map(String::from),
            binding,
        }
    }

    /// Returns the `-x` form, if the option has a short name.
    pub(crate) fn short_form(&self) -> Option<String> {
        self.short.map(|c| format!("-{c}"))
    }

    /// Returns the `--name` form, if the option has a long name.
    pub(crate) fn long_form(&self) -> Option<String> {
        self.long.as_ref().map(|name| format!("--{name}"))
    }

    pub(crate) fn matches(&self, token: &str) -> bool {
        let short_hit = self
            .short
            .is_some_and(|c| token.strip_prefix('-').is_some_and(|rest| rest.chars().eq([c])));
        let long_hit = self
            .long
            .as_deref()
            .is_some_and(|name| token.strip_prefix("--") == Some(name));
        short_hit || long_hit
    }
}

impl fmt::Display for ArgOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.short_form(), self.long_form()) {
            (Some(short), Some(long)) => write!(f, "{short}/{long}"),
            (Some(only), None) | (None, Some(only)) => f.write_str(&only),
            (None, None) => f.write_str("<unnamed>"),
        }
    }
}
