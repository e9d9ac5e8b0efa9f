//! The argument parser: option registry plus the token walk.

use tracing::debug;

use crate::cell::{ArgumentList, FlagCell, ValueCell};
use crate::error::ParseError;
use crate::expand::expand_short_groups;
use crate::option::{ArgOption, Binding};
use crate::validate::{ValidationError, validate_options};

/// Terminates option processing; everything after it is positional.
pub const END_OF_OPTIONS: &str = "--";

/// Bare dash, conventionally stdin or stdout. Always positional.
pub const STDIO_ARGUMENT: &str = "-";

/// Command-line argument parser that never fails outright.
///
/// Options are registered against caller-owned cells. [`parse`](Self::parse)
/// writes matched options into those cells, pushes positional arguments into
/// the attached [`ArgumentList`], and records every problem in an error log
/// that the caller inspects afterwards with [`errors`](Self::errors).
///
/// The parser borrows its cells for `'a`, so they must outlive it; the caller
/// keeps ownership and can read them at any time.
///
/// # Examples
///
/// ```
/// use command_args_core::*;
///
/// let all = FlagCell::new(false);
/// let output = ValueCell::default();
/// let files = ArgumentList::new();
///
/// let mut parser = ArgumentParser::new();
/// parser.set_argument_sink(&files);
/// parser.add_on_option(Some('a'), Some("all"), Some(&all));
/// parser.register_value(Some('o'), Some("output"), Some(&output));
/// parser.parse(["-a", "--output", "out.txt", "in.txt"]);
///
/// assert!(!parser.has_errors());
/// assert!(all.get());
/// assert_eq!(output.get(), "out.txt");
/// assert_eq!(files.to_vec(), ["in.txt"]);
/// ```
#[derive(Debug, Default)]
pub struct ArgumentParser<'a> {
    options: Vec<ArgOption<'a>>,
    errors: Vec<ParseError>,
    arguments: Option<&'a ArgumentList>,
}

impl<'a> ArgumentParser<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an option that writes `set_to` into `target` when it appears.
    ///
    /// A `None` target records a [`ParseError::NullTarget`] and skips the
    /// registration, so the names are later reported as unknown.
    pub fn register_flag(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        target: Option<&'a FlagCell>,
        set_to: bool,
    ) {
        let Some(target) = target else {
            self.null_target(short, long);
            return;
        };
        self.options
            .push(ArgOption::new(short, long, Binding::Flag { target, set_to }));
    }

    /// Registers an option that sets `target` to true.
    pub fn add_on_option(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        target: Option<&'a FlagCell>,
    ) {
        self.register_flag(short, long, target, true);
    }

    /// Registers an option that sets `target` to false.
    pub fn add_off_option(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        target: Option<&'a FlagCell>,
    ) {
        self.register_flag(short, long, target, false);
    }

    /// Registers an option that captures the next token into `target`.
    ///
    /// A `None` target records a [`ParseError::NullTarget`] and skips the
    /// registration.
    pub fn register_value(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        target: Option<&'a ValueCell>,
    ) {
        let Some(target) = target else {
            self.null_target(short, long);
            return;
        };
        self.options
            .push(ArgOption::new(short, long, Binding::Value { target }));
    }

    /// Same as [`register_value`](Self::register_value).
    pub fn add_value_option(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        target: Option<&'a ValueCell>,
    ) {
        self.register_value(short, long, target);
    }

    /// Attaches the list that receives positional arguments.
    ///
    /// Without one, every positional argument is reported as an error.
    pub fn set_argument_sink(&mut self, arguments: &'a ArgumentList) {
        self.arguments = Some(arguments);
    }

    /// Errors recorded so far, oldest first. Never cleared.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Rendered error messages, oldest first.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Checks the registry for options that can never match or that share a
    /// name. See [`ValidationError`].
    pub fn validate(&self) -> Vec<ValidationError> {
        validate_options(&self.options)
    }

    /// Parses the process arguments, skipping the program name.
    pub fn parse_env(&mut self) {
        self.parse(std::env::args().skip(1));
    }

    /// Parses `tokens` against the registered options.
    ///
    /// Grouped short options are expanded first. Then, left to right:
    ///
    /// - `--` stops option processing; it is consumed and every later token
    ///   is positional, including a second `--`.
    /// - `-` and tokens not starting with `-` are positional.
    /// - Any other token is compared against every registered option. Flags
    ///   write their fixed value, value options consume the following token
    ///   verbatim. Tokens that match nothing are logged as unknown.
    ///
    /// A value option with no token left to consume clears its target, logs
    /// the problem and ends the parse; nothing after it is processed. Every
    /// other problem is logged and parsing continues.
    pub fn parse<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = expand_short_groups(tokens);
        let mut parsing = true;
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];
            index += 1;

            if !parsing {
                self.add_argument(token);
                continue;
            }

            if token == END_OF_OPTIONS {
                debug!("End of options; remaining tokens are positional");
                parsing = false;
                continue;
            }
            if token == STDIO_ARGUMENT || !token.starts_with('-') {
                self.add_argument(token);
                continue;
            }

            let mut recognized = false;
            for option in &self.options {
                if !option.matches(token) {
                    continue;
                }
                recognized = true;
                match option.binding {
                    Binding::Flag { target, set_to } => {
                        debug!(option = %option, value = set_to, "Setting flag");
                        target.set(set_to);
                    }
                    Binding::Value { target } => {
                        let Some(value) = tokens.get(index) else {
                            target.clear();
                            let error = ParseError::MissingValue {
                                token: token.clone(),
                            };
                            debug!(option = %option, error = %error, "Aborting parse");
                            self.errors.push(error);
                            return;
                        };
                        index += 1;
                        debug!(option = %option, value = %value, "Capturing value");
                        target.set(value.as_str());
                    }
                }
            }

            if !recognized {
                let error = ParseError::UnknownArgument {
                    token: token.clone(),
                };
                debug!(error = %error, "Unrecognized option");
                self.errors.push(error);
            }
        }
    }

    fn add_argument(&mut self, token: &str) {
        match self.arguments {
            Some(arguments) => {
                debug!(token = %token, "Adding positional argument");
                arguments.push(token);
            }
            None => {
                let error = ParseError::NoArgumentList {
                    token: token.to_string(),
                };
                debug!(error = %error, "Dropping positional argument");
                self.errors.push(error);
            }
        }
    }

    fn null_target(&mut self, short: Option<char>, long: Option<&str>) {
        let error = ParseError::NullTarget {
            short,
            long: long.map(String::from),
        };
        debug!(error = %error, "Skipping option registration");
        self.errors.push(error);
    }
}
