//! Non-throwing command-line argument parsing.
//!
//! This crate parses a raw argument vector against a table of options that
//! the caller registers up front:
//!
//! - [`ArgumentParser`] — the option registry and the token walk.
//! - [`FlagCell`], [`ValueCell`] — caller-owned cells that matched options
//!   write into.
//! - [`ArgumentList`] — caller-owned sink for positional arguments.
//! - [`ParseError`] — one entry of the parser's error log.
//!
//! Parsing never returns an error and never panics. Problems such as unknown
//! options or a value option missing its value are appended to
//! [`ArgumentParser::errors`], which callers check after each parse.
//!
//! Supported syntax: `-x`, `--long-name`, grouped short options `-xyz`, the
//! `--` terminator and a bare `-`. Values follow their option as a separate
//! token; `--name=value` and `-ovalue` are not recognized.
//!
//! # Example
//!
//! ```
//! use command_args_core::*;
//!
//! let a = FlagCell::new(false);
//! let b = FlagCell::new(true);
//! let c = ValueCell::default();
//! let arguments = ArgumentList::new();
//!
//! let mut parser = ArgumentParser::new();
//! parser.set_argument_sink(&arguments);
//! parser.add_on_option(Some('a'), Some("a-option"), Some(&a));
//! parser.add_off_option(Some('b'), Some("b-option"), Some(&b));
//! parser.register_value(Some('c'), Some("c-option"), Some(&c));
//! parser.parse(["-ab", "-c", "val", "pos1", "--", "-a", "pos2"]);
//!
//! assert!(parser.errors().is_empty());
//! assert!(a.get());
//! assert!(!b.get());
//! assert_eq!(c.get(), "val");
//! assert_eq!(arguments.to_vec(), ["pos1", "-a", "pos2"]);
//! ```

mod cell;
mod error;
mod expand;
mod option;
mod parser;
mod validate;

pub use cell::{ArgumentList, FlagCell, ValueCell};
pub use error::ParseError;
pub use expand::{expand_short_groups, is_short_group};
pub use parser::{ArgumentParser, END_OF_OPTIONS, STDIO_ARGUMENT};
pub use validate::ValidationError;
