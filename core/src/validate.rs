//! Registry validation.
//!
//! Reports option registrations that can never match, or that match the same
//! token as an earlier registration. Validation is opt-in and read-only: it
//! never changes how [`parse`](crate::ArgumentParser::parse) behaves.
//!
//! # Examples
//!
//! ```
//! use command_args_core::*;
//!
//! let verbose = FlagCell::default();
//! let quiet = FlagCell::default();
//! let mut parser = ArgumentParser::new();
//! parser.add_on_option(Some('v'), Some("verbose"), Some(&verbose));
//! assert!(parser.validate().is_empty());
//!
//! // Same short name twice: both options fire on `-v`.
//! parser.add_on_option(Some('v'), Some("quiet"), Some(&quiet));
//! assert_eq!(
//!     parser.validate(),
//!     vec![ValidationError::DuplicateName("-v".to_string())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::option::ArgOption;

/// Registry validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An option has neither a short nor a long name.
    #[error("option must define a short or long name")]
    MissingName,
    /// Short name `-`: its form `--` always ends option processing instead.
    #[error("short option name can never match: {0:?}")]
    UnmatchableShortName(char),
    /// Empty long name: its form `--` always ends option processing instead.
    #[error("long option name cannot be empty")]
    EmptyLongName,
    /// Two options answer to the same token; both fire when it appears.
    #[error("duplicate option name: {0}")]
    DuplicateName(String),
}

/// Validates options in registry order, collecting every problem found.
pub(crate) fn validate_options(options: &[ArgOption<'_>]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for option in options {
        if option.short.is_none() && option.long.is_none() {
            errors.push(ValidationError::MissingName);
            continue;
        }

        if let Some(short) = option.short {
            if short == '-' {
                errors.push(ValidationError::UnmatchableShortName(short));
            } else if let Some(form) = option.short_form() {
                if !seen.insert(form.clone()) {
                    errors.push(ValidationError::DuplicateName(form));
                }
            }
        }

        if let Some(long) = &option.long {
            if long.is_empty() {
                errors.push(ValidationError::EmptyLongName);
            } else if let Some(form) = option.long_form() {
                if !seen.insert(form.clone()) {
                    errors.push(ValidationError::DuplicateName(form));
                }
            }
        }
    }

    errors
}
