//! Caller-owned storage that the parser writes into.
//!
//! The parser never owns its results. Callers create these cells, hand the
//! parser a shared reference to each one, and read the cells back once
//! [`ArgumentParser::parse`](crate::ArgumentParser::parse) returns. Interior
//! mutability ([`Cell`] and [`RefCell`]) lets the parser write through a
//! shared reference while the caller keeps ownership.

use std::cell::{Cell, RefCell};
use std::fmt;

use serde::Serialize;

/// A boolean the parser can switch on or off.
///
/// Bound through [`register_flag`](crate::ArgumentParser::register_flag) and
/// its on/off shorthands.
///
/// # Examples
///
/// ```
/// use command_args_core::FlagCell;
///
/// let verbose = FlagCell::new(false);
/// verbose.set(true);
/// assert!(verbose.get());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagCell(Cell<bool>);

impl FlagCell {
    /// Creates a flag holding `value`.
    pub fn new(value: bool) -> Self {
        Self(Cell::new(value))
    }

    /// Returns the current value.
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Overwrites the current value.
    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// Consumes the cell, returning the value.
    pub fn into_inner(self) -> bool {
        self.0.into_inner()
    }
}

impl From<bool> for FlagCell {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

/// A string the parser overwrites with an option's value.
///
/// Starts empty unless constructed otherwise. An empty cell after parsing
/// means the option was not given (or was given at the very end of the
/// command line without its value).
///
/// # Examples
///
/// ```
/// use command_args_core::ValueCell;
///
/// let output = ValueCell::default();
/// assert!(output.is_empty());
/// output.set("out.txt");
/// assert_eq!(output.get(), "out.txt");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValueCell(RefCell<String>);

impl ValueCell {
    /// Creates a cell holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self(RefCell::new(value.into()))
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    /// Replaces the current value.
    pub fn set(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }

    /// Empties the cell.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Consumes the cell, returning the value.
    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl From<&str> for ValueCell {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ValueCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.borrow())
    }
}

/// Ordered sink for positional arguments.
///
/// Attach one with
/// [`set_argument_sink`](crate::ArgumentParser::set_argument_sink). Without a
/// sink every positional token is reported as an error instead.
///
/// # Examples
///
/// ```
/// use command_args_core::ArgumentList;
///
/// let args = ArgumentList::new();
/// args.push("input.txt");
/// assert_eq!(args.to_vec(), vec!["input.txt".to_string()]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgumentList(RefCell<Vec<String>>);

impl ArgumentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an argument.
    pub fn push(&self, argument: impl Into<String>) {
        self.0.borrow_mut().push(argument.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a snapshot of the collected arguments.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    /// Consumes the list, returning the collected arguments.
    pub fn into_inner(self) -> Vec<String> {
        self.0.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_cell_set_through_shared_reference() {
        let flag = FlagCell::new(true);
        let shared = &flag;
        shared.set(false);
        assert!(!flag.get());
        assert!(!flag.into_inner());
    }

    #[test]
    fn test_value_cell_overwrites_and_clears() {
        let value = ValueCell::from("first");
        value.set("second");
        assert_eq!(value.to_string(), "second");
        value.clear();
        assert!(value.is_empty());
    }

    #[test]
    fn test_argument_list_preserves_order() {
        let list = ArgumentList::new();
        list.push("b");
        list.push("a");
        assert_eq!(list.len(), 2);
        assert_eq!(list.into_inner(), vec!["b", "a"]);
    }

    #[test]
    fn test_cells_serialize_transparently() {
        let flag = FlagCell::new(true);
        let value = ValueCell::new("x");
        let list = ArgumentList::new();
        list.push("pos");

        assert_eq!(serde_json::to_string(&flag).unwrap(), "true");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"x\"");
        assert_eq!(serde_json::to_string(&list).unwrap(), "[\"pos\"]");
    }
}
