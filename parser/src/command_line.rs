//! The parse result.

use std::str::FromStr;

use optline_core::OptionDef;
use serde::Serialize;

use crate::error::ValueError;

/// A recognized option together with the values it accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedOption {
    /// The option definition.
    pub option: OptionDef,
    /// Values in the order they were encountered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Outcome of a successful parse.
///
/// Holds the recognized options, one entry per distinct option in order of
/// first appearance, and the positional arguments in input order. Lookup
/// methods accept an option's short or long name, with or without dashes.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionDef, Options};
/// use optline_parser::Parser;
///
/// let mut options = Options::new();
/// options.add(OptionDef::with_value("n").long("count")).unwrap();
///
/// let cmd = Parser::new().parse(&options, &["-n", "5", "file.txt"]).unwrap();
/// assert!(cmd.has_option("--count"));
/// assert_eq!(cmd.value("n"), Some("5"));
/// assert_eq!(cmd.parsed_value::<u32>("-n").unwrap(), Some(5));
/// assert_eq!(cmd.args(), ["file.txt"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandLine {
    options: Vec<ParsedOption>,
    args: Vec<String>,
}

impl CommandLine {
    pub(crate) fn new(options: Vec<ParsedOption>, args: Vec<String>) -> Self {
        Self { options, args }
    }

    fn find(&self, name: &str) -> Option<&ParsedOption> {
        self.options.iter().find(|parsed| parsed.option.matches(name))
    }

    /// Returns `true` if the option appeared.
    pub fn has_option(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns the first value of an option.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values(name)?.first().map(String::as_str)
    }

    /// Returns all values of an option, or `None` if it did not appear.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.find(name).map(|parsed| parsed.values.as_slice())
    }

    /// Returns the first value of an option, or `default`.
    pub fn value_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.value(name).unwrap_or(default)
    }

    /// Converts the first value of an option.
    ///
    /// Returns `Ok(None)` when the option did not appear or carries no value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] when the value does not parse as `T`.
    pub fn parsed_value<T>(&self, name: &str) -> Result<Option<T>, ValueError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(parsed) = self.find(name) else {
            return Ok(None);
        };
        let Some(value) = parsed.values.first() else {
            return Ok(None);
        };
        value.parse().map(Some).map_err(|err: T::Err| ValueError {
            option: parsed.option.key(),
            value: value.clone(),
            reason: err.to_string(),
        })
    }

    /// Recognized options in order of first appearance.
    pub fn options(&self) -> impl Iterator<Item = &ParsedOption> {
        self.options.iter()
    }

    /// Positional arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consumes the result, returning the positional arguments.
    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Returns `true` if neither options nor arguments were recorded.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.args.is_empty()
    }
}
