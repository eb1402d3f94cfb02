//! Option and group definitions.
//!
//! This module defines the declarative data model for recognized options.
//! The types are designed for serialization with [`serde`] so a registry can
//! be declared in a YAML or JSON file and loaded at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable handle to an option registered in an [`Options`](crate::Options)
/// registry.
///
/// Handles are only meaningful for the registry that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(usize);

impl OptionId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the option in its registry, usable as an arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stable handle to a group registered in an [`Options`](crate::Options)
/// registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the group in its registry, usable as an arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// How many values an option accepts.
///
/// # Examples
///
/// ```
/// use optline_core::Arity;
///
/// assert!(!Arity::None.takes_value());
/// assert_eq!(Arity::One.max_values(), Some(1));
/// assert_eq!(Arity::Unbounded.max_values(), None);
/// assert!(Arity::OptionalOne.is_optional());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Arity {
    /// Plain flag, never carries a value (the default).
    #[default]
    None,
    /// Exactly one value is required.
    One,
    /// Zero or one value.
    OptionalOne,
    /// One or more values.
    Unbounded,
    /// Zero or more values.
    OptionalUnbounded,
}

impl Arity {
    /// Returns `true` unless this is [`Arity::None`].
    pub fn takes_value(self) -> bool {
        self != Arity::None
    }

    /// Returns `true` if the option is valid with no value attached.
    pub fn is_optional(self) -> bool {
        matches!(self, Arity::OptionalOne | Arity::OptionalUnbounded)
    }

    /// Upper bound on the number of values, `None` when unbounded.
    pub fn max_values(self) -> Option<usize> {
        match self {
            Arity::None => Some(0),
            Arity::One | Arity::OptionalOne => Some(1),
            Arity::Unbounded | Arity::OptionalUnbounded => None,
        }
    }
}

/// Definition of a recognized option.
///
/// An option has a short key (e.g. `v`, matched by the token `-v`) and an
/// optional long key (e.g. `verbose`, matched by `--verbose`). Keys are
/// stored without their leading dashes.
///
/// # Examples
///
/// ```
/// use optline_core::{Arity, OptionDef};
///
/// let verbose = OptionDef::flag("v").long("verbose");
/// assert_eq!(verbose.key(), "-v");
/// assert!(verbose.matches("--verbose"));
/// assert!(verbose.matches("v"));
///
/// let output = OptionDef::with_value("o").long("output").required();
/// assert_eq!(output.arity, Arity::One);
/// assert!(output.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDef {
    /// Short key without the leading dash.
    pub short: String,
    /// Long key without the leading dashes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    /// Number of values accepted.
    #[serde(default)]
    pub arity: Arity,
    /// Whether the option must appear in every parse.
    #[serde(default)]
    pub required: bool,
    /// Splits each accepted token into several values (e.g. `,`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_separator: Option<char>,
}

impl OptionDef {
    /// Creates an option with the given short key and arity.
    pub fn new(short: &str, arity: Arity) -> Self {
        Self {
            short: short.to_string(),
            long: None,
            arity,
            required: false,
            value_separator: None,
        }
    }

    /// Creates a flag that never carries a value.
    pub fn flag(short: &str) -> Self {
        Self::new(short, Arity::None)
    }

    /// Creates an option that takes exactly one value.
    pub fn with_value(short: &str) -> Self {
        Self::new(short, Arity::One)
    }

    /// Sets the long key.
    pub fn long(mut self, long: &str) -> Self {
        self.long = Some(long.to_string());
        self
    }

    /// Sets the arity.
    pub fn arity(mut self, arity: Arity) -> Self {
        self.arity = arity;
        self
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Splits accepted tokens on `separator`.
    pub fn value_separator(mut self, separator: char) -> Self {
        self.value_separator = Some(separator);
        self
    }

    /// Returns the dash-prefixed short identifier (e.g. `-v`).
    ///
    /// This is the name used in error messages and the required-options
    /// bookkeeping.
    pub fn key(&self) -> String {
        format!("-{}", self.short)
    }

    /// Checks if `name` designates this option.
    ///
    /// Leading dashes are ignored, so `-v`, `--v` and `v` all match short key
    /// `v`, and the same holds for the long key.
    pub fn matches(&self, name: &str) -> bool {
        let bare = strip_dashes(name);
        !bare.is_empty() && (self.short == bare || self.long.as_deref() == Some(bare))
    }

    /// Offers `token` as one more value of this option.
    ///
    /// Returns `false`, leaving `values` untouched, when the option cannot
    /// take the token: flags never take values, and single-valued options
    /// refuse once they hold a value. With a value separator the token is
    /// split and its pieces are only accepted if all of them fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{Arity, OptionDef};
    ///
    /// let define = OptionDef::new("D", Arity::Unbounded).value_separator('=');
    /// let mut values = Vec::new();
    /// assert!(define.accept_value(&mut values, "key=value"));
    /// assert_eq!(values, vec!["key", "value"]);
    ///
    /// let single = OptionDef::with_value("n");
    /// let mut values = vec!["1".to_string()];
    /// assert!(!single.accept_value(&mut values, "2"));
    /// ```
    pub fn accept_value(&self, values: &mut Vec<String>, token: &str) -> bool {
        let pieces: Vec<&str> = match self.value_separator {
            Some(separator) => token.split(separator).collect(),
            None => vec![token],
        };

        match self.arity.max_values() {
            Some(max) if values.len() + pieces.len() > max => false,
            _ => {
                values.extend(pieces.into_iter().map(String::from));
                true
            }
        }
    }
}

impl fmt::Display for OptionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.long {
            Some(long) => write!(f, "-{}, --{long}", self.short),
            None => write!(f, "-{}", self.short),
        }
    }
}

/// A set of mutually exclusive options.
///
/// At most one member may appear in a single parse. A required group is
/// satisfied by any one of its members.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionDef, OptionGroup};
///
/// let group = OptionGroup::new()
///     .with_option(OptionDef::flag("a"))
///     .with_option(OptionDef::flag("b"))
///     .required();
/// assert_eq!(group.options.len(), 2);
/// assert!(group.required);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Member options.
    pub options: Vec<OptionDef>,
    /// Whether one member must appear.
    #[serde(default)]
    pub required: bool,
}

impl OptionGroup {
    /// Creates an empty, optional group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member option.
    pub fn with_option(mut self, option: OptionDef) -> Self {
        self.options.push(option);
        self
    }

    /// Marks the group as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Registry-side record of a group: its members as [`OptionId`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDef {
    pub(crate) members: Vec<OptionId>,
    pub(crate) required: bool,
}

impl GroupDef {
    /// Member options, in registration order.
    pub fn members(&self) -> &[OptionId] {
        &self.members
    }

    /// Whether one member must appear.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// An entry of the required-options working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// A required option.
    Option(OptionId),
    /// A required group, satisfied by any member.
    Group(GroupId),
}

pub(crate) fn strip_dashes(name: &str) -> &str {
    name.trim_start_matches('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_creation() {
        let flag = OptionDef::flag("v").long("verbose");

        assert_eq!(flag.short, "v");
        assert_eq!(flag.long.as_deref(), Some("verbose"));
        assert_eq!(flag.arity, Arity::None);
        assert!(!flag.required);
        assert_eq!(flag.key(), "-v");
        assert_eq!(flag.to_string(), "-v, --verbose");
    }

    #[test]
    fn test_matches_ignores_dashes() {
        let flag = OptionDef::flag("v").long("verbose");

        assert!(flag.matches("-v"));
        assert!(flag.matches("--verbose"));
        assert!(flag.matches("verbose"));
        assert!(!flag.matches("-x"));
        assert!(!flag.matches("-"));
        assert!(!flag.matches("--"));
    }

    #[test]
    fn test_flag_refuses_values() {
        let flag = OptionDef::flag("v");
        let mut values = Vec::new();

        assert!(!flag.accept_value(&mut values, "anything"));
        assert!(values.is_empty());
    }

    #[test]
    fn test_single_value_capacity() {
        let opt = OptionDef::new("o", Arity::OptionalOne);
        let mut values = Vec::new();

        assert!(opt.accept_value(&mut values, "first"));
        assert!(!opt.accept_value(&mut values, "second"));
        assert_eq!(values, vec!["first"]);
    }

    #[test]
    fn test_unbounded_accepts_everything() {
        let opt = OptionDef::new("f", Arity::Unbounded);
        let mut values = Vec::new();

        for token in ["a", "b", "c"] {
            assert!(opt.accept_value(&mut values, token));
        }
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_separator_refuses_token_that_does_not_fit() {
        let opt = OptionDef::with_value("p").value_separator(',');
        let mut values = Vec::new();

        assert!(!opt.accept_value(&mut values, "a,b"));
        assert!(values.is_empty());
        assert!(opt.accept_value(&mut values, "a"));
    }

    #[test]
    fn test_arity_deserializes_kebab_case() {
        let arity: Arity = serde_json::from_str("\"optional-unbounded\"").unwrap();
        assert_eq!(arity, Arity::OptionalUnbounded);
        assert!(arity.is_optional());
        assert_eq!(arity.max_values(), None);
    }
}
