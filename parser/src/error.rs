//! Error types for parsing.

use thiserror::Error;

/// Reasons a parse is rejected.
///
/// Every variant aborts the whole parse; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A dash-prefixed token matches no registered option.
    #[error("unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// An option that needs a value reached the end of value consumption
    /// without one.
    #[error("missing argument for option: {0}")]
    MissingArgument(String),

    /// Required options or groups never appeared.
    #[error("missing required option(s): {}", .0.join(", "))]
    MissingOption(Vec<String>),

    /// A second, different member of a mutually exclusive group appeared.
    #[error("option {option} cannot be used with {selected} (group {group})")]
    GroupConflict {
        /// The group, rendered as `[-a, -b]`.
        group: String,
        /// The member selected earlier in the same parse.
        selected: String,
        /// The member that was rejected.
        option: String,
    },
}

/// Failure to convert an option value with
/// [`CommandLine::parsed_value`](crate::CommandLine::parsed_value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for option {option}: {reason}")]
pub struct ValueError {
    /// The option the value belongs to.
    pub option: String,
    /// The raw value.
    pub value: String,
    /// The conversion error message.
    pub reason: String,
}
