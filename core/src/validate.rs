//! Option and group validation.
//!
//! Checks the structural invariants of option definitions before they enter a
//! registry: key formats, arity/separator consistency and non-empty groups.
//! Duplicate keys are detected by the registry itself, since they depend on
//! what was registered before.
//!
//! # Examples
//!
//! ```
//! use optline_core::*;
//!
//! assert!(validate_option(&OptionDef::flag("v").long("verbose")).is_ok());
//!
//! // Invalid: keys are stored without dashes
//! assert_eq!(
//!     validate_option(&OptionDef::flag("-v")),
//!     Err(ValidationError::InvalidShortKey("-v".to_string())),
//! );
//! ```

use thiserror::Error;

use crate::{OptionDef, OptionGroup};

/// Option/group validation errors.
///
/// Each variant describes a specific structural problem. The `Display` impl
/// provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Short key is empty, starts with a dash or contains invalid characters.
    #[error("invalid short option key: {0:?}")]
    InvalidShortKey(String),
    /// Long key is empty, starts with a dash or contains invalid characters.
    #[error("invalid long option key: {0:?}")]
    InvalidLongKey(String),
    /// A value separator was set on an option that takes no value.
    #[error("option {0} takes no value but declares a value separator")]
    SeparatorWithoutValue(String),
    /// Two options share the same short or long key.
    #[error("duplicate option key: {0}")]
    DuplicateOption(String),
    /// A group has no members.
    #[error("option group must contain at least one option")]
    EmptyGroup,
}

/// Validates a single option definition.
///
/// Short keys may contain ASCII alphanumerics and `_`, `?`, `@`; long keys
/// additionally allow inner `-` and `.` (e.g. `dry-run`).
pub fn validate_option(option: &OptionDef) -> Result<(), ValidationError> {
    if !is_valid_short(&option.short) {
        return Err(ValidationError::InvalidShortKey(option.short.clone()));
    }

    if let Some(long) = &option.long {
        if !is_valid_long(long) {
            return Err(ValidationError::InvalidLongKey(long.clone()));
        }
    }

    if option.value_separator.is_some() && !option.arity.takes_value() {
        return Err(ValidationError::SeparatorWithoutValue(option.key()));
    }

    Ok(())
}

/// Validates a group and each of its members.
///
/// # Examples
///
/// ```
/// use optline_core::*;
///
/// assert_eq!(validate_group(&OptionGroup::new()), Err(ValidationError::EmptyGroup));
/// ```
pub fn validate_group(group: &OptionGroup) -> Result<(), ValidationError> {
    if group.options.is_empty() {
        return Err(ValidationError::EmptyGroup);
    }
    group.options.iter().try_for_each(validate_option)
}

fn is_valid_short(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '?' | '@'))
}

fn is_valid_long(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('-')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
