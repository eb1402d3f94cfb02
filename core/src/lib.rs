//! Option definitions and the option registry.
//!
//! This crate defines the declarative side of command-line parsing:
//!
//! - [`OptionDef`] — a recognized option with a short key, optional long key,
//!   [`Arity`] and required flag.
//! - [`OptionGroup`] — a set of mutually exclusive options.
//! - [`Options`] — the registry that maps keys to definitions and tracks
//!   group membership.
//! - [`OptionsConfig`] — the YAML/JSON declaration of a registry.
//!
//! Validation ([`validate_option`], [`validate_group`]) catches malformed
//! keys and duplicates before a registry is used.
//!
//! # Example
//!
//! ```
//! use optline_core::*;
//!
//! let mut options = Options::new();
//! options.add(OptionDef::flag("v").long("verbose")).unwrap();
//! options.add(OptionDef::with_value("n").long("count").required()).unwrap();
//! options
//!     .add_group(
//!         OptionGroup::new()
//!             .with_option(OptionDef::flag("a"))
//!             .with_option(OptionDef::flag("b")),
//!     )
//!     .unwrap();
//!
//! assert!(options.has_option("--count"));
//! assert_eq!(options.get("-n").unwrap().arity, Arity::One);
//! assert_eq!(options.required_options().len(), 1);
//! ```

mod config;
mod error;
mod registry;
mod types;
mod validate;

pub use config::OptionsConfig;
pub use error::{ConfigError, Result};
pub use registry::Options;
pub use types::*;
pub use validate::{ValidationError, validate_group, validate_option};
