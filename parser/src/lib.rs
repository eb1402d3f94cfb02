//! Parse engine for command-line arguments.
//!
//! Given an [`Options`](optline_core::Options) registry and a list of
//! arguments, [`Parser`] separates recognized options (with their values)
//! from positional arguments and enforces required options and
//! mutual-exclusion groups.
//!
//! - [`Parser`] — the engine; generic over the [`Tokenizer`] that flattens
//!   raw arguments before parsing.
//! - [`CommandLine`] — the result, with typed value lookups.
//! - [`ParseError`] — unrecognized options, missing values, missing required
//!   options and group conflicts.
//! - [`output`] — JSON/YAML/table rendering of a result.
//!
//! # Example
//!
//! ```
//! use optline_core::{OptionDef, OptionGroup, Options};
//! use optline_parser::{ParseError, Parser};
//!
//! let mut options = Options::new();
//! options.add(OptionDef::with_value("n").long("lines")).unwrap();
//! options
//!     .add_group(
//!         OptionGroup::new()
//!             .with_option(OptionDef::flag("q").long("quiet"))
//!             .with_option(OptionDef::flag("v").long("verbose")),
//!     )
//!     .unwrap();
//!
//! let parser = Parser::new();
//! let cmd = parser.parse(&options, &["-n", "20", "--quiet", "log.txt"]).unwrap();
//! assert_eq!(cmd.parsed_value::<usize>("lines").unwrap(), Some(20));
//! assert_eq!(cmd.args(), ["log.txt"]);
//!
//! let err = parser.parse(&options, &["-q", "-v"]).unwrap_err();
//! assert!(matches!(err, ParseError::GroupConflict { .. }));
//! ```

mod command_line;
mod cursor;
mod engine;
mod error;
pub mod output;
mod tokenizer;
mod tracker;

pub use command_line::{CommandLine, ParsedOption};
pub use cursor::TokenCursor;
pub use engine::{LONE_DASH, Parser, TERMINATOR, parse};
pub use error::{ParseError, ValueError};
pub use tokenizer::{BasicTokenizer, Tokenizer};
