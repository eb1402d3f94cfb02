//! The parse engine.
//!
//! [`Parser`] runs a tokenizer over the raw arguments and then classifies the
//! resulting tokens in a single left-to-right pass:
//!
//! 1. `--` switches to consume-rest mode and is dropped.
//! 2. `-` is a positional argument, or with stop-at-non-option it switches to
//!    consume-rest mode and is dropped.
//! 3. Other dash-prefixed tokens are options. With stop-at-non-option an
//!    unknown one is kept as a positional argument and switches to
//!    consume-rest mode.
//! 4. Anything else is a positional argument; with stop-at-non-option it also
//!    switches to consume-rest mode.
//!
//! In consume-rest mode every remaining token, including a later `--`, is
//! appended to the positional arguments verbatim.
//!
//! Option values are collected greedily: tokens are taken until the next
//! known option, the end of input, or the option refusing another value. The
//! boundary token is pushed back onto the cursor for the main loop.

use optline_core::{GroupId, OptionId, Options, Requirement};
use tracing::{debug, trace};

use crate::command_line::{CommandLine, ParsedOption};
use crate::cursor::TokenCursor;
use crate::error::ParseError;
use crate::tokenizer::{BasicTokenizer, Tokenizer};
use crate::tracker::RequiredTracker;

/// Token that ends option processing.
pub const TERMINATOR: &str = "--";

/// Token conventionally standing for stdin/stdout.
pub const LONE_DASH: &str = "-";

/// Parses argument lists against an [`Options`] registry.
///
/// The parser holds no per-parse state: option values and group selections
/// live in an arena created for each call, so one parser and one registry can
/// be shared freely, including across threads.
///
/// # Examples
///
/// ```
/// use optline_core::{OptionDef, Options};
/// use optline_parser::Parser;
///
/// let mut options = Options::new();
/// options.add(OptionDef::flag("x")).unwrap();
///
/// let parser = Parser::new();
/// let cmd = parser.parse_with(&options, &["-x", "pos1", "-y"], true).unwrap();
/// assert!(cmd.has_option("-x"));
/// assert_eq!(cmd.args(), ["pos1", "-y"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser<T = BasicTokenizer> {
    tokenizer: T,
}

impl Parser<BasicTokenizer> {
    /// Creates a parser that feeds arguments to the engine unchanged.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Tokenizer> Parser<T> {
    /// Creates a parser that flattens arguments with `tokenizer` first.
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Parses `arguments`, treating options anywhere in the list as options.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse<S: AsRef<str>>(
        &self,
        options: &Options,
        arguments: &[S],
    ) -> Result<CommandLine, ParseError> {
        self.parse_with(options, arguments, false)
    }

    /// Parses `arguments`.
    ///
    /// With `stop_at_non_option`, the first positional argument (or unknown
    /// dash-prefixed token) ends option processing and everything from there
    /// on is positional.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse_with<S: AsRef<str>>(
        &self,
        options: &Options,
        arguments: &[S],
        stop_at_non_option: bool,
    ) -> Result<CommandLine, ParseError> {
        let arguments: Vec<String> = arguments
            .iter()
            .map(|argument| argument.as_ref().to_string())
            .collect();
        let tokens = self
            .tokenizer
            .flatten(options, &arguments, stop_at_non_option);
        ParseRun::new(options, stop_at_non_option).run(&tokens)
    }
}

/// Parses `arguments` with the default [`Parser`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse<S: AsRef<str>>(
    options: &Options,
    arguments: &[S],
) -> Result<CommandLine, ParseError> {
    Parser::new().parse(options, arguments)
}

/// State of one parse invocation.
struct ParseRun<'o> {
    options: &'o Options,
    stop_at_non_option: bool,
    values: Vec<Vec<String>>,
    selected: Vec<Option<OptionId>>,
    order: Vec<OptionId>,
    args: Vec<String>,
    tracker: RequiredTracker,
}

impl<'o> ParseRun<'o> {
    fn new(options: &'o Options, stop_at_non_option: bool) -> Self {
        Self {
            options,
            stop_at_non_option,
            values: vec![Vec::new(); options.len()],
            selected: vec![None; options.group_count()],
            order: Vec::new(),
            args: Vec::new(),
            tracker: RequiredTracker::seed(options),
        }
    }

    fn run(mut self, tokens: &[String]) -> Result<CommandLine, ParseError> {
        let mut cursor = TokenCursor::new(tokens);
        let mut consume_rest = false;

        while let Some(token) = cursor.advance() {
            if token == TERMINATOR {
                trace!("terminator");
                consume_rest = true;
            } else if token == LONE_DASH {
                if self.stop_at_non_option {
                    consume_rest = true;
                } else {
                    self.args.push(token.to_string());
                }
            } else if token.starts_with('-') {
                if self.stop_at_non_option && !self.options.is_option_token(token) {
                    trace!(token, "unknown option stops option processing");
                    consume_rest = true;
                    self.args.push(token.to_string());
                } else {
                    self.process_option(token, &mut cursor)?;
                }
            } else {
                trace!(token, "positional argument");
                self.args.push(token.to_string());
                if self.stop_at_non_option {
                    consume_rest = true;
                }
            }

            if consume_rest {
                debug!(
                    remaining = cursor.remaining(),
                    "consuming remaining tokens as arguments"
                );
                self.args.extend(cursor.drain().map(str::to_string));
            }
        }

        self.finish()
    }

    fn process_option(
        &mut self,
        token: &str,
        cursor: &mut TokenCursor<'_>,
    ) -> Result<(), ParseError> {
        let options = self.options;
        let id = options
            .resolve(token)
            .ok_or_else(|| ParseError::UnrecognizedOption(token.to_string()))?;
        let option = options.option(id);
        trace!(token, option = %option, "option");

        if option.required {
            self.tracker.satisfy(Requirement::Option(id));
        }

        if let Some(group) = options.group_of(id) {
            if options.group(group).is_required() {
                self.tracker.satisfy(Requirement::Group(group));
            }
            self.select(group, id)?;
        }

        if option.arity.takes_value() {
            self.consume_values(id, cursor)?;
        }

        if !self.order.contains(&id) {
            self.order.push(id);
        }
        Ok(())
    }

    fn select(&mut self, group: GroupId, id: OptionId) -> Result<(), ParseError> {
        match self.selected[group.index()] {
            Some(current) if current != id => Err(ParseError::GroupConflict {
                group: self.options.group_name(group),
                selected: self.options.option(current).key(),
                option: self.options.option(id).key(),
            }),
            _ => {
                self.selected[group.index()] = Some(id);
                Ok(())
            }
        }
    }

    fn consume_values(
        &mut self,
        id: OptionId,
        cursor: &mut TokenCursor<'_>,
    ) -> Result<(), ParseError> {
        let options = self.options;
        let option = options.option(id);
        let values = &mut self.values[id.index()];

        while let Some(token) = cursor.advance() {
            if options.is_option_token(token) || !option.accept_value(values, token) {
                cursor.retreat();
                break;
            }
        }

        if values.is_empty() && !option.arity.is_optional() {
            return Err(ParseError::MissingArgument(option.key()));
        }
        Ok(())
    }

    fn finish(self) -> Result<CommandLine, ParseError> {
        self.tracker.finish(self.options)?;

        let mut values = self.values;
        let parsed: Vec<ParsedOption> = self
            .order
            .iter()
            .map(|id| ParsedOption {
                option: self.options.option(*id).clone(),
                values: std::mem::take(&mut values[id.index()]),
            })
            .collect();

        debug!(
            options = parsed.len(),
            args = self.args.len(),
            "parsed command line"
        );
        Ok(CommandLine::new(parsed, self.args))
    }
}

#[cfg(test)]
mod tests {
    use optline_core::{Arity, OptionDef, OptionGroup};

    use super::*;

    fn sample() -> Options {
        let mut options = Options::new();
        options.add(OptionDef::flag("a").long("all")).unwrap();
        options.add(OptionDef::flag("b")).unwrap();
        options.add(OptionDef::with_value("n").long("count")).unwrap();
        options
            .add(OptionDef::new("o", Arity::OptionalOne).long("output"))
            .unwrap();
        options
            .add(OptionDef::new("f", Arity::Unbounded).long("files"))
            .unwrap();
        options
            .add(OptionDef::new("D", Arity::OptionalUnbounded).value_separator('='))
            .unwrap();
        options
    }

    fn parse(args: &[&str]) -> Result<CommandLine, ParseError> {
        Parser::new().parse(&sample(), args)
    }

    #[test]
    fn test_positional_only() {
        let cmd = parse(&["one", "two", "-"]).unwrap();
        assert_eq!(cmd.args(), ["one", "two", "-"]);
        assert_eq!(cmd.options().count(), 0);
    }

    #[test]
    fn test_terminator_swallows_options() {
        let cmd = parse(&["--", "-a", "-b"]).unwrap();
        assert_eq!(cmd.args(), ["-a", "-b"]);
        assert!(!cmd.has_option("-a"));
    }

    #[test]
    fn test_second_terminator_is_data() {
        let cmd = parse(&["-a", "--", "x", "--", "y"]).unwrap();
        assert_eq!(cmd.args(), ["x", "--", "y"]);
    }

    #[test]
    fn test_single_value() {
        let cmd = parse(&["-n", "5", "file.txt"]).unwrap();
        assert_eq!(cmd.value("-n"), Some("5"));
        assert_eq!(cmd.args(), ["file.txt"]);
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            parse(&["-n"]),
            Err(ParseError::MissingArgument("-n".to_string()))
        );
        assert_eq!(
            parse(&["-n", "-a"]),
            Err(ParseError::MissingArgument("-n".to_string()))
        );
    }

    #[test]
    fn test_optional_value_may_be_absent() {
        let cmd = parse(&["--output", "-a"]).unwrap();
        assert!(cmd.has_option("-o"));
        assert_eq!(cmd.values("-o").unwrap().len(), 0);
        assert!(cmd.has_option("-a"));

        let cmd = parse(&["-D"]).unwrap();
        assert!(cmd.has_option("-D"));
    }

    #[test]
    fn test_unbounded_stops_at_next_option() {
        let cmd = parse(&["-f", "a.txt", "b.txt", "-b", "c.txt"]).unwrap();
        assert_eq!(cmd.values("--files").unwrap(), ["a.txt", "b.txt"]);
        assert!(cmd.has_option("-b"));
        assert_eq!(cmd.args(), ["c.txt"]);
    }

    #[test]
    fn test_unbounded_takes_unknown_dash_tokens() {
        let cmd = parse(&["-f", "-x"]).unwrap();
        assert_eq!(cmd.values("-f").unwrap(), ["-x"]);
    }

    #[test]
    fn test_bare_word_spelling_a_key_is_a_value() {
        let cmd = parse(&["-n", "a"]).unwrap();
        assert_eq!(cmd.value("-n"), Some("a"));
        assert!(!cmd.has_option("-a"));
    }

    #[test]
    fn test_values_accumulate_across_occurrences() {
        let cmd = parse(&["-D", "k1=v1", "-a", "-D", "k2=v2"]).unwrap();
        assert_eq!(cmd.values("-D").unwrap(), ["k1", "v1", "k2", "v2"]);
        assert_eq!(cmd.options().count(), 2);

        let cmd = parse(&["-n", "1", "-n", "2"]).unwrap();
        assert_eq!(cmd.values("-n").unwrap(), ["1"]);
        assert_eq!(cmd.args(), ["2"]);
    }

    #[test]
    fn test_options_in_first_appearance_order() {
        let cmd = parse(&["-b", "-a", "-b"]).unwrap();
        let keys: Vec<String> = cmd.options().map(|p| p.option.key()).collect();
        assert_eq!(keys, vec!["-b", "-a"]);
    }

    #[test]
    fn test_unrecognized_option() {
        assert_eq!(
            parse(&["-z"]),
            Err(ParseError::UnrecognizedOption("-z".to_string()))
        );
    }

    #[test]
    fn test_stop_at_non_option() {
        let options = sample();
        let parser = Parser::new();

        let cmd = parser
            .parse_with(&options, &["-a", "pos", "-b"], true)
            .unwrap();
        assert!(cmd.has_option("-a"));
        assert!(!cmd.has_option("-b"));
        assert_eq!(cmd.args(), ["pos", "-b"]);

        let cmd = parser.parse_with(&options, &["-z", "-a"], true).unwrap();
        assert_eq!(cmd.args(), ["-z", "-a"]);
        assert!(!cmd.has_option("-a"));

        let cmd = parser.parse_with(&options, &["-a", "-", "-b"], true).unwrap();
        assert_eq!(cmd.args(), ["-b"]);
    }

    #[test]
    fn test_group_conflict() {
        let mut options = Options::new();
        options
            .add_group(
                OptionGroup::new()
                    .with_option(OptionDef::flag("x"))
                    .with_option(OptionDef::flag("y")),
            )
            .unwrap();

        let err = Parser::new().parse(&options, &["-x", "-y"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::GroupConflict {
                group: "[-x, -y]".to_string(),
                selected: "-x".to_string(),
                option: "-y".to_string(),
            }
        );

        let cmd = Parser::new().parse(&options, &["-x", "-x"]).unwrap();
        assert!(cmd.has_option("-x"));
    }

    #[test]
    fn test_required_group_member_satisfies_both_entries() {
        let mut options = Options::new();
        options
            .add_group(
                OptionGroup::new()
                    .with_option(OptionDef::flag("j").required())
                    .with_option(OptionDef::flag("k"))
                    .required(),
            )
            .unwrap();
        let parser = Parser::new();

        let cmd = parser.parse(&options, &["-j"]).unwrap();
        assert!(cmd.has_option("-j"));

        assert_eq!(
            parser.parse::<&str>(&options, &[]),
            Err(ParseError::MissingOption(vec![
                "-j".to_string(),
                "[-j, -k]".to_string()
            ]))
        );
        assert_eq!(
            parser.parse(&options, &["-k"]),
            Err(ParseError::MissingOption(vec!["-j".to_string()]))
        );
    }

    #[test]
    fn test_tokenizer_sees_stop_flag() {
        let mark_stop = |_: &Options, args: &[String], stop: bool| -> Vec<String> {
            let mut tokens = args.to_vec();
            if stop {
                tokens.push("stopped".to_string());
            }
            tokens
        };
        let parser = Parser::with_tokenizer(mark_stop);

        let cmd = parser.parse_with(&sample(), &["-a"], true).unwrap();
        assert_eq!(cmd.args(), ["stopped"]);

        let cmd = parser.parse(&sample(), &["-a"]).unwrap();
        assert!(cmd.args().is_empty());
    }

    #[test]
    fn test_custom_tokenizer_runs_first() {
        let split_equals = |_: &Options, args: &[String], _: bool| -> Vec<String> {
            args.iter()
                .flat_map(|arg| match arg.split_once('=') {
                    Some((name, value)) if arg.starts_with("--") => {
                        vec![name.to_string(), value.to_string()]
                    }
                    _ => vec![arg.clone()],
                })
                .collect()
        };
        let parser = Parser::with_tokenizer(split_equals);

        let cmd = parser.parse(&sample(), &["--count=3"]).unwrap();
        assert_eq!(cmd.value("-n"), Some("3"));
    }
}
