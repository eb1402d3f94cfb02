//! The flatten step that runs before the parse engine.
//!
//! A [`Tokenizer`] turns raw process arguments into a flat sequence of
//! independently classifiable tokens. The engine makes no assumption about
//! how that happens; it only consumes the result.

use optline_core::Options;

/// Turns raw arguments into the token sequence consumed by the engine.
///
/// Any `Fn(&Options, &[String], bool) -> Vec<String>` is a tokenizer, which
/// keeps one-off normalizations short:
///
/// ```
/// use optline_core::Options;
/// use optline_parser::Tokenizer;
///
/// let lowercase = |_: &Options, args: &[String], _: bool| -> Vec<String> {
///     args.iter().map(|a| a.to_lowercase()).collect()
/// };
/// let tokens = lowercase.flatten(&Options::new(), &["-V".to_string()], false);
/// assert_eq!(tokens, vec!["-v"]);
/// ```
pub trait Tokenizer {
    /// Flattens `arguments` against `options`.
    ///
    /// `stop_at_non_option` is forwarded from the caller so a tokenizer can
    /// leave everything after the first non-option untouched.
    fn flatten(
        &self,
        options: &Options,
        arguments: &[String],
        stop_at_non_option: bool,
    ) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&Options, &[String], bool) -> Vec<String>,
{
    fn flatten(
        &self,
        options: &Options,
        arguments: &[String],
        stop_at_non_option: bool,
    ) -> Vec<String> {
        self(options, arguments, stop_at_non_option)
    }
}

/// Tokenizer that passes arguments through unchanged.
///
/// Suitable when arguments are already one token per option or value, which
/// is the case for most programmatic callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicTokenizer;

impl Tokenizer for BasicTokenizer {
    fn flatten(
        &self,
        _options: &Options,
        arguments: &[String],
        _stop_at_non_option: bool,
    ) -> Vec<String> {
        arguments.to_vec()
    }
}
