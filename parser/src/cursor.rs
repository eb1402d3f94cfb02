//! Rewindable cursor over a flattened token sequence.

/// Index-based cursor supporting look-ahead and a one-step push back.
///
/// Tokens are borrowed for the lifetime of the underlying slice, so a token
/// returned by [`advance`](Self::advance) stays usable while the cursor keeps
/// moving.
///
/// # Examples
///
/// ```
/// use optline_parser::TokenCursor;
///
/// let tokens = vec!["-n".to_string(), "5".to_string()];
/// let mut cursor = TokenCursor::new(&tokens);
///
/// assert_eq!(cursor.advance(), Some("-n"));
/// assert_eq!(cursor.advance(), Some("5"));
/// cursor.retreat();
/// assert_eq!(cursor.peek(), Some("5"));
/// ```
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [String],
    position: usize,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor positioned before the first token.
    pub fn new(tokens: &'t [String]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns the next token and moves past it.
    pub fn advance(&mut self) -> Option<&'t str> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token.as_str())
    }

    /// Returns the next token without moving.
    pub fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// Steps back one token so the next [`advance`](Self::advance) returns
    /// it again.
    pub fn retreat(&mut self) {
        debug_assert!(self.position > 0, "retreat before first advance");
        self.position = self.position.saturating_sub(1);
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consumes all remaining tokens.
    pub fn drain(&mut self) -> impl Iterator<Item = &'t str> + use<'t> {
        let tokens = self.tokens;
        let rest = &tokens[self.position..];
        self.position = tokens.len();
        rest.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_advance_until_exhausted() {
        let items = tokens(&["a", "b"]);
        let mut cursor = TokenCursor::new(&items);

        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.advance(), Some("a"));
        assert_eq!(cursor.advance(), Some("b"));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_retreat_rereads_token() {
        let items = tokens(&["-n", "5", "-v"]);
        let mut cursor = TokenCursor::new(&items);

        cursor.advance();
        cursor.advance();
        let boundary = cursor.advance();
        cursor.retreat();

        assert_eq!(cursor.advance(), boundary);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_drain_takes_rest() {
        let items = tokens(&["x", "--", "y"]);
        let mut cursor = TokenCursor::new(&items);

        cursor.advance();
        let rest: Vec<&str> = cursor.drain().collect();

        assert_eq!(rest, vec!["--", "y"]);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_empty_sequence() {
        let items: Vec<String> = Vec::new();
        let mut cursor = TokenCursor::new(&items);

        assert!(cursor.is_exhausted());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.drain().count(), 0);
    }
}
