use crate::token::{Token, TokenKind};

static END: Token = Token::new(TokenKind::EndOfInput, 0);

/// Forward-only reader over a token slice.
///
/// Reading past the end of the slice yields an `EndOfInput` token, so
/// the parser never has to special-case exhaustion.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenStream<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The current token. Does not advance.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    /// Return the current token and move past it.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pos < self.tokens.len()
    }
}
