use std::fmt;

use lachs::Span;

use crate::lexer::{Token, TokenKind};

/// Structural parse failure.
///
/// Raised once tokens have been consumed past the point where rolling back
/// would be unsound. Unlike [`Match::NoMatch`] it is never retried by an
/// alternative and always reaches the top-level caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A required token is missing, e.g. the `)` closing a group.
    Expected {
        expected: &'static str,
        found: Option<Token>,
    },
    /// A second non-associative operator directly follows the first.
    NonAssociative { first: Token, second: Token },
}

impl ParseError {
    pub fn expected(expected: &'static str, found: Option<&Token>) -> Self {
        ParseError::Expected {
            expected,
            found: found.cloned(),
        }
    }

    pub fn non_associative(first: Token, second: Token) -> Self {
        ParseError::NonAssociative { first, second }
    }

    /// Span of the token the error points at, if there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Expected { found, .. } => found.as_ref().map(Token::pos),
            ParseError::NonAssociative { second, .. } => Some(second.pos()),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::Expected {
                expected,
                found: Some(found),
            } => format!("expected {}, found {}", expected, found.describe()),
            ParseError::Expected {
                expected,
                found: None,
            } => format!("expected {}, found end of input", expected),
            ParseError::NonAssociative { first, second } => format!(
                "non-associative operator '{}' cannot follow '{}'",
                second.lexeme, first.lexeme
            ),
        };

        match self.span() {
            Some(span) if !span.source.is_empty() => write!(f, "{}", span.to_string(&msg)),
            _ => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Outcome of a parse attempt that did not fail structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum Match<T> {
    Matched(T),
    /// Nothing applied here. The stream is exactly where it was before.
    NoMatch,
}

impl<T> Match<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Match<U> {
        match self {
            Match::Matched(value) => Match::Matched(f(value)),
            Match::NoMatch => Match::NoMatch,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Match::Matched(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Match::Matched(value) => Some(value),
            Match::NoMatch => None,
        }
    }
}

impl<T> From<Option<T>> for Match<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Match::Matched(value),
            None => Match::NoMatch,
        }
    }
}

pub type ParseResult<T> = Result<Match<T>, ParseError>;

/// Opaque cursor position handed out by [`TokenStream::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

/// Cursor over a token sequence.
pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.is(kind))
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn checkpoint(&self) -> Mark {
        Mark(self.index)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.index = mark.0;
    }
}

pub trait Parser<T> {
    fn parse(&self, stream: &mut TokenStream) -> ParseResult<T>;
}

impl<T, F: Fn(&mut TokenStream) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, stream: &mut TokenStream) -> ParseResult<T> {
        self(stream)
    }
}
