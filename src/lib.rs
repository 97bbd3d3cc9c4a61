//! # php-expr - Combinator-based Parser for PHP-like Expressions
//!
//! This crate turns a token stream for a PHP-style expression into a tree
//! that encodes operator precedence and associativity. It is meant to be
//! embedded in source-to-source tools (macro preprocessors, rewriters)
//! which need to know exactly how far an expression extends and how it
//! nests.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Vec<Token>
//!     ↓
//! [TokenStream] → cursor with checkpoint/reset
//!     ↓
//! [Grammar] → Match<Node> or ParseError
//!     ↓
//! [Dump / Source printer]
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Two kinds of failure
//! - `Match::NoMatch`: the alternative does not apply here. Nothing was
//!   consumed, so the caller may try something else.
//! - `ParseError`: tokens were consumed past a point of no return (an open
//!   parenthesis without its close). This aborts the whole parse.
//!
//! ### One grammar per process
//! The grammar is built once from combinators and shared read-only. All
//! mutable state lives in the `TokenStream` the caller owns, so the same
//! grammar can parse independent streams on different threads.
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Token cursor, combinators and the expression grammar
//! - [`ast`] - Expression tree and its canonical dump
//! - [`fmt`] - Printing trees back to expression source
//!
//! ## Example
//!
//! ```no_run
//! let node = php_expr::parse_complete("1 + 2 * 3").unwrap();
//! assert_eq!(node.dump(), "(LNUM(1), '+', (LNUM(2), '*', LNUM(3)))");
//! ```

pub mod ast;
pub mod fmt;
pub mod lexer;
pub mod parser;

use lexer::Token;
use parser::{Match, ParseError, TokenStream};

/// Errors surfaced by the source-level entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The lexer rejected the input.
    Lex(String),
    /// Structural parse failure.
    Parse(ParseError),
    /// The input does not start with an expression.
    NoExpression(Option<Token>),
    /// An expression was parsed but tokens are left over.
    Trailing(Token),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(msg) => write!(f, "Lex error: {}", msg),
            Error::Parse(err) => write!(f, "{}", err),
            Error::NoExpression(None) => write!(f, "Parse error: expected an expression"),
            Error::NoExpression(Some(token)) => {
                let msg = format!("expected an expression, found {}", token.describe());
                write_at(f, token, &msg)
            }
            Error::Trailing(token) => {
                let msg = format!("unexpected {} after expression", token.describe());
                write_at(f, token, &msg)
            }
        }
    }
}

fn write_at(f: &mut std::fmt::Formatter<'_>, token: &Token, msg: &str) -> std::fmt::Result {
    if token.position.source.is_empty() {
        write!(f, "Parse error: {}", msg)
    } else {
        write!(f, "{}", token.position.to_string(msg))
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

/// Lexes `source` and parses one expression from its start.
///
/// Returns `Ok(None)` when the input does not begin with an expression.
/// Tokens after the expression are ignored.
pub fn parse_source(source: &str) -> Result<Option<ast::Node>, Error> {
    let tokens = lexer::tokenize(source).map_err(Error::Lex)?;
    let mut stream = TokenStream::new(tokens);
    Ok(parser::parse(&mut stream)?.into_option())
}

/// Like [`parse_source`], but the whole input must be one expression.
///
/// A single trailing `;` is accepted.
pub fn parse_complete(source: &str) -> Result<ast::Node, Error> {
    let tokens = lexer::tokenize(source).map_err(Error::Lex)?;
    let mut stream = TokenStream::new(tokens);

    let node = match parser::parse(&mut stream)? {
        Match::Matched(node) => node,
        Match::NoMatch => return Err(Error::NoExpression(stream.peek().cloned())),
    };

    if stream.peek_is(lexer::TokenKind::Semicolon) {
        stream.advance();
    }

    match stream.peek() {
        Some(token) => Err(Error::Trailing(token.clone())),
        None => Ok(node),
    }
}
