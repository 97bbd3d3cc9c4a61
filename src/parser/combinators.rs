use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::sync::Arc;

use crate::lexer::{Token, TokenKind};

use super::state::{Match, ParseError, ParseResult, Parser, TokenStream};

type ParserFn<T> = Arc<dyn Fn(&mut TokenStream) -> ParseResult<T> + Send + Sync>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + Send + Sync + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Arc::new(move |stream| parser.parse(stream)),
        }
    }

    /// Defers to a parser that is only reachable once the grammar exists.
    ///
    /// This is how tiers refer back to looser tiers (or to themselves)
    /// without building an infinite parser value.
    pub fn lazy(get: fn() -> &'static BoxedParser<T>) -> Self {
        BoxedParser::new(move |stream: &mut TokenStream| get().parse(stream))
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, stream: &mut TokenStream) -> ParseResult<T> {
        (self.parser)(stream)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    ///
    /// If `other` does not match, the stream is rolled back to where `self`
    /// started and the whole sequence reports `NoMatch`.
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |stream: &mut TokenStream| {
            let start = stream.checkpoint();
            let Match::Matched(a) = self.parse(stream)? else {
                return Ok(Match::NoMatch);
            };
            match other.parse(stream)? {
                Match::Matched(b) => Ok(Match::Matched((a, b))),
                Match::NoMatch => {
                    stream.reset(start);
                    Ok(Match::NoMatch)
                }
            }
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        self.seq(other).map(|(a, _)| a)
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.seq(other).map(|(_, b)| b)
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + Send + Sync + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |stream: &mut TokenStream| Ok(self.parse(stream)?.map(&f)))
    }

    /// Choice: try self, if it does not match try other from the same position.
    ///
    /// A structural error from `self` is returned as is; `other` is not tried.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |stream: &mut TokenStream| {
            let start = stream.checkpoint();
            match self.parse(stream)? {
                Match::Matched(a) => Ok(Match::Matched(a)),
                Match::NoMatch => {
                    stream.reset(start);
                    other.parse(stream)
                }
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + Send + Sync + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Matches exactly one token whose kind is in `kinds`.
pub fn token(kinds: &'static [TokenKind]) -> BoxedParser<Token> {
    assert!(!kinds.is_empty(), "token parser needs at least one kind");

    BoxedParser::new(move |stream: &mut TokenStream| match stream.peek() {
        Some(tok) if kinds.contains(&tok.kind) => Ok(Match::from(stream.advance())),
        _ => Ok(Match::NoMatch),
    })
}

/// Like [`token`], but a missing token is a structural error.
///
/// Only use this after the caller has committed to a production.
pub fn require(kind: TokenKind, expected: &'static str) -> BoxedParser<Token> {
    BoxedParser::new(move |stream: &mut TokenStream| match stream.peek() {
        Some(tok) if tok.is(kind) => Ok(Match::from(stream.advance())),
        found => Err(ParseError::expected(expected, found)),
    })
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |stream: &mut TokenStream| {
        let mut results = Vec::new();
        loop {
            let pos = stream.checkpoint();
            match parser.parse(stream)? {
                Match::Matched(item) => {
                    results.push(item);
                    // an item that consumed nothing would match forever
                    if stream.checkpoint() == pos {
                        break;
                    }
                }
                Match::NoMatch => {
                    stream.reset(pos);
                    break;
                }
            }
        }
        Ok(Match::Matched(results))
    })
}

/// Parse one or more occurrences
pub fn many1<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    let rest = many(parser.clone());
    (parser + rest).map(|(first, mut rest)| {
        rest.insert(0, first);
        rest
    })
}

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |stream: &mut TokenStream| {
        let pos = stream.checkpoint();
        match parser.parse(stream)? {
            Match::Matched(item) => Ok(Match::Matched(Some(item))),
            Match::NoMatch => {
                stream.reset(pos);
                Ok(Match::Matched(None))
            }
        }
    })
}

/// separated := [item (sep item)*]
///
/// A separator that is not followed by an item is left unconsumed.
pub fn separated<T: 'static, S: 'static>(
    item: BoxedParser<T>,
    separator: BoxedParser<S>,
) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |stream: &mut TokenStream| {
        let mut items = Vec::new();

        let Match::Matched(first) = item.parse(stream)? else {
            return Ok(Match::Matched(items));
        };
        items.push(first);

        loop {
            let pos = stream.checkpoint();
            if !separator.parse(stream)?.is_matched() {
                stream.reset(pos);
                break;
            }
            match item.parse(stream)? {
                Match::Matched(next) => items.push(next),
                Match::NoMatch => {
                    stream.reset(pos);
                    break;
                }
            }
        }

        Ok(Match::Matched(items))
    })
}
