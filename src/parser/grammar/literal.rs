//! Leaf parsers: single tokens that stand alone in the tree.

use crate::ast::Node;
use crate::lexer::TokenKind;

use crate::parser::combinators::{BoxedParser, token};

/// Matches one token of the given kinds and wraps it as a leaf.
pub fn leaf(kinds: &'static [TokenKind]) -> BoxedParser<Node> {
    token(kinds) >> Node::Leaf
}

/// number := LNUM | DNUM
pub fn number() -> BoxedParser<Node> {
    leaf(&[TokenKind::LNumber, TokenKind::DNumber])
}

/// string := 'single quoted' | "double quoted"
pub fn string_literal() -> BoxedParser<Node> {
    leaf(&[TokenKind::String])
}

/// variable := $name
pub fn variable() -> BoxedParser<Node> {
    leaf(&[TokenKind::Variable])
}

/// name := identifier (constants, function and class names)
pub fn name() -> BoxedParser<Node> {
    leaf(&[TokenKind::Name])
}

/// scalar := number | string | variable | name
pub fn scalar() -> BoxedParser<Node> {
    number() | string_literal() | variable() | name()
}
