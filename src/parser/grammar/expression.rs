//! Expression forms that are not plain operator tiers, and the operator
//! tables for the tiers that are.

use crate::ast::Node;
use crate::lexer::TokenKind;

use crate::parser::combinators::{BoxedParser, require, separated, token};
use crate::parser::state::{Match, ParseError, Parser, TokenStream};

use super::expr;
use super::literal::scalar;

pub const POSTFIX_OPS: &[TokenKind] = &[TokenKind::Inc, TokenKind::Dec];

pub const CLONE_OPS: &[TokenKind] = &[TokenKind::Clone, TokenKind::New];

pub const POW_OPS: &[TokenKind] = &[TokenKind::Pow];

pub const UNARY_OPS: &[TokenKind] = &[
    TokenKind::Inc,
    TokenKind::Dec,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Tilde,
    TokenKind::At,
    TokenKind::IntCast,
    TokenKind::DoubleCast,
    TokenKind::StringCast,
    TokenKind::ArrayCast,
    TokenKind::ObjectCast,
    TokenKind::BoolCast,
    TokenKind::UnsetCast,
];

pub const INSTANCEOF_OPS: &[TokenKind] = &[TokenKind::Instanceof];

pub const NOT_OPS: &[TokenKind] = &[TokenKind::Bang];

pub const MULTIPLICATIVE_OPS: &[TokenKind] =
    &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent];

pub const ADDITIVE_OPS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus, TokenKind::Dot];

pub const SHIFT_OPS: &[TokenKind] = &[TokenKind::ShiftLeft, TokenKind::ShiftRight];

pub const COMPARISON_OPS: &[TokenKind] = &[
    TokenKind::Less,
    TokenKind::IsSmallerOrEqual,
    TokenKind::Greater,
    TokenKind::IsGreaterOrEqual,
];

pub const EQUALITY_OPS: &[TokenKind] = &[
    TokenKind::IsEqual,
    TokenKind::IsNotEqual,
    TokenKind::IsIdentical,
    TokenKind::IsNotIdentical,
    TokenKind::Spaceship,
];

pub const BIT_AND_OPS: &[TokenKind] = &[TokenKind::Ampersand];

pub const BIT_XOR_OPS: &[TokenKind] = &[TokenKind::Caret];

pub const BIT_OR_OPS: &[TokenKind] = &[TokenKind::Pipe];

pub const BOOLEAN_AND_OPS: &[TokenKind] = &[TokenKind::BooleanAnd];

pub const BOOLEAN_OR_OPS: &[TokenKind] = &[TokenKind::BooleanOr];

pub const COALESCE_OPS: &[TokenKind] = &[TokenKind::Coalesce];

pub const ASSIGNMENT_OPS: &[TokenKind] = &[
    TokenKind::Assign,
    TokenKind::PlusEqual,
    TokenKind::MinusEqual,
    TokenKind::MulEqual,
    TokenKind::DivEqual,
    TokenKind::ConcatEqual,
    TokenKind::ModEqual,
    TokenKind::PowEqual,
    TokenKind::AndEqual,
    TokenKind::OrEqual,
    TokenKind::XorEqual,
    TokenKind::ShiftLeftEqual,
    TokenKind::ShiftRightEqual,
    TokenKind::CoalesceEqual,
];

pub const PRINT_OPS: &[TokenKind] = &[TokenKind::Print];

pub const LOGICAL_AND_OPS: &[TokenKind] = &[TokenKind::LogicalAnd];

pub const LOGICAL_XOR_OPS: &[TokenKind] = &[TokenKind::LogicalXor];

pub const LOGICAL_OR_OPS: &[TokenKind] = &[TokenKind::LogicalOr];

/// group := "(" expression ")"
///
/// If nothing parses after the `(` the group simply does not match. Once
/// the inner expression has matched, a missing `)` is a structural error.
pub fn group() -> BoxedParser<Node> {
    let open = token(&[TokenKind::LParen]);
    let close = require(TokenKind::RParen, "')'");

    (open * BoxedParser::lazy(expr) - close) >> |inner| Node::Grouped(vec![inner])
}

/// primary := scalar | group
pub fn primary() -> BoxedParser<Node> {
    scalar() | group()
}

/// Nodes that may be followed by an argument list.
fn is_callable(node: &Node) -> bool {
    match node {
        Node::Leaf(token) => matches!(token.kind, TokenKind::Name | TokenKind::Variable),
        Node::Grouped(_) | Node::Call { .. } => true,
        _ => false,
    }
}

/// call := primary ("(" [expression ("," expression)* [","]] ")")*
pub fn call(primary: BoxedParser<Node>) -> BoxedParser<Node> {
    let open = token(&[TokenKind::LParen]);
    let arguments = separated(BoxedParser::lazy(expr), token(&[TokenKind::Comma]));
    let trailing_comma = token(&[TokenKind::Comma]);
    let close = require(TokenKind::RParen, "')'");

    BoxedParser::new(move |stream: &mut TokenStream| {
        let Match::Matched(mut node) = primary.parse(stream)? else {
            return Ok(Match::NoMatch);
        };

        while is_callable(&node) && stream.peek_is(TokenKind::LParen) {
            open.parse(stream)?;
            let args = arguments.parse(stream)?.into_option().unwrap_or_default();
            if !args.is_empty() {
                trailing_comma.parse(stream)?;
            }
            close.parse(stream)?;
            node = Node::call(node, args);
        }

        Ok(Match::Matched(node))
    })
}

/// ternary := operand ("?" [expression] ":" operand)*
///
/// Folded to the left. A `?` that is not followed by `:`, or a `:` that is
/// not followed by an operand, is a structural error.
pub fn ternary(operand: BoxedParser<Node>) -> BoxedParser<Node> {
    let question_mark = token(&[TokenKind::Question]);
    let middle = BoxedParser::lazy(expr);
    let colon_mark = require(TokenKind::Colon, "':'");

    BoxedParser::new(move |stream: &mut TokenStream| {
        let Match::Matched(mut condition) = operand.parse(stream)? else {
            return Ok(Match::NoMatch);
        };

        loop {
            let pos = stream.checkpoint();
            let Match::Matched(question) = question_mark.parse(stream)? else {
                break;
            };
            let then = middle.parse(stream)?.into_option().map(Box::new);
            let Match::Matched(colon) = colon_mark.parse(stream)? else {
                stream.reset(pos);
                break;
            };
            let Match::Matched(otherwise) = operand.parse(stream)? else {
                return Err(ParseError::expected("an expression", stream.peek()));
            };

            condition = Node::Ternary {
                condition: Box::new(condition),
                question,
                then,
                colon,
                otherwise: Box::new(otherwise),
            };
        }

        Ok(Match::Matched(condition))
    })
}
