//! Builders for one precedence tier each.
//!
//! Every builder takes the parser of the next tighter tier as its operand
//! and the set of operator kinds recognised at its own level. On `NoMatch`
//! the stream is always back where the tier started.

use crate::ast::Node;
use crate::lexer::TokenKind;

use crate::parser::combinators::{BoxedParser, token};
use crate::parser::state::{Match, ParseError, Parser, TokenStream};

/// tier := operand (op operand)*, folded to the left
///
/// An operator without a right operand is put back and ends the fold.
pub fn infix_left(operand: BoxedParser<Node>, operators: &'static [TokenKind]) -> BoxedParser<Node> {
    let operator = token(operators);

    BoxedParser::new(move |stream: &mut TokenStream| {
        let Match::Matched(mut left) = operand.parse(stream)? else {
            return Ok(Match::NoMatch);
        };

        loop {
            let pos = stream.checkpoint();
            let Match::Matched(op) = operator.parse(stream)? else {
                break;
            };
            match operand.parse(stream)? {
                Match::Matched(right) => left = Node::binary(left, op, right),
                Match::NoMatch => {
                    stream.reset(pos);
                    break;
                }
            }
        }

        Ok(Match::Matched(left))
    })
}

/// tier := operand [op rhs]
///
/// `rhs` is normally a lazy reference back to this very tier, which makes
/// `a op b op c` lean to the right.
pub fn infix_right(
    operand: BoxedParser<Node>,
    operators: &'static [TokenKind],
    rhs: BoxedParser<Node>,
) -> BoxedParser<Node> {
    let operator = token(operators);

    BoxedParser::new(move |stream: &mut TokenStream| {
        let Match::Matched(left) = operand.parse(stream)? else {
            return Ok(Match::NoMatch);
        };

        let pos = stream.checkpoint();
        let Match::Matched(op) = operator.parse(stream)? else {
            return Ok(Match::Matched(left));
        };

        match rhs.parse(stream)? {
            Match::Matched(right) => Ok(Match::Matched(Node::binary(left, op, right))),
            Match::NoMatch => {
                stream.reset(pos);
                Ok(Match::Matched(left))
            }
        }
    })
}

/// tier := operand [op operand]
///
/// A second operator of the same tier right after the right operand is a
/// structural error.
pub fn infix_none(operand: BoxedParser<Node>, operators: &'static [TokenKind]) -> BoxedParser<Node> {
    let operator = token(operators);

    BoxedParser::new(move |stream: &mut TokenStream| {
        let Match::Matched(left) = operand.parse(stream)? else {
            return Ok(Match::NoMatch);
        };

        let pos = stream.checkpoint();
        let Match::Matched(op) = operator.parse(stream)? else {
            return Ok(Match::Matched(left));
        };

        let Match::Matched(right) = operand.parse(stream)? else {
            stream.reset(pos);
            return Ok(Match::Matched(left));
        };

        match stream.peek() {
            Some(next) if operators.contains(&next.kind) => {
                Err(ParseError::non_associative(op, next.clone()))
            }
            _ => Ok(Match::Matched(Node::binary(left, op, right))),
        }
    })
}

/// tier := op* operand
///
/// Operators nest innermost-last, so `- ~ 1` is `(-, (~, 1))`.
pub fn prefix(operators: &'static [TokenKind], operand: BoxedParser<Node>) -> BoxedParser<Node> {
    prefix_with(operators, operand.clone(), operand)
}

/// Like [`prefix`], but once at least one operator has been consumed the
/// operand is parsed with `after_operator` instead.
///
/// This lets a looser prefix form appear directly under a tighter one
/// (`-!$x`) without making the tier left-recursive.
pub fn prefix_with(
    operators: &'static [TokenKind],
    operand: BoxedParser<Node>,
    after_operator: BoxedParser<Node>,
) -> BoxedParser<Node> {
    let operator = token(operators);

    BoxedParser::new(move |stream: &mut TokenStream| {
        let start = stream.checkpoint();

        let mut ops = Vec::new();
        while let Match::Matched(op) = operator.parse(stream)? {
            ops.push(op);
        }

        let inner = if ops.is_empty() {
            &operand
        } else {
            &after_operator
        };

        match inner.parse(stream)? {
            Match::Matched(node) => Ok(Match::Matched(
                ops.into_iter()
                    .rev()
                    .fold(node, |acc, op| Node::prefix(op, acc)),
            )),
            Match::NoMatch => {
                stream.reset(start);
                Ok(Match::NoMatch)
            }
        }
    })
}

/// tier := operand op*
pub fn postfix(operand: BoxedParser<Node>, operators: &'static [TokenKind]) -> BoxedParser<Node> {
    let operator = token(operators);

    BoxedParser::new(move |stream: &mut TokenStream| {
        let Match::Matched(mut node) = operand.parse(stream)? else {
            return Ok(Match::NoMatch);
        };

        while let Match::Matched(op) = operator.parse(stream)? {
            node = Node::postfix(node, op);
        }

        Ok(Match::Matched(node))
    })
}
