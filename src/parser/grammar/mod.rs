//! Grammar for PHP-like expressions
//!
//! The grammar is one fixed composition of combinators, built on first use
//! and shared read-only afterwards. It is organised by category:
//! - `literal`: leaf tokens (numbers, strings, variables, names)
//! - `tiers`: builders for one precedence tier each
//! - `expression`: groups, calls, the ternary and the operator tables
//!
//! Tiers from loosest (tried first) to tightest:
//!
//! ```text
//! or  xor  and                      left
//! print                             prefix
//! = += -= ... ??=                   right
//! ? :                               left
//! ??                                right
//! ||  &&  |  ^  &                   left
//! == != === !== <=>                 non-associative
//! < <= > >=                         non-associative
//! << >>                             left
//! + - .                             left
//! * / %                             left
//! !                                 prefix
//! instanceof                        non-associative
//! ++ -- + - ~ @ (casts)             prefix
//! **                                right
//! clone new                         prefix
//! ++ --                             postfix
//! f(...)                            call
//! literal | variable | name | (expr)
//! ```

mod expression;
mod literal;
mod tiers;

use std::sync::LazyLock;

use crate::ast::Node;

use super::combinators::BoxedParser;
use super::state::{ParseResult, Parser, TokenStream};

use expression::*;
use tiers::{infix_left, infix_none, infix_right, postfix, prefix, prefix_with};

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(Grammar::build);

/// The composed expression grammar.
///
/// Besides the entry parser it keeps the tiers that other tiers refer back
/// to lazily.
pub struct Grammar {
    pub expr: BoxedParser<Node>,
    assignment: BoxedParser<Node>,
    coalesce: BoxedParser<Node>,
    unary: BoxedParser<Node>,
    not: BoxedParser<Node>,
}

impl Grammar {
    fn build() -> Self {
        let call = call(primary());
        let postfix = postfix(call, POSTFIX_OPS);
        let clone = prefix(CLONE_OPS, postfix);
        // `2 ** -1` and `2 ** !$x` are valid, so the right side starts at the
        // unary tier and falls back to `!`
        let power = infix_right(
            clone,
            POW_OPS,
            BoxedParser::lazy(|| &grammar().unary) | BoxedParser::lazy(|| &grammar().not),
        );
        let unary = prefix_with(
            UNARY_OPS,
            power.clone(),
            power | BoxedParser::lazy(|| &grammar().not),
        );
        let instanceof = infix_none(unary.clone(), INSTANCEOF_OPS);
        let not = prefix(NOT_OPS, instanceof);

        let multiplicative = infix_left(not.clone(), MULTIPLICATIVE_OPS);
        let additive = infix_left(multiplicative, ADDITIVE_OPS);
        let shift = infix_left(additive, SHIFT_OPS);
        let comparison = infix_none(shift, COMPARISON_OPS);
        let equality = infix_none(comparison, EQUALITY_OPS);
        let bit_and = infix_left(equality, BIT_AND_OPS);
        let bit_xor = infix_left(bit_and, BIT_XOR_OPS);
        let bit_or = infix_left(bit_xor, BIT_OR_OPS);
        let boolean_and = infix_left(bit_or, BOOLEAN_AND_OPS);
        let boolean_or = infix_left(boolean_and, BOOLEAN_OR_OPS);

        let coalesce = infix_right(
            boolean_or,
            COALESCE_OPS,
            BoxedParser::lazy(|| &grammar().coalesce),
        );
        let ternary = ternary(coalesce.clone());
        let assignment = infix_right(
            ternary,
            ASSIGNMENT_OPS,
            BoxedParser::lazy(|| &grammar().assignment),
        );
        let print = prefix(PRINT_OPS, assignment.clone());

        let logical_and = infix_left(print, LOGICAL_AND_OPS);
        let logical_xor = infix_left(logical_and, LOGICAL_XOR_OPS);
        let logical_or = infix_left(logical_xor, LOGICAL_OR_OPS);

        Grammar {
            expr: logical_or,
            assignment,
            coalesce,
            unary,
            not,
        }
    }
}

/// The process-wide grammar, built on first access.
pub fn grammar() -> &'static Grammar {
    &GRAMMAR
}

/// Entry parser: the loosest tier.
///
/// It stops at the first token that cannot continue the expression and
/// does not require the stream to be exhausted.
pub fn expr() -> &'static BoxedParser<Node> {
    &grammar().expr
}

/// Parses one expression at the current stream position.
pub fn parse(stream: &mut TokenStream) -> ParseResult<Node> {
    expr().parse(stream)
}
