//! Combinator-based expression parser
//!
//! - `state`: the token cursor, match outcome and structural errors
//! - `combinators`: generic parser building blocks
//! - `grammar`: the PHP expression grammar built from them

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::{Grammar, expr, grammar, parse};
pub use state::{Mark, Match, ParseError, ParseResult, Parser, TokenStream};
