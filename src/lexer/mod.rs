//! Lexer front end for PHP-like expressions.
//!
//! The raw tokenizer is generated by `lachs`. Its output is converted into
//! [`Token`] values, which are what the parser consumes. The parser never
//! calls back into this module.

mod token;

pub use token::{Token, TokenKind};

use lachs::Span;

#[lachs::token]
pub enum RawToken {
    #[terminal("clone")]
    Clone,
    #[terminal("new")]
    New,
    #[terminal("instanceof")]
    Instanceof,
    #[terminal("print")]
    Print,
    #[terminal("and")]
    LogicalAnd,
    #[terminal("or")]
    LogicalOr,
    #[terminal("xor")]
    LogicalXor,
    #[terminal("(int)")]
    IntCast,
    #[terminal("(integer)")]
    IntegerCast,
    #[terminal("(float)")]
    FloatCast,
    #[terminal("(double)")]
    DoubleCast,
    #[terminal("(real)")]
    RealCast,
    #[terminal("(string)")]
    StringCast,
    #[terminal("(array)")]
    ArrayCast,
    #[terminal("(object)")]
    ObjectCast,
    #[terminal("(bool)")]
    BoolCast,
    #[terminal("(boolean)")]
    BooleanCast,
    #[terminal("(unset)")]
    UnsetCast,
    #[literal(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Variable,
    #[literal(r"[0-9]*\.[0-9]+([eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+")]
    DNumber,
    #[literal("0[xX][0-9a-fA-F]+|0[bB][01]+|[0-9]+")]
    LNumber,
    #[literal(r#"'([^'\\]|\\.)*'"#)]
    SingleQuoted,
    #[literal(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,
    #[literal("[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,
    #[terminal("**")]
    Pow,
    #[terminal("++")]
    Inc,
    #[terminal("--")]
    Dec,
    #[terminal("==")]
    IsEqual,
    #[terminal("!=")]
    IsNotEqual,
    #[terminal("<>")]
    IsNotEqualAlt,
    #[terminal("===")]
    IsIdentical,
    #[terminal("!==")]
    IsNotIdentical,
    #[terminal("<=>")]
    Spaceship,
    #[terminal("<=")]
    IsSmallerOrEqual,
    #[terminal(">=")]
    IsGreaterOrEqual,
    #[terminal("<<")]
    ShiftLeft,
    #[terminal(">>")]
    ShiftRight,
    #[terminal("&&")]
    BooleanAnd,
    #[terminal("||")]
    BooleanOr,
    #[terminal("??")]
    Coalesce,
    #[terminal("+=")]
    PlusEqual,
    #[terminal("-=")]
    MinusEqual,
    #[terminal("*=")]
    MulEqual,
    #[terminal("/=")]
    DivEqual,
    #[terminal(".=")]
    ConcatEqual,
    #[terminal("%=")]
    ModEqual,
    #[terminal("**=")]
    PowEqual,
    #[terminal("&=")]
    AndEqual,
    #[terminal("|=")]
    OrEqual,
    #[terminal("^=")]
    XorEqual,
    #[terminal("<<=")]
    ShiftLeftEqual,
    #[terminal(">>=")]
    ShiftRightEqual,
    #[terminal("??=")]
    CoalesceEqual,
    #[terminal("+")]
    Plus,
    #[terminal("-")]
    Minus,
    #[terminal("*")]
    Star,
    #[terminal("/")]
    Slash,
    #[terminal("%")]
    Percent,
    #[terminal(".")]
    Dot,
    #[terminal("<")]
    Less,
    #[terminal(">")]
    Greater,
    #[terminal("=")]
    Assign,
    #[terminal("&")]
    Ampersand,
    #[terminal("|")]
    Pipe,
    #[terminal("^")]
    Caret,
    #[terminal("~")]
    Tilde,
    #[terminal("!")]
    Bang,
    #[terminal("@")]
    At,
    #[terminal("?")]
    Question,
    #[terminal(":")]
    Colon,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
    #[terminal(",")]
    Comma,
    #[terminal(";")]
    Semicolon,
}

impl RawToken {
    /// Splits a raw token into kind, source text and position.
    fn into_parts(self) -> (TokenKind, String, Span) {
        use TokenKind as K;

        let (kind, lexeme, position) = match self {
            RawToken::Clone(t) => (K::Clone, "clone", t.position),
            RawToken::New(t) => (K::New, "new", t.position),
            RawToken::Instanceof(t) => (K::Instanceof, "instanceof", t.position),
            RawToken::Print(t) => (K::Print, "print", t.position),
            RawToken::LogicalAnd(t) => (K::LogicalAnd, "and", t.position),
            RawToken::LogicalOr(t) => (K::LogicalOr, "or", t.position),
            RawToken::LogicalXor(t) => (K::LogicalXor, "xor", t.position),
            RawToken::IntCast(t) => (K::IntCast, "(int)", t.position),
            RawToken::IntegerCast(t) => (K::IntCast, "(integer)", t.position),
            RawToken::FloatCast(t) => (K::DoubleCast, "(float)", t.position),
            RawToken::DoubleCast(t) => (K::DoubleCast, "(double)", t.position),
            RawToken::RealCast(t) => (K::DoubleCast, "(real)", t.position),
            RawToken::StringCast(t) => (K::StringCast, "(string)", t.position),
            RawToken::ArrayCast(t) => (K::ArrayCast, "(array)", t.position),
            RawToken::ObjectCast(t) => (K::ObjectCast, "(object)", t.position),
            RawToken::BoolCast(t) => (K::BoolCast, "(bool)", t.position),
            RawToken::BooleanCast(t) => (K::BoolCast, "(boolean)", t.position),
            RawToken::UnsetCast(t) => (K::UnsetCast, "(unset)", t.position),
            RawToken::Variable(t) => return (K::Variable, t.value, t.position),
            RawToken::DNumber(t) => return (K::DNumber, t.value, t.position),
            RawToken::LNumber(t) => return (K::LNumber, t.value, t.position),
            RawToken::SingleQuoted(t) => return (K::String, t.value, t.position),
            RawToken::DoubleQuoted(t) => return (K::String, t.value, t.position),
            RawToken::Name(t) => return (K::Name, t.value, t.position),
            RawToken::Pow(t) => (K::Pow, "**", t.position),
            RawToken::Inc(t) => (K::Inc, "++", t.position),
            RawToken::Dec(t) => (K::Dec, "--", t.position),
            RawToken::IsEqual(t) => (K::IsEqual, "==", t.position),
            RawToken::IsNotEqual(t) => (K::IsNotEqual, "!=", t.position),
            RawToken::IsNotEqualAlt(t) => (K::IsNotEqual, "<>", t.position),
            RawToken::IsIdentical(t) => (K::IsIdentical, "===", t.position),
            RawToken::IsNotIdentical(t) => (K::IsNotIdentical, "!==", t.position),
            RawToken::Spaceship(t) => (K::Spaceship, "<=>", t.position),
            RawToken::IsSmallerOrEqual(t) => (K::IsSmallerOrEqual, "<=", t.position),
            RawToken::IsGreaterOrEqual(t) => (K::IsGreaterOrEqual, ">=", t.position),
            RawToken::ShiftLeft(t) => (K::ShiftLeft, "<<", t.position),
            RawToken::ShiftRight(t) => (K::ShiftRight, ">>", t.position),
            RawToken::BooleanAnd(t) => (K::BooleanAnd, "&&", t.position),
            RawToken::BooleanOr(t) => (K::BooleanOr, "||", t.position),
            RawToken::Coalesce(t) => (K::Coalesce, "??", t.position),
            RawToken::PlusEqual(t) => (K::PlusEqual, "+=", t.position),
            RawToken::MinusEqual(t) => (K::MinusEqual, "-=", t.position),
            RawToken::MulEqual(t) => (K::MulEqual, "*=", t.position),
            RawToken::DivEqual(t) => (K::DivEqual, "/=", t.position),
            RawToken::ConcatEqual(t) => (K::ConcatEqual, ".=", t.position),
            RawToken::ModEqual(t) => (K::ModEqual, "%=", t.position),
            RawToken::PowEqual(t) => (K::PowEqual, "**=", t.position),
            RawToken::AndEqual(t) => (K::AndEqual, "&=", t.position),
            RawToken::OrEqual(t) => (K::OrEqual, "|=", t.position),
            RawToken::XorEqual(t) => (K::XorEqual, "^=", t.position),
            RawToken::ShiftLeftEqual(t) => (K::ShiftLeftEqual, "<<=", t.position),
            RawToken::ShiftRightEqual(t) => (K::ShiftRightEqual, ">>=", t.position),
            RawToken::CoalesceEqual(t) => (K::CoalesceEqual, "??=", t.position),
            RawToken::Plus(t) => (K::Plus, "+", t.position),
            RawToken::Minus(t) => (K::Minus, "-", t.position),
            RawToken::Star(t) => (K::Star, "*", t.position),
            RawToken::Slash(t) => (K::Slash, "/", t.position),
            RawToken::Percent(t) => (K::Percent, "%", t.position),
            RawToken::Dot(t) => (K::Dot, ".", t.position),
            RawToken::Less(t) => (K::Less, "<", t.position),
            RawToken::Greater(t) => (K::Greater, ">", t.position),
            RawToken::Assign(t) => (K::Assign, "=", t.position),
            RawToken::Ampersand(t) => (K::Ampersand, "&", t.position),
            RawToken::Pipe(t) => (K::Pipe, "|", t.position),
            RawToken::Caret(t) => (K::Caret, "^", t.position),
            RawToken::Tilde(t) => (K::Tilde, "~", t.position),
            RawToken::Bang(t) => (K::Bang, "!", t.position),
            RawToken::At(t) => (K::At, "@", t.position),
            RawToken::Question(t) => (K::Question, "?", t.position),
            RawToken::Colon(t) => (K::Colon, ":", t.position),
            RawToken::LParen(t) => (K::LParen, "(", t.position),
            RawToken::RParen(t) => (K::RParen, ")", t.position),
            RawToken::Comma(t) => (K::Comma, ",", t.position),
            RawToken::Semicolon(t) => (K::Semicolon, ";", t.position),
        };

        (kind, lexeme.to_string(), position)
    }
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        let (kind, lexeme, position) = raw.into_parts();
        Token::new(kind, lexeme, position)
    }
}

/// Tokenizes expression source text.
///
/// Whitespace is skipped. An optional leading `<?php` open tag is removed
/// first, so that snippets copied from PHP files can be fed in directly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, String> {
    let source = strip_open_tag(source);
    let raw = RawToken::lex(source).map_err(|err| err.to_string())?;
    Ok(raw.into_iter().map(Token::from).collect())
}

fn strip_open_tag(source: &str) -> &str {
    let trimmed = source.trim_start();
    match trimmed.strip_prefix("<?php") {
        Some(rest) => rest,
        None => source,
    }
}
