//! Token definitions shared by the lexer and the parser.
//!
//! A [`Token`] is the unit the parser works on. It is created once (by
//! [`super::tokenize`] or by hand in tests) and never mutated afterwards.

use std::fmt;

use lachs::Span;

/// Every kind of token the expression grammar knows about.
///
/// Named kinds dump as `KIND(lexeme)`, single-character punctuation dumps
/// as the quoted character (`'+'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    LNumber,
    DNumber,
    String,
    Variable,
    Name,

    // keywords
    Clone,
    New,
    Instanceof,
    Print,
    LogicalAnd,
    LogicalOr,
    LogicalXor,

    // casts
    IntCast,
    DoubleCast,
    StringCast,
    ArrayCast,
    ObjectCast,
    BoolCast,
    UnsetCast,

    // multi-character operators
    Pow,
    Inc,
    Dec,
    IsEqual,
    IsNotEqual,
    IsIdentical,
    IsNotIdentical,
    Spaceship,
    IsSmallerOrEqual,
    IsGreaterOrEqual,
    ShiftLeft,
    ShiftRight,
    BooleanAnd,
    BooleanOr,
    Coalesce,

    // compound assignment
    PlusEqual,
    MinusEqual,
    MulEqual,
    DivEqual,
    ConcatEqual,
    ModEqual,
    PowEqual,
    AndEqual,
    OrEqual,
    XorEqual,
    ShiftLeftEqual,
    ShiftRightEqual,
    CoalesceEqual,

    // single characters
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Dot,
    Less,
    Greater,
    Assign,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    Bang,
    At,
    Question,
    Colon,
    LParen,
    RParen,
    Comma,
    Semicolon,
}

impl TokenKind {
    /// The name used in dumps. Punctuation comes back already quoted.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LNumber => "LNUM",
            TokenKind::DNumber => "DNUM",
            TokenKind::String => "STRING",
            TokenKind::Variable => "VAR",
            TokenKind::Name => "NAME",
            TokenKind::Clone => "CLONE",
            TokenKind::New => "NEW",
            TokenKind::Instanceof => "INSTANCEOF",
            TokenKind::Print => "PRINT",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::LogicalXor => "LOGICAL_XOR",
            TokenKind::IntCast => "INT_CAST",
            TokenKind::DoubleCast => "DOUBLE_CAST",
            TokenKind::StringCast => "STRING_CAST",
            TokenKind::ArrayCast => "ARRAY_CAST",
            TokenKind::ObjectCast => "OBJECT_CAST",
            TokenKind::BoolCast => "BOOL_CAST",
            TokenKind::UnsetCast => "UNSET_CAST",
            TokenKind::Pow => "POW",
            TokenKind::Inc => "INC",
            TokenKind::Dec => "DEC",
            TokenKind::IsEqual => "IS_EQUAL",
            TokenKind::IsNotEqual => "IS_NOT_EQUAL",
            TokenKind::IsIdentical => "IS_IDENTICAL",
            TokenKind::IsNotIdentical => "IS_NOT_IDENTICAL",
            TokenKind::Spaceship => "SPACESHIP",
            TokenKind::IsSmallerOrEqual => "IS_SMALLER_OR_EQUAL",
            TokenKind::IsGreaterOrEqual => "IS_GREATER_OR_EQUAL",
            TokenKind::ShiftLeft => "SL",
            TokenKind::ShiftRight => "SR",
            TokenKind::BooleanAnd => "BOOLEAN_AND",
            TokenKind::BooleanOr => "BOOLEAN_OR",
            TokenKind::Coalesce => "COALESCE",
            TokenKind::PlusEqual => "PLUS_EQUAL",
            TokenKind::MinusEqual => "MINUS_EQUAL",
            TokenKind::MulEqual => "MUL_EQUAL",
            TokenKind::DivEqual => "DIV_EQUAL",
            TokenKind::ConcatEqual => "CONCAT_EQUAL",
            TokenKind::ModEqual => "MOD_EQUAL",
            TokenKind::PowEqual => "POW_EQUAL",
            TokenKind::AndEqual => "AND_EQUAL",
            TokenKind::OrEqual => "OR_EQUAL",
            TokenKind::XorEqual => "XOR_EQUAL",
            TokenKind::ShiftLeftEqual => "SL_EQUAL",
            TokenKind::ShiftRightEqual => "SR_EQUAL",
            TokenKind::CoalesceEqual => "COALESCE_EQUAL",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Dot => "'.'",
            TokenKind::Less => "'<'",
            TokenKind::Greater => "'>'",
            TokenKind::Assign => "'='",
            TokenKind::Ampersand => "'&'",
            TokenKind::Pipe => "'|'",
            TokenKind::Caret => "'^'",
            TokenKind::Tilde => "'~'",
            TokenKind::Bang => "'!'",
            TokenKind::At => "'@'",
            TokenKind::Question => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
        }
    }

    /// Single-character punctuation, dumped without a lexeme.
    pub fn is_punctuation(&self) -> bool {
        self.name().starts_with('\'')
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Builds a token without source position, mostly for tests.
    pub fn synthetic(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self::new(kind, lexeme, Span::default())
    }

    pub fn pos(&self) -> Span {
        self.position.clone()
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Canonical dump: `KIND(lexeme)` or `'c'` for punctuation.
    pub fn dump(&self) -> String {
        if self.kind.is_punctuation() {
            self.kind.name().to_string()
        } else {
            format!("{}({})", self.kind.name(), self.lexeme)
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::LNumber | TokenKind::DNumber => format!("number '{}'", self.lexeme),
            TokenKind::String => format!("string {}", self.lexeme),
            TokenKind::Variable => format!("variable '{}'", self.lexeme),
            TokenKind::Name => format!("identifier '{}'", self.lexeme),
            _ => format!("'{}'", self.lexeme),
        }
    }
}

// Positions take no part in equality.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}
