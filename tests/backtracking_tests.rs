use php_expr::lexer::tokenize;
use php_expr::parser::{Match, ParseError, TokenStream, parse};
use php_expr::{Error, parse_complete, parse_source};

fn stream(source: &str) -> TokenStream {
    TokenStream::new(tokenize(source).expect("lexing failed"))
}

// === NoMatch leaves the stream untouched ===

#[test]
fn closing_paren_is_no_match() {
    let mut s = stream(")");
    assert_eq!(parse(&mut s), Ok(Match::NoMatch));
    assert_eq!(s.position(), 0);
}

#[test]
fn lone_operator_is_no_match() {
    let mut s = stream("+");
    assert_eq!(parse(&mut s), Ok(Match::NoMatch));
    assert_eq!(s.position(), 0);
}

#[test]
fn prefix_without_operand_rolls_back() {
    let mut s = stream("- )");
    assert_eq!(parse(&mut s), Ok(Match::NoMatch));
    assert_eq!(s.position(), 0);
}

#[test]
fn empty_input_is_no_match() {
    let mut s = TokenStream::new(vec![]);
    assert_eq!(parse(&mut s), Ok(Match::NoMatch));
}

#[test]
fn empty_group_is_no_match() {
    let mut s = stream("()");
    assert_eq!(parse(&mut s), Ok(Match::NoMatch));
    assert_eq!(s.position(), 0);
    assert_eq!(parse_source("()"), Ok(None));
}

#[test]
fn dangling_operator_is_put_back() {
    let mut s = stream("1 +");
    let node = parse(&mut s).unwrap().into_option().unwrap();
    assert_eq!(node.dump(), "LNUM(1)");
    assert_eq!(s.position(), 1);
}

#[test]
fn dangling_assignment_is_put_back() {
    let mut s = stream("$a = )");
    let node = parse(&mut s).unwrap().into_option().unwrap();
    assert_eq!(node.dump(), "VAR($a)");
    assert_eq!(s.position(), 1);
}

// === Non-associative tiers ===

fn assert_non_associative(source: &str, first: &str, second: &str) {
    match parse(&mut stream(source)) {
        Err(ParseError::NonAssociative {
            first: f,
            second: s,
        }) => {
            assert_eq!(f.lexeme, first);
            assert_eq!(s.lexeme, second);
        }
        other => panic!("expected a non-associative error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn chained_comparison_is_rejected() {
    assert_non_associative("1 < 2 > 3", "<", ">");
}

#[test]
fn chained_equality_is_rejected() {
    assert_non_associative("1 == 2 == 3", "==", "==");
}

#[test]
fn chained_instanceof_is_rejected() {
    assert_non_associative("$a instanceof A instanceof B", "instanceof", "instanceof");
}

#[test]
fn comparison_then_equality_is_accepted() {
    let node = parse(&mut stream("1 < 2 == 3")).unwrap().into_option().unwrap();
    assert_eq!(
        node.dump(),
        "((LNUM(1), '<', LNUM(2)), IS_EQUAL(==), LNUM(3))"
    );
}

// === Structural failures ===

fn assert_expected(source: &str, expected: &str) {
    match parse(&mut stream(source)) {
        Err(ParseError::Expected { expected: e, .. }) => assert_eq!(e, expected),
        other => panic!("expected a structural error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn unclosed_group_is_an_error() {
    assert_expected("(1 + 2", "')'");
}

#[test]
fn unclosed_call_is_an_error() {
    assert_expected("foo(1", "')'");
}

#[test]
fn ternary_without_colon_is_an_error() {
    assert_expected("$a ? $b", "':'");
}

#[test]
fn ternary_without_else_operand_is_an_error() {
    assert_expected("$a ? $b :", "an expression");
    assert!(matches!(parse_complete("$a ? $b : "), Err(Error::Parse(_))));
}

#[test]
fn call_with_only_a_comma_is_an_error() {
    assert_expected("foo(,)", "')'");
}

#[test]
fn nested_structural_error_aborts_the_parse() {
    assert_expected("1 + (2", "')'");
}

#[test]
fn error_names_the_found_token() {
    let err = parse(&mut stream("(1 ;")).unwrap_err();
    match &err {
        ParseError::Expected {
            found: Some(token), ..
        } => assert_eq!(token.lexeme, ";"),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(err.to_string().contains("expected ')'"));
}

// === Source-level entry points ===

#[test]
fn complete_parse_accepts_one_semicolon() {
    let node = parse_complete("1 + 2;").unwrap();
    assert_eq!(node.dump(), "(LNUM(1), '+', LNUM(2))");
}

#[test]
fn complete_parse_reports_trailing_tokens() {
    match parse_complete("1 + 2 3") {
        Err(Error::Trailing(token)) => assert_eq!(token.lexeme, "3"),
        other => panic!("expected trailing token error, got {:?}", other),
    }
}

#[test]
fn complete_parse_reports_missing_expression() {
    match parse_complete(")") {
        Err(Error::NoExpression(Some(token))) => assert_eq!(token.lexeme, ")"),
        other => panic!("expected missing expression error, got {:?}", other),
    }
}

#[test]
fn source_parse_passes_structural_errors_through() {
    assert!(matches!(parse_source("foo(1"), Err(Error::Parse(_))));
}

#[test]
fn source_parse_ignores_trailing_tokens() {
    let node = parse_source("$a $b").unwrap().unwrap();
    assert_eq!(node.dump(), "VAR($a)");
}
