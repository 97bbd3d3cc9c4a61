use php_expr::ast::Node;
use php_expr::lexer::{Token, TokenKind, tokenize};
use php_expr::parser::{Match, ParseError, TokenStream, parse};

fn parse_expr(source: &str) -> Result<Match<Node>, ParseError> {
    let tokens = tokenize(source).expect("lexing failed");
    let mut stream = TokenStream::new(tokens);
    parse(&mut stream)
}

fn dump(source: &str) -> String {
    match parse_expr(source) {
        Ok(Match::Matched(node)) => node.dump(),
        Ok(Match::NoMatch) => panic!("no expression in {:?}", source),
        Err(err) => panic!("parsing {:?} failed: {}", source, err),
    }
}

// === Priority ===

#[test]
fn clone_binds_tighter_than_pow() {
    assert_eq!(
        dump("clone $x ** 2"),
        "((CLONE(clone), VAR($x)), POW(**), LNUM(2))"
    );
}

#[test]
fn pow_binds_tighter_than_cast() {
    assert_eq!(
        dump("(bool) 1 ** 2"),
        "(BOOL_CAST((bool)), (LNUM(1), POW(**), LNUM(2)))"
    );
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        dump("1 + 2 * 3"),
        "(LNUM(1), '+', (LNUM(2), '*', LNUM(3)))"
    );
}

#[test]
fn cast_binds_tighter_than_addition() {
    assert_eq!(
        dump("(int) $a + 1"),
        "((INT_CAST((int)), VAR($a)), '+', LNUM(1))"
    );
}

#[test]
fn unary_minus_applies_to_power() {
    assert_eq!(
        dump("-$a ** 2"),
        "('-', (VAR($a), POW(**), LNUM(2)))"
    );
}

#[test]
fn additive_binds_tighter_than_shift() {
    assert_eq!(
        dump("$a << 1 + 2"),
        "(VAR($a), SL(<<), (LNUM(1), '+', LNUM(2)))"
    );
}

#[test]
fn comparison_binds_tighter_than_equality() {
    assert_eq!(
        dump("$a == $b < $c"),
        "(VAR($a), IS_EQUAL(==), (VAR($b), '<', VAR($c)))"
    );
}

#[test]
fn bitwise_tiers_nest_and_xor_or() {
    assert_eq!(
        dump("$a | $b ^ $c & $d"),
        "(VAR($a), '|', (VAR($b), '^', (VAR($c), '&', VAR($d))))"
    );
}

#[test]
fn boolean_and_binds_tighter_than_or() {
    assert_eq!(
        dump("$a || $b && $c"),
        "(VAR($a), BOOLEAN_OR(||), (VAR($b), BOOLEAN_AND(&&), VAR($c)))"
    );
}

#[test]
fn not_applies_to_instanceof() {
    assert_eq!(
        dump("!$a instanceof Foo"),
        "('!', (VAR($a), INSTANCEOF(instanceof), NAME(Foo)))"
    );
}

#[test]
fn not_binds_tighter_than_multiplication() {
    assert_eq!(
        dump("!$a * 2"),
        "(('!', VAR($a)), '*', LNUM(2))"
    );
}

#[test]
fn assignment_binds_tighter_than_keyword_and() {
    assert_eq!(
        dump("$a = $b and $c"),
        "((VAR($a), '=', VAR($b)), LOGICAL_AND(and), VAR($c))"
    );
}

#[test]
fn keyword_operators_order() {
    assert_eq!(
        dump("$a or $b xor $c and $d"),
        "(VAR($a), LOGICAL_OR(or), (VAR($b), LOGICAL_XOR(xor), (VAR($c), LOGICAL_AND(and), VAR($d))))"
    );
}

#[test]
fn print_takes_an_assignment() {
    assert_eq!(
        dump("print $a . $b"),
        "(PRINT(print), (VAR($a), '.', VAR($b)))"
    );
}

#[test]
fn coalesce_binds_tighter_than_ternary() {
    assert_eq!(
        dump("$a ?? $b ? 1 : 2"),
        "((VAR($a), COALESCE(??), VAR($b)), '?', LNUM(1), ':', LNUM(2))"
    );
}

// === Associativity ===

#[test]
fn pow_is_right_associative() {
    assert_eq!(
        dump("1 ** 2 ** 3"),
        "(LNUM(1), POW(**), (LNUM(2), POW(**), LNUM(3)))"
    );
}

#[test]
fn postfix_binds_tighter_than_prefix_increment() {
    assert_eq!(dump("--$x++"), "(DEC(--), (VAR($x), INC(++)))");
}

#[test]
fn addition_is_left_associative() {
    assert_eq!(
        dump("1 + 2 + 3"),
        "((LNUM(1), '+', LNUM(2)), '+', LNUM(3))"
    );
}

#[test]
fn concatenation_shares_the_additive_tier() {
    assert_eq!(
        dump("$a . $b + $c"),
        "((VAR($a), '.', VAR($b)), '+', VAR($c))"
    );
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(
        dump("1 - 2 - 3"),
        "((LNUM(1), '-', LNUM(2)), '-', LNUM(3))"
    );
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(
        dump("$a = $b .= 'x'"),
        "(VAR($a), '=', (VAR($b), CONCAT_EQUAL(.=), STRING('x')))"
    );
}

#[test]
fn coalesce_is_right_associative() {
    assert_eq!(
        dump("$a ?? $b ?? $c"),
        "(VAR($a), COALESCE(??), (VAR($b), COALESCE(??), VAR($c)))"
    );
}

#[test]
fn ternary_is_left_associative() {
    assert_eq!(
        dump("$a ? 1 : $b ? 2 : 3"),
        "((VAR($a), '?', LNUM(1), ':', VAR($b)), '?', LNUM(2), ':', LNUM(3))"
    );
}

#[test]
fn stacked_prefix_operators() {
    assert_eq!(dump("- ~$a"), "('-', ('~', VAR($a)))");
}

#[test]
fn stacked_postfix_operators() {
    assert_eq!(dump("$i++--"), "((VAR($i), INC(++)), DEC(--))");
}

// === Unary placement ===

#[test]
fn negative_exponent() {
    assert_eq!(
        dump("2 ** -1"),
        "(LNUM(2), POW(**), ('-', LNUM(1)))"
    );
}

#[test]
fn not_as_exponent() {
    assert_eq!(
        dump("2 ** !$x"),
        "(LNUM(2), POW(**), ('!', VAR($x)))"
    );
}

#[test]
fn not_under_unary_minus() {
    assert_eq!(dump("-!$x"), "('-', ('!', VAR($x)))");
}

#[test]
fn unary_minus_as_right_operand() {
    assert_eq!(
        dump("1 - -2"),
        "(LNUM(1), '-', ('-', LNUM(2)))"
    );
}

#[test]
fn increments_around_addition() {
    assert_eq!(
        dump("$i++ + ++$j"),
        "((VAR($i), INC(++)), '+', (INC(++), VAR($j)))"
    );
}

#[test]
fn silence_operator() {
    assert_eq!(dump("@foo()"), "('@', (NAME(foo), ()))");
}

// === Primary forms ===

#[test]
fn parenthesized_group() {
    assert_eq!(
        dump("(1 + 2) * 3"),
        "(((LNUM(1), '+', LNUM(2))), '*', LNUM(3))"
    );
}

#[test]
fn call_with_arguments() {
    assert_eq!(
        dump("foo(1, $x + 2)"),
        "(NAME(foo), (LNUM(1), (VAR($x), '+', LNUM(2))))"
    );
}

#[test]
fn call_with_trailing_comma() {
    assert_eq!(
        dump("foo(1, 2,)"),
        "(NAME(foo), (LNUM(1), LNUM(2)))"
    );
}

#[test]
fn chained_calls() {
    assert_eq!(dump("$f(1)()"), "((VAR($f), (LNUM(1))), ())");
}

#[test]
fn literal_is_not_callable() {
    let tokens = tokenize("1 (2)").unwrap();
    let mut stream = TokenStream::new(tokens);
    let node = parse(&mut stream).unwrap().into_option().unwrap();
    assert_eq!(node.dump(), "LNUM(1)");
    assert_eq!(stream.position(), 1);
}

#[test]
fn short_ternary() {
    assert_eq!(dump("$a ?: $b"), "(VAR($a), '?', ':', VAR($b))");
}

#[test]
fn literals() {
    assert_eq!(
        dump("'a' . \"b\" . 1.5"),
        "((STRING('a'), '.', STRING(\"b\")), '.', DNUM(1.5))"
    );
}

#[test]
fn spaceship_operator() {
    assert_eq!(
        dump("$a <=> $b"),
        "(VAR($a), SPACESHIP(<=>), VAR($b))"
    );
}

#[test]
fn new_object() {
    assert_eq!(
        dump("new Foo(1)"),
        "(NEW(new), (NAME(Foo), (LNUM(1))))"
    );
}

// === Entry point behaviour ===

#[test]
fn trailing_semicolon_is_not_consumed() {
    let tokens = tokenize("1 + 2;").unwrap();
    let mut stream = TokenStream::new(tokens);
    let node = parse(&mut stream).unwrap().into_option().unwrap();
    assert_eq!(node.dump(), "(LNUM(1), '+', LNUM(2))");
    assert!(stream.peek_is(TokenKind::Semicolon));
}

#[test]
fn parses_from_hand_built_tokens() {
    let tokens = vec![
        Token::synthetic(TokenKind::Dec, "--"),
        Token::synthetic(TokenKind::Variable, "$x"),
        Token::synthetic(TokenKind::Inc, "++"),
    ];
    let mut stream = TokenStream::new(tokens);
    let node = parse(&mut stream).unwrap().into_option().unwrap();
    assert_eq!(node.dump(), "(DEC(--), (VAR($x), INC(++)))");
    assert!(!stream.has_next());
}

#[test]
fn grammar_is_shared_across_threads() {
    let sources = ["1 + 2 * 3", "1 ** 2 ** 3", "--$x++", "1 + 2 + 3"];
    let expected: Vec<String> = sources.iter().map(|s| dump(s)).collect();

    let actual: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || dump(source)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("parser thread panicked"))
            .collect()
    });

    assert_eq!(actual, expected);
}
