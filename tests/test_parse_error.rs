use infix_rpn::{parse, Grammar, Paren, ParseErrorKind};

#[track_caller]
fn assert_error(src: &str, expected: &str) {
    let err = parse(src).unwrap_err();
    assert_eq!(
        format!("{}", err.display_with_color_override(false)),
        expected
    );
}

#[test]
fn test_unexpected_token() {
    assert_error(
        "1 @ 2",
        r#"Parse Error: Unexpected token '@'.
 --> 1:3
  |
1 |1 @ 2
  |  ^ unexpected token
"#,
    );

    assert_error(
        "a +++ b",
        r#"Parse Error: Unexpected token '+++'.
 --> 1:3
  |
1 |a +++ b
  |  ^^^ unexpected token
"#,
    );
}

#[test]
fn test_unbalanced() {
    assert_error(
        "( 1 + 2",
        r#"Parse Error: Unbalanced parenthesis '('.
 --> 1:1
  |
1 |( 1 + 2
  |^ never closed
"#,
    );

    assert_error(
        "1 + 2 )",
        r#"Parse Error: Unbalanced parenthesis ')'.
 --> 1:7
  |
1 |1 + 2 )
  |      ^ nothing to close
"#,
    );
}

#[test]
fn test_multiline_source() {
    assert_error(
        "a +\n@ b",
        r#"Parse Error: Unexpected token '@'.
 --> 2:1
  |
2 |@ b
  |^ unexpected token
"#,
    );
}

#[test]
fn test_accessors() {
    let grammar = Grammar::standard();
    let err = grammar.parse("x * ( y").unwrap_err();
    assert_eq!(err.span(), (4, 5));
    assert_eq!(err.token(), "(");
    assert_eq!(
        err.clone().into_kind(),
        ParseErrorKind::UnbalancedParenthesis(Paren::Open)
    );
    assert!(err.to_string().contains("Unbalanced parenthesis '('."));

    let err: &dyn std::error::Error = &err;
    assert!(err.to_string().contains("never closed"));
}

#[test]
fn test_plain_display_is_uncolored() {
    let err = parse("1 @ 2").unwrap_err();
    let plain = err.to_string();
    assert_eq!(
        plain,
        format!("{}", err.display_with_color_override(false))
    );
    assert!(!plain.contains('\x1b'));
}
