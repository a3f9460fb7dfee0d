use tricalc::{
    evaluate,
    interpreter::lexer::{Token, tokenize},
};

const TOLERANCE: f64 = 1e-9;

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() < TOLERANCE,
                    "`{src}` evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("`{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> String {
    match evaluate(src) {
        Ok(value) => panic!("`{src}` evaluated to {value} but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn operator_precedence() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
    assert_value("10 - 4 / 2", 8.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 2 - 3", 5.0);
    assert_value("20 / 4 / 5", 1.0);
    assert_value("100 / 5 / 2", 10.0);
    assert_value("1 - 2 + 3", 2.0);
}

#[test]
fn parentheses_and_nesting() {
    assert_value("((2))", 2.0);
    assert_value("(1 + (2 * 3))", 7.0);
    assert_value("2 * (3 + 4)", 14.0);
    assert_value("(10 - (2 + 3)) * 2", 10.0);
}

#[test]
fn division_by_zero() {
    let message = assert_failure("1 / 0");
    assert!(message.contains("Division by zero"), "got: {message}");

    assert_failure("10 / (5 - 5)");
    assert_value("0 / 5", 0.0);
}

#[test]
fn unbalanced_parentheses() {
    let message = assert_failure("(1 + 2");
    assert!(message.contains("Unexpected end of input"), "got: {message}");

    assert_failure("(");
    assert_failure("1)");
    assert_failure("sin(90");
}

#[test]
fn trigonometric_functions_take_degrees() {
    assert_value("sin(90)", 1.0);
    assert_value("cos(180)", -1.0);
    assert_value("tan(45)", 1.0);
    assert_value("sin(0)", 0.0);
    assert_value("sin(45 + 45)", 1.0);
}

#[test]
fn nested_function_calls() {
    let inner = 180.0_f64.to_radians().cos();
    let expected = inner.to_radians().sin();
    assert_value("sin(cos(180))", expected);
}

#[test]
fn functions_inside_larger_expressions() {
    assert_value("2 * sin(90) + 1", 3.0);
    assert_value("1 + sin(90)", 2.0);
    assert_value("(sin(90))", 1.0);
}

#[test]
fn missing_function_parenthesis() {
    let message = assert_failure("sin 90");
    assert!(message.contains("Missing '(' after function 'sin'"),
            "got: {message}");

    assert_failure("sin");
    assert_failure("cos 0");
}

#[test]
fn trailing_tokens_are_rejected() {
    let message = assert_failure("2 + 3 4");
    assert!(message.contains("Extra tokens"), "got: {message}");

    assert_failure("2 +");
    assert_failure("1 2");
}

#[test]
fn simultaneous_errors_are_joined() {
    let message = assert_failure("1 + * 2");
    assert!(message.contains("Expected a number"), "got: {message}");
    assert!(message.contains("Extra tokens"), "got: {message}");
}

#[test]
fn pi_is_the_six_digit_expansion() {
    assert_value("pi", 3.141593);
    assert_value("2 * pi", 6.283186);

    // The rounded constant, not f64's full-precision pi.
    let value = evaluate("pi").unwrap();
    assert!(value != std::f64::consts::PI);
}

#[test]
fn decimal_literals_are_not_supported() {
    // The numeric pattern matches digit runs only, so `3.14` tokenizes as
    // `3` and `14` and the leftover `14` is rejected.
    assert_failure("3.14");
    assert_failure("0.5");
    assert_value("3 + 14", 17.0);
}

#[test]
fn unrecognized_characters_are_dropped() {
    assert_value("1 ? + § 2", 3.0);
    assert_value("  7  ", 7.0);
}

#[test]
fn empty_and_unparseable_input() {
    let message = assert_failure("");
    assert!(message.contains("Unexpected end of input"), "got: {message}");

    assert_failure("   ");
    assert_failure("hello");
}

#[test]
fn no_unary_minus() {
    let message = assert_failure("-1");
    assert!(message.contains("Expected a number"), "got: {message}");
}

#[test]
fn evaluation_is_idempotent() {
    let first = evaluate("sin(90) * 1").err().map(|e| e.to_string());
    let again = evaluate("sin(90) * 1").err().map(|e| e.to_string());
    assert_eq!(first, again);

    let a = evaluate("(1 + 2) * 3").unwrap();
    let b = evaluate("(1 + 2) * 3").unwrap();
    let c = evaluate("(1 + 2) * 3").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn tokenize_splits_an_expression() {
    let tokens = tokenize("2 + 3 * (4 - 1)");
    assert_eq!(tokens,
               vec![Token::Number(2.0),
                    Token::Plus,
                    Token::Number(3.0),
                    Token::Star,
                    Token::LParen,
                    Token::Number(4.0),
                    Token::Minus,
                    Token::Number(1.0),
                    Token::RParen]);
}

#[test]
fn tokenize_never_fails() {
    assert_eq!(tokenize("1 # $ , 2"),
               vec![Token::Number(1.0), Token::Number(2.0)]);
    assert!(tokenize("").is_empty());
    assert!(tokenize("?!@").is_empty());
}

#[test]
fn tokenize_replaces_pi() {
    assert_eq!(tokenize("pi"), vec![Token::Number(3.141593)]);
}

#[test]
fn tokenize_drops_decimal_points() {
    assert_eq!(tokenize("3.14"),
               vec![Token::Number(3.0), Token::Number(14.0)]);
}
