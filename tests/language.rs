use std::fs;

use cuenta::{
    Options,
    ast::{Expression, Operator},
    error::ParseError,
    evaluate, get_result,
    interpreter::{
        evaluator::core::Context,
        lexer::{UNRECOGNIZED_NUMERAL, word_to_digit, word_to_operator},
        parser::{Classifier, parse_tokens},
    },
};

const DIGITS: [&str; 10] = ["cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete",
                            "ocho", "nueve"];

fn tokens(src: &str) -> Vec<&str> {
    src.split_whitespace().collect()
}

fn assert_result(src: &str, expected: i64) {
    match get_result(&tokens(src), &Options::default()) {
        Ok(result) => assert_eq!(result, expected, "'{src}' evaluated to {result}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_strict_failure(src: &str) -> ParseError {
    let options = Options { strict: true,
                            ..Options::default() };
    match get_result(&tokens(src), &options) {
        Ok(result) => panic!("'{src}' evaluated to {result} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn word_lookup_covers_every_digit() {
    for (value, word) in (0_i64..).zip(DIGITS) {
        assert_eq!(word_to_digit(word), value);
        assert_eq!(word_to_digit(&word.to_uppercase()), value);
    }
}

#[test]
fn word_lookup_rejects_everything_else() {
    for word in ["diez", "5", "", "mas", "unos", "dosuno", " uno", "úno"] {
        assert_eq!(word_to_digit(word), UNRECOGNIZED_NUMERAL, "'{word}'");
    }
    assert_eq!(word_to_operator("mas"), Some(Operator::Add));
    assert_eq!(word_to_operator("Menos"), Some(Operator::Sub));
    assert_eq!(word_to_operator("más"), None);
    assert_eq!(word_to_operator("uno"), None);
}

#[test]
fn numerals_alone_are_summed() {
    assert_result("uno dos tres", 6);
    assert_result("nueve nueve nueve nueve", 36);
    assert_result(&DIGITS.join(" "), 45);
}

#[test]
fn basic_addition_and_subtraction() {
    assert_result("uno mas dos", 3);
    assert_result("cinco menos dos", 3);
    assert_result("dos menos cinco", -3);
    assert_result("ocho menos uno mas dos", 9);
}

#[test]
fn pending_operator_persists_across_numerals() {
    assert_result("nueve menos uno uno", 7);
    assert_result("cero menos dos mas tres cuatro", 5);
}

#[test]
fn repeated_operation_reapplies_last_operand() {
    assert_result("tres mas mas dos", 8);
    assert_result("cinco menos menos", 0);
    assert_result("cuatro mas menos uno", -1);
}

#[test]
fn single_operation_does_not_fold() {
    let mut context = Context::new();
    Expression::numeric("cuatro").interpret(&mut context);
    Expression::operation("menos").interpret(&mut context);
    assert_eq!(context.result(), 4);
    assert!(context.follows_operation());

    Expression::operation("mas").interpret(&mut context);
    assert_eq!(context.result(), 8);
    assert_eq!(context.pending(), Operator::Add);
}

#[test]
fn leading_operation_adds_nothing() {
    assert_result("mas", 0);
    assert_result("menos tres", -3);
}

#[test]
fn unrecognized_numeral_counts_as_minus_one() {
    assert_result("diez", -1);
    assert_result("cinco mas once", 4);
    assert_result("cinco menos veinte", 6);
    assert_result("7", -1);
}

#[test]
fn empty_input_is_zero() {
    let empty: [&str; 0] = [];
    assert_eq!(get_result(&empty, &Options::default()), Ok(0));
    assert_eq!(evaluate(&[]), 0);
}

#[test]
fn result_tracks_every_prefix() {
    let src = tokens("seis menos dos mas mas cero menos nueve");
    let tree = parse_tokens(&src, Classifier::Words, false).unwrap();
    let mut context = Context::new();
    let mut trace = Vec::new();

    for expr in &tree {
        expr.interpret(&mut context);
        trace.push(context.result());
    }

    assert_eq!(trace, [6, 6, 4, 4, 6, 6, 6, -3]);
    for n in 0..=tree.len() {
        assert_eq!(evaluate(&tree[..n]), if n == 0 { 0 } else { trace[n - 1] });
    }
}

#[test]
fn operation_word_leaves_result_and_numeral_leaves_operator() {
    let mut context = Context::new();
    Expression::operation("menos").interpret(&mut context);
    assert_eq!(context.result(), 0);
    assert_eq!(context.pending(), Operator::Sub);

    Expression::numeric("dos").interpret(&mut context);
    assert_eq!(context.result(), -2);
    assert_eq!(context.operand(), 2);
    assert_eq!(context.pending(), Operator::Sub);
}

#[test]
fn words_classifier_builds_nodes_in_order() {
    let tree = parse_tokens(&tokens("uno MENOS diez mas"), Classifier::Words, false).unwrap();
    assert_eq!(tree,
               [Expression::numeric("uno"),
                Expression::operation("MENOS"),
                Expression::numeric("diez"),
                Expression::operation("mas")]);
}

#[test]
fn literal_classifier_matches_integer_tokens_only() {
    let literal = Options { classifier: Classifier::Literal,
                            ..Options::default() };

    assert_eq!(get_result(&tokens("uno mas dos"), &literal), Ok(0));
    assert_eq!(get_result(&tokens("5"), &literal), Ok(-1));
    assert_eq!(get_result(&tokens("5 mas"), &literal), Ok(-2));
    assert_eq!(get_result(&tokens("+5 -5 mas"), &literal), Ok(-3));
    assert_eq!(get_result(&tokens("+5 -5 mas mas"), &literal), Ok(-4));

    let tree = parse_tokens(&tokens("3 tres 99999999999"), Classifier::Literal, false).unwrap();
    assert!(tree[0].is_numeric());
    assert!(!tree[1].is_numeric());
    assert!(!tree[2].is_numeric());
}

#[test]
fn literal_classifier_recalculates_on_every_operation() {
    let mut context = Context::recalculating_always();
    Expression::numeric("7").interpret(&mut context);
    Expression::operation("menos").interpret(&mut context);
    assert_eq!(context.result(), 0);
    assert_eq!(context.pending(), Operator::Sub);

    // Unknown operation words keep the pending operator.
    Expression::operation("por").interpret(&mut context);
    assert_eq!(context.result(), 1);
    assert_eq!(context.pending(), Operator::Sub);
}

#[test]
fn unknown_operation_word_counts_as_numeral_by_default() {
    assert_result("cinco por dos", 6);

    let literal = Options { classifier: Classifier::Literal,
                            ..Options::default() };
    assert_eq!(get_result(&tokens("5 menos por"), &literal), Ok(1));
}

#[test]
fn strict_mode_rejects_unknown_tokens() {
    assert_eq!(assert_strict_failure("uno mas diez"),
               ParseError::UnrecognizedNumeral { token:    "diez".to_string(),
                                                 position: 3, });
    assert_eq!(assert_strict_failure("7").position(), 1);

    let literal = Options { classifier: Classifier::Literal,
                            strict:     true, };
    assert_eq!(get_result(&tokens("por"), &literal),
               Err(ParseError::UnrecognizedOperation { token:    "por".to_string(),
                                                       position: 1, }));
}

#[test]
fn strict_mode_agrees_on_well_formed_input() {
    let strict = Options { strict: true,
                           ..Options::default() };
    for src in ["uno mas dos", "tres mas mas dos", "Nueve MENOS cero", ""] {
        assert_eq!(get_result(&tokens(src), &strict),
                   get_result(&tokens(src), &Options::default()));
    }
}

#[test]
fn error_messages_name_the_token() {
    let message = assert_strict_failure("dos once").to_string();
    assert!(message.contains("'once'"), "{message}");
    assert!(message.contains("token 2"), "{message}");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.cuenta").unwrap();
    let mut count = 0;

    for line in contents.lines()
                        .map(str::trim)
                        .filter(|l| !l.is_empty() && !l.starts_with('#'))
    {
        let (src, expected) = line.split_once("=>")
                                  .unwrap_or_else(|| panic!("Malformed example: {line}"));
        let expected = expected.trim()
                               .parse::<i64>()
                               .unwrap_or_else(|e| panic!("Bad expectation in '{line}': {e}"));
        assert_result(src, expected);
        count += 1;
    }

    assert!(count > 0, "No examples found in tests/example.cuenta");
}
