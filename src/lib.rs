//! # cuenta
//!
//! cuenta is an interpreter for spoken Spanish arithmetic written in Rust.
//! It reads a sequence of words such as `cinco menos dos`, builds one
//! expression node per word, and folds the nodes left to right into a single
//! integer.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::info;

use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        parser::{Classifier, parse_tokens},
    },
};

/// Defines the expression tree.
///
/// This module declares the `Expression` enum, a closed set of node variants
/// built from the input tokens, and the `Operator` enum that the evaluation
/// context carries between nodes.
///
/// # Responsibilities
/// - Defines the numeric and operation node variants.
/// - Defines the pending operator and how it combines operands.
pub mod ast;
/// Provides the error types raised while parsing tokens.
///
/// # Responsibilities
/// - Defines error enums for every rejected token.
/// - Attaches the token and its position for user feedback.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the word lookup, the token classifier and the
/// evaluator to provide a complete runtime for spoken arithmetic.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for each phase on its own.
pub mod interpreter;

/// Controls how tokens are classified and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// How tokens are turned into expression nodes.
    pub classifier: Classifier,
    /// Reject tokens the lexer does not recognize instead of letting them
    /// degrade silently.
    pub strict:     bool,
}

/// Interprets `expressions` in order against a fresh context and returns the
/// accumulated result.
///
/// # Examples
/// ```
/// use cuenta::{ast::Expression, evaluate};
///
/// let tree = [Expression::numeric("cinco"),
///             Expression::operation("menos"),
///             Expression::numeric("dos")];
///
/// assert_eq!(evaluate(&tree), 3);
/// assert_eq!(evaluate(&[]), 0);
/// ```
#[must_use]
pub fn evaluate(expressions: &[Expression]) -> i64 {
    evaluate_in(Context::new(), expressions)
}

/// Interprets `expressions` in order against `context` and returns the
/// accumulated result.
///
/// # Examples
/// ```
/// use cuenta::{ast::Expression, evaluate_in, interpreter::evaluator::core::Context};
///
/// let tree = [Expression::numeric("5"), Expression::operation("mas")];
///
/// assert_eq!(evaluate_in(Context::new(), &tree), -1);
/// assert_eq!(evaluate_in(Context::recalculating_always(), &tree), -2);
/// ```
#[must_use]
pub fn evaluate_in(mut context: Context, expressions: &[Expression]) -> i64 {
    for expr in expressions {
        expr.interpret(&mut context);
    }

    context.result()
}

/// Returns the final evaluation result for a token sequence.
///
/// Tokens are classified according to `options`, then interpreted strictly in
/// input order. With the default options nothing is ever rejected: every
/// word other than `mas` and `menos` is a numeral, and unknown numerals count
/// as `-1`. Under [`Classifier::Literal`], unknown operation words leave the
/// pending operator unchanged.
///
/// # Errors
/// Returns an error only in strict mode, for the first token the lexer does
/// not recognize.
///
/// # Examples
/// ```
/// use cuenta::{Options, get_result};
///
/// let result = get_result(&["uno", "mas", "dos"], &Options::default());
/// assert_eq!(result.unwrap(), 3);
///
/// // 'diez' is not a single digit.
/// let strict = Options { strict: true,
///                        ..Options::default() };
/// assert!(get_result(&["diez"], &strict).is_err());
/// ```
pub fn get_result<S: AsRef<str>>(tokens: &[S], options: &Options) -> Result<i64, ParseError> {
    let expressions = parse_tokens(tokens, options.classifier, options.strict)?;
    let result = evaluate_in(options.classifier.context(), &expressions);

    info!(tokens = expressions.len(), result, "evaluation finished");
    Ok(result)
}
