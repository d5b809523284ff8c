/// The evaluator module applies expression nodes to the evaluation context.
///
/// The evaluator walks the expression sequence in order and folds each node
/// into a running total held by the [`Context`](evaluator::core::Context).
///
/// # Responsibilities
/// - Holds the accumulated result, pending operator and last operand.
/// - Implements how numeric and operation nodes change that state.
pub mod evaluator;
/// The lexer module recognizes the vocabulary of spoken arithmetic.
///
/// Each input token is matched as a whole against the numeral words `cero`
/// through `nueve` and the operation words `mas` and `menos`, ignoring case.
///
/// # Responsibilities
/// - Maps numeral words to digits, with a sentinel for anything else.
/// - Maps operation words to operators.
pub mod lexer;
/// The parser module turns raw tokens into expression nodes.
///
/// # Responsibilities
/// - Classifies every token as a numeric or an operation node.
/// - Optionally rejects tokens the lexer does not recognize.
pub mod parser;
