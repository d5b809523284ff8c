use tracing::warn;

use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{is_numeral_word, is_operation_word},
    },
};

/// Decides which expression node a token becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classifier {
    /// `mas` and `menos` become operations, every other token a numeral.
    #[default]
    Words,
    /// Only tokens that parse as a 32-bit integer literal become numerals,
    /// every other token an operation, and every operation recalculates.
    ///
    /// Literal tokens still decode through the numeral-word lookup, so they
    /// contribute `-1`. Word input evaluated this way always yields `0`.
    Literal,
}

impl Classifier {
    /// The evaluation context that matches this classification rule.
    #[must_use]
    pub const fn context(self) -> Context {
        match self {
            Self::Words => Context::new(),
            Self::Literal => Context::recalculating_always(),
        }
    }

    /// Builds the node for `token`.
    ///
    /// ## Example
    /// ```
    /// use cuenta::{ast::Expression, interpreter::parser::Classifier};
    ///
    /// assert_eq!(Classifier::Words.classify("uno"), Expression::numeric("uno"));
    /// assert_eq!(Classifier::Words.classify("mas"), Expression::operation("mas"));
    /// assert_eq!(Classifier::Literal.classify("uno"), Expression::operation("uno"));
    /// assert_eq!(Classifier::Literal.classify("-4"), Expression::numeric("-4"));
    /// ```
    #[must_use]
    pub fn classify(self, token: &str) -> Expression {
        let numeric = match self {
            Self::Words => !is_operation_word(token),
            Self::Literal => token.parse::<i32>().is_ok(),
        };

        if numeric {
            Expression::numeric(token)
        } else {
            Expression::operation(token)
        }
    }
}

/// Builds the ordered expression sequence for `tokens`.
///
/// Nodes keep input order; there is no precedence and no reordering.
///
/// In strict mode, a numeric node whose token is not a numeral word, or an
/// operation node whose token is not an operation word, is rejected. Otherwise
/// such tokens are accepted and only logged.
///
/// # Errors
/// Returns [`ParseError`] for the first unrecognized token when `strict` is
/// set.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S],
                                   classifier: Classifier,
                                   strict: bool)
                                   -> Result<Vec<Expression>, ParseError> {
    tokens.iter()
          .enumerate()
          .map(|(i, token)| {
              let expr = classifier.classify(token.as_ref());
              check_recognized(&expr, i + 1, strict).map(|()| expr)
          })
          .collect()
}

fn check_recognized(expr: &Expression, position: usize, strict: bool) -> Result<(), ParseError> {
    let token = expr.raw();
    let error = match expr {
        Expression::Numeric { .. } if !is_numeral_word(token) => {
            ParseError::UnrecognizedNumeral { token: token.to_string(),
                                              position }
        },
        Expression::Operation { .. } if !is_operation_word(token) => {
            ParseError::UnrecognizedOperation { token: token.to_string(),
                                                position }
        },
        _ => return Ok(()),
    };

    if strict {
        return Err(error);
    }

    warn!(position, token, "{error}");
    Ok(())
}
