use tracing::debug;

use crate::{
    ast::Expression,
    interpreter::{evaluator::core::Context, lexer::word_to_digit},
};

impl Expression {
    /// Applies this node to `context`.
    ///
    /// - `Numeric`: decodes the token, stores it as the operand and folds it
    ///   into the result with the pending operator.
    /// - `Operation`: selects the pending operator. An operation word that
    ///   directly follows another one also folds the *previous* operand in
    ///   again with the new operator, so `tres mas mas dos` is `3 + 3 + 2`.
    ///   A context built with [`Context::recalculating_always`] does this for
    ///   every operation word.
    ///
    /// ## Example
    /// ```
    /// use cuenta::{ast::Expression, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// Expression::numeric("tres").interpret(&mut context);
    /// Expression::operation("mas").interpret(&mut context);
    /// assert_eq!(context.result(), 3);
    ///
    /// Expression::operation("mas").interpret(&mut context);
    /// assert_eq!(context.result(), 6);
    /// ```
    pub fn interpret(&self, context: &mut Context) {
        match self {
            Self::Numeric { raw } => {
                context.set_operand(word_to_digit(raw));
                context.calculate();
            },
            Self::Operation { raw } => {
                let recalculate = context.recalculates_on_operation();
                context.set_operation(raw);
                if recalculate {
                    context.calculate();
                }
            },
        }

        debug!(node = %self,
               operator = %context.pending(),
               operand = context.operand(),
               result = context.result(),
               "interpreted");
    }
}
