use crate::{ast::Operator, interpreter::lexer::word_to_operator};

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for a single evaluation run: the
/// running total, the operator to apply to the next operand, the last operand
/// that was decoded, and whether an operation word has been seen since then.
///
/// ## Usage
///
/// A fresh `Context` is created per run and threaded by mutable reference
/// through every [`Expression::interpret`](crate::ast::Expression) call, in
/// input order. After the last node, [`Context::result`] is the answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pending:            Operator,
    result:             i64,
    operand:            i64,
    after_operation:    bool,
    recalculate_always: bool,
}

impl Context {
    /// Creates a new context with no pending operator, a zero result and a
    /// zero operand.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending:            Operator::None,
               result:             0,
               operand:            0,
               after_operation:    false,
               recalculate_always: false, }
    }

    /// Creates a new context in which every operation word folds the last
    /// operand in again, not only one that follows another operation word.
    ///
    /// ## Example
    /// ```
    /// use cuenta::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::recalculating_always();
    /// context.set_operand(2);
    /// assert!(context.recalculates_on_operation());
    ///
    /// let mut context = Context::new();
    /// context.set_operand(2);
    /// assert!(!context.recalculates_on_operation());
    /// ```
    #[must_use]
    pub const fn recalculating_always() -> Self {
        Self { recalculate_always: true,
               ..Self::new() }
    }

    /// Stores `value` as the operand for the next [`Context::calculate`].
    pub const fn set_operand(&mut self, value: i64) {
        self.operand = value;
        self.after_operation = false;
    }

    /// Selects the pending operator from an operation word.
    ///
    /// Words that are not `mas` or `menos` leave the pending operator
    /// untouched, but still count as an operation for
    /// [`Context::follows_operation`].
    ///
    /// ## Example
    /// ```
    /// use cuenta::{ast::Operator, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// context.set_operation("menos");
    /// assert_eq!(context.pending(), Operator::Sub);
    ///
    /// context.set_operation("por");
    /// assert_eq!(context.pending(), Operator::Sub);
    /// ```
    pub fn set_operation(&mut self, word: &str) {
        if let Some(op) = word_to_operator(word) {
            self.pending = op;
        }
        self.after_operation = true;
    }

    /// Folds the stored operand into the result using the pending operator.
    ///
    /// ## Example
    /// ```
    /// use cuenta::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.set_operand(4);
    /// context.calculate();
    /// context.set_operation("menos");
    /// context.set_operand(1);
    /// context.calculate();
    ///
    /// assert_eq!(context.result(), 3);
    /// ```
    pub const fn calculate(&mut self) {
        self.result = self.pending.apply(self.result, self.operand);
    }

    /// The accumulated result.
    #[must_use]
    pub const fn result(&self) -> i64 {
        self.result
    }

    /// The operator that the next [`Context::calculate`] will apply.
    #[must_use]
    pub const fn pending(&self) -> Operator {
        self.pending
    }

    /// Returns `true` if an operation word was set after the last operand.
    #[must_use]
    pub const fn follows_operation(&self) -> bool {
        self.after_operation
    }

    /// Returns `true` if every operation word recalculates.
    #[must_use]
    pub const fn recalculates_always(&self) -> bool {
        self.recalculate_always
    }

    /// Returns `true` if the next operation word should fold the last operand
    /// in again.
    #[must_use]
    pub const fn recalculates_on_operation(&self) -> bool {
        self.recalculate_always || self.after_operation
    }

    /// The last operand stored with [`Context::set_operand`].
    #[must_use]
    pub const fn operand(&self) -> i64 {
        self.operand
    }
}
