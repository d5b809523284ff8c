/// Core evaluation state.
///
/// Contains the evaluation context that carries the accumulated result, the
/// pending operator and the last decoded operand through one run.
pub mod core;

/// Expression interpretation.
///
/// Implements how each expression node changes the evaluation context.
pub mod expression;
