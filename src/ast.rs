/// The operator applied to the next decoded operand.
///
/// `None` is the state of a fresh context before any operation word has been
/// seen. It folds operands in the same way as `Add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// No operation word has been interpreted yet.
    #[default]
    None,
    /// `mas`
    Add,
    /// `menos`
    Sub,
}

impl Operator {
    /// Folds `operand` into `accumulator` according to `self`.
    ///
    /// ## Example
    /// ```
    /// use cuenta::ast::Operator;
    ///
    /// assert_eq!(Operator::None.apply(4, 3), 7);
    /// assert_eq!(Operator::Add.apply(4, 3), 7);
    /// assert_eq!(Operator::Sub.apply(4, 3), 1);
    /// ```
    #[must_use]
    pub const fn apply(self, accumulator: i64, operand: i64) -> i64 {
        match self {
            Self::None | Self::Add => accumulator.wrapping_add(operand),
            Self::Sub => accumulator.wrapping_sub(operand),
        }
    }

    /// The arithmetic symbol for this operator, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Add => Some('+'),
            Self::Sub => Some('-'),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "none"),
        }
    }
}

/// A node of the expression tree built from the input tokens.
///
/// The tree is a flat, ordered sequence: every token becomes exactly one node
/// and nodes are interpreted strictly in input order. Each node keeps the raw
/// token it was built from and is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A numeral word such as `tres`, folded into the result when interpreted.
    Numeric {
        /// The token as it appeared in the input.
        raw: String,
    },
    /// An operation word such as `menos`, selecting the pending operator.
    Operation {
        /// The token as it appeared in the input.
        raw: String,
    },
}

impl Expression {
    /// Builds a numeric node from `raw`.
    #[must_use]
    pub fn numeric(raw: impl Into<String>) -> Self {
        Self::Numeric { raw: raw.into() }
    }

    /// Builds an operation node from `raw`.
    #[must_use]
    pub fn operation(raw: impl Into<String>) -> Self {
        Self::Operation { raw: raw.into() }
    }

    /// Gets the token this node was built from.
    /// ## Example
    /// ```
    /// use cuenta::ast::Expression;
    ///
    /// let expr = Expression::numeric("siete");
    ///
    /// assert_eq!(expr.raw(), "siete");
    /// assert!(expr.is_numeric());
    /// ```
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Numeric { raw } | Self::Operation { raw } => raw,
        }
    }

    /// Returns `true` for [`Expression::Numeric`] nodes.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric { raw } => write!(f, "Numeric({raw})"),
            Self::Operation { raw } => write!(f, "Operation({raw})"),
        }
    }
}
