//! Binary operators.

/// Binary operators over terminal values.
///
/// One reduction and one evaluation rule are shared by all operators, so the
/// operand-inspection order and environment threading cannot diverge between
/// them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// Numeric addition.
    Add,
    /// Numeric multiplication.
    Multiply,
    /// Numeric comparison, producing a boolean.
    LessThan,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used by the structural rendering and in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::LessThan => "<",
        }
    }
}
