//! Binary operator implementation.
//!
//! Direct enum-based dispatch shared by the reducer and the evaluator, so the
//! two semantics cannot disagree on operator results. The operator set is
//! closed; pattern matching keeps the dispatch exhaustive at build time.

use imp_ir::{BinaryOp, Value};

use crate::errors::{type_mismatch, EvalResult};

/// Apply a binary operator to two terminal values.
///
/// All operators take numbers. `Add` and `Multiply` produce numbers with
/// native `i64` semantics; `LessThan` produces a boolean. Any non-number
/// operand is a type mismatch, reported for the leftmost offending operand.
pub fn apply_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let l = left
        .as_number()
        .ok_or_else(|| type_mismatch("number", left.type_name()))?;
    let r = right
        .as_number()
        .ok_or_else(|| type_mismatch("number", right.type_name()))?;
    Ok(match op {
        BinaryOp::Add => Value::number(l + r),
        BinaryOp::Multiply => Value::number(l * r),
        BinaryOp::LessThan => Value::boolean(l < r),
    })
}
