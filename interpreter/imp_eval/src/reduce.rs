//! Small-step reduction.
//!
//! `reduce` is the pure single-step transition function: one rewrite of the
//! leftmost reducible subterm per call. The environment is mutated only by
//! the assignment rule; every other rule threads it through unchanged.
//! Untouched branches of the tree are shared with the input term via `Rc`.

use imp_ir::{Assign, Binary, If, Sequence, Term, Value, While};

use crate::environment::Environment;
use crate::errors::{
    invalid_reduce_call, type_mismatch, undefined_variable, EvalError, ReduceResult,
};
use crate::operators::apply_binary;

/// Perform one reduction step.
///
/// Calling this on a terminal term (`Literal`, `DoNothing`) is a caller bug
/// and fails with `InvalidReduceCall`; drive the loop off
/// `Term::reducible()`.
pub fn reduce(term: &Term, env: &mut Environment) -> ReduceResult {
    match term {
        Term::Literal(_) | Term::DoNothing => Err(invalid_reduce_call(term)),
        Term::Variable(name) => env
            .lookup(name)
            .map(Term::literal)
            .ok_or_else(|| undefined_variable(name)),
        Term::Binary(b) => reduce_binary(b, env),
        Term::Assign(a) => reduce_assign(a, env),
        Term::If(i) => reduce_if(i, env),
        Term::Sequence(s) => reduce_sequence(s, env),
        Term::While(w) => Ok(unroll_while(w)),
    }
}

/// The terminal value of an already-irreducible operand.
///
/// `DoNothing` is terminal but carries no value; feeding it to an operator
/// or condition is a type mismatch.
fn terminal_value(term: &Term, expected: &'static str) -> Result<Value, EvalError> {
    term.as_value()
        .ok_or_else(|| type_mismatch(expected, "do-nothing"))
}

/// Left operand first, then right, then collapse. Never both in one step.
fn reduce_binary(b: &Binary, env: &mut Environment) -> ReduceResult {
    if b.left.reducible() {
        Ok(Term::binary(b.op, reduce(&b.left, env)?, b.right.clone()))
    } else if b.right.reducible() {
        Ok(Term::binary(b.op, b.left.clone(), reduce(&b.right, env)?))
    } else {
        let left = terminal_value(&b.left, "number")?;
        let right = terminal_value(&b.right, "number")?;
        apply_binary(b.op, &left, &right).map(Term::literal)
    }
}

/// The environment is touched only once the expression is terminal.
fn reduce_assign(a: &Assign, env: &mut Environment) -> ReduceResult {
    if a.expr.reducible() {
        Ok(Term::assign(a.name.clone(), reduce(&a.expr, env)?))
    } else {
        let value = terminal_value(&a.expr, "value")?;
        env.define(a.name.clone(), value);
        Ok(Term::do_nothing())
    }
}

fn reduce_if(i: &If, env: &mut Environment) -> ReduceResult {
    if i.condition.reducible() {
        Ok(Term::if_else(
            reduce(&i.condition, env)?,
            i.consequence.clone(),
            i.alternative.clone(),
        ))
    } else {
        let condition = terminal_value(&i.condition, "boolean")?;
        let taken = condition
            .as_boolean()
            .ok_or_else(|| type_mismatch("boolean", condition.type_name()))?;
        Ok(if taken {
            i.consequence.as_ref().clone()
        } else {
            i.alternative.as_ref().clone()
        })
    }
}

fn reduce_sequence(s: &Sequence, env: &mut Environment) -> ReduceResult {
    match s.first.as_ref() {
        Term::DoNothing => Ok(s.second.as_ref().clone()),
        first => Ok(Term::sequence(reduce(first, env)?, s.second.clone())),
    }
}

/// `while (c) { body }` rewrites to `if (c) { body; while (c) { body } } else
/// { do-nothing }` in a single step; the loop test happens on the produced
/// `If` at the next step. The condition and body are shared, not copied.
fn unroll_while(w: &While) -> Term {
    Term::if_else(
        w.condition.clone(),
        Term::sequence(w.body.clone(), Term::While(w.clone())),
        Term::do_nothing(),
    )
}
