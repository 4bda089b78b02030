//! Tests for the single-step reducer.

use crate::environment::Environment;
use crate::errors::EvalErrorKind;
use crate::reduce::reduce;
use imp_ir::{Name, Term, Value};
use pretty_assertions::assert_eq;

#[test]
fn test_variable_resolves_in_one_step() {
    let mut env = Environment::from_bindings([("x", Value::number(7))]);
    let before = env.clone();

    let next = reduce(&Term::variable("x"), &mut env).unwrap();
    assert_eq!(next, Term::number(7));
    assert!(!next.reducible());
    assert_eq!(env, before);
}

#[test]
fn test_undefined_variable() {
    let mut env = Environment::new();
    let err = reduce(&Term::variable("x"), &mut env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_reduce_on_terminal_is_a_caller_bug() {
    let mut env = Environment::new();
    for term in [Term::number(1), Term::boolean(true), Term::do_nothing()] {
        let err = reduce(&term, &mut env).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::InvalidReduceCall { .. }));
    }
}

#[test]
fn test_binary_reduces_left_operand_first() {
    let mut env = Environment::new();
    let term = Term::add(
        Term::add(Term::number(1), Term::number(2)),
        Term::add(Term::number(3), Term::number(4)),
    );

    // One step rewrites only the left subterm.
    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "3 + 3 + 4");

    let next = reduce(&next, &mut env).unwrap();
    assert_eq!(next.to_string(), "3 + 7");

    let next = reduce(&next, &mut env).unwrap();
    assert_eq!(next, Term::number(10));
}

#[test]
fn test_binary_reduces_right_once_left_is_terminal() {
    let mut env = Environment::from_bindings([("x", Value::number(5))]);
    let term = Term::multiply(Term::number(2), Term::variable("x"));

    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "2 * 5");
}

#[test]
fn test_binary_collapses_only_when_both_operands_terminal() {
    let mut env = Environment::new();
    let term = Term::less_than(Term::number(5), Term::add(Term::number(2), Term::number(2)));

    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "5 < 4");
    assert!(next.reducible());

    let next = reduce(&next, &mut env).unwrap();
    assert_eq!(next, Term::boolean(false));
}

#[test]
fn test_assign_defers_environment_write_until_expr_terminal() {
    let mut env = Environment::new();
    let term = Term::assign("x", Term::add(Term::number(1), Term::number(1)));

    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "x = 2");
    assert!(env.is_empty());

    let next = reduce(&next, &mut env).unwrap();
    assert_eq!(next, Term::do_nothing());
    assert_eq!(env.lookup(&Name::from("x")), Some(Value::number(2)));
}

#[test]
fn test_if_reduces_condition_then_branches() {
    let mut env = Environment::from_bindings([("b", Value::boolean(true))]);
    let term = Term::if_else(
        Term::variable("b"),
        Term::assign("x", Term::number(1)),
        Term::assign("x", Term::number(2)),
    );

    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "if (true) { x = 1 } else { x = 2 }");

    let next = reduce(&next, &mut env).unwrap();
    assert_eq!(next.to_string(), "x = 1");
}

#[test]
fn test_if_false_takes_alternative() {
    let mut env = Environment::new();
    let term = Term::if_else(
        Term::boolean(false),
        Term::assign("x", Term::number(1)),
        Term::do_nothing(),
    );
    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next, Term::do_nothing());
}

#[test]
fn test_if_condition_must_be_boolean() {
    let mut env = Environment::new();
    let term = Term::if_else(Term::number(1), Term::do_nothing(), Term::do_nothing());
    let err = reduce(&term, &mut env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "boolean".to_string(),
            got: "number".to_string(),
        }
    );
}

#[test]
fn test_sequence_discards_finished_first_statement() {
    let mut env = Environment::new();
    let term = Term::sequence(Term::do_nothing(), Term::assign("x", Term::number(1)));
    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "x = 1");
}

#[test]
fn test_sequence_reduces_first_statement() {
    let mut env = Environment::new();
    let term = Term::sequence(
        Term::assign("x", Term::number(1)),
        Term::assign("y", Term::number(2)),
    );
    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(next.to_string(), "do-nothing; y = 2");
    assert_eq!(env.lookup(&Name::from("x")), Some(Value::number(1)));
}

#[test]
fn test_while_unrolls_to_if_sequence() {
    let mut env = Environment::new();
    let term = Term::while_loop(
        Term::less_than(Term::variable("x"), Term::number(5)),
        Term::assign("x", Term::multiply(Term::variable("x"), Term::number(3))),
    );

    // The loop itself never collapses; one step produces the deferred test.
    let next = reduce(&term, &mut env).unwrap();
    assert_eq!(
        next.to_string(),
        "if (x < 5) { x = x * 3; while (x < 5) { x = x * 3 } } else { do-nothing }"
    );
    assert!(env.is_empty());
}

#[test]
fn test_do_nothing_operand_is_type_mismatch() {
    let mut env = Environment::new();
    let term = Term::add(Term::do_nothing(), Term::number(1));
    let err = reduce(&term, &mut env).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            expected: "number".to_string(),
            got: "do-nothing".to_string(),
        }
    );
}
