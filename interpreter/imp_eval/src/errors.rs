//! Error types for reduction and evaluation.
//!
//! Every error is unrecoverable within the failing call: the reducer and the
//! evaluator abort immediately and the environment keeps exactly the
//! assignments completed before the failing step. Factory functions (e.g.
//! `undefined_variable`) populate both the structured kind and the rendered
//! message. Non-termination is not represented here; an infinitely looping
//! program is correct behavior.

use std::fmt;

use imp_ir::{Name, Term, Value};

/// Result of big-step evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Result of one small-step reduction.
pub type ReduceResult = Result<Term, EvalError>;

/// Typed error category for structured matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Variable lookup miss, in either semantics.
    UndefinedVariable { name: String },
    /// Operator or condition applied to a value of the wrong kind.
    TypeMismatch { expected: String, got: String },
    /// Reducer invoked on a terminal term. Signals a caller bug, not a
    /// property of the program being run.
    InvalidReduceCall { term: String },
    /// Big-step evaluation applied to a statement form it does not cover.
    UnsupportedTerm { term: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::InvalidReduceCall { term } => {
                write!(f, "reduce called on terminal term: {term}")
            }
            Self::UnsupportedTerm { term } => {
                write!(f, "big-step evaluation does not support: {term}")
            }
        }
    }
}

/// Evaluation error with a structured kind and a rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured category, for programmatic matching.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &Name) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Value of the wrong kind for an operator or condition.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Reduction requested for a term that is already terminal.
#[cold]
pub fn invalid_reduce_call(term: &Term) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidReduceCall {
        term: term.to_string(),
    })
}

/// Statement form outside the big-step expression sublanguage.
#[cold]
pub fn unsupported_term(term: &Term) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedTerm {
        term: term.to_string(),
    })
}
