//! Structural rendering of terms.
//!
//! `Display` reproduces the concrete form of a program recursively; the
//! machine's trace output is built from these renderings. `Debug` wraps the
//! same rendering in guillemets, the conventional display for program
//! fragments in interpreter transcripts.

use std::fmt;

use crate::ast::Term;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(value) => write!(f, "{value}"),
            Term::Variable(name) => write!(f, "{name}"),
            Term::Binary(b) => write!(f, "{} {} {}", b.left, b.op.as_symbol(), b.right),
            Term::Assign(a) => write!(f, "{} = {}", a.name, a.expr),
            Term::DoNothing => f.write_str("do-nothing"),
            Term::If(i) => write!(
                f,
                "if ({}) {{ {} }} else {{ {} }}",
                i.condition, i.consequence, i.alternative
            ),
            Term::Sequence(s) => write!(f, "{}; {}", s.first, s.second),
            Term::While(w) => write!(f, "while ({}) {{ {} }}", w.condition, w.body),
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{ab}{self}\u{bb}")
    }
}
