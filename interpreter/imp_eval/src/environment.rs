//! Variable environment.
//!
//! A single flat mapping from variable name to terminal value, created once
//! per run and mutated in place by assignment. It is the only long-lived
//! mutable state in the system; the typed map guarantees that only finished
//! values are ever bound, never partially reduced terms.

use std::fmt;

use rustc_hash::FxHashMap;

use imp_ir::{Name, Value};

/// Mapping from variable name to terminal value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Create an environment seeded with initial bindings.
    pub fn from_bindings<I, N>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (N, Value)>,
        N: Into<Name>,
    {
        Environment {
            bindings: bindings
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Bind a variable, overwriting any previous binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<Name>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &Name) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variable is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl fmt::Display for Environment {
    /// Renders `{x: 1, y: 2}` with keys sorted, so traces are deterministic
    /// regardless of hash order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_by_key(|(name, _)| *name);
        f.write_str("{")?;
        for (i, (name, value)) in entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}
