//! Variable names.

use std::fmt;

/// A variable name.
///
/// Plain owned string; the environment map and `Assign`/`Variable` terms key
/// on this. Cloning is cheap enough at this core's scale that interning is
/// not warranted.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Name(String);

impl Name {
    /// Create a name from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Name(name.into())
    }

    /// The name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(s.to_string())
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
