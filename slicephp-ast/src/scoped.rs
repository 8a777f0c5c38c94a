//! Scoped Slice names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the segments of a scoped name.
pub const SCOPE_SEPARATOR: &str = "::";

/// A fully scoped Slice name such as `::Ice::Identity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopedName(String);

impl ScopedName {
    /// Creates a scoped name, adding the leading `::` if it is missing.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.starts_with(SCOPE_SEPARATOR) {
            Self(name)
        } else {
            Self(format!("{SCOPE_SEPARATOR}{name}"))
        }
    }

    /// Returns the name of a child of this scope.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self(format!("{}{SCOPE_SEPARATOR}{name}", self.0))
    }

    /// Iterates over the non-empty segments of the name.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SCOPE_SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Returns the unscoped (last) segment.
    #[must_use]
    pub fn name(&self) -> &str {
        self.segments().last().unwrap_or("")
    }

    /// Returns the full scoped name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScopedName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
