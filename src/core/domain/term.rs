//! Term type.
//!
//! A name/definition pair belonging to a subject.

use serde::Serialize;

use crate::core::types::TermName;

/// A term and its definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Term {
    name: TermName,
    definition: String,
}

impl Term {
    pub fn new(name: impl Into<TermName>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Whether `keyword` occurs in the name or the definition.
    ///
    /// Case-sensitive; an empty keyword matches every term.
    pub fn contains(&self, keyword: &str) -> bool {
        self.name.contains(keyword) || self.definition.contains(keyword)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
