//! Subject type.
//!
//! A named, ordered group of terms (e.g. a course).

use serde::Serialize;

use crate::core::domain::Term;
use crate::core::types::SubjectName;

/// A subject and its terms in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    name: SubjectName,
    terms: Vec<Term>,
}

impl Subject {
    /// A subject with no terms
    pub fn new(name: impl Into<SubjectName>) -> Self {
        Self::with_terms(name, Vec::new())
    }

    pub fn with_terms(name: impl Into<SubjectName>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terms in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn has_terms(&self) -> bool {
        !self.terms.is_empty()
    }

    /// First term named exactly `name`
    pub fn find_term(&self, name: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.name() == name)
    }

    pub(crate) fn push_term(&mut self, term: Term) {
        self.terms.push(term);
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
