//! Subject store.
//!
//! Ordered subjects, each with ordered terms, persisted to the subject file:
//!
//! ```text
//! <subject_count>
//! <subject_name>
//! <term_count>
//! <term_name>
//! <term_definition>
//! ...
//! ```

use std::str::FromStr;

use tracing::info;

use crate::core::codec::{LineReader, LineWriter, Record};
use crate::core::collection::{Collection, Mutation};
use crate::core::config::Limits;
use crate::core::domain::{Subject, Term};
use crate::core::storage::Storage;
use crate::core::validation::prepare_field;
use crate::error::{RecordKind, Result, StoreError};

impl Record for Subject {
    const KIND: RecordKind = RecordKind::Subject;

    fn encode(&self, out: &mut LineWriter) {
        out.field(self.name());
        out.count(self.term_count());
        for term in self.terms() {
            out.field(term.name());
            out.field(term.definition());
        }
    }

    fn decode(input: &mut LineReader<'_>, limits: &Limits) -> Option<Self> {
        let mut subject = Subject::new(input.field()?);

        let declared = input.count().unwrap_or(0);
        let kept = input.clamp(RecordKind::Term, declared, limits.max_terms_per_subject);

        for _ in 0..kept {
            let (Some(name), Some(definition)) = (input.field(), input.field()) else {
                return Some(subject);
            };
            subject.push_term(Term::new(name, definition));
        }

        // Skip the dropped terms so the next subject starts on its own line.
        input.skip((declared - kept).saturating_mul(2));

        Some(subject)
    }
}

/// A resolved subject within a [`SubjectStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectRef(usize);

impl SubjectRef {
    /// 1-based display position
    pub fn position(self) -> usize {
        self.0 + 1
    }
}

/// How a user picks a subject: by display position or by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// 1-based display position
    Position(usize),
    /// Exact subject name; the first match wins
    Name(String),
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    /// All-digit input is a position, anything else is a name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(position) = s.parse() {
                return Ok(Self::Position(position));
            }
        }
        Ok(Self::Name(s.to_string()))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position(position) => write!(f, "{}", position),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

/// A search hit: a term and the subject that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch<'a> {
    pub subject: &'a Subject,
    pub term: &'a Term,
}

/// Result of a substring search across all subjects.
///
/// Lazy and restartable: every call to [`TermMatches::iter`] rescans the
/// store from the first subject.
#[derive(Debug, Clone, Copy)]
pub struct TermMatches<'a> {
    subjects: &'a [Subject],
    keyword: &'a str,
}

impl<'a> TermMatches<'a> {
    /// Matches in subject order, then term order
    pub fn iter(&self) -> impl Iterator<Item = TermMatch<'a>> + 'a {
        let (subjects, keyword) = (self.subjects, self.keyword);
        subjects.iter().flat_map(move |subject| {
            subject
                .terms()
                .iter()
                .filter(move |term| term.contains(keyword))
                .map(move |term| TermMatch { subject, term })
        })
    }

    /// Total number of matches
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The keyword searched for
    pub fn keyword(&self) -> &'a str {
        self.keyword
    }
}

/// Subjects and their terms.
#[derive(Debug)]
pub struct SubjectStore {
    subjects: Collection<Subject>,
    limits: Limits,
}

impl SubjectStore {
    /// Load subjects from `storage`.
    ///
    /// A missing or short file yields an empty or partial store.
    pub fn open(storage: impl Storage + 'static, limits: Limits) -> Self {
        let subjects = Collection::open(Box::new(storage), limits.max_subjects, &limits);
        Self { subjects, limits }
    }

    /// Add a subject with no terms.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` if the store already holds the
    /// maximum number of subjects, or `ValidationError` if the name spans lines.
    pub fn add_subject(&mut self, name: &str) -> Result<Mutation<SubjectRef>> {
        let name = prepare_field("subject name", name, self.limits.max_field_len)?;
        info!(subject = %name, "adding subject");

        let (index, warning) = self.subjects.push(Subject::new(name))?.into_parts();
        Ok(Mutation::new(SubjectRef(index), warning))
    }

    /// Resolve a user selection to a subject.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoSubjects` if the store is empty, or
    /// `StoreError::InvalidSelection` if the position is out of range or no
    /// subject has that exact name.
    pub fn select(&self, selector: &Selector) -> Result<SubjectRef> {
        if self.subjects.is_empty() {
            return Err(StoreError::NoSubjects.into());
        }

        let index = match selector {
            Selector::Position(position) => position
                .checked_sub(1)
                .filter(|&i| i < self.subjects.len()),
            Selector::Name(name) => self
                .subjects
                .matching(|s| s.name() == name.as_str())
                .map(|(i, _)| i)
                .next(),
        };

        index.map(SubjectRef).ok_or_else(|| {
            StoreError::InvalidSelection {
                selection: selector.to_string(),
                available: self.subjects.len(),
            }
            .into()
        })
    }

    /// Subject behind a reference
    pub fn subject(&self, subject: SubjectRef) -> Option<&Subject> {
        self.subjects.get(subject.0)
    }

    /// Append a term to a subject.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` if the subject already holds the
    /// maximum number of terms, `StoreError::InvalidSelection` if the
    /// reference does not belong to this store, or `ValidationError` if a
    /// field spans lines.
    pub fn add_term(
        &mut self,
        subject: SubjectRef,
        name: &str,
        definition: &str,
    ) -> Result<Mutation<Term>> {
        let max_len = self.limits.max_field_len;
        let max_terms = self.limits.max_terms_per_subject;
        let available = self.subjects.len();

        let name = prepare_field("term name", name, max_len)?;
        let definition = prepare_field("definition", definition, max_len)?;

        let target = self.subjects.get_mut(subject.0).ok_or_else(|| {
            StoreError::InvalidSelection {
                selection: subject.position().to_string(),
                available,
            }
        })?;

        if target.term_count() >= max_terms {
            return Err(StoreError::CapacityExceeded {
                kind: RecordKind::Term,
                limit: max_terms,
            }
            .into());
        }

        let term = Term::new(name, definition);
        target.push_term(term.clone());
        info!(subject = target.name(), term = term.name(), "term added");

        Ok(Mutation::new(term, self.subjects.persist()))
    }

    /// First term in `subject` whose name equals `name` exactly.
    ///
    /// `None` is a normal negative result, not an error.
    pub fn find_term_exact(&self, subject: SubjectRef, name: &str) -> Option<&Term> {
        self.subject(subject)?.find_term(name)
    }

    /// Every term whose name or definition contains `keyword`.
    pub fn search_all<'a>(&'a self, keyword: &'a str) -> TermMatches<'a> {
        TermMatches {
            subjects: self.subjects.records(),
            keyword,
        }
    }

    /// All subjects with their terms, in insertion order
    pub fn list_all(&self) -> &[Subject] {
        self.subjects.records()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Whether loading dropped subjects beyond the capacity
    pub fn was_clamped(&self) -> bool {
        self.subjects.was_clamped()
    }
}
