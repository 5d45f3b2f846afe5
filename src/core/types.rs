//! Type aliases for domain concepts.

/// A subject name (e.g. a course title).
pub type SubjectName = String;

/// A term name within a subject.
pub type TermName = String;

/// A service name; the lookup key when revealing a secret.
pub type ServiceName = String;

/// A username or email stored with a secret.
pub type Username = String;
