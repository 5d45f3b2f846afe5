//! Secret store.
//!
//! Ordered service credentials persisted to the secret file, three lines
//! per secret: service, username, secret value.

use serde::Serialize;
use tracing::info;
use zeroize::Zeroizing;

use crate::core::codec::{LineReader, LineWriter, Record};
use crate::core::collection::{Collection, Mutation};
use crate::core::config::Limits;
use crate::core::domain::Secret;
use crate::core::storage::Storage;
use crate::core::validation::prepare_field;
use crate::error::{RecordKind, Result};

impl Record for Secret {
    const KIND: RecordKind = RecordKind::Secret;

    fn encode(&self, out: &mut LineWriter) {
        out.field(self.service());
        out.field(self.username());
        out.field(self.value());
    }

    fn decode(input: &mut LineReader<'_>, _limits: &Limits) -> Option<Self> {
        let service = input.field()?;
        let username = input.field()?;
        let value = input.field()?;
        Some(Secret::new(service, username, value))
    }
}

/// A stored secret within a [`SecretStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretRef(usize);

impl SecretRef {
    /// 1-based display position
    pub fn position(self) -> usize {
        self.0 + 1
    }
}

/// A secret with its value withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecretSummary<'a> {
    pub position: usize,
    pub service: &'a str,
    pub username: &'a str,
}

impl<'a> SecretSummary<'a> {
    fn new(index: usize, secret: &'a Secret) -> Self {
        Self {
            position: index + 1,
            service: secret.service(),
            username: secret.username(),
        }
    }
}

/// Result of a keyword search over secrets.
///
/// Lazy and restartable like [`crate::core::subjects::TermMatches`].
#[derive(Debug, Clone, Copy)]
pub struct SecretMatches<'a> {
    secrets: &'a Collection<Secret>,
    keyword: &'a str,
}

impl<'a> SecretMatches<'a> {
    /// Matches in insertion order, values withheld
    pub fn iter(&self) -> impl Iterator<Item = SecretSummary<'a>> + 'a {
        let (secrets, keyword) = (self.secrets, self.keyword);
        secrets
            .matching(move |s| s.contains(keyword))
            .map(|(index, secret)| SecretSummary::new(index, secret))
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

/// Service credentials.
#[derive(Debug)]
pub struct SecretStore {
    secrets: Collection<Secret>,
    limits: Limits,
}

impl SecretStore {
    /// Load secrets from `storage`.
    ///
    /// A missing or short file yields an empty or partial store.
    pub fn open(storage: impl Storage + 'static, limits: Limits) -> Self {
        let secrets = Collection::open(Box::new(storage), limits.max_secrets, &limits);
        Self { secrets, limits }
    }

    /// Add a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` if the store already holds the
    /// maximum number of secrets, or `ValidationError` if a field spans lines.
    pub fn add_secret(
        &mut self,
        service: &str,
        username: &str,
        secret_value: &str,
    ) -> Result<Mutation<SecretRef>> {
        let max_len = self.limits.max_field_len;
        let service = prepare_field("service", service, max_len)?;
        let username = prepare_field("username", username, max_len)?;
        let value = prepare_field("secret", secret_value, max_len)?;

        info!(service = %service, "adding secret");
        let (index, warning) = self
            .secrets
            .push(Secret::new(service, username, value))?
            .into_parts();
        Ok(Mutation::new(SecretRef(index), warning))
    }

    /// Summary of a stored secret
    pub fn summary(&self, secret: SecretRef) -> Option<SecretSummary<'_>> {
        self.secrets
            .get(secret.0)
            .map(|s| SecretSummary::new(secret.0, s))
    }

    /// Secrets whose service or username contains `keyword`.
    ///
    /// Case-sensitive. Secret values are never searched or returned.
    pub fn search_by_keyword<'a>(&'a self, keyword: &'a str) -> SecretMatches<'a> {
        SecretMatches {
            secrets: &self.secrets,
            keyword,
        }
    }

    /// Value of the first secret whose service equals `service` exactly.
    ///
    /// `None` is a normal negative result. The store gives no special
    /// meaning to `""` or the cancel token; callers filter those first.
    pub fn reveal_by_exact_service(&self, service: &str) -> Option<Zeroizing<String>> {
        self.secrets
            .matching(|s| s.service() == service)
            .next()
            .map(|(_, secret)| Zeroizing::new(secret.value().to_string()))
    }

    /// All secrets with values withheld, in insertion order
    pub fn list(&self) -> impl Iterator<Item = SecretSummary<'_>> {
        self.secrets
            .records()
            .iter()
            .enumerate()
            .map(|(index, secret)| SecretSummary::new(index, secret))
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Whether loading dropped secrets beyond the capacity
    pub fn was_clamped(&self) -> bool {
        self.secrets.was_clamped()
    }
}
