//! Secret type.
//!
//! A service credential. Values are stored in plain text; `Debug` redacts
//! them so they do not end up in logs by accident.

use crate::core::types::{ServiceName, Username};

/// A service/username/secret-value triple
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    service: ServiceName,
    username: Username,
    value: String,
}

impl Secret {
    pub fn new(
        service: impl Into<ServiceName>,
        username: impl Into<Username>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            username: username.into(),
            value: value.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The plaintext secret value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether `keyword` occurs in the service or username.
    ///
    /// Never looks at the secret value.
    pub fn contains(&self, keyword: &str) -> bool {
        self.service.contains(keyword) || self.username.contains(keyword)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.service)
    }
}
