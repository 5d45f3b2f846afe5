//! cli-vault - a terminal notebook for study terms and service credentials.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── subjects      # add-subject, add-term, find, search, list
//! │   ├── secrets       # add-secret, secrets (search + reveal)
//! │   ├── menu          # Interactive numbered menu
//! │   ├── config        # Show or initialize cli-vault.toml
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # cli-vault.toml management
//!     ├── codec         # Flat-file line codec
//!     ├── collection    # Capacity-checked record collection
//!     ├── storage/      # Storage backends
//!     │   ├── fs        # Filesystem storage
//!     │   └── memory    # In-memory storage
//!     ├── subjects      # Subject store
//!     ├── secrets       # Secret store
//!     └── vault         # Data directory with both stores
//! ```
//!
//! # Example
//!
//! ```
//! use cli_vault::{Limits, Memory, SubjectStore};
//!
//! let mut store = SubjectStore::open(Memory::new(), Limits::default());
//! let cs = *store.add_subject("CS").unwrap().value();
//! let _ = store.add_term(cs, "O(n)", "linear time").unwrap();
//!
//! let hit = store.search_all("linear").iter().next().unwrap();
//! assert_eq!(hit.term.name(), "O(n)");
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::collection::Mutation;
pub use crate::core::config::{Config, Limits};
pub use crate::core::domain::{Secret, Subject, Term};
pub use crate::core::secrets::{SecretRef, SecretStore, SecretSummary};
pub use crate::core::storage::{Filesystem, Memory, Storage};
pub use crate::core::subjects::{Selector, SubjectRef, SubjectStore, TermMatch};
pub use crate::core::vault::Vault;
pub use crate::error::{Error, Result};
