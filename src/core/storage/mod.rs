//! Storage backends for encoded store files.
//!
//! A store only ever reads its whole file at open and rewrites the whole
//! file after each mutation, so a backend is just a text slot.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Storage` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::io;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Text storage trait.
///
/// Abstracts where encoded store contents live so the stores can be
/// exercised without touching the filesystem.
pub trait Storage {
    /// Read the stored text.
    ///
    /// # Returns
    ///
    /// `None` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the slot exists but cannot be read.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored text.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    fn write(&self, contents: &str) -> io::Result<()>;

    /// Human-readable location used in logs and warnings.
    fn location(&self) -> String;
}
