//! In-memory storage, used by tests and benchmarks.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use super::Storage;

/// A shared in-memory text slot.
///
/// Clones share the same slot, so a test can keep a handle, hand a clone to
/// a store, and inspect or reopen what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    contents: Rc<RefCell<Option<String>>>,
}

impl Memory {
    /// An empty slot, equivalent to a missing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(contents.into()))),
        }
    }

    /// Current contents, if anything was written.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Storage for Memory {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
