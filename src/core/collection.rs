//! Capacity-checked record collections.
//!
//! Both stores are an ordered list of records with a fixed capacity that is
//! loaded from and saved to a [`Storage`] slot. [`Collection`] holds that
//! shared behaviour; the stores add their record-specific operations.

use tracing::{debug, warn};

use crate::core::codec::{self, Record};
use crate::core::config::Limits;
use crate::core::storage::Storage;
use crate::error::{PersistenceFailed, Result, StoreError};

/// The outcome of a successful mutation.
///
/// The in-memory change always happened. `warning` is set when the store
/// could not be written back afterwards.
#[derive(Debug)]
#[must_use]
pub struct Mutation<T> {
    value: T,
    warning: Option<PersistenceFailed>,
}

impl<T> Mutation<T> {
    pub(crate) fn new(value: T, warning: Option<PersistenceFailed>) -> Self {
        Self { value, warning }
    }

    /// The created entity
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Persistence failure, if the save after the mutation failed
    pub fn warning(&self) -> Option<&PersistenceFailed> {
        self.warning.as_ref()
    }

    /// Whether the change reached storage
    pub fn is_saved(&self) -> bool {
        self.warning.is_none()
    }

    /// Split into the created entity and the optional warning
    pub fn into_parts(self) -> (T, Option<PersistenceFailed>) {
        (self.value, self.warning)
    }
}

/// An ordered, capacity-limited collection persisted through a [`Storage`].
pub struct Collection<R> {
    records: Vec<R>,
    capacity: usize,
    storage: Box<dyn Storage>,
    clamped: bool,
}

impl<R> std::fmt::Debug for Collection<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("len", &self.records.len())
            .field("capacity", &self.capacity)
            .field("storage", &self.storage.location())
            .finish()
    }
}

impl<R: Record> Collection<R> {
    /// Load a collection from `storage`.
    ///
    /// Never fails: a missing or unreadable slot is an empty collection.
    pub fn open(storage: Box<dyn Storage>, capacity: usize, limits: &Limits) -> Self {
        let location = storage.location();

        let text = match storage.read() {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(%location, kind = %R::KIND, "nothing stored yet, starting empty");
                String::new()
            }
            Err(e) => {
                warn!(%location, error = %e, "could not read store, starting empty");
                String::new()
            }
        };

        let decoded = codec::decode::<R>(&text, capacity, limits);
        if decoded.truncated > 0 {
            debug!(%location, fields = decoded.truncated, "truncated overlong fields");
        }
        debug!(%location, kind = %R::KIND, count = decoded.records.len(), "store loaded");

        Self {
            records: decoded.records,
            capacity,
            storage,
            clamped: decoded.clamped,
        }
    }

    /// All records in insertion order
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.records.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether loading dropped records beyond the capacity
    pub fn was_clamped(&self) -> bool {
        self.clamped
    }

    /// Check that one more record fits.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` if the collection is full.
    pub fn ensure_room(&self) -> Result<()> {
        if self.records.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                kind: R::KIND,
                limit: self.capacity,
            }
            .into());
        }
        Ok(())
    }

    /// Append a record and persist.
    ///
    /// # Returns
    ///
    /// The 0-based index of the new record, plus any persistence warning.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` if the collection is full; the
    /// collection is left unchanged.
    pub fn push(&mut self, record: R) -> Result<Mutation<usize>> {
        self.ensure_room()?;
        self.records.push(record);
        let index = self.records.len() - 1;
        debug!(kind = %R::KIND, count = self.records.len(), "record appended");
        Ok(Mutation::new(index, self.persist()))
    }

    /// Records matching `pred`, with their 0-based index, in insertion order
    pub fn matching<'a, F>(&'a self, pred: F) -> impl Iterator<Item = (usize, &'a R)> + 'a
    where
        F: Fn(&R) -> bool + 'a,
    {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, record)| pred(*record))
    }

    /// Write the whole collection to storage.
    ///
    /// # Returns
    ///
    /// `Some(PersistenceFailed)` if the write failed.
    pub fn persist(&self) -> Option<PersistenceFailed> {
        let location = self.storage.location();
        let text = codec::encode(&self.records);

        match self.storage.write(&text) {
            Ok(()) => {
                debug!(%location, count = self.records.len(), "store saved");
                None
            }
            Err(source) => {
                warn!(%location, error = %source, "failed to save store");
                Some(PersistenceFailed { location, source })
            }
        }
    }
}
