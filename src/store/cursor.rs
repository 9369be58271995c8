//! Store cursor
//!
//! Ascending-id walk over the live primary index with in-place removal.

use crate::error::{Result, RosterError};
use crate::record::RecordRef;

use super::Store;

/// Cursor over a store in ascending id order
///
/// Each step takes the read lock only for the lookup of the next id, so the
/// cursor sees live state: records added or removed by other callers while
/// it walks may or may not be yielded. It resumes strictly after the last id
/// it yielded, which keeps it well defined (if unspecified) under
/// concurrent mutation.
///
/// `remove_current` follows the usual iterator-removal discipline: it is
/// valid once per yielded record.
pub struct Cursor<'a> {
    store: &'a Store,

    /// Last id yielded, the lower bound for the next step
    position: Option<u64>,

    /// Id `remove_current` would remove; cleared by removal
    current: Option<u64>,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(store: &'a Store) -> Self {
        Self {
            store,
            position: None,
            current: None,
        }
    }

    /// Yield the next record together with whether more follow
    pub fn advance(&mut self) -> Option<(RecordRef, bool)> {
        let record = self.next()?;
        Some((record, self.has_more()))
    }

    /// Whether another record follows the current position
    pub fn has_more(&self) -> bool {
        self.store.indices.read().next_after(self.position).is_some()
    }

    /// Remove the last yielded record from every index
    ///
    /// Errors:
    /// - `InvalidIteratorState` — nothing yielded yet, or already removed
    /// - `NotFound` — another caller removed the record first
    pub fn remove_current(&mut self) -> Result<RecordRef> {
        let id = match (self.current.take(), self.position) {
            (Some(id), _) => id,
            (None, None) => {
                return Err(RosterError::InvalidIteratorState(
                    "remove_current called before the cursor yielded a record",
                ))
            }
            (None, Some(_)) => {
                return Err(RosterError::InvalidIteratorState(
                    "remove_current called twice without advancing",
                ))
            }
        };
        self.store.remove(id)
    }
}

impl Iterator for Cursor<'_> {
    type Item = RecordRef;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.store.indices.read().next_after(self.position)?;
        self.position = Some(record.id());
        self.current = Some(record.id());
        Some(record)
    }
}
