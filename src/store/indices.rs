//! Index maintenance
//!
//! The three indices and the rules that keep them in step. Nothing here
//! locks; `Store` holds these behind its RwLock and calls in with the
//! right guard.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

use crate::error::{Result, RosterError};
use crate::record::RecordRef;

/// Totally ordered wrapper around a manager factor
///
/// Uses IEEE 754 `totalOrder`, so NaN sorts above every number and
/// `-0.0` and `0.0` are separate keys.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankKey(f32);

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Primary, department and factor indices
#[derive(Default)]
pub(crate) struct Indices {
    /// id -> employee, ascending id
    employees: BTreeMap<u64, RecordRef>,

    /// department -> employees in insertion order
    departments: BTreeMap<String, Vec<RecordRef>>,

    /// factor -> managers in insertion order
    factors: BTreeMap<RankKey, Vec<RecordRef>>,
}

impl Indices {
    // =========================================================================
    // Mutations (write guard held by caller)
    // =========================================================================

    /// Insert into primary, then department, then factor index
    pub(crate) fn insert(&mut self, record: RecordRef) -> Result<()> {
        let id = record.id();
        match self.employees.entry(id) {
            Entry::Occupied(_) => return Err(RosterError::DuplicateKey(id)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&record));
            }
        }

        self.departments
            .entry(record.department().to_string())
            .or_default()
            .push(Arc::clone(&record));

        if let Some(ranked) = record.as_ranked() {
            self.factors
                .entry(RankKey(ranked.factor()))
                .or_default()
                .push(Arc::clone(&record));
        }

        Ok(())
    }

    /// Remove from primary, then department, then factor index
    ///
    /// A missing id leaves all three indices untouched.
    pub(crate) fn remove(&mut self, id: u64) -> Result<RecordRef> {
        let record = self
            .employees
            .remove(&id)
            .ok_or(RosterError::NotFound(id))?;

        remove_from_bucket(&mut self.departments, record.department(), id);
        if let Some(ranked) = record.as_ranked() {
            remove_from_bucket(&mut self.factors, &RankKey(ranked.factor()), id);
        }

        Ok(record)
    }

    // =========================================================================
    // Queries (read guard held by caller)
    // =========================================================================

    pub(crate) fn get(&self, id: u64) -> Option<RecordRef> {
        self.employees.get(&id).cloned()
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.employees.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.employees.len()
    }

    /// First employee with an id strictly greater than `after`
    /// (or the first overall when `after` is None)
    pub(crate) fn next_after(&self, after: Option<u64>) -> Option<RecordRef> {
        let lower = match after {
            Some(id) => Excluded(id),
            None => Unbounded,
        };
        self.employees
            .range((lower, Unbounded))
            .next()
            .map(|(_, record)| Arc::clone(record))
    }

    /// Employees in ascending id order
    pub(crate) fn employees(&self) -> impl Iterator<Item = &RecordRef> {
        self.employees.values()
    }

    pub(crate) fn department_budget(&self, department: &str) -> i64 {
        self.departments
            .get(department)
            .map(|bucket| bucket.iter().map(|record| record.compute_salary()).sum::<i64>())
            .unwrap_or(0)
    }

    /// Department names; BTreeMap keys are already sorted
    pub(crate) fn departments(&self) -> Vec<String> {
        self.departments.keys().cloned().collect()
    }

    pub(crate) fn department_members(&self, department: &str) -> Vec<RecordRef> {
        self.departments.get(department).cloned().unwrap_or_default()
    }

    /// Managers holding the highest factor, in insertion order
    pub(crate) fn managers_with_most_factor(&self) -> Vec<RecordRef> {
        self.factors
            .last_key_value()
            .map(|(_, bucket)| bucket.clone())
            .unwrap_or_default()
    }
}

/// Drop `id` from the bucket under `key`, pruning the bucket once empty
fn remove_from_bucket<K, Q>(buckets: &mut BTreeMap<K, Vec<RecordRef>>, key: &Q, id: u64)
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    if let Some(bucket) = buckets.get_mut(key) {
        if let Some(pos) = bucket.iter().position(|record| record.id() == id) {
            bucket.remove(pos);
        }
        if bucket.is_empty() {
            buckets.remove(key);
        }
    }
}
