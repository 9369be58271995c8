//! Record registry
//!
//! Maps the `kind` tag of a persisted line to the constructor of that kind.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, RosterError};

use super::{Employee, Manager, RecordKind, RecordRef, SalesPerson, WageEmployee, KIND_FIELD};

/// Builds a record from a line already parsed into JSON
type Constructor = fn(Value) -> Result<RecordRef>;

/// Registry of constructible record kinds
///
/// Each kind registers itself through `RecordKind::KIND`; `parse` reads the
/// tag first and dispatches on it.
#[derive(Clone, Default)]
pub struct RecordRegistry {
    constructors: HashMap<&'static str, Constructor>,
}

impl RecordRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every kind this crate defines
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        registry.register::<Employee>();
        registry.register::<WageEmployee>();
        registry.register::<SalesPerson>();
        registry.register::<Manager>();
        registry
    }

    /// Register (or replace) the constructor for `T::KIND`
    pub fn register<T: RecordKind>(&mut self) -> &mut Self {
        self.constructors.insert(T::KIND, construct::<T>);
        self
    }

    /// Whether a constructor is registered for `kind`
    pub fn is_registered(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.constructors.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Parse one persisted line into its concrete kind
    ///
    /// Errors:
    /// - `MalformedRecord` — not a JSON object, no `kind` tag, or bad fields
    /// - `UnknownKind` — the tag names no registered kind
    pub fn parse(&self, line: &str) -> Result<RecordRef> {
        let value: Value = serde_json::from_str(line)?;

        let kind = value
            .get(KIND_FIELD)
            .and_then(Value::as_str)
            .ok_or_else(|| RosterError::MalformedRecord {
                line: 0,
                reason: format!("missing `{}` field", KIND_FIELD),
            })?;

        let constructor = *self
            .constructors
            .get(kind)
            .ok_or_else(|| RosterError::UnknownKind(kind.to_string()))?;

        constructor(value)
    }
}

impl std::fmt::Debug for RecordRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn construct<T: RecordKind>(value: Value) -> Result<RecordRef> {
    let record: T = serde_json::from_value(value)?;
    Ok(Arc::new(record))
}
