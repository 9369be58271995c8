//! Record Module
//!
//! The polymorphic employee contract the store indexes.
//!
//! ## Responsibilities
//! - Define what the store needs from any employee (`Record`)
//! - Define the optional manager capability (`Ranked`)
//! - Provide the concrete kinds and their salary formulas
//! - Map persisted lines back to the right concrete kind (`RecordRegistry`)
//!
//! ## Kinds
//! ```text
//!   Employee ──┬── WageEmployee ─── SalesPerson
//!              └── Manager (Ranked: factor)
//! ```
//! Kinds compose by flattening their parent's fields, so every kind
//! serializes to one flat JSON object tagged with its `kind`.

mod codec;
mod employee;
mod manager;
mod registry;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

pub use codec::{encode_line, KIND_FIELD};
pub use employee::{Employee, SalesPerson, WageEmployee};
pub use manager::Manager;
pub use registry::RecordRegistry;

use codec::ensure_finite;

/// Shared handle to a stored employee
pub type RecordRef = Arc<dyn Record>;

/// What the store requires from every employee
///
/// The store never looks at concrete fields: grouping, totals, ranking
/// and persistence all go through this trait.
pub trait Record: fmt::Debug + Send + Sync {
    /// Unique primary key
    fn id(&self) -> u64;

    /// Department this employee is grouped under
    fn department(&self) -> &str;

    /// Salary according to the kind's formula
    fn compute_salary(&self) -> i64;

    /// Type discriminator written into the persisted line
    fn kind(&self) -> &'static str;

    /// Serialize to a single persisted line (no trailing newline)
    fn to_line(&self) -> Result<String>;

    /// The ranked capability, if this kind has one
    fn as_ranked(&self) -> Option<&dyn Ranked> {
        None
    }
}

/// Capability of kinds that take part in the factor index
pub trait Ranked {
    /// Rank used as the factor index key
    fn factor(&self) -> f32;
}

/// A concrete kind the registry can construct from a persisted line
pub trait RecordKind: Record + Serialize + DeserializeOwned + 'static {
    /// Discriminator stored in the `kind` field
    const KIND: &'static str;
}

// Identity is the primary key alone.
impl PartialEq for dyn Record {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for dyn Record {}
