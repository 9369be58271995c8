//! Manager kind
//!
//! The only kind with a `factor`, and so the only kind indexed by rank.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{encode_line, ensure_finite, Employee, Ranked, Record, RecordKind};

/// Employee whose salary is the basic salary scaled by `factor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    #[serde(flatten)]
    base: Employee,
    factor: f32,
}

impl Manager {
    pub fn new(id: u64, basic_salary: i32, department: impl Into<String>, factor: f32) -> Self {
        Self {
            base: Employee::new(id, basic_salary, department),
            factor,
        }
    }

    pub fn basic_salary(&self) -> i32 {
        self.base.basic_salary()
    }
}

impl Record for Manager {
    fn id(&self) -> u64 {
        self.base.id()
    }

    fn department(&self) -> &str {
        self.base.department()
    }

    // Single-precision product, truncated toward zero.
    fn compute_salary(&self) -> i64 {
        (self.base.basic_salary() as f32 * self.factor) as i64
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn to_line(&self) -> Result<String> {
        ensure_finite("factor", self.factor)?;
        encode_line(self)
    }

    fn as_ranked(&self) -> Option<&dyn Ranked> {
        Some(self)
    }
}

impl Ranked for Manager {
    fn factor(&self) -> f32 {
        self.factor
    }
}

impl RecordKind for Manager {
    const KIND: &'static str = "Manager";
}
