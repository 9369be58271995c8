//! Salaried employee kinds
//!
//! `Employee` is paid its basic salary, `WageEmployee` adds hourly wages
//! and `SalesPerson` adds a percentage of sales on top of that.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{encode_line, ensure_finite, Record, RecordKind};

/// Employee paid a fixed basic salary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: u64,
    basic_salary: i32,
    department: String,
}

impl Employee {
    pub fn new(id: u64, basic_salary: i32, department: impl Into<String>) -> Self {
        Self {
            id,
            basic_salary,
            department: department.into(),
        }
    }

    pub fn basic_salary(&self) -> i32 {
        self.basic_salary
    }
}

impl Record for Employee {
    fn id(&self) -> u64 {
        self.id
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn compute_salary(&self) -> i64 {
        i64::from(self.basic_salary)
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn to_line(&self) -> Result<String> {
        encode_line(self)
    }
}

impl RecordKind for Employee {
    const KIND: &'static str = "Employee";
}

/// Employee paid basic salary plus `wage * hours`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageEmployee {
    #[serde(flatten)]
    base: Employee,
    wage: i32,
    hours: i32,
}

impl WageEmployee {
    pub fn new(
        id: u64,
        basic_salary: i32,
        department: impl Into<String>,
        wage: i32,
        hours: i32,
    ) -> Self {
        Self {
            base: Employee::new(id, basic_salary, department),
            wage,
            hours,
        }
    }

    pub fn basic_salary(&self) -> i32 {
        self.base.basic_salary
    }

    pub fn wage(&self) -> i32 {
        self.wage
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }
}

impl Record for WageEmployee {
    fn id(&self) -> u64 {
        self.base.id
    }

    fn department(&self) -> &str {
        &self.base.department
    }

    fn compute_salary(&self) -> i64 {
        self.base.compute_salary() + i64::from(self.wage) * i64::from(self.hours)
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn to_line(&self) -> Result<String> {
        encode_line(self)
    }
}

impl RecordKind for WageEmployee {
    const KIND: &'static str = "WageEmployee";
}

/// Wage employee who also earns `percent` of their `sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPerson {
    #[serde(flatten)]
    base: WageEmployee,
    percent: f32,
    sales: i64,
}

impl SalesPerson {
    pub fn new(
        id: u64,
        basic_salary: i32,
        department: impl Into<String>,
        wage: i32,
        hours: i32,
        percent: f32,
        sales: i64,
    ) -> Self {
        Self {
            base: WageEmployee::new(id, basic_salary, department, wage, hours),
            percent,
            sales,
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn sales(&self) -> i64 {
        self.sales
    }
}

impl Record for SalesPerson {
    fn id(&self) -> u64 {
        self.base.id()
    }

    fn department(&self) -> &str {
        self.base.department()
    }

    // Single-precision like the factor itself; truncated toward zero.
    fn compute_salary(&self) -> i64 {
        let commission = self.sales as f32 * self.percent / 100.0;
        (self.base.compute_salary() as f32 + commission) as i64
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn to_line(&self) -> Result<String> {
        ensure_finite("percent", self.percent)?;
        encode_line(self)
    }
}

impl RecordKind for SalesPerson {
    const KIND: &'static str = "SalesPerson";
}
