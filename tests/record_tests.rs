//! Tests for record kinds and the registry
//!
//! These tests verify:
//! - Salary formulas of each kind
//! - The ranked capability is exposed only by managers
//! - Line encoding carries the kind tag
//! - Registry dispatch and its failure modes

use std::sync::Arc;

use roster::record::{encode_line, KIND_FIELD};
use roster::{
    Employee, Manager, Record, RecordRef, RecordRegistry, RosterError, SalesPerson, WageEmployee,
};

// =============================================================================
// Salary Tests
// =============================================================================

#[test]
fn test_employee_salary_is_basic() {
    assert_eq!(Employee::new(1, 1234, "IT").compute_salary(), 1234);
}

#[test]
fn test_wage_employee_salary() {
    let employee = WageEmployee::new(1, 1000, "IT", 30, 40);
    assert_eq!(employee.compute_salary(), 2200);
}

#[test]
fn test_sales_person_salary_adds_commission() {
    let employee = SalesPerson::new(1, 1000, "Sales", 30, 40, 2.5, 20000);
    // 1000 + 30 * 40 + 20000 * 2.5 / 100
    assert_eq!(employee.compute_salary(), 2700);
}

#[test]
fn test_sales_person_commission_truncates() {
    let employee = SalesPerson::new(1, 0, "Sales", 0, 0, 1.0, 150);
    assert_eq!(employee.compute_salary(), 1);
}

#[test]
fn test_manager_salary_scales_by_factor() {
    assert_eq!(Manager::new(1, 2000, "IT", 1.5).compute_salary(), 3000);
}

#[test]
fn test_manager_salary_uses_single_precision_factor() {
    // 1000 * 0.7f32 rounds to 700.0 in f32; widening first gives 699.99...
    assert_eq!(Manager::new(1, 1000, "IT", 0.7).compute_salary(), 700);
    assert_eq!(Manager::new(2, 3000, "HR", 0.3).compute_salary(), 900);
}

#[test]
fn test_sales_person_commission_uses_single_precision_percent() {
    let employee = SalesPerson::new(1, 0, "Sales", 0, 0, 0.7, 1000);
    assert_eq!(employee.compute_salary(), 7);
}

#[test]
fn test_large_wage_does_not_overflow() {
    let employee = WageEmployee::new(1, i32::MAX, "IT", i32::MAX, 2);
    let expected = i64::from(i32::MAX) * 3;
    assert_eq!(employee.compute_salary(), expected);
}

// =============================================================================
// Capability Tests
// =============================================================================

#[test]
fn test_only_managers_are_ranked() {
    let records: Vec<RecordRef> = vec![
        Arc::new(Employee::new(1, 1, "A")) as RecordRef,
        Arc::new(WageEmployee::new(2, 1, "A", 1, 1)) as RecordRef,
        Arc::new(SalesPerson::new(3, 1, "A", 1, 1, 1.0, 1)) as RecordRef,
        Arc::new(Manager::new(4, 1, "A", 0.75)) as RecordRef,
    ];

    let ranked: Vec<u64> = records
        .iter()
        .filter(|r| r.as_ranked().is_some())
        .map(|r| r.id())
        .collect();

    assert_eq!(ranked, vec![4]);
    assert_eq!(records[3].as_ranked().unwrap().factor(), 0.75);
}

#[test]
fn test_identity_is_id_only() {
    let a: RecordRef = Arc::new(Employee::new(5, 100, "IT"));
    let b: RecordRef = Arc::new(Manager::new(5, 999, "HR", 2.0));
    let c: RecordRef = Arc::new(Employee::new(6, 100, "IT"));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_line_carries_kind_tag_first() {
    let line = Manager::new(3, 900, "HR", 0.3).to_line().unwrap();

    assert!(line.starts_with(r#"{"kind":"Manager","#), "got {}", line);
    assert!(!line.contains('\n'));
}

#[test]
fn test_non_finite_factor_cannot_be_encoded() {
    for factor in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let err = Manager::new(1, 1000, "IT", factor).to_line().unwrap_err();
        assert!(matches!(err, RosterError::Serialization(_)), "factor {}", factor);
        assert!(err.is_persistence());
    }
}

#[test]
fn test_non_finite_percent_cannot_be_encoded() {
    let err = SalesPerson::new(1, 1000, "Sales", 10, 10, f32::NAN, 500)
        .to_line()
        .unwrap_err();
    assert!(matches!(err, RosterError::Serialization(_)));
}

#[test]
fn test_line_is_flat_object() {
    let line = encode_line(&SalesPerson::new(8, 1000, "Sales", 10, 5, 3.0, 700)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(value[KIND_FIELD], "SalesPerson");
    assert_eq!(value["id"], 8);
    assert_eq!(value["department"], "Sales");
    assert_eq!(value["wage"], 10);
    assert_eq!(value["sales"], 700);
}

#[test]
fn test_kind_matches_line_tag() {
    let records: Vec<RecordRef> = vec![
        Arc::new(Employee::new(1, 1, "A")) as RecordRef,
        Arc::new(WageEmployee::new(2, 1, "A", 1, 1)) as RecordRef,
        Arc::new(SalesPerson::new(3, 1, "A", 1, 1, 1.0, 1)) as RecordRef,
        Arc::new(Manager::new(4, 1, "A", 1.0)) as RecordRef,
    ];

    for record in records {
        let value: serde_json::Value = serde_json::from_str(&record.to_line().unwrap()).unwrap();
        assert_eq!(value[KIND_FIELD], record.kind());
    }
}

// =============================================================================
// Registry Tests
// =============================================================================

#[test]
fn test_builtin_kinds_registered() {
    let registry = RecordRegistry::with_builtin_kinds();
    assert_eq!(
        registry.kinds(),
        vec!["Employee", "Manager", "SalesPerson", "WageEmployee"]
    );
}

#[test]
fn test_parse_dispatches_on_kind() {
    let registry = RecordRegistry::with_builtin_kinds();
    let original = SalesPerson::new(11, 1000, "Sales", 20, 10, 4.0, 5000);

    let parsed = registry.parse(&original.to_line().unwrap()).unwrap();

    assert_eq!(parsed.kind(), "SalesPerson");
    assert_eq!(parsed.id(), 11);
    assert_eq!(parsed.department(), "Sales");
    assert_eq!(parsed.compute_salary(), original.compute_salary());
    assert!(parsed.as_ranked().is_none());
}

#[test]
fn test_parse_manager_keeps_factor() {
    let registry = RecordRegistry::with_builtin_kinds();
    let line = r#"{"kind":"Manager","id":3,"basic_salary":3000,"department":"HR","factor":0.3}"#;

    let parsed = registry.parse(line).unwrap();

    assert_eq!(parsed.as_ranked().unwrap().factor(), 0.3);
    assert_eq!(parsed.compute_salary(), 900);
}

#[test]
fn test_parse_unknown_kind() {
    let registry = RecordRegistry::with_builtin_kinds();
    let line = r#"{"kind":"Contractor","id":1,"basic_salary":1,"department":"X"}"#;

    let err = registry.parse(line).unwrap_err();

    assert!(matches!(err, RosterError::UnknownKind(ref kind) if kind == "Contractor"));
    assert!(err.is_persistence());
}

#[test]
fn test_parse_missing_kind() {
    let registry = RecordRegistry::with_builtin_kinds();
    let err = registry
        .parse(r#"{"id":1,"basic_salary":1,"department":"X"}"#)
        .unwrap_err();
    assert!(matches!(err, RosterError::MalformedRecord { .. }));
}

#[test]
fn test_parse_invalid_json() {
    let registry = RecordRegistry::with_builtin_kinds();
    let err = registry.parse("not json at all").unwrap_err();
    assert!(matches!(err, RosterError::MalformedRecord { .. }));
    assert!(err.is_persistence());
}

#[test]
fn test_parse_missing_field() {
    let registry = RecordRegistry::with_builtin_kinds();
    let err = registry
        .parse(r#"{"kind":"WageEmployee","id":1,"basic_salary":1,"department":"X","wage":5}"#)
        .unwrap_err();
    assert!(matches!(err, RosterError::MalformedRecord { .. }));
}

#[test]
fn test_empty_registry_knows_nothing() {
    let registry = RecordRegistry::new();
    let line = Employee::new(1, 1, "A").to_line().unwrap();

    assert!(registry.kinds().is_empty());
    assert!(matches!(
        registry.parse(&line).unwrap_err(),
        RosterError::UnknownKind(_)
    ));
}

#[test]
fn test_register_single_kind() {
    let mut registry = RecordRegistry::new();
    registry.register::<Manager>();

    assert!(registry.is_registered("Manager"));
    assert!(!registry.is_registered("Employee"));
    let parsed = registry
        .parse(&Manager::new(1, 10, "A", 2.0).to_line().unwrap())
        .unwrap();
    assert_eq!(parsed.compute_salary(), 20);
}
