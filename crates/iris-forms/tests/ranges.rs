use iris_core::field::{FieldId, FieldPath};
use iris_forms::ranges::{check_ranges, declared_range};
use iris_forms::state::{FieldValue, FormState};

#[test]
fn sphere_bounds() {
    let range = declared_range(FieldId::Sphere).unwrap();
    assert!(range.contains(-20.0));
    assert!(range.contains(15.0));
    assert!(range.contains(2.25));
    assert!(!range.contains(22.0));
    assert!(!range.contains(-20.5));
}

#[test]
fn quarter_diopter_step_enforced() {
    let range = declared_range(FieldId::Sphere).unwrap();
    assert!(range.contains(-1.75));
    assert!(!range.contains(2.3));
}

#[test]
fn cd_ratio_is_a_unit_interval() {
    let range = declared_range(FieldId::CdRatio).unwrap();
    assert!(range.contains(0.0));
    assert!(range.contains(0.73));
    assert!(range.contains(1.0));
    assert!(!range.contains(1.5));
}

#[test]
fn choice_fields_have_no_range() {
    assert!(declared_range(FieldId::Cornee).is_none());
}

#[test]
fn check_ranges_reports_out_of_bounds_measurements() {
    let mut state = FormState::new();
    state.set(FieldPath::od(FieldId::Sphere), FieldValue::number(22.0));
    state.set(FieldPath::og(FieldId::Sphere), FieldValue::number(-3.25));

    let errors = check_ranges(&state);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, FieldPath::od(FieldId::Sphere));
    assert!(errors[0].message.contains("od.sphere"));
}

#[test]
fn in_range_state_passes() {
    let mut state = FormState::new();
    state.set(FieldPath::od(FieldId::Tonus), FieldValue::number(14.0));
    state.set(FieldPath::od(FieldId::Avsc), FieldValue::number(0.9));
    assert!(check_ranges(&state).is_empty());
}
