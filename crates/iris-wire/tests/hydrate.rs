use iris_core::field::{FieldId, FieldPath};
use iris_core::vocab::{cornee, reflet, segment};
use iris_forms::sections::clinique::Clinique;
use iris_forms::sections::technique::Technique;
use iris_forms::state::{FieldValue, FormState};
use iris_wire::hydrate::{hydrate, hydrate_enfant};
use iris_wire::serialize::{serialize, serialize_enfant};
use serde_json::json;

#[test]
fn clinique_round_trips_through_the_wire_shape() {
    let mut state = FormState::new();
    state.set(
        FieldPath::od(FieldId::SegmentAnterieur),
        FieldValue::choice(segment::PRESENCE_LESION),
    );
    state.set(FieldPath::od(FieldId::Cornee), FieldValue::choice(cornee::AUTRE));
    state.set(
        FieldPath::od(FieldId::CorneeAutre),
        FieldValue::text("leucome central"),
    );
    state.set(
        FieldPath::og(FieldId::SegmentAnterieur),
        FieldValue::choice(segment::NORMAL),
    );

    let record = serialize(&state, &Clinique);
    let hydrated = hydrate(&record, &Clinique);

    assert_eq!(
        hydrated.token(FieldPath::od(FieldId::SegmentAnterieur)),
        Some(segment::PRESENCE_LESION)
    );
    assert_eq!(hydrated.token(FieldPath::od(FieldId::Cornee)), Some(cornee::AUTRE));
    assert_eq!(
        hydrated.get(FieldPath::od(FieldId::CorneeAutre)),
        Some(&FieldValue::text("leucome central"))
    );
    assert_eq!(
        hydrated.token(FieldPath::og(FieldId::SegmentAnterieur)),
        Some(segment::NORMAL)
    );
}

#[test]
fn unexpected_field_shape_falls_back_to_unset() {
    let record = json!({
        "od": { "sg_anterieur": { "segment": 42 } },
        "og": { "sg_anterieur": { "segment": "NORMAL" } }
    });

    let state = hydrate(&record, &Clinique);
    assert!(state.is_blank(FieldPath::od(FieldId::SegmentAnterieur)));
    assert_eq!(
        state.token(FieldPath::og(FieldId::SegmentAnterieur)),
        Some(segment::NORMAL)
    );
}

#[test]
fn non_object_record_yields_an_empty_form() {
    let state = hydrate(&json!("corrupted"), &Clinique);
    assert!(state.iter().next().is_none());
}

#[test]
fn explicit_nulls_stay_unset() {
    let record = json!({ "od_avsc": null, "og_avsc": 0.5 });
    let state = hydrate(&record, &Technique);
    assert!(state.is_blank(FieldPath::od(FieldId::Avsc)));
    assert_eq!(state.number(FieldPath::og(FieldId::Avsc)), Some(0.5));
}

#[test]
fn legacy_string_measurements_are_tolerated() {
    let record = json!({ "od_to": "14", "og_to": 16 });
    let state = hydrate(&record, &Technique);
    assert_eq!(state.number(FieldPath::od(FieldId::Tonus)), Some(14.0));
    assert_eq!(state.number(FieldPath::og(FieldId::Tonus)), Some(16.0));
}

#[test]
fn enfant_record_round_trips() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::RefletPupillaire),
        FieldValue::choice(reflet::LEUCOCORIE),
    );
    state.set(
        FieldPath::global(FieldId::RefletLateralite),
        FieldValue::choice("od"),
    );
    state.set(
        FieldPath::global(FieldId::RefletDetails),
        FieldValue::text("tache blanche pupillaire"),
    );
    state.set(FieldPath::od(FieldId::Avsc), FieldValue::number(0.6));

    let record = serialize_enfant(&state);
    let hydrated = hydrate_enfant(&record);

    assert_eq!(
        hydrated.token(FieldPath::global(FieldId::RefletPupillaire)),
        Some(reflet::LEUCOCORIE)
    );
    assert_eq!(
        hydrated.token(FieldPath::global(FieldId::RefletLateralite)),
        Some("od")
    );
    assert_eq!(hydrated.number(FieldPath::od(FieldId::Avsc)), Some(0.6));
}

#[test]
fn fields_missing_from_the_record_stay_unset() {
    let record = json!({ "od": { "sg_anterieur": { "segment": "NORMAL" } } });
    let state = hydrate(&record, &Clinique);
    assert!(state.is_blank(FieldPath::og(FieldId::SegmentAnterieur)));
    assert!(state.is_blank(FieldPath::od(FieldId::Cornee)));
}
