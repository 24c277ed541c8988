use iris_core::field::{FieldId, FieldPath};
use iris_core::vocab::{cornee, reflet, resultat, segment, stereoscopie, tonus_methode};
use iris_forms::sections::binoculaire::Binoculaire;
use iris_forms::sections::clinique::Clinique;
use iris_forms::sections::conclusion::Conclusion;
use iris_forms::sections::enfant::EnfantGeneral;
use iris_forms::sections::technique::Technique;
use iris_forms::state::{FieldValue, FormState};
use iris_wire::error::WireError;
use iris_wire::serialize::{serialize, serialize_enfant};
use iris_wire::submit::{submit_payload, submit_payload_enfant};
use serde_json::json;

#[test]
fn inactive_field_is_omitted_even_when_a_value_lingers() {
    // Stale value that the UI has not cleared yet: the payload must
    // still omit it, and must not contain nulls.
    let mut state = FormState::new();
    state.set(
        FieldPath::od(FieldId::SegmentAnterieur),
        FieldValue::choice(segment::NORMAL),
    );
    state.set(
        FieldPath::od(FieldId::Cornee),
        FieldValue::choice(cornee::OPACITE_TOTALE),
    );

    let payload = serialize(&state, &Clinique);
    let anterior = &payload["od"]["sg_anterieur"];
    assert_eq!(anterior["segment"], json!("NORMAL"));
    assert!(anterior.get("cornee").is_none());
    assert!(!payload.to_string().contains("null"));
}

#[test]
fn cornee_autre_detail_lands_next_to_its_finding() {
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

    let payload = serialize(&state, &Clinique);
    let anterior = &payload["od"]["sg_anterieur"];
    assert_eq!(anterior["cornee"], json!("AUTRE"));
    assert_eq!(anterior["cornee_autre"], json!("leucome central"));
}

#[test]
fn technique_uses_eye_prefixed_short_names() {
    let mut state = FormState::new();
    state.set(FieldPath::od(FieldId::Sphere), FieldValue::number(-2.5));
    state.set(FieldPath::og(FieldId::Sphere), FieldValue::number(0.75));
    state.set(FieldPath::od(FieldId::Avsc), FieldValue::number(0.4));
    state.set(
        FieldPath::global(FieldId::TonusMethode),
        FieldValue::choice(tonus_methode::AIR_PULSE),
    );
    state.set(FieldPath::od(FieldId::Tonus), FieldValue::number(14.0));

    let payload = serialize(&state, &Technique);
    assert_eq!(payload["od_s"], json!(-2.5));
    assert_eq!(payload["og_s"], json!(0.75));
    assert_eq!(payload["od_avsc"], json!(0.4));
    assert_eq!(payload["to_methode"], json!("AIR_PULSE"));
    assert_eq!(payload["od_to"], json!(14.0));
    assert!(payload.get("od_sphere").is_none());
}

#[test]
fn stereoscopie_keeps_the_historical_column_name() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::StereoscopieLang),
        FieldValue::choice(stereoscopie::POSITIF),
    );

    let payload = serialize(&state, &Binoculaire);
    assert_eq!(payload["stereoscopie_lang_ii"], json!("POSITIF"));
    assert!(payload.get("stereoscopie_lang").is_none());
}

#[test]
fn rouge_reflex_is_sent_alone() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::RefletPupillaire),
        FieldValue::choice(reflet::ROUGE),
    );

    let payload = serialize(&state, &EnfantGeneral);
    assert_eq!(payload["reflet_pupillaire"], json!("rouge"));
    assert!(payload.get("reflet_lateralite").is_none());
    assert!(payload.get("reflet_details").is_none());
}

#[test]
fn non_rouge_reflex_carries_laterality() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::RefletPupillaire),
        FieldValue::choice(reflet::LEUCOCORIE),
    );
    state.set(
        FieldPath::global(FieldId::RefletLateralite),
        FieldValue::choice("od"),
    );

    let payload = serialize(&state, &EnfantGeneral);
    assert_eq!(payload["reflet_pupillaire"], json!("leucocorie"));
    assert_eq!(payload["reflet_lateralite"], json!("od"));
}

#[test]
fn enfant_submit_payload_nests_the_shared_sections() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::RefletPupillaire),
        FieldValue::choice(reflet::ROUGE),
    );
    state.set(FieldPath::od(FieldId::Avsc), FieldValue::number(0.6));
    state.set(
        FieldPath::og(FieldId::SegmentAnterieur),
        FieldValue::choice(segment::NORMAL),
    );

    let payload = serialize_enfant(&state);
    assert_eq!(payload["reflet_pupillaire"], json!("rouge"));
    assert_eq!(payload["technique"]["od_avsc"], json!(0.6));
    assert_eq!(payload["clinique"]["og"]["sg_anterieur"]["segment"], json!("NORMAL"));
}

#[test]
fn submit_is_blocked_while_required_fields_are_empty() {
    let mut state = FormState::new();
    state.set(
        FieldPath::od(FieldId::SegmentAnterieur),
        FieldValue::choice(segment::PRESENCE_LESION),
    );
    state.set(FieldPath::od(FieldId::Cornee), FieldValue::choice(cornee::AUTRE));

    let err = submit_payload(&state, &Clinique).unwrap_err();
    let WireError::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    assert!(errors
        .iter()
        .any(|e| e.field == FieldPath::od(FieldId::CorneeAutre)));
}

#[test]
fn submit_is_blocked_by_an_out_of_range_measurement() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::Resultat),
        FieldValue::choice(resultat::NORMAL),
    );
    // a stray measurement from another screen section
    state.set(FieldPath::od(FieldId::Sphere), FieldValue::number(40.0));

    let err = submit_payload(&state, &Conclusion).unwrap_err();
    assert!(matches!(err, WireError::OutOfRange(_)));
}

#[test]
fn valid_conclusion_serializes() {
    let mut state = FormState::new();
    state.set(
        FieldPath::global(FieldId::Resultat),
        FieldValue::choice(resultat::NORMAL),
    );

    let payload = submit_payload(&state, &Conclusion).unwrap();
    assert_eq!(payload, json!({ "resultat": "NORMAL" }));
}

#[test]
fn enfant_submit_validates_every_step() {
    let state = FormState::new();
    let err = submit_payload_enfant(&state).unwrap_err();
    let WireError::Validation(errors) = err else {
        panic!("expected a validation error");
    };
    // at least the child general step and the technique step complain
    assert!(errors
        .iter()
        .any(|e| e.field == FieldPath::global(FieldId::RefletPupillaire)));
    assert!(errors.iter().any(|e| e.field == FieldPath::od(FieldId::Avsc)));
}
