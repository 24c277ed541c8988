use iris_core::field::{Eye, FieldId, FieldPath};

#[test]
fn eye_scoped_grouped_path_renders_dot_notation() {
    let path = FieldPath::od(FieldId::SegmentAnterieur);
    assert_eq!(path.to_string(), "od.bp_sg_anterieur.segment");
}

#[test]
fn eye_scoped_flat_path_renders_dot_notation() {
    assert_eq!(FieldPath::og(FieldId::Avsc).to_string(), "og.avsc");
}

#[test]
fn global_path_renders_bare_key() {
    assert_eq!(
        FieldPath::global(FieldId::TonusMethode).to_string(),
        "tonus_methode"
    );
}

#[test]
fn every_path_parses_back_to_itself() {
    for id in FieldId::ALL {
        for path in id.paths() {
            let parsed: FieldPath = path.to_string().parse().unwrap();
            assert_eq!(parsed, path, "round trip failed for {path}");
        }
    }
}

#[test]
fn unknown_leaf_is_rejected() {
    assert!("od.bp_sg_anterieur.inexistant".parse::<FieldPath>().is_err());
}

#[test]
fn per_eye_field_without_eye_is_rejected() {
    assert!("avsc".parse::<FieldPath>().is_err());
}

#[test]
fn global_field_with_eye_is_rejected() {
    assert!("od.tonus_methode".parse::<FieldPath>().is_err());
}

#[test]
fn wrong_group_is_rejected() {
    // vitre belongs to the posterior segment
    assert!("od.bp_sg_anterieur.vitre".parse::<FieldPath>().is_err());
}

#[test]
fn both_segments_share_the_segment_leaf() {
    let anterior: FieldPath = "od.bp_sg_anterieur.segment".parse().unwrap();
    let posterior: FieldPath = "od.bp_sg_posterieur.segment".parse().unwrap();
    assert_eq!(anterior.id, FieldId::SegmentAnterieur);
    assert_eq!(posterior.id, FieldId::SegmentPosterieur);
    assert_eq!(anterior.eye, Some(Eye::Od));
}
