use std::sync::LazyLock;

use iris_core::field::{Eye, FieldId, FieldPath};
use iris_core::vocab::{papille, segment, sentinel};

use crate::rules::{Condition, FieldRule};
use crate::{Section, SectionId};

/// Clinical data: slit-lamp biomicroscopy of the anterior and posterior
/// segments, per eye. Each segment has a governing mode field; its
/// finding fields only exist while the mode is PRESENCE_LESION.
pub struct Clinique;

/// A finding field and its "other" free-text companion. The detail
/// rule carries the full governing chain, so it guards against stale
/// values on its own even when the parent clear fires in the same
/// evaluation pass.
fn finding_with_autre(
    rules: &mut Vec<FieldRule>,
    eye: Eye,
    primary: FieldId,
    detail: FieldId,
    wire_key: &'static str,
    wire_detail: &'static str,
    active: &Condition,
    autre_token: &'static str,
) {
    let primary_path = FieldPath::eye(eye, primary);
    rules.push(FieldRule::new(primary_path, wire_key, active.clone()));
    rules.push(FieldRule::new(
        FieldPath::eye(eye, detail),
        wire_detail,
        Condition::All(vec![
            active.clone(),
            Condition::Equals(primary_path, autre_token),
        ]),
    ));
}

fn anterior(rules: &mut Vec<FieldRule>, eye: Eye) {
    let seg = FieldPath::eye(eye, FieldId::SegmentAnterieur);
    rules.push(FieldRule::new(seg, "segment", Condition::Always));

    let lesion = Condition::Equals(seg, segment::PRESENCE_LESION);
    finding_with_autre(
        rules,
        eye,
        FieldId::Paupieres,
        FieldId::PaupieresAutre,
        "paupieres",
        "paupieres_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::Conjonctive,
        FieldId::ConjonctiveAutre,
        "conjonctive",
        "conjonctive_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::Cornee,
        FieldId::CorneeAutre,
        "cornee",
        "cornee_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::ChambreAnterieure,
        FieldId::ChambreAnterieureAutre,
        "chambre_anterieure",
        "chambre_anterieure_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::Iris,
        FieldId::IrisAutre,
        "iris",
        "iris_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::Cristallin,
        FieldId::CristallinAutre,
        "cristallin",
        "cristallin_autre",
        &lesion,
        sentinel::AUTRE,
    );

    rules.push(FieldRule::new(
        FieldPath::eye(eye, FieldId::RemaniementDetails),
        "remaniement_details",
        Condition::Equals(seg, segment::REMANIEMENT_TOTAL),
    ));
}

fn posterior(rules: &mut Vec<FieldRule>, eye: Eye) {
    let seg = FieldPath::eye(eye, FieldId::SegmentPosterieur);
    rules.push(FieldRule::new(seg, "segment", Condition::Always));

    let lesion = Condition::Equals(seg, segment::PRESENCE_LESION);
    finding_with_autre(
        rules,
        eye,
        FieldId::Vitre,
        FieldId::VitreAutre,
        "vitre",
        "vitre_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::Papille,
        FieldId::PapilleAutre,
        "papille",
        "papille_autre",
        &lesion,
        sentinel::AUTRE,
    );
    // Cup/disc ratio is only recorded for an enlarged cup.
    rules.push(FieldRule::new(
        FieldPath::eye(eye, FieldId::CdRatio),
        "cd_ratio",
        Condition::All(vec![
            lesion.clone(),
            Condition::Equals(
                FieldPath::eye(eye, FieldId::Papille),
                papille::EXCAVATION_ELARGIE,
            ),
        ]),
    ));
    finding_with_autre(
        rules,
        eye,
        FieldId::Macula,
        FieldId::MaculaAutre,
        "macula",
        "macula_autre",
        &lesion,
        sentinel::AUTRE,
    );
    finding_with_autre(
        rules,
        eye,
        FieldId::Retine,
        FieldId::RetineAutre,
        "retine",
        "retine_autre",
        &lesion,
        sentinel::AUTRE,
    );

    let non_visualisable = Condition::Equals(seg, segment::NON_VISUALISABLE);
    finding_with_autre(
        rules,
        eye,
        FieldId::NonVisualisableCause,
        FieldId::NonVisualisableCauseAutre,
        "non_visualisable_cause",
        "non_visualisable_cause_autre",
        &non_visualisable,
        sentinel::AUTRES,
    );
}

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let mut rules = Vec::new();
    for eye in Eye::BOTH {
        anterior(&mut rules, eye);
        posterior(&mut rules, eye);
    }
    rules
});

impl Section for Clinique {
    fn id(&self) -> SectionId {
        SectionId::Clinique
    }

    fn name(&self) -> &str {
        "Données cliniques"
    }

    fn rules(&self) -> &[FieldRule] {
        &RULES
    }
}
