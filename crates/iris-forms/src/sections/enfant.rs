use std::sync::LazyLock;

use iris_core::field::{FieldId, FieldPath};
use iris_core::vocab::{antecedents, sentinel, strabisme};

use crate::rules::{Condition, FieldRule};
use crate::{Section, SectionId};

/// Child-exam general step: pupillary reflex, apparent strabismus,
/// ocular pursuit, family history.
pub struct EnfantGeneral;

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let reflet = FieldPath::global(FieldId::RefletPupillaire);
    let strabisme_path = FieldPath::global(FieldId::StrabismeApparent);
    let antecedents_path = FieldPath::global(FieldId::AntecedentsFamiliaux);

    // Any recorded reflex other than "rouge" must say which eye and
    // what was seen.
    let reflet_abnormal = Condition::All(vec![
        Condition::IsSet(reflet),
        Condition::not(Condition::Equals(reflet, sentinel::ROUGE)),
    ]);

    vec![
        FieldRule::new(reflet, "reflet_pupillaire", Condition::Always),
        FieldRule::new(
            FieldPath::global(FieldId::RefletLateralite),
            "reflet_lateralite",
            reflet_abnormal.clone(),
        ),
        FieldRule::new(
            FieldPath::global(FieldId::RefletDetails),
            "reflet_details",
            reflet_abnormal,
        ),
        FieldRule::new(strabisme_path, "strabisme_apparent", Condition::Always),
        FieldRule::new(
            FieldPath::global(FieldId::StrabismeDetails),
            "strabisme_details",
            Condition::Equals(strabisme_path, strabisme::PRESENT),
        ),
        FieldRule::new(
            FieldPath::global(FieldId::PoursuiteOculaire),
            "poursuite_oculaire",
            Condition::Always,
        ),
        FieldRule::new(antecedents_path, "antecedents_familiaux", Condition::Always),
        FieldRule::new(
            FieldPath::global(FieldId::AntecedentsAutre),
            "antecedents_autre",
            Condition::Equals(antecedents_path, antecedents::AUTRES),
        ),
    ]
});

impl Section for EnfantGeneral {
    fn id(&self) -> SectionId {
        SectionId::EnfantGeneral
    }

    fn name(&self) -> &str {
        "Examen général (enfant)"
    }

    fn rules(&self) -> &[FieldRule] {
        &RULES
    }
}
