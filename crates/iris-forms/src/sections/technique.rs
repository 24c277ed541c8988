use std::sync::LazyLock;

use iris_core::field::{Eye, FieldId, FieldPath};
use iris_core::vocab::{oui_non, tonus_methode};

use crate::rules::{Condition, FieldRule};
use crate::{Section, SectionId};

/// Technical data: acuity, refraction, and intraocular pressure, per
/// eye. Numeric bounds live in the range service, not here.
pub struct Technique;

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let mut rules = vec![
        FieldRule::new(
            FieldPath::global(FieldId::PorteCorrection),
            "porte_correction",
            Condition::Always,
        ),
        FieldRule::new(
            FieldPath::global(FieldId::TonusMethode),
            "to_methode",
            Condition::Always,
        ),
    ];

    // The corrected-acuity column only applies when the patient wears a
    // correction; the pressure columns only when a measurement method
    // was actually used.
    let corrected = Condition::Equals(FieldPath::global(FieldId::PorteCorrection), oui_non::OUI);
    let tonus_measured = Condition::OneOf(
        FieldPath::global(FieldId::TonusMethode),
        &[tonus_methode::AIR_PULSE, tonus_methode::APLANATION],
    );

    for eye in Eye::BOTH {
        rules.extend([
            FieldRule::new(FieldPath::eye(eye, FieldId::Avsc), "avsc", Condition::Always),
            FieldRule::new(FieldPath::eye(eye, FieldId::Avac), "avac", corrected.clone()),
            FieldRule::new(FieldPath::eye(eye, FieldId::Sphere), "s", Condition::Always),
            FieldRule::new(
                FieldPath::eye(eye, FieldId::Cylindre),
                "c",
                Condition::Always,
            )
            .optional(),
            // An axis is only meaningful once a cylinder was recorded.
            FieldRule::new(
                FieldPath::eye(eye, FieldId::Axe),
                "a",
                Condition::IsSet(FieldPath::eye(eye, FieldId::Cylindre)),
            ),
            FieldRule::new(
                FieldPath::eye(eye, FieldId::Tonus),
                "to",
                tonus_measured.clone(),
            ),
        ]);
    }
    rules
});

impl Section for Technique {
    fn id(&self) -> SectionId {
        SectionId::Technique
    }

    fn name(&self) -> &str {
        "Données techniques"
    }

    fn rules(&self) -> &[FieldRule] {
        &RULES
    }
}
