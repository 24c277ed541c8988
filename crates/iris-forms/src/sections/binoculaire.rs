use std::sync::LazyLock;

use iris_core::field::{FieldId, FieldPath};
use iris_core::vocab::{cover_test, motilite, nystagmus};

use crate::rules::{Condition, FieldRule};
use crate::{Section, SectionId};

/// Binocular vision: Lang stereoscopy, cover test, motility,
/// convergence, nystagmus. Not eye-scoped.
pub struct Binoculaire;

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let cover = FieldPath::global(FieldId::CoverTest);
    let deviated = Condition::OneOf(cover, &[cover_test::TROPIE, cover_test::PHORIE]);

    vec![
        // Lang II card; the backend kept the historical column name.
        FieldRule::new(
            FieldPath::global(FieldId::StereoscopieLang),
            "stereoscopie_lang_ii",
            Condition::Always,
        ),
        FieldRule::new(cover, "cover_test", Condition::Always),
        FieldRule::new(
            FieldPath::global(FieldId::CoverTestDeviation),
            "cover_test_deviation",
            deviated.clone(),
        ),
        FieldRule::new(
            FieldPath::global(FieldId::CoverTestOeil),
            "cover_test_oeil",
            deviated,
        ),
        FieldRule::new(
            FieldPath::global(FieldId::Motilite),
            "motilite",
            Condition::Always,
        ),
        FieldRule::new(
            FieldPath::global(FieldId::MotiliteDetails),
            "motilite_details",
            Condition::Equals(FieldPath::global(FieldId::Motilite), motilite::LIMITATION),
        ),
        FieldRule::new(
            FieldPath::global(FieldId::Convergence),
            "convergence",
            Condition::Always,
        ),
        FieldRule::new(
            FieldPath::global(FieldId::Nystagmus),
            "nystagmus",
            Condition::Always,
        ),
        FieldRule::new(
            FieldPath::global(FieldId::NystagmusDetails),
            "nystagmus_details",
            Condition::Equals(FieldPath::global(FieldId::Nystagmus), nystagmus::PRESENT),
        ),
    ]
});

impl Section for Binoculaire {
    fn id(&self) -> SectionId {
        SectionId::Binoculaire
    }

    fn name(&self) -> &str {
        "Vision binoculaire"
    }

    fn rules(&self) -> &[FieldRule] {
        &RULES
    }
}
