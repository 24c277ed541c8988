use std::sync::LazyLock;

use iris_core::field::{FieldId, FieldPath};
use iris_core::vocab::{orientation, resultat, sentinel};

use crate::rules::{Condition, FieldRule};
use crate::{Section, SectionId};

/// Screening conclusion (adult exams only): result, principal
/// diagnosis, and referral.
pub struct Conclusion;

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let result = FieldPath::global(FieldId::Resultat);
    let diagnostic = FieldPath::global(FieldId::DiagnosticPrincipal);
    let referral = FieldPath::global(FieldId::Orientation);
    let anomalie = Condition::Equals(result, resultat::ANOMALIE_DEPISTEE);

    vec![
        FieldRule::new(result, "resultat", Condition::Always),
        FieldRule::new(diagnostic, "diagnostic_principal", anomalie.clone()),
        FieldRule::new(
            FieldPath::global(FieldId::DiagnosticAutre),
            "diagnostic_autre",
            Condition::All(vec![
                anomalie.clone(),
                Condition::Equals(diagnostic, sentinel::AUTRES),
            ]),
        ),
        FieldRule::new(referral, "orientation", anomalie.clone()),
        // A referral delay only applies to a routine specialist
        // consultation; an urgence leaves immediately.
        FieldRule::new(
            FieldPath::global(FieldId::OrientationDelai),
            "orientation_delai",
            Condition::All(vec![
                anomalie.clone(),
                Condition::Equals(referral, orientation::CONSULTATION_OPHTALMOLOGIQUE),
            ]),
        ),
        FieldRule::new(
            FieldPath::global(FieldId::ConduiteATenir),
            "conduite_a_tenir",
            anomalie,
        )
        .optional(),
        FieldRule::new(
            FieldPath::global(FieldId::Observations),
            "observations",
            Condition::Always,
        )
        .optional(),
    ]
});

impl Section for Conclusion {
    fn id(&self) -> SectionId {
        SectionId::Conclusion
    }

    fn name(&self) -> &str {
        "Conclusion"
    }

    fn rules(&self) -> &[FieldRule] {
        &RULES
    }
}
