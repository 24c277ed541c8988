//! Typed field addressing.
//!
//! The exam forms were historically addressed by dot-notation strings
//! (`od.bp_sg_anterieur.segment`). Here every known field is a
//! [`FieldId`] variant and a [`FieldPath`] pairs it with the eye it
//! applies to, so an invalid path cannot be constructed. The legacy dot
//! string survives as the `Display`/`FromStr` form, used in logs and
//! hydration diagnostics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The eye a per-eye field belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Eye {
    Od,
    Og,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Od, Eye::Og];

    pub fn as_str(&self) -> &'static str {
        match self {
            Eye::Od => "od",
            Eye::Og => "og",
        }
    }
}

/// Laterality of a finding: right eye, left eye, or both.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Laterality {
    Od,
    Og,
    Odg,
}

impl Laterality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Laterality::Od => crate::vocab::lateralite::OD,
            Laterality::Og => crate::vocab::lateralite::OG,
            Laterality::Odg => crate::vocab::lateralite::ODG,
        }
    }
}

/// The value shape a field holds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// One token out of a fixed vocabulary.
    Choice,
    /// Free text.
    Text,
    /// Scalar measurement.
    Number,
}

/// Every field the exam forms know about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldId {
    // Technical data
    Avsc,
    Avac,
    Sphere,
    Cylindre,
    Axe,
    Tonus,
    PorteCorrection,
    TonusMethode,

    // Biomicroscopy, anterior segment
    SegmentAnterieur,
    Paupieres,
    PaupieresAutre,
    Conjonctive,
    ConjonctiveAutre,
    Cornee,
    CorneeAutre,
    ChambreAnterieure,
    ChambreAnterieureAutre,
    Iris,
    IrisAutre,
    Cristallin,
    CristallinAutre,
    RemaniementDetails,

    // Biomicroscopy, posterior segment
    SegmentPosterieur,
    Vitre,
    VitreAutre,
    Papille,
    PapilleAutre,
    CdRatio,
    Macula,
    MaculaAutre,
    Retine,
    RetineAutre,
    NonVisualisableCause,
    NonVisualisableCauseAutre,

    // Binocular vision
    StereoscopieLang,
    CoverTest,
    CoverTestDeviation,
    CoverTestOeil,
    Motilite,
    MotiliteDetails,
    Convergence,
    Nystagmus,
    NystagmusDetails,

    // Conclusion
    Resultat,
    DiagnosticPrincipal,
    DiagnosticAutre,
    Orientation,
    OrientationDelai,
    ConduiteATenir,
    Observations,

    // Child exam, general step
    RefletPupillaire,
    RefletLateralite,
    RefletDetails,
    StrabismeApparent,
    StrabismeDetails,
    PoursuiteOculaire,
    AntecedentsFamiliaux,
    AntecedentsAutre,
}

impl FieldId {
    pub const ALL: [FieldId; 58] = [
        FieldId::Avsc,
        FieldId::Avac,
        FieldId::Sphere,
        FieldId::Cylindre,
        FieldId::Axe,
        FieldId::Tonus,
        FieldId::PorteCorrection,
        FieldId::TonusMethode,
        FieldId::SegmentAnterieur,
        FieldId::Paupieres,
        FieldId::PaupieresAutre,
        FieldId::Conjonctive,
        FieldId::ConjonctiveAutre,
        FieldId::Cornee,
        FieldId::CorneeAutre,
        FieldId::ChambreAnterieure,
        FieldId::ChambreAnterieureAutre,
        FieldId::Iris,
        FieldId::IrisAutre,
        FieldId::Cristallin,
        FieldId::CristallinAutre,
        FieldId::RemaniementDetails,
        FieldId::SegmentPosterieur,
        FieldId::Vitre,
        FieldId::VitreAutre,
        FieldId::Papille,
        FieldId::PapilleAutre,
        FieldId::CdRatio,
        FieldId::Macula,
        FieldId::MaculaAutre,
        FieldId::Retine,
        FieldId::RetineAutre,
        FieldId::NonVisualisableCause,
        FieldId::NonVisualisableCauseAutre,
        FieldId::StereoscopieLang,
        FieldId::CoverTest,
        FieldId::CoverTestDeviation,
        FieldId::CoverTestOeil,
        FieldId::Motilite,
        FieldId::MotiliteDetails,
        FieldId::Convergence,
        FieldId::Nystagmus,
        FieldId::NystagmusDetails,
        FieldId::Resultat,
        FieldId::DiagnosticPrincipal,
        FieldId::DiagnosticAutre,
        FieldId::Orientation,
        FieldId::OrientationDelai,
        FieldId::ConduiteATenir,
        FieldId::Observations,
        FieldId::RefletPupillaire,
        FieldId::RefletLateralite,
        FieldId::RefletDetails,
        FieldId::StrabismeApparent,
        FieldId::StrabismeDetails,
        FieldId::PoursuiteOculaire,
        FieldId::AntecedentsFamiliaux,
        FieldId::AntecedentsAutre,
    ];

    /// The snake_case name the form layer uses for this field.
    pub fn form_key(&self) -> &'static str {
        match self {
            FieldId::Avsc => "avsc",
            FieldId::Avac => "avac",
            FieldId::Sphere => "sphere",
            FieldId::Cylindre => "cylindre",
            FieldId::Axe => "axe",
            FieldId::Tonus => "tonus",
            FieldId::PorteCorrection => "porte_correction",
            FieldId::TonusMethode => "tonus_methode",
            FieldId::SegmentAnterieur | FieldId::SegmentPosterieur => "segment",
            FieldId::Paupieres => "paupieres",
            FieldId::PaupieresAutre => "paupieres_autre",
            FieldId::Conjonctive => "conjonctive",
            FieldId::ConjonctiveAutre => "conjonctive_autre",
            FieldId::Cornee => "cornee",
            FieldId::CorneeAutre => "cornee_autre",
            FieldId::ChambreAnterieure => "chambre_anterieure",
            FieldId::ChambreAnterieureAutre => "chambre_anterieure_autre",
            FieldId::Iris => "iris",
            FieldId::IrisAutre => "iris_autre",
            FieldId::Cristallin => "cristallin",
            FieldId::CristallinAutre => "cristallin_autre",
            FieldId::RemaniementDetails => "remaniement_details",
            FieldId::Vitre => "vitre",
            FieldId::VitreAutre => "vitre_autre",
            FieldId::Papille => "papille",
            FieldId::PapilleAutre => "papille_autre",
            FieldId::CdRatio => "cd_ratio",
            FieldId::Macula => "macula",
            FieldId::MaculaAutre => "macula_autre",
            FieldId::Retine => "retine",
            FieldId::RetineAutre => "retine_autre",
            FieldId::NonVisualisableCause => "non_visualisable_cause",
            FieldId::NonVisualisableCauseAutre => "non_visualisable_cause_autre",
            FieldId::StereoscopieLang => "stereoscopie_lang",
            FieldId::CoverTest => "cover_test",
            FieldId::CoverTestDeviation => "cover_test_deviation",
            FieldId::CoverTestOeil => "cover_test_oeil",
            FieldId::Motilite => "motilite",
            FieldId::MotiliteDetails => "motilite_details",
            FieldId::Convergence => "convergence",
            FieldId::Nystagmus => "nystagmus",
            FieldId::NystagmusDetails => "nystagmus_details",
            FieldId::Resultat => "resultat",
            FieldId::DiagnosticPrincipal => "diagnostic_principal",
            FieldId::DiagnosticAutre => "diagnostic_autre",
            FieldId::Orientation => "orientation",
            FieldId::OrientationDelai => "orientation_delai",
            FieldId::ConduiteATenir => "conduite_a_tenir",
            FieldId::Observations => "observations",
            FieldId::RefletPupillaire => "reflet_pupillaire",
            FieldId::RefletLateralite => "reflet_lateralite",
            FieldId::RefletDetails => "reflet_details",
            FieldId::StrabismeApparent => "strabisme_apparent",
            FieldId::StrabismeDetails => "strabisme_details",
            FieldId::PoursuiteOculaire => "poursuite_oculaire",
            FieldId::AntecedentsFamiliaux => "antecedents_familiaux",
            FieldId::AntecedentsAutre => "antecedents_autre",
        }
    }

    /// The biomicroscopy group segment of the dot path, if any.
    pub fn group(&self) -> Option<&'static str> {
        match self {
            FieldId::SegmentAnterieur
            | FieldId::Paupieres
            | FieldId::PaupieresAutre
            | FieldId::Conjonctive
            | FieldId::ConjonctiveAutre
            | FieldId::Cornee
            | FieldId::CorneeAutre
            | FieldId::ChambreAnterieure
            | FieldId::ChambreAnterieureAutre
            | FieldId::Iris
            | FieldId::IrisAutre
            | FieldId::Cristallin
            | FieldId::CristallinAutre
            | FieldId::RemaniementDetails => Some("bp_sg_anterieur"),
            FieldId::SegmentPosterieur
            | FieldId::Vitre
            | FieldId::VitreAutre
            | FieldId::Papille
            | FieldId::PapilleAutre
            | FieldId::CdRatio
            | FieldId::Macula
            | FieldId::MaculaAutre
            | FieldId::Retine
            | FieldId::RetineAutre
            | FieldId::NonVisualisableCause
            | FieldId::NonVisualisableCauseAutre => Some("bp_sg_posterieur"),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::Avsc
            | FieldId::Avac
            | FieldId::Sphere
            | FieldId::Cylindre
            | FieldId::Axe
            | FieldId::Tonus
            | FieldId::CdRatio => FieldKind::Number,
            FieldId::PaupieresAutre
            | FieldId::ConjonctiveAutre
            | FieldId::CorneeAutre
            | FieldId::ChambreAnterieureAutre
            | FieldId::IrisAutre
            | FieldId::CristallinAutre
            | FieldId::RemaniementDetails
            | FieldId::VitreAutre
            | FieldId::PapilleAutre
            | FieldId::MaculaAutre
            | FieldId::RetineAutre
            | FieldId::NonVisualisableCauseAutre
            | FieldId::MotiliteDetails
            | FieldId::NystagmusDetails
            | FieldId::DiagnosticAutre
            | FieldId::ConduiteATenir
            | FieldId::Observations
            | FieldId::RefletDetails
            | FieldId::StrabismeDetails
            | FieldId::AntecedentsAutre => FieldKind::Text,
            _ => FieldKind::Choice,
        }
    }

    /// Whether this field exists once per eye.
    pub fn per_eye(&self) -> bool {
        matches!(
            self,
            FieldId::Avsc
                | FieldId::Avac
                | FieldId::Sphere
                | FieldId::Cylindre
                | FieldId::Axe
                | FieldId::Tonus
        ) || self.group().is_some()
    }

    /// Paths for this field: one per eye for per-eye fields, one
    /// otherwise.
    pub fn paths(&self) -> Vec<FieldPath> {
        if self.per_eye() {
            Eye::BOTH.iter().map(|e| FieldPath::eye(*e, *self)).collect()
        } else {
            vec![FieldPath::global(*self)]
        }
    }
}

/// A fully-resolved field address: the field plus the eye it applies
/// to, when the field is eye-scoped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct FieldPath {
    pub eye: Option<Eye>,
    pub id: FieldId,
}

impl FieldPath {
    pub fn eye(eye: Eye, id: FieldId) -> Self {
        Self { eye: Some(eye), id }
    }

    pub fn od(id: FieldId) -> Self {
        Self::eye(Eye::Od, id)
    }

    pub fn og(id: FieldId) -> Self {
        Self::eye(Eye::Og, id)
    }

    pub fn global(id: FieldId) -> Self {
        Self { eye: None, id }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(eye) = self.eye {
            write!(f, "{}.", eye.as_str())?;
        }
        if let Some(group) = self.id.group() {
            write!(f, "{group}.")?;
        }
        f.write_str(self.id.form_key())
    }
}

impl FromStr for FieldPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidFieldPath(s.to_string());

        let mut parts = s.split('.');
        let mut head = parts.next().ok_or_else(invalid)?;
        let eye = match head {
            "od" => Some(Eye::Od),
            "og" => Some(Eye::Og),
            _ => None,
        };
        if eye.is_some() {
            head = parts.next().ok_or_else(invalid)?;
        }
        let (group, key) = match parts.next() {
            Some(leaf) => (Some(head), leaf),
            None => (None, head),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        let id = FieldId::ALL
            .iter()
            .copied()
            .find(|id| id.form_key() == key && id.group() == group)
            .ok_or_else(invalid)?;
        if id.per_eye() != eye.is_some() {
            return Err(invalid());
        }
        Ok(FieldPath { eye, id })
    }
}
