//! Clinical value vocabulary.
//!
//! Choice fields hold fixed tokens rather than one Rust enum per field;
//! the vocabularies below are maintained with the clinical team and the
//! rule engine only ever compares tokens. Tokens are uppercase except
//! for the child pupillary-reflex values, which the backend stores
//! lowercase.

/// Tokens with special-case behavior in the rule tables.
pub mod sentinel {
    /// "Other" — activates the paired free-text detail field.
    pub const AUTRE: &str = "AUTRE";
    /// Plural form used by a few vocabularies.
    pub const AUTRES: &str = "AUTRES";
    /// Governing-field "nothing to report" mode.
    pub const NORMAL: &str = "NORMAL";
    /// Normal child pupillary reflex.
    pub const ROUGE: &str = "rouge";
}

pub mod oui_non {
    pub const OUI: &str = "OUI";
    pub const NON: &str = "NON";
}

pub mod tonus_methode {
    pub const AIR_PULSE: &str = "AIR_PULSE";
    pub const APLANATION: &str = "APLANATION";
    pub const NON_MESURE: &str = "NON_MESURE";
}

/// Biomicroscopy segment modes (anterior and posterior).
pub mod segment {
    pub const NORMAL: &str = "NORMAL";
    pub const PRESENCE_LESION: &str = "PRESENCE_LESION";
    /// Anterior segment only.
    pub const REMANIEMENT_TOTAL: &str = "REMANIEMENT_TOTAL";
    /// Posterior segment only (media opacity blocks fundus view).
    pub const NON_VISUALISABLE: &str = "NON_VISUALISABLE";
}

pub mod paupieres {
    pub const NORMALES: &str = "NORMALES";
    pub const PTOSIS: &str = "PTOSIS";
    pub const CHALAZION: &str = "CHALAZION";
    pub const ENTROPION: &str = "ENTROPION";
    pub const AUTRE: &str = "AUTRE";
}

pub mod conjonctive {
    pub const NORMALE: &str = "NORMALE";
    pub const HYPERHEMIE: &str = "HYPERHEMIE";
    pub const PTERYGION: &str = "PTERYGION";
    pub const AUTRE: &str = "AUTRE";
}

pub mod cornee {
    pub const CLAIRE: &str = "CLAIRE";
    pub const OPACITE_PARTIELLE: &str = "OPACITE_PARTIELLE";
    pub const OPACITE_TOTALE: &str = "OPACITE_TOTALE";
    pub const LEUCOME: &str = "LEUCOME";
    pub const AUTRE: &str = "AUTRE";
}

pub mod chambre_anterieure {
    pub const CALME: &str = "CALME";
    pub const TYNDALL: &str = "TYNDALL";
    pub const HYPHEMA: &str = "HYPHEMA";
    pub const AUTRE: &str = "AUTRE";
}

pub mod iris {
    pub const NORMAL: &str = "NORMAL";
    pub const SYNECHIES: &str = "SYNECHIES";
    pub const RUBEOSE: &str = "RUBEOSE";
    pub const AUTRE: &str = "AUTRE";
}

pub mod cristallin {
    pub const CLAIR: &str = "CLAIR";
    pub const CATARACTE_DEBUTANTE: &str = "CATARACTE_DEBUTANTE";
    pub const CATARACTE_TOTALE: &str = "CATARACTE_TOTALE";
    pub const APHAKIE: &str = "APHAKIE";
    pub const PSEUDOPHAKIE: &str = "PSEUDOPHAKIE";
    pub const AUTRE: &str = "AUTRE";
}

pub mod vitre {
    pub const CLAIR: &str = "CLAIR";
    pub const HEMORRAGIE: &str = "HEMORRAGIE";
    pub const HYALITE: &str = "HYALITE";
    pub const AUTRE: &str = "AUTRE";
}

pub mod papille {
    pub const NORMALE: &str = "NORMALE";
    pub const EXCAVATION_ELARGIE: &str = "EXCAVATION_ELARGIE";
    pub const ATROPHIE: &str = "ATROPHIE";
    pub const OEDEME: &str = "OEDEME";
    pub const AUTRE: &str = "AUTRE";
}

pub mod macula {
    pub const NORMALE: &str = "NORMALE";
    pub const CICATRICE: &str = "CICATRICE";
    pub const OEDEME: &str = "OEDEME";
    pub const AUTRE: &str = "AUTRE";
}

pub mod retine {
    pub const NORMALE: &str = "NORMALE";
    pub const DECOLLEMENT: &str = "DECOLLEMENT";
    pub const RETINOPATHIE: &str = "RETINOPATHIE";
    pub const DEGENERESCENCE: &str = "DEGENERESCENCE";
    pub const AUTRE: &str = "AUTRE";
}

pub mod non_visualisable {
    pub const CATARACTE: &str = "CATARACTE";
    pub const OPACITE_CORNEENNE: &str = "OPACITE_CORNEENNE";
    pub const AUTRES: &str = "AUTRES";
}

pub mod stereoscopie {
    pub const POSITIF: &str = "POSITIF";
    pub const NEGATIF: &str = "NEGATIF";
    pub const NON_REALISABLE: &str = "NON_REALISABLE";
}

pub mod cover_test {
    pub const NORMAL: &str = "NORMAL";
    pub const TROPIE: &str = "TROPIE";
    pub const PHORIE: &str = "PHORIE";
}

pub mod deviation {
    pub const ESO: &str = "ESO";
    pub const EXO: &str = "EXO";
    pub const HYPER: &str = "HYPER";
    pub const HYPO: &str = "HYPO";
}

pub mod motilite {
    pub const NORMALE: &str = "NORMALE";
    pub const LIMITATION: &str = "LIMITATION";
}

pub mod convergence {
    pub const NORMALE: &str = "NORMALE";
    pub const INSUFFISANTE: &str = "INSUFFISANTE";
}

pub mod nystagmus {
    pub const ABSENT: &str = "ABSENT";
    pub const PRESENT: &str = "PRESENT";
}

pub mod resultat {
    pub const NORMAL: &str = "NORMAL";
    pub const ANOMALIE_DEPISTEE: &str = "ANOMALIE_DEPISTEE";
}

pub mod diagnostic {
    pub const AMETROPIE: &str = "AMETROPIE";
    pub const CATARACTE: &str = "CATARACTE";
    pub const GLAUCOME_SUSPECT: &str = "GLAUCOME_SUSPECT";
    pub const RETINOPATHIE: &str = "RETINOPATHIE";
    pub const STRABISME: &str = "STRABISME";
    pub const AMBLYOPIE: &str = "AMBLYOPIE";
    pub const AUTRES: &str = "AUTRES";
}

pub mod orientation {
    pub const AUCUNE: &str = "AUCUNE";
    pub const CONSULTATION_OPHTALMOLOGIQUE: &str = "CONSULTATION_OPHTALMOLOGIQUE";
    pub const URGENCE: &str = "URGENCE";
}

pub mod delai {
    pub const IMMEDIAT: &str = "IMMEDIAT";
    pub const SOUS_UN_MOIS: &str = "SOUS_UN_MOIS";
    pub const SOUS_SIX_MOIS: &str = "SOUS_SIX_MOIS";
}

/// Child pupillary-reflex values. Stored lowercase by the backend.
pub mod reflet {
    pub const ROUGE: &str = "rouge";
    pub const LEUCOCORIE: &str = "leucocorie";
    pub const ABSENCE_REFLET: &str = "absence_reflet";
    pub const AUTRE: &str = "autre";
}

pub mod lateralite {
    pub const OD: &str = "od";
    pub const OG: &str = "og";
    pub const ODG: &str = "odg";
}

pub mod strabisme {
    pub const ABSENT: &str = "ABSENT";
    pub const PRESENT: &str = "PRESENT";
}

pub mod poursuite {
    pub const NORMALE: &str = "NORMALE";
    pub const ANORMALE: &str = "ANORMALE";
}

pub mod antecedents {
    pub const AUCUN: &str = "AUCUN";
    pub const STRABISME: &str = "STRABISME";
    pub const AMBLYOPIE: &str = "AMBLYOPIE";
    pub const MALADIE_CECITANTE: &str = "MALADIE_CECITANTE";
    pub const AUTRES: &str = "AUTRES";
}
