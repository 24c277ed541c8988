use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sexe {
    Masculin,
    Feminin,
}

/// A patient registered in the screening program.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub date_naissance: jiff::civil::Date,
    pub sexe: Sexe,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub telephone: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
