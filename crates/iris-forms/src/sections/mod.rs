pub mod binoculaire;
pub mod clinique;
pub mod conclusion;
pub mod enfant;
pub mod technique;
