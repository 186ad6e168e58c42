use crate::catalog::Concentration;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_notes: Vec<String>,
    #[serde(default)]
    pub disliked_notes: Vec<String>,
    #[serde(default)]
    pub preferred_concentrations: Vec<Concentration>,
}

/// A shopper account from the fixture data.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub handle: String,
    pub name: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub preferences: UserPreferences,
}
