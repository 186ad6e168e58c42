use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Concentration {
    EDT,
    EDP,
    EPC,
    Parfum,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// The three tiers of a fragrance's evolution on skin.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Top,
    Middle,
    Base,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Top, Tier::Middle, Tier::Base];

    pub fn parse(s: &str) -> Option<Tier> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Tier::Top),
            "middle" | "heart" => Some(Tier::Middle),
            "base" => Some(Tier::Base),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Tier::Top => "top",
            Tier::Middle => "middle",
            Tier::Base => "base",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Notes {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub base: Vec<String>,
}

impl Notes {
    pub fn tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Top => &self.top,
            Tier::Middle => &self.middle,
            Tier::Base => &self.base,
        }
    }

    /// Iterates top, middle and base notes in that order.
    pub fn iter_all(&self) -> impl Iterator<Item = &String> {
        self.top.iter().chain(self.middle.iter()).chain(self.base.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.middle.is_empty() && self.base.is_empty()
    }

    pub fn tier_contains_any(&self, tier: Tier, names: &[&str]) -> bool {
        self.tier(tier).iter().any(|n| names.contains(&n.as_str()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter_all().any(|n| n == name)
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Fragrance {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub concentration: Concentration,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    #[serde(default)]
    pub image: String,
    pub notes: Notes,
    #[serde(default)]
    pub description: String,
    pub longevity: u8,
    pub projection: u8,
    #[serde(default)]
    pub seasonality: Vec<Season>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub mood: Vec<String>,
}

impl Fragrance {
    pub fn has_mood(&self, mood: &str) -> bool {
        self.mood.iter().any(|m| m == mood)
    }

    pub fn has_occasion(&self, occasion: &str) -> bool {
        self.occasions.iter().any(|o| o == occasion)
    }

    pub fn has_season(&self, season: Season) -> bool {
        self.seasonality.contains(&season)
    }
}
