use super::{rank_candidates, signature_profile};
use crate::catalog::{Catalog, Fragrance, Season, Tier};
use crate::scent::{FlowSettings, MatchResult, ScentProfile};
use serde::{Deserialize, Serialize};

const ENERGETIC: &[(Tier, &str, u8)] = &[
    (Tier::Top, "Bergamot", 8),
    (Tier::Top, "Lemon", 7),
    (Tier::Top, "Lime", 6),
    (Tier::Top, "Orange", 6),
];
const ROMANTIC: &[(Tier, &str, u8)] = &[
    (Tier::Middle, "Rose", 8),
    (Tier::Middle, "Jasmine", 8),
    (Tier::Middle, "Ylang-Ylang", 6),
    (Tier::Base, "Vanilla", 5),
];
const CALM: &[(Tier, &str, u8)] = &[
    (Tier::Middle, "Lavender", 6),
    (Tier::Base, "Sandalwood", 8),
    (Tier::Base, "Cedar", 7),
    (Tier::Base, "Vanilla", 6),
];
const CONFIDENT: &[(Tier, &str, u8)] = &[
    (Tier::Top, "Pepper", 7),
    (Tier::Top, "Bergamot", 6),
    (Tier::Middle, "Lavender", 5),
    (Tier::Base, "Amber", 6),
    (Tier::Base, "Cedar", 6),
];
const COZY: &[(Tier, &str, u8)] = &[
    (Tier::Base, "Vanilla", 9),
    (Tier::Base, "Amber", 8),
    (Tier::Base, "Musk", 6),
    (Tier::Base, "Tonka Bean", 6),
];
const MYSTERIOUS: &[(Tier, &str, u8)] = &[
    (Tier::Base, "Patchouli", 8),
    (Tier::Base, "Oud", 7),
    (Tier::Base, "Incense", 7),
    (Tier::Base, "Amber", 5),
];
const FRESH: &[(Tier, &str, u8)] = &[
    (Tier::Top, "Bergamot", 8),
    (Tier::Top, "Lemon", 7),
    (Tier::Top, "Lime", 6),
    (Tier::Base, "Musk", 4),
];
const VIBRANT: &[(Tier, &str, u8)] = &[
    (Tier::Top, "Lemon", 8),
    (Tier::Top, "Orange", 7),
    (Tier::Top, "Grapefruit", 6),
    (Tier::Middle, "Ginger", 6),
];
const RELAXED: &[(Tier, &str, u8)] = &[
    (Tier::Middle, "Lavender", 8),
    (Tier::Base, "Sandalwood", 7),
    (Tier::Base, "Vanilla", 6),
    (Tier::Base, "Musk", 5),
];
const SOPHISTICATED: &[(Tier, &str, u8)] = &[
    (Tier::Top, "Saffron", 7),
    (Tier::Middle, "Jasmine", 6),
    (Tier::Base, "Amber", 6),
    (Tier::Base, "Sandalwood", 7),
    (Tier::Base, "Oud", 5),
];

/// Moods offered by the quick mood match.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMood {
    Energetic,
    Romantic,
    Calm,
    Confident,
    Cozy,
    Mysterious,
}

impl MatchMood {
    pub const ALL: [MatchMood; 6] = [
        MatchMood::Energetic,
        MatchMood::Romantic,
        MatchMood::Calm,
        MatchMood::Confident,
        MatchMood::Cozy,
        MatchMood::Mysterious,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MatchMood::Energetic => "Energetic & Vibrant",
            MatchMood::Romantic => "Romantic & Dreamy",
            MatchMood::Calm => "Calm & Peaceful",
            MatchMood::Confident => "Confident & Bold",
            MatchMood::Cozy => "Cozy & Comfortable",
            MatchMood::Mysterious => "Mysterious & Alluring",
        }
    }

    fn accepts(self, fragrance: &Fragrance) -> bool {
        let notes = &fragrance.notes;
        match self {
            MatchMood::Energetic => {
                notes.tier_contains_any(Tier::Top, &["Bergamot", "Lemon", "Lime", "Orange"])
                    || fragrance.has_mood("Fresh")
            }
            MatchMood::Romantic => {
                notes.tier_contains_any(Tier::Middle, &["Rose", "Jasmine", "Ylang-Ylang"])
                    || fragrance.has_mood("Romantic")
            }
            MatchMood::Calm => {
                notes.tier_contains_any(Tier::Base, &["Sandalwood", "Cedar", "Vanilla"])
                    || fragrance.has_mood("Calm")
            }
            MatchMood::Confident => fragrance.projection >= 7 || fragrance.has_mood("Confident"),
            MatchMood::Cozy => notes.tier_contains_any(Tier::Base, &["Vanilla", "Amber", "Musk"]),
            MatchMood::Mysterious => {
                notes.tier_contains_any(Tier::Base, &["Patchouli", "Oud", "Incense"])
                    || fragrance.has_mood("Mysterious")
            }
        }
    }

    fn signature(self) -> ScentProfile {
        signature_profile(match self {
            MatchMood::Energetic => ENERGETIC,
            MatchMood::Romantic => ROMANTIC,
            MatchMood::Calm => CALM,
            MatchMood::Confident => CONFIDENT,
            MatchMood::Cozy => COZY,
            MatchMood::Mysterious => MYSTERIOUS,
        })
    }

    fn reason(self, fragrance: &Fragrance) -> String {
        let notes = &fragrance.notes;
        match self {
            MatchMood::Energetic => format!(
                "The bright {} opening energizes and uplifts your spirit",
                notes.top.join(" and ")
            ),
            MatchMood::Romantic => format!(
                "Sensual {} creates an intimate, romantic aura",
                notes.middle.join(" and ")
            ),
            MatchMood::Calm => format!(
                "Soothing {} base notes promote tranquility and peace",
                notes.base.join(" and ")
            ),
            MatchMood::Confident => {
                "Bold projection and sophisticated composition commands attention and respect"
                    .to_string()
            }
            MatchMood::Cozy => {
                "Warm, comforting notes wrap you in a cozy embrace like your favorite sweater"
                    .to_string()
            }
            MatchMood::Mysterious => {
                "Deep, complex composition creates an air of intrigue and sophistication".to_string()
            }
        }
    }
}

/// Moods offered by the longer mood questionnaire.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMood {
    Fresh,
    Romantic,
    Confident,
    Energetic,
    Calm,
    Sophisticated,
}

impl RecommendationMood {
    pub const ALL: [RecommendationMood; 6] = [
        RecommendationMood::Fresh,
        RecommendationMood::Romantic,
        RecommendationMood::Confident,
        RecommendationMood::Energetic,
        RecommendationMood::Calm,
        RecommendationMood::Sophisticated,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RecommendationMood::Fresh => "Fresh & Clean",
            RecommendationMood::Romantic => "Romantic & Dreamy",
            RecommendationMood::Confident => "Confident & Bold",
            RecommendationMood::Energetic => "Energetic & Vibrant",
            RecommendationMood::Calm => "Calm & Relaxed",
            RecommendationMood::Sophisticated => "Sophisticated & Elegant",
        }
    }

    fn accepts(self, fragrance: &Fragrance) -> bool {
        let notes = &fragrance.notes;
        match self {
            RecommendationMood::Fresh => {
                fragrance.has_mood("Fresh")
                    || fragrance.has_season(Season::Summer)
                    || notes.tier_contains_any(Tier::Top, &["Bergamot", "Lemon", "Lime"])
            }
            RecommendationMood::Romantic => {
                fragrance.has_mood("Romantic")
                    || fragrance.has_occasion("Date Night")
                    || notes.tier_contains_any(Tier::Middle, &["Rose", "Jasmine"])
            }
            RecommendationMood::Confident => {
                fragrance.has_mood("Confident")
                    || fragrance.has_mood("Bold")
                    || fragrance.projection >= 7
            }
            // No gate, the signature profile alone decides.
            RecommendationMood::Energetic
            | RecommendationMood::Calm
            | RecommendationMood::Sophisticated => true,
        }
    }

    fn signature(self) -> ScentProfile {
        signature_profile(match self {
            RecommendationMood::Fresh => FRESH,
            RecommendationMood::Romantic => ROMANTIC,
            RecommendationMood::Confident => CONFIDENT,
            RecommendationMood::Energetic => VIBRANT,
            RecommendationMood::Calm => RELAXED,
            RecommendationMood::Sophisticated => SOPHISTICATED,
        })
    }

    fn reason(self, fragrance: &Fragrance) -> String {
        let notes = &fragrance.notes;
        match self {
            RecommendationMood::Fresh => format!(
                "Perfect for your fresh mood with bright {} opening",
                notes.top.join(", ")
            ),
            RecommendationMood::Romantic => format!(
                "Ideal for romantic moments with sensual {} heart",
                notes.middle.join(", ")
            ),
            RecommendationMood::Confident => {
                "Matches your confident energy with bold projection and lasting power".to_string()
            }
            RecommendationMood::Energetic => {
                "Energizing blend that complements your vibrant mood".to_string()
            }
            RecommendationMood::Calm => "Soothing composition perfect for relaxation".to_string(),
            RecommendationMood::Sophisticated => {
                "Elegant and refined, matching your sophisticated taste".to_string()
            }
        }
    }
}

pub fn mood_match(catalog: &Catalog, mood: MatchMood, settings: FlowSettings) -> Vec<MatchResult<'_>> {
    let mut results = rank_candidates(catalog, |f| mood.accepts(f), &mood.signature(), settings);
    for result in results.iter_mut() {
        result.reason = mood.reason(result.fragrance);
    }
    results
}

pub fn mood_recommendations(
    catalog: &Catalog,
    mood: RecommendationMood,
    settings: FlowSettings,
) -> Vec<MatchResult<'_>> {
    let mut results = rank_candidates(catalog, |f| mood.accepts(f), &mood.signature(), settings);
    for result in results.iter_mut() {
        result.reason = mood.reason(result.fragrance);
    }
    results
}
