use super::{rank_candidates, signature_profile};
use crate::catalog::notes::{note_key, same_note};
use crate::catalog::{Catalog, Fragrance, Tier};
use crate::scent::{FlowSettings, MatchResult, ScentProfile};
use serde::Serialize;
use tracing::warn;

const MENTIONED_NOTE_INTENSITY: u8 = 5;

/// Scent families recognized by keyword in a free-text description.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScentFamily {
    Fresh,
    Sweet,
    Aquatic,
    Woody,
    Floral,
}

impl ScentFamily {
    const ALL: [ScentFamily; 5] = [
        ScentFamily::Fresh,
        ScentFamily::Sweet,
        ScentFamily::Aquatic,
        ScentFamily::Woody,
        ScentFamily::Floral,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            ScentFamily::Fresh => &["rain", "fresh", "clean"],
            ScentFamily::Sweet => &["vanilla", "sweet", "cookie"],
            ScentFamily::Aquatic => &["ocean", "sea", "breeze"],
            ScentFamily::Woody => &["wood", "forest", "pine"],
            ScentFamily::Floral => &["rose", "floral", "garden"],
        }
    }

    /// First family with a keyword contained in `text`, in declaration order.
    pub fn detect(text: &str) -> Option<ScentFamily> {
        let lower = text.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|family| family.keywords().iter().any(|k| lower.contains(k)))
    }

    fn accepts(self, fragrance: &Fragrance) -> bool {
        let notes = &fragrance.notes;
        match self {
            ScentFamily::Fresh => {
                fragrance.has_mood("Fresh")
                    || notes.tier_contains_any(Tier::Top, &["Bergamot", "Lemon", "Lime"])
            }
            ScentFamily::Sweet => {
                notes.tier_contains_any(Tier::Base, &["Vanilla"]) || fragrance.has_mood("Sweet")
            }
            ScentFamily::Aquatic => {
                notes.tier_contains_any(Tier::Middle, &["Sea Notes", "Marine Notes"])
                    || fragrance.has_mood("Fresh")
            }
            ScentFamily::Woody => {
                notes.tier_contains_any(Tier::Base, &["Cedar", "Sandalwood", "Vetiver"])
            }
            ScentFamily::Floral => {
                notes.tier_contains_any(Tier::Middle, &["Rose", "Jasmine", "Ylang-Ylang"])
            }
        }
    }

    fn signature(self) -> ScentProfile {
        signature_profile(match self {
            ScentFamily::Fresh => &[
                (Tier::Top, "Bergamot", 7),
                (Tier::Top, "Lemon", 7),
                (Tier::Top, "Lime", 6),
                (Tier::Base, "Musk", 5),
            ],
            ScentFamily::Sweet => &[
                (Tier::Middle, "Cinnamon", 4),
                (Tier::Base, "Vanilla", 9),
                (Tier::Base, "Tonka Bean", 6),
                (Tier::Base, "Benzoin", 5),
            ],
            ScentFamily::Aquatic => &[
                (Tier::Top, "Lemon", 5),
                (Tier::Middle, "Sea Notes", 8),
                (Tier::Middle, "Marine Notes", 6),
                (Tier::Base, "Musk", 5),
            ],
            ScentFamily::Woody => &[
                (Tier::Base, "Cedar", 8),
                (Tier::Base, "Sandalwood", 7),
                (Tier::Base, "Vetiver", 6),
                (Tier::Base, "Oakmoss", 5),
            ],
            ScentFamily::Floral => &[
                (Tier::Middle, "Rose", 8),
                (Tier::Middle, "Jasmine", 8),
                (Tier::Middle, "Ylang-Ylang", 6),
            ],
        })
    }
}

/// Notes used anywhere in the catalog that `text` mentions, each placed in the
/// first tier it shows up in.
fn mentioned_notes(catalog: &Catalog, text: &str) -> ScentProfile {
    let lower = note_key(text);
    let mut profile = ScentProfile::new();
    for fragrance in catalog.fragrances() {
        for tier in Tier::ALL {
            for note in fragrance.notes.tier(tier) {
                let key = note_key(note);
                if key.is_empty() || !lower.contains(&key) {
                    continue;
                }
                let already_there = profile
                    .iter()
                    .any(|(_, n)| same_note(&n.note, note));
                if already_there {
                    continue;
                }
                if let Err(err) = profile.add_note(tier, note, MENTIONED_NOTE_INTENSITY) {
                    warn!("Skipping mentioned note \"{}\": {}", note, err);
                }
            }
        }
    }
    profile
}

fn describe(fragrance: &Fragrance, query: &str, position: usize) -> String {
    match position % 4 {
        0 => format!(
            "The {} notes capture that \"{}\" essence perfectly",
            fragrance.notes.top.join(" and "),
            query
        ),
        1 => format!(
            "This fragrance evokes the same feeling as \"{}\" with its unique composition",
            query
        ),
        2 => format!(
            "The scent profile matches your \"{}\" description through its carefully balanced notes",
            query
        ),
        _ => format!(
            "Strong similarities between \"{}\" and this fragrance's olfactory signature",
            query
        ),
    }
}

/// Finds fragrances resembling a described smell, e.g. "fresh rain on a
/// summer morning".
pub fn smells_like<'a>(catalog: &'a Catalog, query: &str, settings: FlowSettings) -> Vec<MatchResult<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }
    let mut results = match ScentFamily::detect(query) {
        Some(family) => rank_candidates(catalog, |f| family.accepts(f), &family.signature(), settings),
        None => {
            let profile = mentioned_notes(catalog, query);
            rank_candidates(catalog, |_| true, &profile, settings)
        }
    };
    for (position, result) in results.iter_mut().enumerate() {
        result.reason = describe(result.fragrance, query, position);
    }
    results
}
