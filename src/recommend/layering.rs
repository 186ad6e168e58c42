//! Layering: wearing two or three fragrances together. Analysis compares
//! their note sets, the curated combinations are fixed.

use crate::catalog::notes::note_key;
use crate::catalog::{Catalog, Fragrance, Season};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub const MIN_LAYERED: usize = 2;
pub const MAX_LAYERED: usize = 3;

const HIGH_COMPLEXITY_ABOVE: usize = 15;
const MEDIUM_COMPLEXITY_ABOVE: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayeringError {
    #[error(
        "Pick between {min} and {max} fragrances to layer, got {0}",
        min = MIN_LAYERED,
        max = MAX_LAYERED
    )]
    WrongCount(usize),

    #[error("Fragrance {0} is picked more than once")]
    Duplicate(String),

    #[error("Fragrance {0} does not exist")]
    UnknownFragrance(String),
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Compatibility {
    /// At least one note is shared between the picked fragrances.
    Good,
    Experimental,
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    fn for_note_count(count: usize) -> Complexity {
        if count > HIGH_COMPLEXITY_ABOVE {
            Complexity::High
        } else if count > MEDIUM_COMPLEXITY_ABOVE {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LayeringAnalysis<'a> {
    pub fragrances: Vec<&'a Fragrance>,
    pub compatibility: Compatibility,
    pub complexity: Complexity,
    /// Notes worn by more than one of the fragrances, in order of first
    /// appearance.
    pub common_notes: Vec<String>,
    pub total_notes: usize,
    pub recommendation: &'static str,
}

fn pick<'a>(catalog: &'a Catalog, fragrance_ids: &[String]) -> Result<Vec<&'a Fragrance>, LayeringError> {
    if !(MIN_LAYERED..=MAX_LAYERED).contains(&fragrance_ids.len()) {
        return Err(LayeringError::WrongCount(fragrance_ids.len()));
    }
    let mut seen = HashSet::new();
    let mut fragrances = Vec::with_capacity(fragrance_ids.len());
    for id in fragrance_ids {
        if !seen.insert(id.as_str()) {
            return Err(LayeringError::Duplicate(id.clone()));
        }
        let fragrance = catalog
            .get_fragrance(id)
            .ok_or_else(|| LayeringError::UnknownFragrance(id.clone()))?;
        fragrances.push(fragrance);
    }
    Ok(fragrances)
}

/// Compares the note sets of two or three fragrances worn together.
pub fn analyze_layering<'a>(
    catalog: &'a Catalog,
    fragrance_ids: &[String],
) -> Result<LayeringAnalysis<'a>, LayeringError> {
    let fragrances = pick(catalog, fragrance_ids)?;

    // note key -> (first spelling seen, number of fragrances wearing it)
    let mut wearers: HashMap<String, (String, usize)> = HashMap::new();
    let mut order: Vec<String> = vec![];
    for fragrance in fragrances.iter() {
        let mut own = HashSet::new();
        for note in fragrance.notes.iter_all() {
            let key = note_key(note);
            if !own.insert(key.clone()) {
                continue;
            }
            let entry = wearers.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                (note.clone(), 0)
            });
            entry.1 += 1;
        }
    }

    let common_notes: Vec<String> = order
        .iter()
        .filter_map(|key| wearers.get(key))
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.clone())
        .collect();
    let total_notes = order.len();
    let (compatibility, recommendation) = if common_notes.is_empty() {
        (
            Compatibility::Experimental,
            "This is an experimental combination. Test carefully before wearing out.",
        )
    } else {
        (
            Compatibility::Good,
            "These fragrances share common notes and should layer well together.",
        )
    };

    Ok(LayeringAnalysis {
        fragrances,
        compatibility,
        complexity: Complexity::for_note_count(total_notes),
        common_notes,
        total_notes,
        recommendation,
    })
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Serialize, Debug)]
pub struct LayeringCombination {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub fragrance_ids: &'static [&'static str],
    pub difficulty: Difficulty,
    pub seasons: &'static [Season],
    pub occasions: &'static [&'static str],
    pub tips: &'static [&'static str],
}

#[derive(Serialize, Debug)]
pub struct LayeringTip {
    pub title: &'static str,
    pub description: &'static str,
}

pub const LAYERING_COMBINATIONS: &[LayeringCombination] = &[
    LayeringCombination {
        id: "1",
        name: "Fresh Citrus Boost",
        description: "Layer a fresh citrus fragrance with a woody base for all-day freshness with depth",
        fragrance_ids: &["1", "5"],
        difficulty: Difficulty::Beginner,
        seasons: &[Season::Spring, Season::Summer],
        occasions: &["Casual", "Office"],
        tips: &[
            "Apply the woody fragrance first as your base",
            "Wait 5 minutes, then apply citrus on pulse points",
            "Use lighter hand with the citrus to avoid overwhelming",
        ],
    },
    LayeringCombination {
        id: "2",
        name: "Romantic Evening",
        description: "Combine floral and oriental notes for a seductive, complex evening scent",
        fragrance_ids: &["2", "6"],
        difficulty: Difficulty::Advanced,
        seasons: &[Season::Fall, Season::Winter],
        occasions: &["Date Night", "Special Events"],
        tips: &[
            "Apply the oriental base to your torso",
            "Layer floral on wrists and behind ears",
            "Allow each layer to dry before applying the next",
        ],
    },
    LayeringCombination {
        id: "3",
        name: "Office Professional",
        description: "Subtle layering for a sophisticated workplace presence",
        fragrance_ids: &["3", "1"],
        difficulty: Difficulty::Intermediate,
        seasons: &[Season::Spring, Season::Fall],
        occasions: &["Office", "Professional"],
        tips: &[
            "Use very light application - less is more",
            "Focus on lower pulse points to avoid projection",
            "Test the combination at home first",
        ],
    },
];

pub const LAYERING_TIPS: &[LayeringTip] = &[
    LayeringTip {
        title: "Start with Complementary Notes",
        description: "Choose fragrances that share at least one common note family",
    },
    LayeringTip {
        title: "Apply Base First",
        description: "Always apply the heavier, longer-lasting fragrance first",
    },
    LayeringTip {
        title: "Wait Between Applications",
        description: "Allow 5-10 minutes between each layer for proper development",
    },
    LayeringTip {
        title: "Less is More",
        description: "Use lighter application when layering to avoid overwhelming",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_utils::fragrance_with_notes;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn builtin() -> Catalog {
        Catalog::builtin().catalog.unwrap()
    }

    #[test]
    fn shared_notes_make_a_good_pair() {
        let catalog = builtin();
        // Baccarat Rouge 540 + Light Blue
        let analysis = analyze_layering(&catalog, &ids(&["2", "3"])).unwrap();
        assert_eq!(analysis.compatibility, Compatibility::Good);
        assert_eq!(analysis.common_notes, vec!["Jasmine", "Cedar"]);
        assert_eq!(analysis.total_notes, 12);
        assert_eq!(analysis.complexity, Complexity::Medium);
        assert_eq!(analysis.fragrances[1].name, "Light Blue");
    }

    #[test]
    fn no_shared_notes_is_experimental() {
        let catalog = builtin();
        // "Sambac Jasmine" is not "Jasmine"
        let analysis = analyze_layering(&catalog, &ids(&["2", "6"])).unwrap();
        assert_eq!(analysis.compatibility, Compatibility::Experimental);
        assert!(analysis.common_notes.is_empty());
        assert_eq!(analysis.total_notes, 16);
        assert_eq!(analysis.complexity, Complexity::High);
        assert!(analysis.recommendation.starts_with("This is an experimental"));
    }

    #[test]
    fn repeats_within_one_fragrance_are_not_shared() {
        let catalog = Catalog::from_fragrances_unchecked(vec![
            fragrance_with_notes("a", &["Cedar"], &["Rose"], &["cedar"]),
            fragrance_with_notes("b", &["Lemon"], &["Iris"], &["Musk"]),
            fragrance_with_notes("c", &["Lemon"], &["Rose"], &["Amber"]),
        ]);
        let analysis = analyze_layering(&catalog, &ids(&["a", "b"])).unwrap();
        assert_eq!(analysis.compatibility, Compatibility::Experimental);
        assert_eq!(analysis.total_notes, 5);
        assert_eq!(analysis.complexity, Complexity::Low);

        let analysis = analyze_layering(&catalog, &ids(&["a", "b", "c"])).unwrap();
        assert_eq!(analysis.common_notes, vec!["Rose", "Lemon"]);
        assert_eq!(analysis.total_notes, 6);
    }

    #[test]
    fn complexity_bands() {
        assert_eq!(Complexity::for_note_count(10), Complexity::Low);
        assert_eq!(Complexity::for_note_count(11), Complexity::Medium);
        assert_eq!(Complexity::for_note_count(15), Complexity::Medium);
        assert_eq!(Complexity::for_note_count(16), Complexity::High);
    }

    #[test]
    fn rejects_bad_selections() {
        let catalog = builtin();
        assert_eq!(
            analyze_layering(&catalog, &ids(&["1"])).unwrap_err(),
            LayeringError::WrongCount(1)
        );
        assert_eq!(
            analyze_layering(&catalog, &ids(&["1", "2", "3", "4"])).unwrap_err(),
            LayeringError::WrongCount(4)
        );
        assert_eq!(
            analyze_layering(&catalog, &ids(&["1", "1"])).unwrap_err(),
            LayeringError::Duplicate("1".to_string())
        );
        assert_eq!(
            analyze_layering(&catalog, &ids(&["1", "42"])).unwrap_err(),
            LayeringError::UnknownFragrance("42".to_string())
        );
    }

    #[test]
    fn curated_combinations_point_to_catalog_fragrances() {
        let catalog = builtin();
        for combination in LAYERING_COMBINATIONS {
            let picked: Vec<String> = combination.fragrance_ids.iter().map(|s| s.to_string()).collect();
            assert!(analyze_layering(&catalog, &picked).is_ok(), "{}", combination.name);
        }
    }
}
