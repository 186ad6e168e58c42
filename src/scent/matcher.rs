//! Scores catalog fragrances against a scent profile by note overlap.

use super::profile::ScentProfile;
use crate::catalog::notes::note_key;
use crate::catalog::Fragrance;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 99;

const EXACT_MATCH_BONUS: u32 = 10;
const STRONG_NOTE_BONUS: u32 = 5;
const STRONG_NOTE_INTENSITY: u8 = 7;
const REASON_SAMPLE_NOTES: usize = 3;

pub const BUILDER_MIN_SCORE: u8 = 20;
pub const BUILDER_MAX_RESULTS: usize = 6;
pub const MOOD_MIN_SCORE: u8 = 30;
pub const MOOD_MATCH_MAX_RESULTS: usize = 3;
pub const MOOD_RECOMMENDATIONS_MAX_RESULTS: usize = 4;
pub const SMELLS_LIKE_MAX_RESULTS: usize = 4;
pub const CHAT_MAX_RESULTS: usize = 3;

/// Threshold and cap used by one call site of the matcher. Results must
/// score strictly above `min_score`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSettings {
    pub min_score: u8,
    pub max_results: usize,
}

impl FlowSettings {
    pub const BUILDER: FlowSettings = FlowSettings {
        min_score: BUILDER_MIN_SCORE,
        max_results: BUILDER_MAX_RESULTS,
    };
    pub const MOOD_MATCH: FlowSettings = FlowSettings {
        min_score: MOOD_MIN_SCORE,
        max_results: MOOD_MATCH_MAX_RESULTS,
    };
    pub const MOOD_RECOMMENDATIONS: FlowSettings = FlowSettings {
        min_score: MOOD_MIN_SCORE,
        max_results: MOOD_RECOMMENDATIONS_MAX_RESULTS,
    };
    pub const SMELLS_LIKE: FlowSettings = FlowSettings {
        min_score: MOOD_MIN_SCORE,
        max_results: SMELLS_LIKE_MAX_RESULTS,
    };
    pub const CHAT: FlowSettings = FlowSettings {
        min_score: MOOD_MIN_SCORE,
        max_results: CHAT_MAX_RESULTS,
    };
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MatchResult<'a> {
    pub fragrance: &'a Fragrance,
    pub score: u8,
    pub matching_notes: Vec<String>,
    pub reason: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NoteScore {
    pub score: u8,
    pub matching_notes: Vec<String>,
}

struct QueryNote {
    name: String,
    lower: String,
    intensity: u8,
}

/// The profile flattened across tiers: distinct names, highest intensity wins.
pub struct ProfileQuery {
    notes: Vec<QueryNote>,
}

impl ProfileQuery {
    pub fn new(profile: &ScentProfile) -> ProfileQuery {
        let mut notes: Vec<QueryNote> = vec![];
        for (_, entry) in profile.iter() {
            let lower = note_key(&entry.note);
            match notes.iter_mut().find(|n| n.lower == lower) {
                Some(existing) => existing.intensity = existing.intensity.max(entry.intensity),
                None => notes.push(QueryNote {
                    name: entry.note.clone(),
                    lower,
                    intensity: entry.intensity,
                }),
            }
        }
        ProfileQuery { notes }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn score(&self, fragrance: &Fragrance) -> NoteScore {
        if self.notes.is_empty() {
            return NoteScore {
                score: 0,
                matching_notes: vec![],
            };
        }
        let candidates: Vec<String> = fragrance
            .notes
            .iter_all()
            .map(|n| note_key(n))
            .collect();

        let mut matching_notes = vec![];
        let mut exact = 0u32;
        let mut strong = 0u32;
        for note in self.notes.iter() {
            let overlaps = candidates
                .iter()
                .any(|c| c.contains(&note.lower) || note.lower.contains(c.as_str()));
            if !overlaps {
                continue;
            }
            if candidates.iter().any(|c| *c == note.lower) {
                exact += 1;
            }
            if note.intensity >= STRONG_NOTE_INTENSITY {
                strong += 1;
            }
            matching_notes.push(note.name.clone());
        }

        let base = matching_notes.len() as u32 * 100 / self.notes.len() as u32;
        let total = base + exact * EXACT_MATCH_BONUS + strong * STRONG_NOTE_BONUS;
        NoteScore {
            score: total.min(MAX_SCORE as u32) as u8,
            matching_notes,
        }
    }
}

/// Ranks `fragrances` against `profile`. Ties keep the input order.
pub fn match_profile<'a, I>(profile: &ScentProfile, fragrances: I, settings: FlowSettings) -> Vec<MatchResult<'a>>
where
    I: IntoIterator<Item = &'a Fragrance>,
{
    let query = ProfileQuery::new(profile);
    if query.is_empty() {
        return vec![];
    }
    let mut results: Vec<MatchResult<'a>> = fragrances
        .into_iter()
        .filter_map(|fragrance| {
            let NoteScore {
                score,
                matching_notes,
            } = query.score(fragrance);
            if score <= settings.min_score {
                return None;
            }
            Some(MatchResult {
                fragrance,
                reason: describe_match(score, &matching_notes),
                score,
                matching_notes,
            })
        })
        .collect();
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(settings.max_results);
    results
}

pub fn score_fragrance(profile: &ScentProfile, fragrance: &Fragrance) -> NoteScore {
    ProfileQuery::new(profile).score(fragrance)
}

fn sample_notes(notes: &[String]) -> String {
    notes
        .iter()
        .take(REASON_SAMPLE_NOTES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn describe_match(score: u8, matching_notes: &[String]) -> String {
    let count = matching_notes.len();
    let noun = if count == 1 { "note" } else { "notes" };
    let sample = sample_notes(matching_notes);
    match score {
        80.. => format!(
            "Excellent match! Shares {} of your selected {}, including {}.",
            count, noun, sample
        ),
        60..=79 => format!("Good match with {} shared {} such as {}.", count, noun, sample),
        40..=59 => format!(
            "Moderate match: {} shared {} ({}) with a different overall character.",
            count, noun, sample
        ),
        _ => format!("An alternative worth exploring, sharing {}.", sample),
    }
}
