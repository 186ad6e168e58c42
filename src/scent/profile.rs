//! User-built scent profiles: notes with intensities across the three tiers.

use crate::catalog::notes::{canonical_note, same_note};
use crate::catalog::Tier;
use serde::Serialize;
use thiserror::Error;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

pub const PRESET_NAMES: &[&str] = &[
    "fresh-citrus",
    "warm-gourmand",
    "woody-oriental",
    "floral-romance",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Intensity {0} is out of range, it must be between 1 and 10")]
    IntensityOutOfRange(u8),

    #[error("Note name cannot be empty")]
    EmptyNote,

    #[error("Unknown preset \"{0}\"")]
    UnknownPreset(String),

    #[error("Note \"{note}\" is not in the {tier} tier")]
    NoteNotFound { tier: Tier, note: String },
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct NoteIntensity {
    pub note: String,
    pub intensity: u8,
}

/// Notes a user wants, by tier. Within a tier a note name (compared
/// case-insensitively) appears at most once.
#[derive(Clone, Serialize, Debug, PartialEq, Eq, Default)]
pub struct ScentProfile {
    top: Vec<NoteIntensity>,
    middle: Vec<NoteIntensity>,
    base: Vec<NoteIntensity>,
}

fn check_intensity(intensity: u8) -> Result<u8, ProfileError> {
    if (MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        Ok(intensity)
    } else {
        Err(ProfileError::IntensityOutOfRange(intensity))
    }
}

fn normalize_note(note: &str) -> Result<String, ProfileError> {
    let trimmed = note.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::EmptyNote);
    }
    Ok(canonical_note(trimmed)
        .map(str::to_string)
        .unwrap_or_else(|| trimmed.to_string()))
}

impl ScentProfile {
    pub fn new() -> ScentProfile {
        ScentProfile::default()
    }

    /// Builds a profile from `(tier, note, intensity)` entries. Repeated notes
    /// within a tier keep the first occurrence.
    pub fn from_entries<'a, I>(entries: I) -> Result<ScentProfile, ProfileError>
    where
        I: IntoIterator<Item = (Tier, &'a str, u8)>,
    {
        let mut profile = ScentProfile::new();
        for (tier, note, intensity) in entries {
            profile.add_note(tier, note, intensity)?;
        }
        Ok(profile)
    }

    pub fn preset(name: &str) -> Result<ScentProfile, ProfileError> {
        let entries: &[(Tier, &str, u8)] = match name {
            "fresh-citrus" => &[
                (Tier::Top, "Bergamot", 8),
                (Tier::Top, "Lemon", 7),
                (Tier::Middle, "Neroli", 5),
                (Tier::Base, "Musk", 4),
            ],
            "warm-gourmand" => &[
                (Tier::Top, "Pear", 4),
                (Tier::Middle, "Cinnamon", 6),
                (Tier::Base, "Vanilla", 9),
                (Tier::Base, "Tonka Bean", 7),
            ],
            "woody-oriental" => &[
                (Tier::Top, "Pepper", 5),
                (Tier::Middle, "Incense", 6),
                (Tier::Base, "Sandalwood", 8),
                (Tier::Base, "Oud", 7),
                (Tier::Base, "Amber", 6),
            ],
            "floral-romance" => &[
                (Tier::Top, "Bergamot", 4),
                (Tier::Middle, "Rose", 9),
                (Tier::Middle, "Jasmine", 8),
                (Tier::Base, "Musk", 5),
            ],
            _ => return Err(ProfileError::UnknownPreset(name.to_string())),
        };
        Self::from_entries(entries.iter().copied())
    }

    pub fn tier(&self, tier: Tier) -> &[NoteIntensity] {
        match tier {
            Tier::Top => &self.top,
            Tier::Middle => &self.middle,
            Tier::Base => &self.base,
        }
    }

    fn tier_mut(&mut self, tier: Tier) -> &mut Vec<NoteIntensity> {
        match tier {
            Tier::Top => &mut self.top,
            Tier::Middle => &mut self.middle,
            Tier::Base => &mut self.base,
        }
    }

    /// Adds a note to a tier. Returns false, leaving the profile untouched,
    /// when the tier already holds that note.
    pub fn add_note(&mut self, tier: Tier, note: &str, intensity: u8) -> Result<bool, ProfileError> {
        let intensity = check_intensity(intensity)?;
        let note = normalize_note(note)?;
        let notes = self.tier_mut(tier);
        if notes.iter().any(|n| same_note(&n.note, &note)) {
            return Ok(false);
        }
        notes.push(NoteIntensity { note, intensity });
        Ok(true)
    }

    /// Removes a note from a tier, returns whether it was there.
    pub fn remove_note(&mut self, tier: Tier, note: &str) -> bool {
        let note = note.trim();
        let notes = self.tier_mut(tier);
        let before = notes.len();
        notes.retain(|n| !same_note(&n.note, note));
        notes.len() != before
    }

    pub fn set_intensity(&mut self, tier: Tier, note: &str, intensity: u8) -> Result<(), ProfileError> {
        let intensity = check_intensity(intensity)?;
        let trimmed = note.trim();
        match self
            .tier_mut(tier)
            .iter_mut()
            .find(|n| same_note(&n.note, trimmed))
        {
            Some(entry) => {
                entry.intensity = intensity;
                Ok(())
            }
            None => Err(ProfileError::NoteNotFound {
                tier,
                note: trimmed.to_string(),
            }),
        }
    }

    pub fn clear(&mut self) {
        self.top.clear();
        self.middle.clear();
        self.base.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.middle.is_empty() && self.base.is_empty()
    }

    pub fn note_count(&self) -> usize {
        self.top.len() + self.middle.len() + self.base.len()
    }

    /// All entries, top tier first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &NoteIntensity)> {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.tier(tier).iter().map(move |n| (tier, n)))
    }
}
