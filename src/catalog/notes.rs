//! Fixed vocabularies the storefront offers for note, mood and occasion pickers.

pub const ALL_FRAGRANCE_NOTES: &[&str] = &[
    "Bergamot",
    "Lemon",
    "Orange",
    "Grapefruit",
    "Lime",
    "Mandarin",
    "Lavender",
    "Rose",
    "Jasmine",
    "Ylang-Ylang",
    "Geranium",
    "Neroli",
    "Sandalwood",
    "Cedar",
    "Vetiver",
    "Patchouli",
    "Oakmoss",
    "Amber",
    "Vanilla",
    "Musk",
    "Tonka Bean",
    "Benzoin",
    "Oud",
    "Incense",
    "Pepper",
    "Cinnamon",
    "Cardamom",
    "Ginger",
    "Nutmeg",
    "Clove",
    "Apple",
    "Peach",
    "Pear",
    "Blackcurrant",
    "Strawberry",
    "Pineapple",
    "Sea Salt",
    "Ozone",
    "Water Lily",
    "Marine Notes",
    "Seaweed",
];

pub const MOOD_CATEGORIES: &[&str] = &[
    "Fresh & Clean",
    "Romantic & Seductive",
    "Confident & Bold",
    "Calm & Relaxing",
    "Energetic & Vibrant",
    "Mysterious & Dark",
    "Elegant & Sophisticated",
    "Playful & Fun",
];

pub const OCCASION_CATEGORIES: &[&str] = &[
    "Daily Wear",
    "Office & Professional",
    "Date Night",
    "Special Events",
    "Beach & Vacation",
    "Winter Evenings",
    "Spring Days",
    "Gym & Sports",
];

/// Comparison key for note names: trimmed, Unicode lowercase. Profiles and
/// the matcher both dedupe notes on this key.
pub fn note_key(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn same_note(a: &str, b: &str) -> bool {
    note_key(a) == note_key(b)
}

/// Returns the canonical spelling of a known note, matching case-insensitively.
pub fn canonical_note(name: &str) -> Option<&'static str> {
    ALL_FRAGRANCE_NOTES
        .iter()
        .find(|n| same_note(n, name))
        .copied()
}
