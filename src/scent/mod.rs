mod jitter;
mod matcher;
mod profile;

pub use jitter::apply_jitter;
pub use matcher::{
    describe_match, match_profile, score_fragrance, FlowSettings, MatchResult, NoteScore,
    ProfileQuery, BUILDER_MAX_RESULTS, BUILDER_MIN_SCORE, CHAT_MAX_RESULTS, MAX_SCORE,
    MOOD_MATCH_MAX_RESULTS, MOOD_MIN_SCORE, MOOD_RECOMMENDATIONS_MAX_RESULTS,
    SMELLS_LIKE_MAX_RESULTS,
};
pub use profile::{NoteIntensity, ProfileError, ScentProfile, MAX_INTENSITY, MIN_INTENSITY, PRESET_NAMES};
