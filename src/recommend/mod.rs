//! Recommendation flows built on the note matcher.
//!
//! Every flow picks candidates with a fixed predicate over the catalog and
//! ranks them against a signature profile, then rewrites the reason text
//! with its own templates.

mod chat;
mod layering;
mod mood;
mod smells_like;

pub use chat::{chat, ChatReply, ChatTopic, CHAT_GREETING, CHAT_GREETING_SUGGESTIONS};
pub use layering::{
    analyze_layering, Compatibility, Complexity, Difficulty, LayeringAnalysis,
    LayeringCombination, LayeringError, LayeringTip, LAYERING_COMBINATIONS, LAYERING_TIPS,
};
pub use mood::{mood_match, mood_recommendations, MatchMood, RecommendationMood};
pub use smells_like::{smells_like, ScentFamily};

use crate::catalog::{Catalog, Fragrance, Tier};
use crate::scent::{match_profile, FlowSettings, MatchResult, ScentProfile};
use tracing::warn;

/// A fixed profile standing for a mood or a keyword family.
pub(crate) fn signature_profile(entries: &[(Tier, &str, u8)]) -> ScentProfile {
    let mut profile = ScentProfile::new();
    for (tier, note, intensity) in entries {
        if let Err(err) = profile.add_note(*tier, note, *intensity) {
            warn!("Skipping signature note \"{}\": {}", note, err);
        }
    }
    profile
}

pub(crate) fn rank_candidates<'a, P>(
    catalog: &'a Catalog,
    predicate: P,
    profile: &ScentProfile,
    settings: FlowSettings,
) -> Vec<MatchResult<'a>>
where
    P: Fn(&Fragrance) -> bool,
{
    match_profile(
        profile,
        catalog.fragrances().iter().filter(|f| predicate(f)),
        settings,
    )
}
