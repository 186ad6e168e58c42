//! Keyword-routed fragrance assistant with canned answers.

use super::{rank_candidates, signature_profile};
use crate::catalog::{Catalog, Fragrance, Season, Tier};
use crate::scent::{FlowSettings, MatchResult, ScentProfile};
use serde::Serialize;

const LUXURY_PRICE_ABOVE: f64 = 120.0;

pub const CHAT_GREETING: &str = "Hi! I'm your fragrance assistant. I can help you find the perfect scent, analyze your preferences, recommend fragrances based on your mood, or answer any questions about perfumes. What would you like to explore today?";

pub const CHAT_GREETING_SUGGESTIONS: &[&str] = &[
    "Find me a fresh summer fragrance",
    "What's trending in luxury perfumes?",
    "Help me build a scent profile",
    "Recommend something for date night",
];

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    FreshSummer,
    Luxury,
    Romantic,
    ScentProfile,
    General,
}

impl ChatTopic {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            ChatTopic::FreshSummer => &["fresh", "summer", "citrus"],
            ChatTopic::Luxury => &["luxury", "expensive", "premium"],
            ChatTopic::Romantic => &["date", "romantic", "seductive"],
            ChatTopic::ScentProfile => &["profile", "build", "custom"],
            ChatTopic::General => &[],
        }
    }

    pub fn detect(text: &str) -> ChatTopic {
        let lower = text.to_lowercase();
        [
            ChatTopic::FreshSummer,
            ChatTopic::Luxury,
            ChatTopic::Romantic,
            ChatTopic::ScentProfile,
        ]
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|k| lower.contains(k)))
        .unwrap_or(ChatTopic::General)
    }

    fn response(self) -> &'static str {
        match self {
            ChatTopic::FreshSummer => "For fresh summer fragrances, I recommend scents with vibrant citrus top notes like bergamot, lemon, or grapefruit. These create an energizing opening perfect for warm weather. Look for fragrances with aquatic or marine notes for that clean, refreshing feel. Some excellent options include Acqua di Gio by Giorgio Armani, which features lime and sea notes, or Light Blue by Dolce & Gabbana with its Sicilian lemon opening. These fragrances typically have moderate longevity (4-6 hours) and are perfect for daytime wear.",
            ChatTopic::Luxury => "Luxury fragrances distinguish themselves through rare, high-quality ingredients and masterful composition. Look for houses like Tom Ford, Creed, or Maison Francis Kurkdjian. These often feature expensive materials like natural oud, ambergris, or Bulgarian rose absolute. For example, Baccarat Rouge 540 uses saffron and amberwood for its distinctive character. Luxury fragrances typically offer superior longevity (8+ hours) and complexity that evolves beautifully throughout the day. The investment is worthwhile for special occasions or as a signature scent.",
            ChatTopic::Romantic => "For romantic occasions, choose fragrances with warm, sensual notes that create intimacy. Look for compositions featuring vanilla, amber, sandalwood, or rich florals like jasmine and rose. Tom Ford Black Orchid combines dark chocolate and patchouli for mysterious allure, while Yves Saint Laurent Black Opium offers coffee and vanilla for sweet seduction. Apply to pulse points 30 minutes before your date to allow proper development. These fragrances work best in evening settings and cooler weather.",
            ChatTopic::ScentProfile => "Building a custom scent profile is an exciting journey of self-discovery! Start by identifying your preferences across different note families. Do you gravitate toward fresh citrus, warm woods, sweet gourmands, or mysterious orientals? Consider your lifestyle - are you looking for office-appropriate scents, weekend casuals, or evening glamour? Our Scent Builder tool can help you experiment with different combinations. I recommend starting with 2-3 note families you love, then building complexity from there. What type of mood or impression do you want your signature scent to convey?",
            ChatTopic::General => "I'm here to help you navigate the wonderful world of fragrances! Whether you're looking for your first signature scent, exploring new fragrance families, or seeking the perfect perfume for a special occasion, I can provide personalized recommendations based on your preferences, lifestyle, and the impression you want to make. What specific aspect of fragrance would you like to explore today? I can help with note explanations, brand recommendations, seasonal suggestions, or even fragrance layering techniques.",
        }
    }

    fn suggestions(self) -> &'static [&'static str] {
        match self {
            ChatTopic::FreshSummer => &[
                "Tell me more about longevity",
                "What about winter alternatives?",
                "Show me similar scents",
                "Help me compare these options",
            ],
            ChatTopic::Luxury => &[
                "What makes these so special?",
                "Are there affordable alternatives?",
                "Show me niche brands",
                "Help me justify the cost",
            ],
            ChatTopic::Romantic => &[
                "How do I apply for best effect?",
                "What about seasonal variations?",
                "Show me unisex options",
                "Help me layer fragrances",
            ],
            ChatTopic::ScentProfile | ChatTopic::General => &[
                "Help me find my signature scent",
                "Explain fragrance notes to me",
                "What's popular right now?",
                "Recommend based on my mood",
            ],
        }
    }

    fn accepts(self, fragrance: &Fragrance) -> bool {
        match self {
            ChatTopic::FreshSummer => {
                fragrance.has_season(Season::Summer)
                    || fragrance.has_mood("Fresh")
                    || fragrance.notes.tier_contains_any(
                        Tier::Top,
                        &["Bergamot", "Lemon", "Lime", "Orange"],
                    )
            }
            ChatTopic::Luxury => fragrance.price > LUXURY_PRICE_ABOVE,
            ChatTopic::Romantic => {
                fragrance.has_occasion("Date Night")
                    || fragrance.has_mood("Seductive")
                    || fragrance.has_mood("Romantic")
            }
            ChatTopic::ScentProfile | ChatTopic::General => false,
        }
    }

    fn signature(self) -> Option<ScentProfile> {
        let entries: &[(Tier, &str, u8)] = match self {
            ChatTopic::FreshSummer => &[
                (Tier::Top, "Bergamot", 7),
                (Tier::Top, "Lemon", 7),
                (Tier::Top, "Grapefruit", 6),
                (Tier::Middle, "Marine Notes", 5),
            ],
            ChatTopic::Luxury => &[
                (Tier::Top, "Saffron", 6),
                (Tier::Base, "Oud", 7),
                (Tier::Base, "Amber", 6),
                (Tier::Base, "Sandalwood", 6),
            ],
            ChatTopic::Romantic => &[
                (Tier::Middle, "Jasmine", 6),
                (Tier::Middle, "Rose", 6),
                (Tier::Base, "Vanilla", 7),
                (Tier::Base, "Amber", 6),
                (Tier::Base, "Sandalwood", 6),
            ],
            ChatTopic::ScentProfile | ChatTopic::General => return None,
        };
        Some(signature_profile(entries))
    }
}

#[derive(Serialize, Debug)]
pub struct ChatReply<'a> {
    pub topic: ChatTopic,
    pub response: &'static str,
    pub suggestions: &'static [&'static str],
    pub recommendations: Vec<MatchResult<'a>>,
}

/// Answers a chat message. The optional context is only consulted when the
/// message itself doesn't hit any topic.
pub fn chat<'a>(
    catalog: &'a Catalog,
    message: &str,
    context: Option<&str>,
    settings: FlowSettings,
) -> ChatReply<'a> {
    let topic = match (ChatTopic::detect(message), context) {
        (ChatTopic::General, Some(context)) => ChatTopic::detect(context),
        (topic, _) => topic,
    };
    let recommendations = match topic.signature() {
        Some(profile) => rank_candidates(catalog, |f| topic.accepts(f), &profile, settings),
        None => vec![],
    };
    ChatReply {
        topic,
        response: topic.response(),
        suggestions: topic.suggestions(),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().catalog.unwrap()
    }

    #[test]
    fn detects_topics_in_priority_order() {
        assert_eq!(ChatTopic::detect("Something CITRUS please"), ChatTopic::FreshSummer);
        assert_eq!(ChatTopic::detect("is it expensive?"), ChatTopic::Luxury);
        assert_eq!(ChatTopic::detect("first date tonight"), ChatTopic::Romantic);
        assert_eq!(ChatTopic::detect("help me build one"), ChatTopic::ScentProfile);
        assert_eq!(ChatTopic::detect("hello"), ChatTopic::General);
        assert_eq!(ChatTopic::detect("fresh luxury"), ChatTopic::FreshSummer);
    }

    #[test]
    fn topic_signatures_keep_every_entry() {
        let count = |topic: ChatTopic| topic.signature().map(|p| p.note_count());
        assert_eq!(count(ChatTopic::FreshSummer), Some(4));
        assert_eq!(count(ChatTopic::Luxury), Some(4));
        assert_eq!(count(ChatTopic::Romantic), Some(5));
        assert_eq!(count(ChatTopic::General), None);
    }

    #[test]
    fn luxury_recommendations_are_pricey() {
        let catalog = catalog();
        let reply = chat(&catalog, "show me luxury perfumes", None, FlowSettings::CHAT);
        assert_eq!(reply.topic, ChatTopic::Luxury);
        assert!(!reply.recommendations.is_empty());
        assert!(reply.recommendations.len() <= FlowSettings::CHAT.max_results);
        assert!(reply
            .recommendations
            .iter()
            .all(|r| r.fragrance.price > LUXURY_PRICE_ABOVE));
        assert_eq!(reply.suggestions[0], "What makes these so special?");
    }

    #[test]
    fn summer_recommendations_come_from_fresh_candidates() {
        let catalog = catalog();
        let reply = chat(&catalog, "a summer scent", None, FlowSettings::CHAT);
        assert_eq!(reply.topic, ChatTopic::FreshSummer);
        assert!(!reply.recommendations.is_empty());
        assert!(reply
            .recommendations
            .iter()
            .all(|r| ChatTopic::FreshSummer.accepts(r.fragrance)));
    }

    #[test]
    fn general_and_profile_topics_recommend_nothing() {
        let catalog = catalog();
        let reply = chat(&catalog, "hi there", None, FlowSettings::CHAT);
        assert_eq!(reply.topic, ChatTopic::General);
        assert!(reply.recommendations.is_empty());
        assert_eq!(reply.suggestions.len(), 4);

        let reply = chat(&catalog, "custom blend", None, FlowSettings::CHAT);
        assert_eq!(reply.topic, ChatTopic::ScentProfile);
        assert!(reply.recommendations.is_empty());
    }

    #[test]
    fn falls_back_to_context() {
        let catalog = catalog();
        let reply = chat(&catalog, "what else?", Some("date night ideas"), FlowSettings::CHAT);
        assert_eq!(reply.topic, ChatTopic::Romantic);
        assert!(!reply.recommendations.is_empty());

        let reply = chat(&catalog, "citrus", Some("date night ideas"), FlowSettings::CHAT);
        assert_eq!(reply.topic, ChatTopic::FreshSummer);
    }
}
