//! Mood, "smells like", chat and layering routes. All of them read the
//! catalog only, session state is never touched.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Fragrance;
use crate::recommend::{
    analyze_layering, chat, mood_match, mood_recommendations, smells_like, LayeringCombination,
    LayeringError, LayeringTip, MatchMood, RecommendationMood, CHAT_GREETING,
    CHAT_GREETING_SUGGESTIONS, LAYERING_COMBINATIONS, LAYERING_TIPS,
};
use crate::scent::MatchResult;

use super::session::Session;
use super::state::ServerState;

#[derive(Deserialize, Debug)]
struct MoodMatchBody {
    pub mood: MatchMood,
}

#[derive(Deserialize, Debug)]
struct MoodRecommendationsBody {
    pub mood: RecommendationMood,
}

#[derive(Deserialize, Debug)]
struct SmellsLikeBody {
    pub query: String,
}

#[derive(Deserialize, Debug)]
struct ChatBody {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Serialize)]
struct MoodResponse<'a, M: Serialize> {
    mood: M,
    label: &'static str,
    matches: Vec<MatchResult<'a>>,
}

#[derive(Serialize)]
struct MoodOption<M: Serialize> {
    id: M,
    label: &'static str,
}

#[derive(Serialize)]
struct MoodOptions {
    mood_match: Vec<MoodOption<MatchMood>>,
    recommendations: Vec<MoodOption<RecommendationMood>>,
}

#[derive(Serialize)]
struct SmellsLikeResponse<'a> {
    query: String,
    matches: Vec<MatchResult<'a>>,
}

#[derive(Deserialize, Debug)]
struct LayeringBody {
    pub fragrance_ids: Vec<String>,
}

#[derive(Serialize)]
struct CombinationView<'a> {
    #[serde(flatten)]
    combination: &'static LayeringCombination,
    fragrances: Vec<&'a Fragrance>,
}

#[derive(Serialize)]
struct LayeringGuide<'a> {
    combinations: Vec<CombinationView<'a>>,
    tips: &'static [LayeringTip],
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct ChatGreeting {
    response: &'static str,
    suggestions: &'static [&'static str],
}

async fn get_moods(_session: Session) -> Json<MoodOptions> {
    Json(MoodOptions {
        mood_match: MatchMood::ALL
            .into_iter()
            .map(|id| MoodOption {
                id,
                label: id.label(),
            })
            .collect(),
        recommendations: RecommendationMood::ALL
            .into_iter()
            .map(|id| MoodOption {
                id,
                label: id.label(),
            })
            .collect(),
    })
}

async fn post_mood_match(
    _session: Session,
    State(state): State<ServerState>,
    Json(body): Json<MoodMatchBody>,
) -> Response {
    debug!("mood_match() called with {:?}", body);
    let matches = mood_match(&state.catalog, body.mood, state.config.matching.mood_match);
    Json(MoodResponse {
        mood: body.mood,
        label: body.mood.label(),
        matches,
    })
    .into_response()
}

async fn post_mood_recommendations(
    _session: Session,
    State(state): State<ServerState>,
    Json(body): Json<MoodRecommendationsBody>,
) -> Response {
    debug!("mood_recommendations() called with {:?}", body);
    let matches = mood_recommendations(
        &state.catalog,
        body.mood,
        state.config.matching.mood_recommendations,
    );
    Json(MoodResponse {
        mood: body.mood,
        label: body.mood.label(),
        matches,
    })
    .into_response()
}

async fn post_smells_like(
    _session: Session,
    State(state): State<ServerState>,
    Json(body): Json<SmellsLikeBody>,
) -> Response {
    debug!("smells_like() called with {:?}", body);
    let matches = smells_like(&state.catalog, &body.query, state.config.matching.smells_like);
    Json(SmellsLikeResponse {
        query: body.query.trim().to_string(),
        matches,
    })
    .into_response()
}

async fn get_chat_greeting(_session: Session) -> Json<ChatGreeting> {
    Json(ChatGreeting {
        response: CHAT_GREETING,
        suggestions: CHAT_GREETING_SUGGESTIONS,
    })
}

async fn post_chat(
    _session: Session,
    State(state): State<ServerState>,
    Json(body): Json<ChatBody>,
) -> Response {
    if body.message.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Message is required").into_response();
    }
    let context = body.context.as_deref().filter(|c| !c.trim().is_empty());
    Json(chat(
        &state.catalog,
        &body.message,
        context,
        state.config.matching.chat,
    ))
    .into_response()
}

async fn get_layering_guide(_session: Session, State(state): State<ServerState>) -> Response {
    let combinations = LAYERING_COMBINATIONS
        .iter()
        .map(|combination| CombinationView {
            combination,
            fragrances: combination
                .fragrance_ids
                .iter()
                .filter_map(|id| state.catalog.get_fragrance(id))
                .collect(),
        })
        .collect();
    Json(LayeringGuide {
        combinations,
        tips: LAYERING_TIPS,
    })
    .into_response()
}

async fn post_layering_analysis(
    _session: Session,
    State(state): State<ServerState>,
    Json(body): Json<LayeringBody>,
) -> Response {
    debug!("layering_analysis() called with {:?}", body);
    match analyze_layering(&state.catalog, &body.fragrance_ids) {
        Ok(analysis) => Json(analysis).into_response(),
        Err(err) => {
            let status = match err {
                LayeringError::UnknownFragrance(_) => StatusCode::NOT_FOUND,
                LayeringError::WrongCount(_) | LayeringError::Duplicate(_) => {
                    StatusCode::BAD_REQUEST
                }
            };
            (
                status,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Routes meant to sit behind the analysis delay layer.
pub fn recommend_routes() -> Router<ServerState> {
    Router::new()
        .route("/recommend/mood-match", post(post_mood_match))
        .route("/recommend/mood", post(post_mood_recommendations))
        .route("/recommend/smells-like", post(post_smells_like))
        .route("/chat", post(post_chat))
}

/// Static option lists for the recommendation pages, no delay.
pub fn recommend_info_routes() -> Router<ServerState> {
    Router::new()
        .route("/recommend/moods", get(get_moods))
        .route("/chat/greeting", get(get_chat_greeting))
        .route("/layering/guide", get(get_layering_guide))
        .route("/layering/analyze", post(post_layering_analysis))
}
