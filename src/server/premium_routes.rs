//! Premium features (scent builder, deals, marketplace) and the mock
//! upgrade flow. Mounted under `/v1/premium`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Deal, Fragrance, MarketplaceListing};
use crate::scent::{apply_jitter, match_profile, MatchResult};
use crate::shop::{find_plan, Plan, PlanId, PremiumFeature, PLANS, PREMIUM_FEATURES};
use crate::user::{Permission, UserRole};

use super::session::Session;
use super::state::ServerState;

#[derive(Deserialize, Debug, Default)]
struct ScentBuilderQuery {
    #[serde(default)]
    pub jitter: bool,
}

#[derive(Deserialize, Debug)]
struct SubscribeBody {
    pub plan: String,
}

#[derive(Serialize)]
struct ScentBuilderResponse<'a> {
    note_count: usize,
    jittered: bool,
    matches: Vec<MatchResult<'a>>,
}

#[derive(Serialize)]
struct DealView<'a> {
    #[serde(flatten)]
    deal: &'a Deal,
    fragrance: &'a Fragrance,
}

#[derive(Serialize)]
struct ListingView<'a> {
    #[serde(flatten)]
    listing: &'a MarketplaceListing,
    fragrance: &'a Fragrance,
}

#[derive(Serialize)]
struct PlansResponse {
    plans: &'static [Plan],
    features: &'static [PremiumFeature],
}

#[derive(Serialize)]
struct SubscribeResponse {
    plan: &'static Plan,
    role: UserRole,
}

async fn post_scent_builder_matches(
    session: Session,
    State(state): State<ServerState>,
    Query(query): Query<ScentBuilderQuery>,
) -> Response {
    if let Err(rejection) = session.require(Permission::UseScentBuilder) {
        return rejection.into_response();
    }
    let profile = match state.with_shopper(&session, |shopper, _| shopper.profile.clone()) {
        Ok(profile) => profile,
        Err(err) => return err.into_response(),
    };
    if profile.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Add at least one note to your scent profile",
        )
            .into_response();
    }

    let matching = &state.config.matching;
    let mut matches = match_profile(&profile, state.catalog.fragrances(), matching.builder);
    let jittered = query.jitter && matching.jitter_enabled;
    if jittered {
        apply_jitter(&mut matches, &mut rand::rng(), matching.jitter_max_offset);
    }
    debug!(
        "Scent builder found {} matches for {} notes",
        matches.len(),
        profile.note_count()
    );
    Json(ScentBuilderResponse {
        note_count: profile.note_count(),
        jittered,
        matches,
    })
    .into_response()
}

async fn get_deals(session: Session, State(state): State<ServerState>) -> Response {
    if let Err(rejection) = session.require(Permission::AccessDeals) {
        return rejection.into_response();
    }
    let catalog = &state.catalog;
    let deals: Vec<DealView> = catalog
        .deals()
        .iter()
        .filter_map(|deal| {
            catalog
                .get_fragrance(&deal.fragrance_id)
                .map(|fragrance| DealView { deal, fragrance })
        })
        .collect();
    Json(deals).into_response()
}

async fn get_marketplace(session: Session, State(state): State<ServerState>) -> Response {
    if let Err(rejection) = session.require(Permission::AccessMarketplace) {
        return rejection.into_response();
    }
    let catalog = &state.catalog;
    let listings: Vec<ListingView> = catalog
        .listings()
        .iter()
        .filter_map(|listing| {
            catalog
                .get_fragrance(&listing.fragrance_id)
                .map(|fragrance| ListingView { listing, fragrance })
        })
        .collect();
    Json(listings).into_response()
}

async fn get_plans(_session: Session) -> Json<PlansResponse> {
    Json(PlansResponse {
        plans: PLANS,
        features: PREMIUM_FEATURES,
    })
}

/// Upgrades the session to premium. No payment is taken.
async fn post_subscribe(
    session: Session,
    State(state): State<ServerState>,
    Json(body): Json<SubscribeBody>,
) -> Response {
    let Some(plan_id) = PlanId::parse(&body.plan) else {
        return (StatusCode::BAD_REQUEST, "Unknown plan").into_response();
    };
    let plan = find_plan(plan_id);
    match state.with_shopper(&session, |shopper, _| {
        shopper.role = UserRole::Premium;
        shopper.role
    }) {
        Ok(role) => {
            info!(
                "{} subscribed to the {} plan",
                session.handle.as_deref().unwrap_or("guest"),
                plan.period
            );
            Json(SubscribeResponse { plan, role }).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub fn premium_routes() -> Router<ServerState> {
    Router::new()
        .route("/scent-builder/matches", post(post_scent_builder_matches))
        .route("/deals", get(get_deals))
        .route("/marketplace", get(get_marketplace))
        .route("/plans", get(get_plans))
        .route("/subscribe", post(post_subscribe))
}
