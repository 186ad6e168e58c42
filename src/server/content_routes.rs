//! Catalog browsing and search routes, mounted under `/v1/content`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::catalog::notes::{ALL_FRAGRANCE_NOTES, MOOD_CATEGORIES, OCCASION_CATEGORIES};
use crate::search::{facets, search, SearchQuery};

use super::session::Session;
use super::state::{GuardedCatalog, ServerState};

#[derive(Serialize)]
struct FragranceList<'a> {
    total: usize,
    fragrances: &'a [crate::catalog::Fragrance],
}

async fn get_fragrances(_session: Session, State(catalog): State<GuardedCatalog>) -> Response {
    Json(FragranceList {
        total: catalog.get_fragrances_count(),
        fragrances: catalog.fragrances(),
    })
    .into_response()
}

async fn get_fragrance(
    _session: Session,
    State(catalog): State<GuardedCatalog>,
    Path(id): Path<String>,
) -> Response {
    match catalog.get_fragrance(&id) {
        Some(fragrance) => Json(fragrance).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_fragrance_reviews(
    _session: Session,
    State(catalog): State<GuardedCatalog>,
    Path(id): Path<String>,
) -> Response {
    if catalog.get_fragrance(&id).is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(catalog.get_fragrance_reviews(&id)).into_response()
}

async fn get_notes(_session: Session) -> Json<&'static [&'static str]> {
    Json(ALL_FRAGRANCE_NOTES)
}

async fn get_moods(_session: Session) -> Json<&'static [&'static str]> {
    Json(MOOD_CATEGORIES)
}

async fn get_occasions(_session: Session) -> Json<&'static [&'static str]> {
    Json(OCCASION_CATEGORIES)
}

async fn get_facets(_session: Session, State(catalog): State<GuardedCatalog>) -> Response {
    Json(facets(&catalog)).into_response()
}

async fn post_search(
    _session: Session,
    State(catalog): State<GuardedCatalog>,
    Json(query): Json<SearchQuery>,
) -> Response {
    debug!("search() called with {:?}", query);
    if query.min_price > query.max_price {
        return (
            StatusCode::BAD_REQUEST,
            "min_price must not exceed max_price",
        )
            .into_response();
    }
    Json(search(&catalog, &query)).into_response()
}

pub fn content_routes() -> Router<ServerState> {
    Router::new()
        .route("/fragrances", get(get_fragrances))
        .route("/fragrance/{id}", get(get_fragrance))
        .route("/fragrance/{id}/reviews", get(get_fragrance_reviews))
        .route("/notes", get(get_notes))
        .route("/moods", get(get_moods))
        .route("/occasions", get(get_occasions))
        .route("/facets", get(get_facets))
        .route("/search", post(post_search))
}
