//! Per-session shopper state: scent profile, cart, wishlist, discover deck
//! and notifications. Mounted under `/v1/user`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Tier};
use crate::scent::{ProfileError, ScentProfile};
use crate::shop::{
    CartError, DiscoverError, NotificationError, SwipeDirection, WishlistSort, DEFAULT_SIZE,
};
use crate::user::{Permission, ShopperSession};

use super::session::Session;
use super::state::ServerState;

#[derive(Deserialize, Debug)]
struct ProfileNoteBody {
    pub tier: Tier,
    pub note: String,
    pub intensity: u8,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Deserialize, Debug)]
struct AddToCartBody {
    pub fragrance_id: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Deserialize, Debug)]
struct UpdateCartItemBody {
    pub quantity: u32,
}

#[derive(Deserialize, Debug, Default)]
struct WishlistQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Deserialize, Debug)]
struct SwipeBody {
    pub direction: SwipeDirection,
}

#[derive(Serialize)]
struct MarkAllReadResponse {
    marked: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn profile_error_response(err: ProfileError) -> Response {
    let status = match err {
        ProfileError::IntensityOutOfRange(_) | ProfileError::EmptyNote => StatusCode::BAD_REQUEST,
        ProfileError::UnknownPreset(_) | ProfileError::NoteNotFound { .. } => {
            StatusCode::NOT_FOUND
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

fn cart_error_response(err: CartError) -> Response {
    let status = match err {
        CartError::UnknownFragrance(_) | CartError::UnknownItem(_) => StatusCode::NOT_FOUND,
        CartError::ZeroQuantity | CartError::QuantityTooLarge => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Checks `permission`, then runs `f` on the caller's shopper state.
fn with_permission<F>(state: &ServerState, session: &Session, permission: Permission, f: F) -> Response
where
    F: FnOnce(&mut ShopperSession, &Catalog) -> Response,
{
    if let Err(rejection) = session.require(permission) {
        return rejection.into_response();
    }
    match state.with_shopper(session, f) {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

// =============================================================================
// Scent profile
// =============================================================================

async fn get_profile(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::EditScentProfile, |shopper, _| {
        Json(&shopper.profile).into_response()
    })
}

async fn clear_profile(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::EditScentProfile, |shopper, _| {
        shopper.profile.clear();
        Json(&shopper.profile).into_response()
    })
}

async fn add_profile_note(
    session: Session,
    State(state): State<ServerState>,
    Json(body): Json<ProfileNoteBody>,
) -> Response {
    debug!("add_profile_note() called with {:?}", body);
    with_permission(&state, &session, Permission::EditScentProfile, |shopper, _| {
        match shopper.profile.add_note(body.tier, &body.note, body.intensity) {
            Ok(true) => (StatusCode::CREATED, Json(&shopper.profile)).into_response(),
            Ok(false) => Json(&shopper.profile).into_response(),
            Err(err) => profile_error_response(err),
        }
    })
}

async fn set_profile_note_intensity(
    session: Session,
    State(state): State<ServerState>,
    Json(body): Json<ProfileNoteBody>,
) -> Response {
    with_permission(&state, &session, Permission::EditScentProfile, |shopper, _| {
        match shopper
            .profile
            .set_intensity(body.tier, &body.note, body.intensity)
        {
            Ok(()) => Json(&shopper.profile).into_response(),
            Err(err) => profile_error_response(err),
        }
    })
}

async fn remove_profile_note(
    session: Session,
    State(state): State<ServerState>,
    Path((tier, note)): Path<(String, String)>,
) -> Response {
    let Some(tier) = Tier::parse(&tier) else {
        return (StatusCode::BAD_REQUEST, "Unknown tier").into_response();
    };
    with_permission(&state, &session, Permission::EditScentProfile, |shopper, _| {
        shopper.profile.remove_note(tier, &note);
        Json(&shopper.profile).into_response()
    })
}

async fn load_profile_preset(
    session: Session,
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Response {
    with_permission(&state, &session, Permission::EditScentProfile, |shopper, _| {
        match ScentProfile::preset(&name) {
            Ok(profile) => {
                shopper.profile = profile;
                Json(&shopper.profile).into_response()
            }
            Err(err) => profile_error_response(err),
        }
    })
}

// =============================================================================
// Cart
// =============================================================================

async fn get_cart(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::ManageCart, |shopper, catalog| {
        Json(shopper.cart.view(catalog)).into_response()
    })
}

async fn add_to_cart(
    session: Session,
    State(state): State<ServerState>,
    Json(body): Json<AddToCartBody>,
) -> Response {
    debug!("add_to_cart() called with {:?}", body);
    with_permission(&state, &session, Permission::ManageCart, |shopper, catalog| {
        let size = body.size.as_deref().unwrap_or(DEFAULT_SIZE);
        let added = shopper
            .cart
            .add(catalog, &body.fragrance_id, size, body.quantity)
            .map(|_| ());
        match added {
            Ok(_) => (StatusCode::CREATED, Json(shopper.cart.view(catalog))).into_response(),
            Err(err) => cart_error_response(err),
        }
    })
}

async fn clear_cart(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::ManageCart, |shopper, catalog| {
        shopper.cart.clear();
        Json(shopper.cart.view(catalog)).into_response()
    })
}

async fn update_cart_item(
    session: Session,
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
    Json(body): Json<UpdateCartItemBody>,
) -> Response {
    with_permission(&state, &session, Permission::ManageCart, |shopper, catalog| {
        match shopper.cart.update_quantity(&item_id, body.quantity) {
            Ok(()) => Json(shopper.cart.view(catalog)).into_response(),
            Err(err) => cart_error_response(err),
        }
    })
}

async fn remove_cart_item(
    session: Session,
    State(state): State<ServerState>,
    Path(item_id): Path<String>,
) -> Response {
    with_permission(&state, &session, Permission::ManageCart, |shopper, catalog| {
        match shopper.cart.remove(&item_id) {
            Ok(()) => Json(shopper.cart.view(catalog)).into_response(),
            Err(err) => cart_error_response(err),
        }
    })
}

// =============================================================================
// Wishlist
// =============================================================================

async fn get_wishlist(
    session: Session,
    State(state): State<ServerState>,
    Query(query): Query<WishlistQuery>,
) -> Response {
    let sort = match query.sort.as_deref() {
        None => WishlistSort::default(),
        Some(s) => match WishlistSort::parse(s) {
            Some(sort) => sort,
            None => return (StatusCode::BAD_REQUEST, "Unknown sort").into_response(),
        },
    };
    with_permission(&state, &session, Permission::ManageWishlist, |shopper, catalog| {
        Json(shopper.wishlist.list(catalog, query.q.as_deref(), sort)).into_response()
    })
}

async fn add_to_wishlist(
    session: Session,
    State(state): State<ServerState>,
    Path(fragrance_id): Path<String>,
) -> Response {
    with_permission(&state, &session, Permission::ManageWishlist, |shopper, catalog| {
        if catalog.get_fragrance(&fragrance_id).is_none() {
            return StatusCode::NOT_FOUND.into_response();
        }
        if shopper.wishlist.add(&fragrance_id) {
            StatusCode::CREATED.into_response()
        } else {
            StatusCode::OK.into_response()
        }
    })
}

async fn remove_from_wishlist(
    session: Session,
    State(state): State<ServerState>,
    Path(fragrance_id): Path<String>,
) -> Response {
    with_permission(&state, &session, Permission::ManageWishlist, |shopper, _| {
        if shopper.wishlist.remove(&fragrance_id) {
            StatusCode::OK.into_response()
        } else {
            StatusCode::NOT_FOUND.into_response()
        }
    })
}

// =============================================================================
// Discover
// =============================================================================

fn discover_error_response(err: DiscoverError) -> Response {
    let status = match err {
        DiscoverError::EmptyCatalog => StatusCode::NOT_FOUND,
        DiscoverError::NothingToUndo => StatusCode::CONFLICT,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

async fn get_discover(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        Json(shopper.discover.view(catalog)).into_response()
    })
}

async fn post_discover_swipe(
    session: Session,
    State(state): State<ServerState>,
    Json(body): Json<SwipeBody>,
) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        match shopper.discover.swipe(catalog, body.direction) {
            Ok(()) => Json(shopper.discover.view(catalog)).into_response(),
            Err(err) => discover_error_response(err),
        }
    })
}

async fn post_discover_undo(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        match shopper.discover.undo(catalog) {
            Ok(()) => Json(shopper.discover.view(catalog)).into_response(),
            Err(err) => discover_error_response(err),
        }
    })
}

async fn post_discover_restart(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        shopper.discover.restart();
        Json(shopper.discover.view(catalog)).into_response()
    })
}

// =============================================================================
// Notifications
// =============================================================================

fn notification_error_response(err: NotificationError) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

async fn get_notifications(session: Session, State(state): State<ServerState>) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        Json(shopper.inbox.list(catalog)).into_response()
    })
}

async fn mark_notification_read(
    session: Session,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        match shopper.inbox.mark_read(catalog, &id) {
            Ok(()) => Json(shopper.inbox.list(catalog)).into_response(),
            Err(err) => notification_error_response(err),
        }
    })
}

async fn mark_all_notifications_read(
    session: Session,
    State(state): State<ServerState>,
) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        let marked = shopper.inbox.mark_all_read(catalog);
        debug!("Marked {} notifications as read", marked);
        Json(MarkAllReadResponse { marked }).into_response()
    })
}

async fn delete_notification(
    session: Session,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Response {
    with_permission(&state, &session, Permission::AccessCatalog, |shopper, catalog| {
        match shopper.inbox.delete(catalog, &id) {
            Ok(()) => Json(shopper.inbox.list(catalog)).into_response(),
            Err(err) => notification_error_response(err),
        }
    })
}

pub fn user_routes() -> Router<ServerState> {
    Router::new()
        .route("/profile", get(get_profile).delete(clear_profile))
        .route(
            "/profile/notes",
            post(add_profile_note).put(set_profile_note_intensity),
        )
        .route("/profile/notes/{tier}/{note}", delete(remove_profile_note))
        .route("/profile/preset/{name}", post(load_profile_preset))
        .route("/cart", get(get_cart).post(add_to_cart).delete(clear_cart))
        .route(
            "/cart/{item_id}",
            put(update_cart_item).delete(remove_cart_item),
        )
        .route("/wishlist", get(get_wishlist))
        .route(
            "/wishlist/{fragrance_id}",
            post(add_to_wishlist).delete(remove_from_wishlist),
        )
        .route("/discover", get(get_discover))
        .route("/discover/swipe", post(post_discover_swipe))
        .route("/discover/undo", post(post_discover_undo))
        .route("/discover/restart", post(post_discover_restart))
        .route("/notifications", get(get_notifications))
        .route("/notifications/read-all", post(mark_all_notifications_read))
        .route("/notifications/{id}/read", post(mark_notification_read))
        .route("/notifications/{id}", delete(delete_notification))
}
