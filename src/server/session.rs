use super::state::ServerState;
use crate::user::{Permission, UserRole};

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{request::Parts, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;
use tracing::debug;

/// Snapshot of the caller's session taken at extraction time. Mutable shopper
/// state stays in the store, see `ServerState::with_shopper`.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub handle: Option<String>,
    pub role: UserRole,
}

impl Session {
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role.has_permission(permission)
    }

    pub fn require(&self, permission: Permission) -> Result<(), AccessError> {
        if self.has_permission(permission) {
            return Ok(());
        }
        debug!(
            "Session for {} lacks {:?}",
            self.handle.as_deref().unwrap_or("guest"),
            permission
        );
        Err(match permission.premium_feature() {
            Some(feature) => AccessError::PremiumRequired(feature),
            None => AccessError::Forbidden,
        })
    }
}

pub const COOKIE_SESSION_TOKEN_KEY: &str = "session_token";
pub const HEADER_SESSION_TOKEN_KEY: &str = "Authorization";

pub enum SessionExtractionError {
    AccessDenied,
    InternalError,
}

impl IntoResponse for SessionExtractionError {
    fn into_response(self) -> axum::response::Response {
        match self {
            SessionExtractionError::AccessDenied => StatusCode::FORBIDDEN.into_response(),
            SessionExtractionError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[derive(Serialize)]
struct PremiumRequiredBody {
    error: &'static str,
    feature: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AccessError {
    Forbidden,
    /// The session is valid but the route belongs to a premium feature.
    PremiumRequired(&'static str),
}

impl IntoResponse for AccessError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AccessError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            AccessError::PremiumRequired(feature) => (
                StatusCode::PAYMENT_REQUIRED,
                Json(PremiumRequiredBody {
                    error: "premium_required",
                    feature,
                }),
            )
                .into_response(),
        }
    }
}

async fn extract_session_token_from_cookies(
    parts: &mut Parts,
    ctx: &ServerState,
) -> Option<String> {
    CookieJar::from_request_parts(parts, ctx)
        .await
        .ok()?
        .get(COOKIE_SESSION_TOKEN_KEY)
        .map(Cookie::value)
        .map(|s| s.to_string())
}

fn extract_session_token_from_headers(parts: &mut Parts) -> Option<String> {
    parts
        .headers
        .get(HEADER_SESSION_TOKEN_KEY)
        .map(|v| v.as_bytes().to_owned())
        .map(|b| String::from_utf8_lossy(&b).into_owned())
}

async fn extract_session_from_request_parts(
    parts: &mut Parts,
    ctx: &ServerState,
) -> Result<Option<Session>, SessionExtractionError> {
    let token = match extract_session_token_from_cookies(parts, ctx)
        .await
        .or_else(|| extract_session_token_from_headers(parts))
    {
        None => {
            debug!("No token in cookies nor headers.");
            return Ok(None);
        }
        Some(x) => x,
    };

    let mut sessions = ctx
        .sessions
        .lock()
        .map_err(|_| SessionExtractionError::InternalError)?;
    match sessions.get_mut(&token) {
        Some(session) => Ok(Some(Session {
            token: session.token.0.clone(),
            handle: session.handle.clone(),
            role: session.role,
        })),
        None => {
            debug!("Session token not found");
            Ok(None)
        }
    }
}

impl FromRequestParts<ServerState> for Session {
    type Rejection = SessionExtractionError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        extract_session_from_request_parts(parts, ctx)
            .await?
            .ok_or(SessionExtractionError::AccessDenied)
    }
}

impl OptionalFromRequestParts<ServerState> for Session {
    type Rejection = SessionExtractionError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &ServerState,
    ) -> Result<Option<Self>, Self::Rejection> {
        extract_session_from_request_parts(parts, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: UserRole) -> Session {
        Session {
            token: "token".to_string(),
            handle: None,
            role,
        }
    }

    #[test]
    fn regular_sessions_need_premium_for_builder() {
        let regular = session(UserRole::Regular);
        assert_eq!(regular.require(Permission::ManageCart), Ok(()));
        assert_eq!(
            regular.require(Permission::UseScentBuilder),
            Err(AccessError::PremiumRequired("Custom Scent Builder"))
        );
        assert_eq!(
            session(UserRole::Premium).require(Permission::AccessDeals),
            Ok(())
        );
    }

    #[test]
    fn premium_required_maps_to_payment_required() {
        let response = AccessError::PremiumRequired("Deal Finder").into_response();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
        assert_eq!(
            AccessError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }
}
