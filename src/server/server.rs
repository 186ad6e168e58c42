use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::user::UserRole;
use axum_extra::extract::cookie::{Cookie, SameSite};
use tower_http::services::ServeDir;

use axum::{
    extract::State,
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::{
    analysis_delay,
    content_routes::content_routes,
    http_cache, log_requests,
    premium_routes::premium_routes,
    recommend_routes::{recommend_info_routes, recommend_routes},
    session::{Session, COOKIE_SESSION_TOKEN_KEY},
    state::ServerState,
    user_routes::user_routes,
    ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub fragrances: usize,
    pub session_token: Option<String>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct LoginBody {
    pub user_handle: String,
}

#[derive(Serialize)]
struct LoginSuccessResponse {
    token: String,
    handle: Option<String>,
    role: UserRole,
}

async fn home(session: Option<Session>, State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        fragrances: state.catalog.get_fragrances_count(),
        session_token: session.map(|s| s.token),
    };
    Json(stats)
}

fn session_created_response(body: LoginSuccessResponse) -> Response {
    let cookie = Cookie::build((COOKIE_SESSION_TOKEN_KEY, body.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie.to_string())],
        Json(body),
    )
        .into_response()
}

async fn login(State(state): State<ServerState>, Json(body): Json<LoginBody>) -> Response {
    debug!("login() called with {:?}", body);
    let Some(user) = state.catalog.get_user_by_handle(&body.user_handle) else {
        return StatusCode::FORBIDDEN.into_response();
    };
    let response_body = match state.sessions.lock() {
        Ok(mut sessions) => {
            let session = sessions.open_for_user(user);
            LoginSuccessResponse {
                token: session.token.0.clone(),
                handle: session.handle.clone(),
                role: session.role,
            }
        }
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    info!("{} logged in", body.user_handle);
    session_created_response(response_body)
}

async fn guest(State(state): State<ServerState>) -> Response {
    let response_body = match state.sessions.lock() {
        Ok(mut sessions) => {
            let session = sessions.open_guest();
            LoginSuccessResponse {
                token: session.token.0.clone(),
                handle: None,
                role: session.role,
            }
        }
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    session_created_response(response_body)
}

async fn logout(State(state): State<ServerState>, session: Session) -> Response {
    let closed = match state.sessions.lock() {
        Ok(mut sessions) => sessions.close(&session.token),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };
    if !closed {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let cookie = Cookie::build((COOKIE_SESSION_TOKEN_KEY, ""))
        .path("/")
        .expires(time::OffsetDateTime::now_utc() - time::Duration::days(1))
        .same_site(SameSite::Lax)
        .build();
    (StatusCode::OK, [(header::SET_COOKIE, cookie.to_string())]).into_response()
}

pub fn make_app(config: ServerConfig, catalog: Catalog) -> Result<Router> {
    let state = ServerState::new(config.clone(), catalog);

    let auth_routes: Router = Router::new()
        .route("/login", post(login))
        .route("/guest", post(guest))
        .route("/logout", get(logout))
        .with_state(state.clone());

    let content_routes: Router = content_routes()
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let mut delayed_routes = recommend_routes();
    if config.analysis_delay_ms > 0 {
        delayed_routes = delayed_routes.layer(middleware::from_fn_with_state(
            config.analysis_delay_ms,
            analysis_delay,
        ));
    }
    #[cfg(feature = "slowdown")]
    {
        delayed_routes = delayed_routes.layer(middleware::from_fn(slowdown_request));
    }
    let recommend_routes: Router = delayed_routes
        .merge(recommend_info_routes())
        .with_state(state.clone());

    let user_routes: Router = user_routes().with_state(state.clone());
    let premium_routes: Router = premium_routes().with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let mut app: Router = home_router
        .nest("/v1/auth", auth_routes)
        .nest("/v1/content", content_routes)
        .nest("/v1", recommend_routes)
        .nest("/v1/user", user_routes)
        .nest("/v1/premium", premium_routes);

    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, catalog: Catalog) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
