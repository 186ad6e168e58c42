pub mod config;
mod content_routes;
mod http_layers;
mod premium_routes;
mod recommend_routes;
pub mod server;
pub(self) mod session;
pub mod state;
mod user_routes;

pub use config::ServerConfig;
pub use http_layers::*;
pub use server::run_server;
pub use session::{AccessError, Session, COOKIE_SESSION_TOKEN_KEY, HEADER_SESSION_TOKEN_KEY};
