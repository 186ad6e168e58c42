mod permissions;
mod session_store;
mod user_models;

pub use permissions::{Permission, UserRole};
pub use session_store::{
    SessionLimits, SessionStore, SessionToken, ShopperSession, DEFAULT_MAX_SESSIONS,
    DEFAULT_SESSION_IDLE_TIMEOUT,
};
pub use user_models::{User, UserPreferences};
