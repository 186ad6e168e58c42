use axum::extract::FromRef;

use crate::catalog::Catalog;
use crate::user::{SessionStore, ShopperSession};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use super::session::{Session, SessionExtractionError};
use super::ServerConfig;

pub type GuardedCatalog = Arc<Catalog>;
pub type GuardedSessionStore = Arc<Mutex<SessionStore>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: GuardedCatalog,
    pub sessions: GuardedSessionStore,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog: Catalog) -> ServerState {
        let sessions = SessionStore::with_limits(config.session_limits);
        ServerState {
            config,
            start_time: Instant::now(),
            catalog: Arc::new(catalog),
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }

    /// Runs `f` against the mutable state behind `session`. The lock is held
    /// only for the duration of the call.
    pub fn with_shopper<T, F>(&self, session: &Session, f: F) -> Result<T, SessionExtractionError>
    where
        F: FnOnce(&mut ShopperSession, &Catalog) -> T,
    {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| SessionExtractionError::InternalError)?;
        let shopper = sessions
            .get_mut(&session.token)
            .ok_or(SessionExtractionError::AccessDenied)?;
        Ok(f(shopper, &self.catalog))
    }
}

impl FromRef<ServerState> for GuardedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for GuardedSessionStore {
    fn from_ref(input: &ServerState) -> Self {
        input.sessions.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
