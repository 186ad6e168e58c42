//! In-memory shopper sessions. Nothing here survives a restart.

use super::permissions::UserRole;
use super::user_models::User;
use crate::scent::ScentProfile;
use crate::shop::{Cart, DiscoverDeck, NotificationInbox, Wishlist};
use rand::Rng;
use rand_distr::Alphanumeric;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

const TOKEN_LENGTH: usize = 64;

pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(24 * 3600);
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Bounds on the session map. Sessions unused for `idle_timeout` are dropped,
/// and once `max_sessions` are open the least recently used one makes room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle_timeout: Duration,
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        SessionLimits {
            idle_timeout: DEFAULT_SESSION_IDLE_TIMEOUT,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Debug)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn generate() -> SessionToken {
        let rng = rand::rng();
        let random_string: String = rng
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        SessionToken(random_string)
    }
}

#[derive(Debug)]
pub struct ShopperSession {
    pub token: SessionToken,
    /// None for guest sessions.
    pub user_id: Option<String>,
    pub handle: Option<String>,
    pub role: UserRole,
    pub last_seen: Instant,
    pub profile: ScentProfile,
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub discover: DiscoverDeck,
    pub inbox: NotificationInbox,
}

impl ShopperSession {
    fn new(user: Option<&User>, now: Instant) -> ShopperSession {
        ShopperSession {
            token: SessionToken::generate(),
            user_id: user.map(|u| u.id.clone()),
            handle: user.map(|u| u.handle.clone()),
            role: UserRole::for_premium_flag(user.map(|u| u.is_premium).unwrap_or(false)),
            last_seen: now,
            profile: ScentProfile::new(),
            cart: Cart::default(),
            wishlist: Wishlist::default(),
            discover: DiscoverDeck::default(),
            inbox: NotificationInbox::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, ShopperSession>,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new() -> SessionStore {
        SessionStore::default()
    }

    pub fn with_limits(limits: SessionLimits) -> SessionStore {
        SessionStore {
            sessions: HashMap::new(),
            limits,
        }
    }

    fn is_idle(&self, session: &ShopperSession, now: Instant) -> bool {
        now.saturating_duration_since(session.last_seen) >= self.limits.idle_timeout
    }

    /// Drops every session idle for longer than the timeout, returns how many.
    pub fn prune_idle(&mut self, now: Instant) -> usize {
        let before = self.sessions.len();
        let timeout = self.limits.idle_timeout;
        self.sessions
            .retain(|_, s| now.saturating_duration_since(s.last_seen) < timeout);
        let pruned = before - self.sessions.len();
        if pruned > 0 {
            debug!("Pruned {} idle sessions", pruned);
        }
        pruned
    }

    fn evict_least_recently_seen(&mut self) {
        let oldest = self
            .sessions
            .values()
            .min_by_key(|s| s.last_seen)
            .map(|s| s.token.0.clone());
        if let Some(token) = oldest {
            info!("Session limit of {} reached, evicting the oldest", self.limits.max_sessions);
            self.sessions.remove(&token);
        }
    }

    fn insert(&mut self, session: ShopperSession) -> &ShopperSession {
        self.prune_idle(session.last_seen);
        while !self.sessions.is_empty() && self.sessions.len() >= self.limits.max_sessions {
            self.evict_least_recently_seen();
        }
        let key = session.token.0.clone();
        debug!(
            "Opening session for {}",
            session.handle.as_deref().unwrap_or("guest")
        );
        self.sessions.entry(key).or_insert(session)
    }

    pub fn open_for_user(&mut self, user: &User) -> &ShopperSession {
        self.open_for_user_at(user, Instant::now())
    }

    pub fn open_guest(&mut self) -> &ShopperSession {
        self.open_guest_at(Instant::now())
    }

    fn open_for_user_at(&mut self, user: &User, now: Instant) -> &ShopperSession {
        self.insert(ShopperSession::new(Some(user), now))
    }

    fn open_guest_at(&mut self, now: Instant) -> &ShopperSession {
        self.insert(ShopperSession::new(None, now))
    }

    pub fn get(&self, token: &str) -> Option<&ShopperSession> {
        self.sessions.get(token)
    }

    /// Looks a session up for a request and marks it as used. An idle
    /// session is dropped instead.
    pub fn get_mut(&mut self, token: &str) -> Option<&mut ShopperSession> {
        self.touch(token, Instant::now())
    }

    fn touch(&mut self, token: &str, now: Instant) -> Option<&mut ShopperSession> {
        let idle = self.is_idle(self.sessions.get(token)?, now);
        if idle {
            debug!("Session expired after being idle");
            self.sessions.remove(token);
            return None;
        }
        let session = self.sessions.get_mut(token)?;
        session.last_seen = session.last_seen.max(now);
        Some(session)
    }

    /// Drops a session, returns whether it existed.
    pub fn close(&mut self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
