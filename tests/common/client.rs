//! HTTP client for end-to-end tests
//!
//! Wraps reqwest and provides one method per catalog-server endpoint.
//! When API routes or request formats change, update only this file.
#![allow(dead_code)]

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

/// HTTP test client with cookie-based session management
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    /// Creates a new client without a session
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true) // Automatically handle session cookies
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn logged_in_as(base_url: String, handle: &str) -> Self {
        let client = Self::new(base_url);

        let response = client.login(handle).await;
        assert_eq!(
            response.status(),
            reqwest::StatusCode::CREATED,
            "Authentication as {} failed: {:?}",
            handle,
            response.text().await
        );

        client
    }

    /// Creates a client logged in as the regular test user
    pub async fn authenticated(base_url: String) -> Self {
        Self::logged_in_as(base_url, REGULAR_USER).await
    }

    /// Creates a client logged in as the premium test user
    pub async fn authenticated_premium(base_url: String) -> Self {
        Self::logged_in_as(base_url, PREMIUM_USER).await
    }

    /// Creates a client holding a guest session
    pub async fn guest(base_url: String) -> Self {
        let client = Self::new(base_url);
        let response = client.start_guest_session().await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        client
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("GET {} failed: {}", path, e))
    }

    async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("DELETE {} failed: {}", path, e))
    }

    async fn post_json(&self, path: &str, body: Value) -> Response {
        self.client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap_or_else(|e| panic!("POST {} failed: {}", path, e))
    }

    async fn put_json(&self, path: &str, body: Value) -> Response {
        self.client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap_or_else(|e| panic!("PUT {} failed: {}", path, e))
    }

    // ========================================================================
    // Authentication Endpoints
    // ========================================================================

    /// GET /
    pub async fn home(&self) -> Response {
        self.get("/").await
    }

    /// POST /v1/auth/login
    pub async fn login(&self, handle: &str) -> Response {
        self.post_json("/v1/auth/login", json!({ "user_handle": handle }))
            .await
    }

    /// POST /v1/auth/guest
    pub async fn start_guest_session(&self) -> Response {
        self.client
            .post(self.url("/v1/auth/guest"))
            .send()
            .await
            .expect("Guest session request failed")
    }

    /// GET /v1/auth/logout
    pub async fn logout(&self) -> Response {
        self.get("/v1/auth/logout").await
    }

    // ========================================================================
    // Content Endpoints
    // ========================================================================

    /// GET /v1/content/fragrances
    pub async fn get_fragrances(&self) -> Response {
        self.get("/v1/content/fragrances").await
    }

    /// GET /v1/content/fragrance/{id}
    pub async fn get_fragrance(&self, id: &str) -> Response {
        self.get(&format!("/v1/content/fragrance/{}", id)).await
    }

    /// GET /v1/content/fragrance/{id}/reviews
    pub async fn get_fragrance_reviews(&self, id: &str) -> Response {
        self.get(&format!("/v1/content/fragrance/{}/reviews", id))
            .await
    }

    /// GET /v1/content/{notes,moods,occasions,facets}
    pub async fn get_content_list(&self, name: &str) -> Response {
        self.get(&format!("/v1/content/{}", name)).await
    }

    /// POST /v1/content/search
    pub async fn search(&self, query: Value) -> Response {
        self.post_json("/v1/content/search", query).await
    }

    // ========================================================================
    // Recommendation Endpoints
    // ========================================================================

    /// GET /v1/recommend/moods
    pub async fn get_moods(&self) -> Response {
        self.get("/v1/recommend/moods").await
    }

    /// POST /v1/recommend/mood-match
    pub async fn mood_match(&self, mood: &str) -> Response {
        self.post_json("/v1/recommend/mood-match", json!({ "mood": mood }))
            .await
    }

    /// POST /v1/recommend/mood
    pub async fn mood_recommendations(&self, mood: &str) -> Response {
        self.post_json("/v1/recommend/mood", json!({ "mood": mood }))
            .await
    }

    /// POST /v1/recommend/smells-like
    pub async fn smells_like(&self, query: &str) -> Response {
        self.post_json("/v1/recommend/smells-like", json!({ "query": query }))
            .await
    }

    /// GET /v1/chat/greeting
    pub async fn chat_greeting(&self) -> Response {
        self.get("/v1/chat/greeting").await
    }

    /// POST /v1/chat
    pub async fn chat(&self, message: &str, context: Option<&str>) -> Response {
        self.post_json("/v1/chat", json!({ "message": message, "context": context }))
            .await
    }

    /// GET /v1/layering/guide
    pub async fn get_layering_guide(&self) -> Response {
        self.get("/v1/layering/guide").await
    }

    /// POST /v1/layering/analyze
    pub async fn analyze_layering(&self, fragrance_ids: &[&str]) -> Response {
        self.post_json(
            "/v1/layering/analyze",
            json!({ "fragrance_ids": fragrance_ids }),
        )
        .await
    }

    // ========================================================================
    // User Endpoints
    // ========================================================================

    /// GET /v1/user/profile
    pub async fn get_profile(&self) -> Response {
        self.get("/v1/user/profile").await
    }

    /// DELETE /v1/user/profile
    pub async fn clear_profile(&self) -> Response {
        self.delete("/v1/user/profile").await
    }

    /// POST /v1/user/profile/notes
    pub async fn add_profile_note(&self, tier: &str, note: &str, intensity: u8) -> Response {
        self.post_json(
            "/v1/user/profile/notes",
            json!({ "tier": tier, "note": note, "intensity": intensity }),
        )
        .await
    }

    /// PUT /v1/user/profile/notes
    pub async fn set_profile_note(&self, tier: &str, note: &str, intensity: u8) -> Response {
        self.put_json(
            "/v1/user/profile/notes",
            json!({ "tier": tier, "note": note, "intensity": intensity }),
        )
        .await
    }

    /// DELETE /v1/user/profile/notes/{tier}/{note}
    pub async fn remove_profile_note(&self, tier: &str, note: &str) -> Response {
        self.delete(&format!(
            "/v1/user/profile/notes/{}/{}",
            tier,
            note.replace(' ', "%20")
        ))
        .await
    }

    /// POST /v1/user/profile/preset/{name}
    pub async fn load_preset(&self, name: &str) -> Response {
        self.client
            .post(self.url(&format!("/v1/user/profile/preset/{}", name)))
            .send()
            .await
            .expect("Load preset request failed")
    }

    /// GET /v1/user/cart
    pub async fn get_cart(&self) -> Response {
        self.get("/v1/user/cart").await
    }

    /// POST /v1/user/cart
    pub async fn add_to_cart(&self, fragrance_id: &str, quantity: u32) -> Response {
        self.post_json(
            "/v1/user/cart",
            json!({ "fragrance_id": fragrance_id, "quantity": quantity }),
        )
        .await
    }

    /// PUT /v1/user/cart/{item_id}
    pub async fn update_cart_item(&self, item_id: &str, quantity: u32) -> Response {
        self.put_json(
            &format!("/v1/user/cart/{}", item_id),
            json!({ "quantity": quantity }),
        )
        .await
    }

    /// DELETE /v1/user/cart/{item_id}
    pub async fn remove_cart_item(&self, item_id: &str) -> Response {
        self.delete(&format!("/v1/user/cart/{}", item_id)).await
    }

    /// GET /v1/user/wishlist
    pub async fn get_wishlist(&self, q: Option<&str>, sort: Option<&str>) -> Response {
        let mut params = vec![];
        if let Some(q) = q {
            params.push(("q", q));
        }
        if let Some(sort) = sort {
            params.push(("sort", sort));
        }
        self.client
            .get(self.url("/v1/user/wishlist"))
            .query(&params)
            .send()
            .await
            .expect("Get wishlist request failed")
    }

    /// POST /v1/user/wishlist/{fragrance_id}
    pub async fn add_to_wishlist(&self, fragrance_id: &str) -> Response {
        self.client
            .post(self.url(&format!("/v1/user/wishlist/{}", fragrance_id)))
            .send()
            .await
            .expect("Add to wishlist request failed")
    }

    /// DELETE /v1/user/wishlist/{fragrance_id}
    pub async fn remove_from_wishlist(&self, fragrance_id: &str) -> Response {
        self.delete(&format!("/v1/user/wishlist/{}", fragrance_id))
            .await
    }

    /// GET /v1/user/discover
    pub async fn get_discover(&self) -> Response {
        self.get("/v1/user/discover").await
    }

    /// POST /v1/user/discover/swipe
    pub async fn swipe(&self, direction: &str) -> Response {
        self.post_json("/v1/user/discover/swipe", json!({ "direction": direction }))
            .await
    }

    /// POST /v1/user/discover/{undo,restart}
    pub async fn discover_action(&self, action: &str) -> Response {
        self.client
            .post(self.url(&format!("/v1/user/discover/{}", action)))
            .send()
            .await
            .expect("Discover request failed")
    }

    /// GET /v1/user/notifications
    pub async fn get_notifications(&self) -> Response {
        self.get("/v1/user/notifications").await
    }

    /// POST /v1/user/notifications/{id}/read
    pub async fn mark_notification_read(&self, id: &str) -> Response {
        self.client
            .post(self.url(&format!("/v1/user/notifications/{}/read", id)))
            .send()
            .await
            .expect("Mark notification read request failed")
    }

    /// POST /v1/user/notifications/read-all
    pub async fn mark_all_notifications_read(&self) -> Response {
        self.client
            .post(self.url("/v1/user/notifications/read-all"))
            .send()
            .await
            .expect("Mark all notifications read request failed")
    }

    /// DELETE /v1/user/notifications/{id}
    pub async fn delete_notification(&self, id: &str) -> Response {
        self.delete(&format!("/v1/user/notifications/{}", id)).await
    }

    // ========================================================================
    // Premium Endpoints
    // ========================================================================

    /// POST /v1/premium/scent-builder/matches
    pub async fn scent_builder_matches(&self, jitter: bool) -> Response {
        self.client
            .post(self.url("/v1/premium/scent-builder/matches"))
            .query(&[("jitter", jitter)])
            .send()
            .await
            .expect("Scent builder request failed")
    }

    /// GET /v1/premium/deals
    pub async fn get_deals(&self) -> Response {
        self.get("/v1/premium/deals").await
    }

    /// GET /v1/premium/marketplace
    pub async fn get_marketplace(&self) -> Response {
        self.get("/v1/premium/marketplace").await
    }

    /// GET /v1/premium/plans
    pub async fn get_plans(&self) -> Response {
        self.get("/v1/premium/plans").await
    }

    /// POST /v1/premium/subscribe
    pub async fn subscribe(&self, plan: &str) -> Response {
        self.post_json("/v1/premium/subscribe", json!({ "plan": plan }))
            .await
    }
}
