//! Shared constants for end-to-end tests
//!
//! The servers spawned by the tests use the built-in catalog, these mirror
//! its users and fragrances.
#![allow(dead_code)]

// ============================================================================
// Test Users
// ============================================================================

/// Regular (non premium) user
pub const REGULAR_USER: &str = "jane";

/// Premium user
pub const PREMIUM_USER: &str = "john";

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// Sauvage by Dior, has two reviews and a deal
pub const SAUVAGE_ID: &str = "1";

/// Baccarat Rouge 540, listed on the marketplace
pub const BACCARAT_ID: &str = "2";

/// Light Blue by Dolce & Gabbana
pub const LIGHT_BLUE_ID: &str = "3";

/// Black Orchid by Tom Ford
pub const BLACK_ORCHID_ID: &str = "4";

/// Acqua di Gio by Giorgio Armani
pub const ACQUA_DI_GIO_ID: &str = "5";

/// Flowerbomb by Viktor & Rolf
pub const FLOWERBOMB_ID: &str = "6";

/// Number of fragrances in the built-in catalog
pub const FRAGRANCES_COUNT: usize = 6;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
