//! scent.co catalog server library
//!
//! Fragrance catalog, note-overlap matcher and the storefront flows built on
//! it, exposed for the binaries and the end-to-end tests.

pub mod catalog;
pub mod config;
pub mod recommend;
pub mod scent;
pub mod search;
pub mod server;
pub mod shop;
pub mod user;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog};
pub use scent::{match_profile, FlowSettings, MatchResult, ScentProfile};
pub use server::{run_server, RequestsLoggingLevel};
