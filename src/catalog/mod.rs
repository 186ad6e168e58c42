mod catalog;
mod deal;
mod fragrance;
mod listing;
mod load;
pub mod notes;
mod notification;
mod review;

pub use catalog::{Catalog, CatalogBuildResult, Problem as LoadCatalogProblem};
pub use deal::Deal;
pub use fragrance::{Concentration, Fragrance, Notes, Season, Tier};
pub use listing::{ListingCondition, MarketplaceListing};
pub use load::load_catalog;
pub use notification::{Notification, NotificationKind};
pub use review::Review;

#[cfg(test)]
pub(crate) mod test_utils;
