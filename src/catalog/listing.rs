use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum ListingCondition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

/// A peer-to-peer resale offer for a catalog fragrance.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MarketplaceListing {
    pub id: String,
    pub fragrance_id: String,
    pub seller_name: String,
    pub seller_rating: f64,
    pub price: f64,
    pub condition: ListingCondition,
    pub bottle_size: String,
    pub remaining_amount: String,
    pub description: String,
    pub location: String,
    pub shipping_options: Vec<String>,
    pub date_posted: String,
}
