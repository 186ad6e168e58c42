use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Deal {
    pub id: String,
    pub fragrance_id: String,
    pub store: String,
    pub original_price: f64,
    pub discounted_price: f64,
    pub discount_percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub valid_until: String,
    pub url: String,
    pub in_stock: bool,
}
