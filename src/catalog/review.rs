use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub id: String,
    pub fragrance_id: String,
    pub user_name: String,
    pub rating: f64,
    pub longevity: u8,
    pub projection: u8,
    pub title: String,
    pub content: String,
    pub helpful: u32,
    pub date: String,
    pub verified: bool,
}
