use crate::catalog::{Catalog, Fragrance};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WishlistSort {
    #[default]
    Added,
    Name,
    PriceLow,
    PriceHigh,
    Rating,
}

impl WishlistSort {
    pub fn parse(s: &str) -> Option<WishlistSort> {
        match s {
            "added" => Some(WishlistSort::Added),
            "name" => Some(WishlistSort::Name),
            "price-low" => Some(WishlistSort::PriceLow),
            "price-high" => Some(WishlistSort::PriceHigh),
            "rating" => Some(WishlistSort::Rating),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct WishlistEntry {
    fragrance_id: String,
    added_at: DateTime<Utc>,
}

#[derive(Serialize, Debug)]
pub struct WishlistItem<'a> {
    pub fragrance: &'a Fragrance,
    pub added_at: DateTime<Utc>,
}

/// Fragrances saved for later, each at most once, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Returns false when the fragrance was already saved.
    pub fn add(&mut self, fragrance_id: &str) -> bool {
        if self.contains(fragrance_id) {
            return false;
        }
        self.entries.push(WishlistEntry {
            fragrance_id: fragrance_id.to_string(),
            added_at: Utc::now(),
        });
        true
    }

    pub fn remove(&mut self, fragrance_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.fragrance_id != fragrance_id);
        self.entries.len() != before
    }

    pub fn contains(&self, fragrance_id: &str) -> bool {
        self.entries.iter().any(|e| e.fragrance_id == fragrance_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Saved fragrances whose name or brand contains `filter`, sorted.
    pub fn list<'a>(
        &self,
        catalog: &'a Catalog,
        filter: Option<&str>,
        sort: WishlistSort,
    ) -> Vec<WishlistItem<'a>> {
        let filter = filter
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty());
        let mut items: Vec<WishlistItem<'a>> = self
            .entries
            .iter()
            .filter_map(|e| {
                catalog.get_fragrance(&e.fragrance_id).map(|fragrance| WishlistItem {
                    fragrance,
                    added_at: e.added_at,
                })
            })
            .filter(|item| match &filter {
                Some(f) => {
                    item.fragrance.name.to_lowercase().contains(f)
                        || item.fragrance.brand.to_lowercase().contains(f)
                }
                None => true,
            })
            .collect();

        match sort {
            // Entries are in insertion order, newest last.
            WishlistSort::Added => items.reverse(),
            WishlistSort::Name => items.sort_by(|a, b| a.fragrance.name.cmp(&b.fragrance.name)),
            WishlistSort::PriceLow => {
                items.sort_by(|a, b| a.fragrance.price.total_cmp(&b.fragrance.price))
            }
            WishlistSort::PriceHigh => {
                items.sort_by(|a, b| b.fragrance.price.total_cmp(&a.fragrance.price))
            }
            WishlistSort::Rating => {
                items.sort_by(|a, b| b.fragrance.rating.total_cmp(&a.fragrance.rating))
            }
        }
        items
    }
}
