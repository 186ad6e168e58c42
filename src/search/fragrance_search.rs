use crate::catalog::{Catalog, Concentration, Fragrance};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 300.0;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Catalog order.
    #[default]
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Reviews,
    Name,
}

fn default_min_price() -> f64 {
    DEFAULT_MIN_PRICE
}

fn default_max_price() -> f64 {
    DEFAULT_MAX_PRICE
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct SearchQuery {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub concentrations: Vec<Concentration>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default = "default_min_price")]
    pub min_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub sort: SortBy,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            text: None,
            brands: vec![],
            concentrations: vec![],
            notes: vec![],
            moods: vec![],
            occasions: vec![],
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_rating: None,
            sort: SortBy::Relevance,
            limit: None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SearchResults<'a> {
    pub total: usize,
    pub fragrances: Vec<&'a Fragrance>,
}

#[derive(Serialize, Debug)]
pub struct SearchFacets<'a> {
    pub brands: Vec<&'a str>,
    pub concentrations: Vec<Concentration>,
    pub min_price: f64,
    pub max_price: f64,
}

fn matches_text(fragrance: &Fragrance, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&fragrance.name)
        || hit(&fragrance.brand)
        || hit(&fragrance.description)
        || fragrance.notes.iter_all().any(|n| hit(n))
        || fragrance.mood.iter().any(|m| hit(m))
        || fragrance.occasions.iter().any(|o| hit(o))
}

fn any_of(wanted: &[String], have: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| have.iter().any(|h| h == w))
}

impl SearchQuery {
    fn accepts(&self, fragrance: &Fragrance, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !matches_text(fragrance, needle) {
                return false;
            }
        }
        if !self.brands.is_empty() && !self.brands.contains(&fragrance.brand) {
            return false;
        }
        if !self.concentrations.is_empty() && !self.concentrations.contains(&fragrance.concentration)
        {
            return false;
        }
        if !self.notes.is_empty() && !self.notes.iter().any(|n| fragrance.notes.contains(n)) {
            return false;
        }
        if !any_of(&self.moods, &fragrance.mood) || !any_of(&self.occasions, &fragrance.occasions) {
            return false;
        }
        if fragrance.price < self.min_price || fragrance.price > self.max_price {
            return false;
        }
        match self.min_rating {
            Some(min_rating) => fragrance.rating >= min_rating,
            None => true,
        }
    }
}

pub fn search<'a>(catalog: &'a Catalog, query: &SearchQuery) -> SearchResults<'a> {
    let needle = query
        .text
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let mut fragrances: Vec<&Fragrance> = catalog
        .fragrances()
        .iter()
        .filter(|f| query.accepts(f, needle.as_deref()))
        .collect();

    match query.sort {
        SortBy::Relevance => {}
        SortBy::PriceLow => fragrances.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => fragrances.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => fragrances.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Reviews => fragrances.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortBy::Name => fragrances.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    let total = fragrances.len();
    if let Some(limit) = query.limit {
        fragrances.truncate(limit);
    }
    SearchResults { total, fragrances }
}

pub fn facets(catalog: &Catalog) -> SearchFacets<'_> {
    SearchFacets {
        brands: catalog.brands(),
        concentrations: catalog.concentrations(),
        min_price: DEFAULT_MIN_PRICE,
        max_price: DEFAULT_MAX_PRICE,
    }
}
