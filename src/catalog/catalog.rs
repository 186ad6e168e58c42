use super::{Concentration, Deal, Fragrance, MarketplaceListing, Notification, Review};
use crate::user::User;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

#[derive(Debug, PartialEq)]
pub enum Problem {
    Unreadable(PathBuf, String),
    InvalidJson(String),
    DuplicateFragranceId(String),
    NoNotes(String),
    BlankNote(String),
    RatingOutOfRange { fragrance_id: String, rating: f64 },
    LongevityOutOfRange { fragrance_id: String, longevity: u8 },
    ProjectionOutOfRange { fragrance_id: String, projection: u8 },
    NegativePrice { fragrance_id: String, price: f64 },
    DanglingReview { review_id: String, fragrance_id: String },
    DanglingListing { listing_id: String, fragrance_id: String },
    DanglingDeal { deal_id: String, fragrance_id: String },
    DuplicateUserHandle(String),
    DuplicateNotificationId(String),
}

pub struct CatalogBuildResult {
    pub catalog: Option<Catalog>,
    pub problems: Vec<Problem>,
}

#[derive(Deserialize, Default)]
struct CatalogFile {
    fragrances: Vec<Fragrance>,
    #[serde(default)]
    reviews: Vec<Review>,
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    listings: Vec<MarketplaceListing>,
    #[serde(default)]
    deals: Vec<Deal>,
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// Immutable fragrance catalog plus the fixture records hanging off it.
///
/// Fragrances keep the order they had in the source file, that order is
/// what "relevance" sorting and tie-breaking refer to.
#[derive(Debug, Default)]
pub struct Catalog {
    fragrances: Vec<Fragrance>,
    index: HashMap<String, usize>,
    reviews: Vec<Review>,
    users: Vec<User>,
    listings: Vec<MarketplaceListing>,
    deals: Vec<Deal>,
    notifications: Vec<Notification>,
}

fn check_fragrance(fragrance: &Fragrance) -> Vec<Problem> {
    let mut problems = vec![];
    if fragrance.notes.is_empty() {
        problems.push(Problem::NoNotes(fragrance.id.clone()));
    }
    if fragrance.notes.iter_all().any(|n| n.trim().is_empty()) {
        problems.push(Problem::BlankNote(fragrance.id.clone()));
    }
    if !(0.0..=5.0).contains(&fragrance.rating) {
        problems.push(Problem::RatingOutOfRange {
            fragrance_id: fragrance.id.clone(),
            rating: fragrance.rating,
        });
    }
    if !(1..=10).contains(&fragrance.longevity) {
        problems.push(Problem::LongevityOutOfRange {
            fragrance_id: fragrance.id.clone(),
            longevity: fragrance.longevity,
        });
    }
    if !(1..=10).contains(&fragrance.projection) {
        problems.push(Problem::ProjectionOutOfRange {
            fragrance_id: fragrance.id.clone(),
            projection: fragrance.projection,
        });
    }
    if fragrance.price < 0.0 {
        problems.push(Problem::NegativePrice {
            fragrance_id: fragrance.id.clone(),
            price: fragrance.price,
        });
    }
    problems
}

impl Catalog {
    /// Reads and validates a catalog JSON file.
    pub fn build(path: &Path) -> CatalogBuildResult {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json_str(&text),
            Err(err) => CatalogBuildResult {
                catalog: None,
                problems: vec![Problem::Unreadable(path.to_owned(), err.to_string())],
            },
        }
    }

    /// The fixture catalog compiled into the binary.
    pub fn builtin() -> CatalogBuildResult {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    pub fn from_json_str(text: &str) -> CatalogBuildResult {
        let file: CatalogFile = match serde_json::from_str(text) {
            Ok(file) => file,
            Err(err) => {
                return CatalogBuildResult {
                    catalog: None,
                    problems: vec![Problem::InvalidJson(err.to_string())],
                }
            }
        };
        Self::from_file(file)
    }

    fn from_file(file: CatalogFile) -> CatalogBuildResult {
        let mut problems = vec![];

        let mut fragrances: Vec<Fragrance> = Vec::with_capacity(file.fragrances.len());
        let mut index = HashMap::new();
        for fragrance in file.fragrances {
            if index.contains_key(&fragrance.id) {
                problems.push(Problem::DuplicateFragranceId(fragrance.id.clone()));
                continue;
            }
            let mut fragrance_problems = check_fragrance(&fragrance);
            if !fragrance_problems.is_empty() {
                problems.append(&mut fragrance_problems);
                continue;
            }
            index.insert(fragrance.id.clone(), fragrances.len());
            fragrances.push(fragrance);
        }

        let reviews = file
            .reviews
            .into_iter()
            .filter(|r| {
                let ok = index.contains_key(&r.fragrance_id);
                if !ok {
                    problems.push(Problem::DanglingReview {
                        review_id: r.id.clone(),
                        fragrance_id: r.fragrance_id.clone(),
                    });
                }
                ok
            })
            .collect();

        let listings = file
            .listings
            .into_iter()
            .filter(|l| {
                let ok = index.contains_key(&l.fragrance_id);
                if !ok {
                    problems.push(Problem::DanglingListing {
                        listing_id: l.id.clone(),
                        fragrance_id: l.fragrance_id.clone(),
                    });
                }
                ok
            })
            .collect();

        let deals = file
            .deals
            .into_iter()
            .filter(|d| {
                let ok = index.contains_key(&d.fragrance_id);
                if !ok {
                    problems.push(Problem::DanglingDeal {
                        deal_id: d.id.clone(),
                        fragrance_id: d.fragrance_id.clone(),
                    });
                }
                ok
            })
            .collect();

        let mut handles = HashSet::new();
        let users = file
            .users
            .into_iter()
            .filter(|u| {
                let ok = handles.insert(u.handle.clone());
                if !ok {
                    problems.push(Problem::DuplicateUserHandle(u.handle.clone()));
                }
                ok
            })
            .collect();

        let mut notification_ids = HashSet::new();
        let notifications = file
            .notifications
            .into_iter()
            .filter(|n| {
                let ok = notification_ids.insert(n.id.clone());
                if !ok {
                    problems.push(Problem::DuplicateNotificationId(n.id.clone()));
                }
                ok
            })
            .collect();

        CatalogBuildResult {
            catalog: Some(Catalog {
                fragrances,
                index,
                reviews,
                users,
                listings,
                deals,
                notifications,
            }),
            problems,
        }
    }

    pub fn get_fragrance(&self, id: &str) -> Option<&Fragrance> {
        self.index.get(id).map(|i| &self.fragrances[*i])
    }

    pub fn fragrances(&self) -> &[Fragrance] {
        &self.fragrances
    }

    pub fn get_fragrances_count(&self) -> usize {
        self.fragrances.len()
    }

    pub fn get_fragrance_reviews(&self, fragrance_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.fragrance_id == fragrance_id)
            .collect()
    }

    pub fn get_reviews_count(&self) -> usize {
        self.reviews.len()
    }

    pub fn get_user_by_handle(&self, handle: &str) -> Option<&User> {
        self.users.iter().find(|u| u.handle == handle)
    }

    pub fn listings(&self) -> &[MarketplaceListing] {
        &self.listings
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn get_notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    /// Distinct brands, in catalog order.
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.fragrances
            .iter()
            .map(|f| f.brand.as_str())
            .filter(|b| seen.insert(*b))
            .collect()
    }

    /// Distinct concentrations, in catalog order.
    pub fn concentrations(&self) -> Vec<Concentration> {
        let mut out = vec![];
        for fragrance in self.fragrances.iter() {
            if !out.contains(&fragrance.concentration) {
                out.push(fragrance.concentration);
            }
        }
        out
    }
}

#[cfg(test)]
impl Catalog {
    /// Skips validation, for exercising code against malformed records.
    pub(crate) fn from_fragrances_unchecked(fragrances: Vec<Fragrance>) -> Catalog {
        let index = fragrances
            .iter()
            .enumerate()
            .map(|(i, f)| (f.id.clone(), i))
            .collect();
        Catalog {
            fragrances,
            index,
            ..Catalog::default()
        }
    }
}
