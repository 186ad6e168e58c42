use crate::catalog::{Catalog, Fragrance};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Deserialize, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Like,
    Pass,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscoverError {
    #[error("The catalog is empty")]
    EmptyCatalog,

    #[error("Nothing to undo")]
    NothingToUndo,
}

#[derive(Serialize, Debug)]
pub struct DiscoverView<'a> {
    pub position: usize,
    pub total: usize,
    pub current: Option<&'a Fragrance>,
    pub liked: Vec<&'a Fragrance>,
    pub passed_count: usize,
}

/// Walks the catalog one fragrance at a time, recording likes and passes.
/// After the last fragrance the deck starts over.
#[derive(Clone, Debug, Default)]
pub struct DiscoverDeck {
    position: usize,
    liked: Vec<String>,
    passed: Vec<String>,
}

impl DiscoverDeck {
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a Fragrance> {
        catalog.fragrances().get(self.position)
    }

    fn forget(&mut self, fragrance_id: &str) {
        self.liked.retain(|id| id != fragrance_id);
        self.passed.retain(|id| id != fragrance_id);
    }

    /// Records a decision on the current fragrance and moves to the next one.
    /// A later decision on the same fragrance replaces the earlier one.
    pub fn swipe(&mut self, catalog: &Catalog, direction: SwipeDirection) -> Result<(), DiscoverError> {
        let fragrance_id = self
            .current(catalog)
            .ok_or(DiscoverError::EmptyCatalog)?
            .id
            .clone();
        self.forget(&fragrance_id);
        match direction {
            SwipeDirection::Like => self.liked.push(fragrance_id),
            SwipeDirection::Pass => self.passed.push(fragrance_id),
        }
        self.position = (self.position + 1) % catalog.get_fragrances_count();
        Ok(())
    }

    /// Steps back one fragrance and drops the decision taken on it.
    pub fn undo(&mut self, catalog: &Catalog) -> Result<(), DiscoverError> {
        if self.position == 0 {
            return Err(DiscoverError::NothingToUndo);
        }
        let previous = self.position - 1;
        if let Some(fragrance) = catalog.fragrances().get(previous) {
            let fragrance_id = fragrance.id.clone();
            self.forget(&fragrance_id);
        }
        self.position = previous;
        Ok(())
    }

    /// Back to the first fragrance, likes are kept.
    pub fn restart(&mut self) {
        self.position = 0;
    }

    pub fn view<'a>(&self, catalog: &'a Catalog) -> DiscoverView<'a> {
        DiscoverView {
            position: self.position,
            total: catalog.get_fragrances_count(),
            current: self.current(catalog),
            liked: self
                .liked
                .iter()
                .filter_map(|id| catalog.get_fragrance(id))
                .collect(),
            passed_count: self.passed.len(),
        }
    }
}
