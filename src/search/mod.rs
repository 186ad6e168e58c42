mod fragrance_search;

pub use fragrance_search::{
    facets, search, SearchFacets, SearchQuery, SearchResults, SortBy, DEFAULT_MAX_PRICE,
    DEFAULT_MIN_PRICE,
};
