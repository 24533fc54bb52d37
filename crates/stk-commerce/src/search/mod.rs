//! Search module.
//!
//! Contains the filter state and predicate, sort options, pagination and
//! search suggestions.

mod filter;
mod params;
mod query;
mod results;
mod suggest;

pub use filter::{filter_products, FilterChange, FilterState, RatingThreshold, DEFAULT_PRICE_CEILING};
pub use params::{category_from_query, query_param};
pub use query::SortOption;
pub use results::{results_label, PageMarker, Pagination, SearchResults, DEFAULT_PAGE_SIZE};
pub use suggest::{suggest, Suggestions, MAX_SUGGESTIONS};
