//! Record-agnostic building blocks shared by every catalog: display amounts with
//! extracted magnitudes, the category/text predicate filter, and the stable
//! sort stage.

mod error;
mod filter;
mod magnitude;
mod ranking;

pub use error::{CatalogLoadError, QueryParseError, StoreError};
pub use filter::{filter_records, matches_text, normalize_query, CategoryFilter, Searchable, ALL_KEY};
pub use magnitude::{Magnitude, Rating};
pub use ranking::{sort_records, Ranked, SortDirection, SortKey, SortOrder, SortValue};

pub(crate) use error::ensure_unique_ids;
