//! Browse
//!
//! Debounced search text, category filter and pagination over the catalog
//! or search results. Pure state; the UI drives the timers and fetches.

mod debounce;
mod pagination;
mod pipeline;


pub use debounce::{Debouncer, Ticket};
pub use pagination::{PageItem, Pagination};
pub use pipeline::{BrowseState, PageView, SourceSelection};
