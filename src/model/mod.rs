//! The table's data model and view-model engine.
//!
//! Everything here is pure and synchronous: records in, a derived page view
//! out. Fetching lives in `crate::api`, rendering in `crate::ui`.

mod page;
mod record;
mod sort;
mod view;

pub use page::{next_page_size, prev_page_size, Pagination, DEFAULT_PAGE_SIZES};
pub use record::{Cell, Column, Record};
pub use sort::{toggle_sort, SortDirection, SortSpec};
pub use view::{compute_view, page_count, ViewModel};
