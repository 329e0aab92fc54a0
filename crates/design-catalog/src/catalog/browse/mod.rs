//! Table browsing: filter criteria, sort state, and the compare selection,
//! threaded through an immutable [`BrowseView`].

mod filter;
mod selection;
mod sort;
mod view;

pub use filter::{CmsFilter, FilterCriteria};
pub use selection::{CompareSelection, SelectionError, MAX_COMPARE};
pub use sort::{sort_systems, SortDirection, SortKey, SortState};
pub use view::{BrowsePage, BrowseView, SystemRow};
