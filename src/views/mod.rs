//! Read-only projections over the store state: breadcrumbs, listing helpers
//! and expansion-path derivation. Nothing here mutates the tree.

pub mod breadcrumbs;
pub mod expansion;
pub mod listing;

pub use breadcrumbs::breadcrumb_trail;
pub use expansion::{default_folder_id, expansion_path};
pub use listing::{folder_summary, sort_files_by_date, SortOrder};
