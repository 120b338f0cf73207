pub mod core;
pub mod models;
pub mod store;
pub mod views;

pub use crate::core::errors::{Error, Result};
pub use crate::models::entry::{Entry, EntryKind, File, Folder};
pub use crate::store::{CreateEntry, ExplorerStore};
