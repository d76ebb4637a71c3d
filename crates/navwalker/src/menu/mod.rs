//! Menu data handed over by the storage collaborator.
//!
//! Provides:
//! - `MenuItem`, the per-link record
//! - `Forest`, the validated tree the walker renders

mod forest;
mod item;

pub use forest::{Forest, MAX_TREE_DEPTH};
pub use item::{CURRENT_TAG, MenuItem};
