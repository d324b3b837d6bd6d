//! Static menu links for breadcrumb lookups.
//!
//! Menu links are loaded from JSON arrays (one array per source) and kept
//! read-only in memory. The link set computes active trails by matching
//! the current path against link paths and resolves link ids to titles
//! and targets, so it can stand in for both trail collaborators.

mod link;
mod registry;

pub use link::MenuLink;
pub use registry::MenuLinkSet;
