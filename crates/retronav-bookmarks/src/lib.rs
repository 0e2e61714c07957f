//! Bookmark storage for RetroNav.
//!
//! A bookmark is just a URL string. The store keeps them in insertion
//! order, enforces uniqueness, and persists the whole list to a JSON file
//! after every mutation. Persistence is best-effort by policy: a missing
//! or malformed file loads as an empty list, and a failed write is logged
//! and dropped. Bookmarks are convenience state, not durable data.

mod store;

pub use store::BookmarkStore;
