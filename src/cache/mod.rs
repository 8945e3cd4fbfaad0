//! Cache Module
//!
//! Provides the in-memory LRU cache that stores uploaded files.
//!
//! Only [`LruCache`] is public. The ordering list and its entries stay
//! internal so their links can only change through the cache itself:
//!
//! ```compile_fail
//! use filecache::cache::OrderingList;
//! ```
//!
//! ```compile_fail
//! use filecache::cache::Entry;
//! ```

mod entry;
mod list;
mod lru;


pub use lru::LruCache;
