//! Cache Entry Module
//!
//! Defines a single cached file together with its links in the ordering list.

// == Handle ==
/// Stable index of an entry slot inside the ordering list arena.
///
/// Handles stay valid until the entry they point at is evicted; after that
/// the slot may be reused by a later insertion.
pub type Handle = usize;

// == Entry ==
/// One cached key/value pair plus its neighbours in recency order.
///
/// `prev` points towards the most recently used end, `next` towards the
/// least recently used end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lookup key (the uploaded filename)
    pub key: String,
    /// Stored bytes
    pub value: Vec<u8>,
    /// More recently used neighbour
    pub prev: Option<Handle>,
    /// Less recently used neighbour
    pub next: Option<Handle>,
}

impl Entry {
    // == Constructor ==
    /// Creates a detached entry with no neighbours.
    pub fn new(key: String, value: Vec<u8>) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Returns true if the entry has no neighbours on either side.
    #[cfg(test)]
    pub fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}
