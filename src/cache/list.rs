//! Ordering List Module
//!
//! Doubly linked recency list stored in an arena of slots.
//!
//! Links between entries are [`Handle`]s rather than pointers, so the list
//! owns every entry outright while the index only keeps plain indices.

use crate::cache::entry::{Entry, Handle};

// == Ordering List ==
/// Recency-ordered chain of entries.
///
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Freed slots are recycled through `free` so handles stay small.
#[derive(Debug, Default)]
pub struct OrderingList {
    /// Entry arena, `None` marks a free slot
    slots: Vec<Option<Entry>>,
    /// Free slot indices available for reuse
    free: Vec<Handle>,
    /// Most recently used entry
    head: Option<Handle>,
    /// Least recently used entry
    tail: Option<Handle>,
    /// Number of linked entries
    len: usize,
}

impl OrderingList {
    // == Constructor ==
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Head ==
    /// Inserts a new entry as the most recently used one.
    ///
    /// Returns the handle of the new entry.
    pub fn push_head(&mut self, key: String, value: Vec<u8>) -> Handle {
        let handle = self.alloc(Entry::new(key, value));
        self.link_head(handle);
        self.len += 1;
        handle
    }

    // == Move To Head ==
    /// Marks an existing entry as the most recently used one.
    ///
    /// Moving the current head is a no-op; an unknown handle is ignored.
    pub fn move_to_head(&mut self, handle: Handle) {
        if self.head == Some(handle) || self.get(handle).is_none() {
            return;
        }

        self.unlink(handle);
        self.link_head(handle);
    }

    // == Pop Tail ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_tail(&mut self) -> Option<Entry> {
        let handle = self.tail?;
        self.unlink(handle);

        let entry = self.slots.get_mut(handle).and_then(Option::take)?;
        self.free.push(handle);
        self.len -= 1;
        Some(entry)
    }

    // == Accessors ==
    /// Returns the entry behind a handle.
    pub fn get(&self, handle: Handle) -> Option<&Entry> {
        self.slots.get(handle).and_then(Option::as_ref)
    }

    // == Set Value ==
    /// Replaces the value behind a handle without touching its position.
    ///
    /// Returns false if the handle is unknown.
    pub fn set_value(&mut self, handle: Handle, value: Vec<u8>) -> bool {
        match self.get_mut(handle) {
            Some(entry) => {
                entry.value = value;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn head(&self) -> Option<Handle> {
        self.head
    }

    #[cfg(test)]
    pub fn tail(&self) -> Option<Handle> {
        self.tail
    }

    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Walks the entries from most to least recently used.
    #[allow(dead_code)]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Internal Linking ==
    fn get_mut(&mut self, handle: Handle) -> Option<&mut Entry> {
        self.slots.get_mut(handle).and_then(Option::as_mut)
    }

    /// Splices an entry out, fixing head/tail when it sat at either end.
    fn unlink(&mut self, handle: Handle) {
        let (prev, next) = match self.get_mut(handle) {
            Some(entry) => {
                let links = (entry.prev, entry.next);
                entry.prev = None;
                entry.next = None;
                links
            }
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(prev_entry) = self.get_mut(p) {
                    prev_entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(n) => {
                if let Some(next_entry) = self.get_mut(n) {
                    next_entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Splices a detached entry in front of the current head.
    fn link_head(&mut self, handle: Handle) {
        let old_head = self.head;

        if let Some(entry) = self.get_mut(handle) {
            entry.prev = None;
            entry.next = old_head;
        }

        if let Some(h) = old_head {
            if let Some(head_entry) = self.get_mut(h) {
                head_entry.prev = Some(handle);
            }
        }

        self.head = Some(handle);
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
    }

    fn alloc(&mut self, entry: Entry) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle] = Some(entry);
                handle
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }
}

// == Iterator ==
/// Iterator over list entries in recency order.
#[allow(dead_code)]
pub struct Iter<'a> {
    list: &'a OrderingList,
    cursor: Option<Handle>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.cursor?)?;
        self.cursor = entry.next;
        Some(entry)
    }
}
