//! Insertion Order Module
//!
//! Tracks the order in which URLs were (re-)inserted, oldest first, for FIFO
//! eviction.
//!
//! Nodes live in a slot arena and are linked by index, so each cache slot can
//! hold the `NodeId` of its position and unlink itself in O(1):
//!
//! ```text
//!   head (oldest) ─► [a] ◄──► [b] ◄──► [c] ◄── tail (newest)
//! ```

// == Node Handle ==
/// Stable handle to a position in an [`InsertionOrder`].
///
/// A handle is valid until its node is removed; after that the slot may be
/// recycled for another URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct Node {
    url: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Insertion Order ==
/// Doubly linked FIFO of URLs.
///
/// - Front = oldest insertion (next eviction victim)
/// - Back = newest insertion
#[derive(Debug, Default)]
pub struct InsertionOrder {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates an empty order record.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Back ==
    /// Appends `url` as the newest entry and returns its handle.
    pub fn push_back(&mut self, url: String) -> NodeId {
        let node = Node {
            url,
            prev: self.tail,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => {
                if let Some(tail_node) = self.slots[tail].as_mut() {
                    tail_node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        NodeId(idx)
    }

    // == Remove ==
    /// Unlinks the node behind `id` and returns its URL.
    ///
    /// Returns None if the handle is not live.
    pub fn remove(&mut self, id: NodeId) -> Option<String> {
        let node = self.slots.get_mut(id.0)?.take()?;

        match node.prev {
            Some(prev) => {
                if let Some(prev_node) = self.slots[prev].as_mut() {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(next_node) = self.slots[next].as_mut() {
                    next_node.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(id.0);
        self.len -= 1;
        Some(node.url)
    }

    // == Front ==
    /// Returns the oldest URL and its handle without removing it.
    pub fn front(&self) -> Option<(NodeId, &str)> {
        let idx = self.head?;
        self.slots[idx]
            .as_ref()
            .map(|node| (NodeId(idx), node.url.as_str()))
    }

    // == Pop Front ==
    /// Removes and returns the oldest URL.
    pub fn pop_front(&mut self) -> Option<String> {
        let idx = self.head?;
        self.remove(NodeId(idx))
    }

    // == Iteration ==
    /// Iterates URLs from oldest to newest.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            order: self,
            current: self.head,
        }
    }

    // == Clear ==
    /// Drops every node and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of tracked URLs.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the URL stored at `id`, if the handle is live.
    pub fn get(&self, id: NodeId) -> Option<&str> {
        self.slots
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|node| node.url.as_str())
    }
}

/// Oldest-first iterator over an [`InsertionOrder`].
pub struct Iter<'a> {
    order: &'a InsertionOrder,
    current: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let node = self.order.slots[idx].as_ref()?;
        self.current = node.next;
        Some(node.url.as_str())
    }
}
