//! Access Order Module
//!
//! Ordered key list shared by the FIFO, LIFO, LRU, MRU and LFU policies.

use std::collections::HashMap;
use std::hash::Hash;

/// Link value for "no node".
const NIL: usize = usize::MAX;

/// A key in the arena-backed list.
///
/// `prev` points towards the newest key, `next` towards the oldest.
#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: usize,
    next: usize,
}

// == Access Order ==
/// Tracks keys in the order they were last touched.
///
/// A doubly-linked list stored in a Vec arena, indexed by a HashMap, so
/// touch, remove, oldest and newest are all O(1):
/// - Head = Most recently touched
/// - Tail = Least recently touched
///
/// Removed slots go on a free list and keep their stale key until reused.
#[derive(Debug)]
pub struct AccessOrder<K> {
    nodes: Vec<Node<K>>,
    free: Vec<usize>,
    index: HashMap<K, usize>,
    head: usize,
    tail: usize,
}

impl<K> Default for AccessOrder<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: NIL,
            tail: NIL,
        }
    }
}

impl<K: Eq + Hash + Clone> AccessOrder<K> {
    // == Constructor ==
    /// Creates a new empty order.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recent (moves or adds it to the head).
    pub fn touch(&mut self, key: &K) {
        if let Some(&idx) = self.index.get(key) {
            if self.head != idx {
                self.detach(idx);
                self.push_head(idx);
            }
            return;
        }

        let node = Node {
            key: key.clone(),
            prev: NIL,
            next: NIL,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.index.insert(key.clone(), idx);
        self.push_head(idx);
    }

    // == Remove ==
    /// Removes a key from the order.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.index.remove(key) {
            self.detach(idx);
            self.free.push(idx);
        }
    }

    // == Peek Oldest ==
    /// Returns the least recently touched key.
    pub fn oldest(&self) -> Option<&K> {
        (self.tail != NIL).then(|| &self.nodes[self.tail].key)
    }

    // == Peek Newest ==
    /// Returns the most recently touched key.
    pub fn newest(&self) -> Option<&K> {
        (self.head != NIL).then(|| &self.nodes[self.head].key)
    }

    /// Iterates keys from least to most recently touched.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &K> {
        let mut cursor = self.tail;
        std::iter::from_fn(move || {
            if cursor == NIL {
                return None;
            }
            let node = &self.nodes[cursor];
            cursor = node.prev;
            Some(&node.key)
        })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Unlinks a node, leaving its slot allocated.
    fn detach(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_head(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;

        if self.tail == NIL {
            self.tail = idx;
        }
    }
}
