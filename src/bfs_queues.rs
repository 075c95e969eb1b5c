// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Queue + set for breadth-first exploration of automata
//!
//! Every element pushed into the queue gets an index: its position in
//! discovery order. Elements are never forgotten, so the indices can
//! serve as ids of the states of a new automaton (e.g. in the subset
//! construction).
//!

use std::hash::Hash;

use indexmap::IndexSet;

///
/// A BfsQueue is a queue that doesn't contain duplicate elements.
/// - the push operation adds an element at the end of the queue
///   if this element hasn't been seen before. Otherwise, it's a no-op.
/// - the pop operations takes the element at the front of the queue
///   if the queue is not empty.
///
// seen[0 .. next-1] are the elements that have been popped
// seen[next ..] are the pending elements
#[derive(Debug, Clone)]
pub struct BfsQueue<T> {
    seen: IndexSet<T>,
    next: usize,
}

impl<T: Eq + Hash + Clone> BfsQueue<T> {
    ///
    /// Create an empty queue
    ///
    pub fn new() -> Self {
        BfsQueue {
            seen: IndexSet::new(),
            next: 0,
        }
    }

    ///
    /// Add an element at the end of the queue if it's not been seen before
    /// - return the element's index and true if it's new
    /// - return the index it was given before and false otherwise
    ///
    pub fn push(&mut self, element: T) -> (usize, bool) {
        self.seen.insert_full(element)
    }

    ///
    /// Number of elements seen so far (popped or pending)
    ///
    pub fn num_seen(&self) -> usize {
        self.seen.len()
    }

    ///
    /// Get the first pending element and its index
    /// - return None if the queue is empty
    ///
    pub fn pop(&mut self) -> Option<(usize, T)> {
        let i = self.next;
        let element = self.seen.get_index(i)?.clone();
        self.next += 1;
        Some((i, element))
    }

    ///
    /// All elements seen, in discovery order
    ///
    pub fn into_seen(self) -> IndexSet<T> {
        self.seen
    }
}

impl<T: Eq + Hash + Clone> Default for BfsQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_queue() {
        let mut queue = BfsQueue::new();
        assert_eq!(queue.num_seen(), 0);
        assert_eq!(queue.push('a'), (0, true));
        assert_eq!(queue.push('b'), (1, true));
        assert_eq!(queue.push('a'), (0, false));
        assert_eq!(queue.num_seen(), 2);

        assert_eq!(queue.pop(), Some((0, 'a')));
        // popped elements are not pushed again
        assert_eq!(queue.push('a'), (0, false));
        for x in "bcd".chars() {
            queue.push(x);
        }
        assert_eq!(queue.num_seen(), 4);
        assert_eq!(queue.push('d'), (3, false));

        let mut order = Vec::new();
        while let Some((i, x)) = queue.pop() {
            order.push((i, x));
        }
        assert_eq!(order, vec![(1, 'b'), (2, 'c'), (3, 'd')]);
        assert_eq!(queue.pop(), None);

        let seen: Vec<char> = queue.into_seen().into_iter().collect();
        assert_eq!(seen, vec!['a', 'b', 'c', 'd']);
    }
}
