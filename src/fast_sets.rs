// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Sparse sets of small integers
//!
//! A [FastSet] stores indices in a fixed range [0 .. capacity-1]: dense
//! state indices, partition class ids, or (class, symbol) splitter codes
//! in the minimizer. Insertion, pop, membership, and clearing are
//! constant-time.
//!

use std::{fmt::Display, iter::Copied, slice};

///
/// Set of integers in [0 .. capacity-1]
///
// Invariants:
// - members lists the elements in insertion order
// - x is in the set iff slot[x] < members.len() and members[slot[x]] == x
//
#[derive(Debug, Clone)]
pub struct FastSet {
    members: Vec<u32>,
    slot: Box<[u32]>,
}

impl FastSet {
    ///
    /// Empty set for integers in the range 0 .. capacity
    ///
    pub fn new(capacity: u32) -> Self {
        FastSet {
            members: Vec::with_capacity(capacity as usize),
            slot: vec![0; capacity as usize].into_boxed_slice(),
        }
    }

    ///
    /// Upper bound on the elements (exclusive)
    ///
    pub fn capacity(&self) -> u32 {
        self.slot.len() as u32
    }

    ///
    /// Check whether x is in the set
    ///
    pub fn contains(&self, x: u32) -> bool {
        debug_assert!(x < self.capacity());
        let i = self.slot[x as usize] as usize;
        self.members.get(i) == Some(&x)
    }

    ///
    /// Add x to the set
    /// - return true if x was not present
    ///
    pub fn insert(&mut self, x: u32) -> bool {
        if self.contains(x) {
            return false;
        }
        self.slot[x as usize] = self.members.len() as u32;
        self.members.push(x);
        true
    }

    ///
    /// Remove and return the most recently inserted element
    ///
    pub fn pop(&mut self) -> Option<u32> {
        self.members.pop()
    }

    ///
    /// Empty the set
    ///
    pub fn clear(&mut self) {
        self.members.clear()
    }

    ///
    /// Iterator over the elements
    ///
    pub fn iter(&self) -> Copied<slice::Iter<'_, u32>> {
        self.members.iter().copied()
    }
}

impl<'a> IntoIterator for &'a FastSet {
    type Item = u32;
    type IntoIter = Copied<slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for FastSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for x in self {
            write!(f, " {x}")?;
        }
        write!(f, " }}")
    }
}
