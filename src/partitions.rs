// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Partitions of dense state indices into equivalence classes
//!
//! The elements are the integers [0 .. n-1]. A partition divides them into
//! disjoint, non-empty classes identified by integers [0 .. k-1].
//! Classes are only ever split, so a partition can be refined until
//! it reaches a fix point.
//!

use std::{fmt::Display, ops::Range};

// Implementation:
// - members[0 .. n-1] is a permutation of the elements
// - every class is a contiguous range of members
// - class_of[x] is the id of the class that contains x
//
// When class c is split, the elements that stay in c are moved to the
// front of its range and the others become a new class with the next id.

///
/// Partition of [0 .. n-1]
///
#[derive(Debug, Clone)]
pub struct Partition {
    members: Box<[u32]>,
    ranges: Vec<Range<usize>>,
    class_of: Box<[u32]>,
}

impl Partition {
    ///
    /// Partition of n elements into a single class
    /// - if n is zero, the partition has no class
    ///
    pub fn new(n: u32) -> Self {
        let members: Box<[u32]> = (0..n).collect();
        let ranges = if n == 0 {
            Vec::new()
        } else {
            vec![0..n as usize]
        };
        Partition {
            members,
            ranges,
            class_of: vec![0; n as usize].into_boxed_slice(),
        }
    }

    ///
    /// Number of elements
    ///
    pub fn len(&self) -> u32 {
        self.members.len() as u32
    }

    ///
    /// Check whether there are no elements
    ///
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    ///
    /// Number of classes
    ///
    pub fn num_classes(&self) -> u32 {
        self.ranges.len() as u32
    }

    ///
    /// Class of element x
    ///
    pub fn class_of(&self, x: u32) -> u32 {
        self.class_of[x as usize]
    }

    ///
    /// Number of elements in class c
    ///
    pub fn class_size(&self, c: u32) -> u32 {
        self.ranges[c as usize].len() as u32
    }

    ///
    /// Elements of class c, in no particular order
    ///
    pub fn class_members(&self, c: u32) -> &[u32] {
        &self.members[self.ranges[c as usize].clone()]
    }

    ///
    /// Smallest element of class c
    ///
    pub fn representative(&self, c: u32) -> u32 {
        self.class_members(c).iter().copied().min().unwrap_or(u32::MAX)
    }

    ///
    /// Split class c according to predicate p
    /// - the elements of c that satisfy p stay in c
    /// - the others are moved to a new class
    /// - return the id of the new class, or None if all elements
    ///   of c agree on p (then c is unchanged)
    ///
    pub fn split<P>(&mut self, c: u32, p: P) -> Option<u32>
    where
        P: Fn(u32) -> bool,
    {
        let Range { start, end } = self.ranges[c as usize].clone();
        let block = &mut self.members[start..end];
        let mut kept = 0;
        for k in 0..block.len() {
            if p(block[k]) {
                block.swap(k, kept);
                kept += 1;
            }
        }
        if kept == 0 || kept == block.len() {
            return None;
        }

        let new_class = self.num_classes();
        let split_point = start + kept;
        self.ranges[c as usize].end = split_point;
        self.ranges.push(split_point..end);
        for &x in &self.members[split_point..end] {
            self.class_of[x as usize] = new_class;
        }
        Some(new_class)
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in 0..self.num_classes() {
            let mut elements = self.class_members(c).to_vec();
            elements.sort_unstable();
            write!(f, "class[{c}]:")?;
            for x in elements {
                write!(f, " {x}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
