// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! States and sets of states
//!
//! A [State] is an opaque identifier. Two states are the same state iff they
//! have the same identifier; the number itself has no meaning. Operations that
//! build new automata (product, subset construction, minimization) allocate
//! fresh identifiers with a [StateAllocator].
//!

use std::{collections::BTreeSet, fmt::Display};

///
/// State identifier
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(u32);

///
/// Set of states
///
/// A `BTreeSet` keeps its elements sorted, so two equal sets enumerate the
/// same member list. This is used as a canonical key in subset construction.
///
pub type StateSet = BTreeSet<State>;

impl State {
    /// State with the given identifier
    pub const fn new(id: u32) -> Self {
        State(id)
    }

    /// Identifier of this state
    pub fn id(&self) -> u32 {
        self.0
    }

    /// Identifier as an index
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for State {
    fn from(id: u32) -> Self {
        State(id)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s{}", self.0)
    }
}

///
/// Allocator of fresh states
/// - states are allocated in increasing order, starting from `State(0)` or
///   from the first identifier above an existing set of states.
/// - if the existing set contains `State(u32::MAX)`, allocation wraps around
///   and fills the gaps between existing identifiers instead.
///
// Invariant: next is not in reserved (unless all identifiers are taken).
#[derive(Debug, Clone, Default)]
pub struct StateAllocator {
    next: u32,
    count: u32,
    reserved: StateSet,
}

impl StateAllocator {
    ///
    /// Allocator for dense states 0, 1, 2, ...
    ///
    pub fn new() -> Self {
        StateAllocator::default()
    }

    ///
    /// Allocator whose states are all distinct from the elements of `states`
    ///
    pub fn above<'a>(states: impl IntoIterator<Item = &'a State>) -> Self {
        let reserved: StateSet = states.into_iter().copied().collect();
        let next = match reserved.last() {
            None => 0,
            Some(s) => s.0.checked_add(1).unwrap_or(0),
        };
        let mut alloc = StateAllocator {
            next,
            count: 0,
            reserved,
        };
        alloc.skip_reserved();
        alloc
    }

    fn skip_reserved(&mut self) {
        let mut steps = 0u64;
        while self.reserved.contains(&State(self.next)) && steps <= u32::MAX as u64 {
            self.next = self.next.wrapping_add(1);
            steps += 1;
        }
    }

    ///
    /// Get a fresh state
    ///
    pub fn fresh(&mut self) -> State {
        let s = State(self.next);
        self.next = self.next.wrapping_add(1);
        self.count = self.count.saturating_add(1);
        self.skip_reserved();
        s
    }

    ///
    /// Number of states allocated so far
    ///
    pub fn count(&self) -> u32 {
        self.count
    }
}

///
/// Build a state set from identifiers
///
pub fn state_set(ids: impl IntoIterator<Item = u32>) -> StateSet {
    ids.into_iter().map(State).collect()
}
