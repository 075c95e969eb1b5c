// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Transition tables
//!
//! A table maps a pair (state, key) to a target:
//! - in a DFA, the key is a symbol and the target is a state
//! - in an NFA, the key is a [Label](crate::alphabets::Label) and the target is a set of states.
//!
//! The table is stored as one row per source state. Lookups take a reference
//! to the key so running an automaton doesn't clone symbols.
//!

use std::{
    borrow::Borrow,
    collections::{hash_map, HashMap},
    hash::Hash,
};

use crate::states::State;

///
/// Map (state, key) -> target
///
#[derive(Debug, Clone)]
pub struct TransitionTable<K, T> {
    rows: HashMap<State, HashMap<K, T>>,
    size: usize,
}

impl<K: Eq + Hash, T> TransitionTable<K, T> {
    ///
    /// Empty table
    ///
    pub fn new() -> Self {
        TransitionTable {
            rows: HashMap::new(),
            size: 0,
        }
    }

    ///
    /// Number of entries
    ///
    pub fn len(&self) -> usize {
        self.size
    }

    ///
    /// Check whether the table is empty
    ///
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    ///
    /// Target for (state, key) if any
    ///
    pub fn get<Q>(&self, state: State, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.rows.get(&state).and_then(|row| row.get(key))
    }

    ///
    /// Check whether (state, key) has an entry
    ///
    pub fn contains<Q>(&self, state: State, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.get(state, key).is_some()
    }

    ///
    /// Store target for (state, key)
    /// - return the previous target if there was one
    ///
    pub fn set(&mut self, state: State, key: K, target: T) -> Option<T> {
        let previous = self.rows.entry(state).or_default().insert(key, target);
        if previous.is_none() {
            self.size += 1;
        }
        previous
    }

    ///
    /// Mutable access to the target for (state, key)
    /// - the entry is created with the default target if it doesn't exist
    ///
    pub fn entry(&mut self, state: State, key: K) -> &mut T
    where
        T: Default,
    {
        let row = self.rows.entry(state).or_default();
        match row.entry(key) {
            hash_map::Entry::Occupied(e) => e.into_mut(),
            hash_map::Entry::Vacant(e) => {
                self.size += 1;
                e.insert(T::default())
            }
        }
    }

    ///
    /// Entries of one state as pairs (key, target)
    ///
    pub fn row(&self, state: State) -> impl Iterator<Item = (&K, &T)> {
        self.rows.get(&state).into_iter().flat_map(|row| row.iter())
    }

    ///
    /// All entries as triples (state, key, target), in no particular order
    ///
    pub fn iter(&self) -> impl Iterator<Item = (State, &K, &T)> {
        self.rows
            .iter()
            .flat_map(|(&state, row)| row.iter().map(move |(k, t)| (state, k, t)))
    }
}

impl<K: Eq + Hash, T> Default for TransitionTable<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::states::{state_set, StateSet};

    #[test]
    fn test_dfa_table() {
        let s0 = State::new(0);
        let s1 = State::new(1);
        let mut table: TransitionTable<char, State> = TransitionTable::new();
        assert!(table.is_empty());

        assert_eq!(table.set(s0, 'a', s1), None);
        assert_eq!(table.set(s0, 'b', s0), None);
        assert_eq!(table.set(s0, 'a', s0), Some(s1));
        assert_eq!(table.len(), 2);

        assert_eq!(table.get(s0, &'a'), Some(&s0));
        assert_eq!(table.get(s1, &'a'), None);
        assert!(!table.contains(s0, &'c'));

        let mut keys: Vec<char> = table.row(s0).map(|(k, _)| *k).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!['a', 'b']);
        assert_eq!(table.row(s1).count(), 0);
    }

    #[test]
    fn test_nfa_table() {
        let s0 = State::new(0);
        let mut table: TransitionTable<char, StateSet> = TransitionTable::new();
        table.entry(s0, 'a').insert(State::new(1));
        table.entry(s0, 'a').insert(State::new(2));
        table.entry(s0, 'b').insert(State::new(2));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(s0, &'a'), Some(&state_set([1, 2])));

        let triples: usize = table.iter().map(|(_, _, targets)| targets.len()).sum();
        assert_eq!(triples, 3);
    }
}
