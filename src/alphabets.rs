// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Symbols, alphabets, and transition labels
//!
//! Any type that is `Clone + Eq + Hash + Ord + Debug` can be used as a symbol.
//! The ordering is only used to enumerate alphabets in a deterministic order.
//!
//! NFA transitions are labeled by a [Label]: either a symbol or the reserved
//! [Label::Epsilon] for empty-string transitions. DFA transitions are labeled
//! by symbols only, so a DFA can't have epsilon transitions.
//!

use std::{
    collections::{btree_set, BTreeSet},
    fmt::{Debug, Display},
    hash::Hash,
};

///
/// Requirements on alphabet symbols
///
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Symbol for T {}

///
/// Finite set of symbols
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<S> {
    symbols: BTreeSet<S>,
}

///
/// Transition label in an NFA
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label<S> {
    /// Empty-string transition
    Epsilon,
    /// Transition on a symbol
    Symbol(S),
}

impl<S: Symbol> Alphabet<S> {
    ///
    /// Empty alphabet
    ///
    pub fn new() -> Self {
        Alphabet {
            symbols: BTreeSet::new(),
        }
    }

    ///
    /// Number of symbols
    ///
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    ///
    /// Check whether the alphabet is empty
    ///
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    ///
    /// Check whether a symbol belongs to the alphabet
    ///
    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    ///
    /// Add a symbol
    /// - return true if the symbol is new
    ///
    pub fn insert(&mut self, symbol: S) -> bool {
        self.symbols.insert(symbol)
    }

    ///
    /// Iterate over the symbols in increasing order
    ///
    pub fn iter(&self) -> btree_set::Iter<'_, S> {
        self.symbols.iter()
    }

    ///
    /// Union of two alphabets
    ///
    pub fn union(&self, other: &Alphabet<S>) -> Alphabet<S> {
        Alphabet {
            symbols: self.symbols.union(&other.symbols).cloned().collect(),
        }
    }

    ///
    /// Check whether all symbols of self are in other
    ///
    pub fn is_subset(&self, other: &Alphabet<S>) -> bool {
        self.symbols.is_subset(&other.symbols)
    }
}

impl<S: Symbol> Default for Alphabet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Alphabet {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a, S: Symbol> IntoIterator for &'a Alphabet<S> {
    type Item = &'a S;
    type IntoIter = btree_set::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Symbol> Display for Alphabet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for s in &self.symbols {
            write!(f, " {s:?}")?;
        }
        write!(f, " }}")
    }
}

impl<S> Label<S> {
    ///
    /// Check whether this is an epsilon label
    ///
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }

    ///
    /// Symbol of this label or None for epsilon
    ///
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(s) => Some(s),
        }
    }
}

impl<S> From<S> for Label<S> {
    fn from(symbol: S) -> Self {
        Label::Symbol(symbol)
    }
}

impl<S: Debug> Display for Label<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "\u{03B5}"),
            Label::Symbol(s) => write!(f, "{s:?}"),
        }
    }
}
