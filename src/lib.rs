// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Algebra of finite-state automata
//!
//! # Overview
//!
//! This crate provides deterministic and nondeterministic finite-state
//! automata over an arbitrary symbol type, and the classic operations
//! on the regular languages they recognize.
//!
//! - [dfa] and [nfa] define the automata, with builders and validation.
//!   NFAs may have epsilon transitions.
//! - [completion] adds a sink state to make a DFA complete and computes
//!   complements.
//! - [products] implements union, intersection, difference, and symmetric
//!   difference by product construction. These are also available as the
//!   operators `|`, `&`, `-`, `^`, and `!` on `&Dfa`.
//! - [minimizer] removes unreachable states and merges equivalent states.
//! - [determinizer] converts an NFA to a DFA by subset construction and
//!   [reversal] computes the reverse of an automaton.
//! - [languages] answers emptiness and equivalence queries.
//! - [samples] builds small automata (single words, empty and universal
//!   languages).
//!
//! Operations never modify their operands: they return new automata.
//!
//! # Example
//!
//! ```
//! use fsa_algebra::{minimizer::minimize, samples::one_string};
//!
//! let cat = one_string("cat".chars(), "catdog".chars());
//! let dog = one_string("dog".chars(), "catdog".chars());
//! let either = (&cat | &dog).unwrap();
//! assert_eq!(either.accepts("dog".chars()), Ok(true));
//! assert_eq!(either.accepts("cog".chars()), Ok(false));
//!
//! let min = minimize(&either);
//! assert!(min.num_states() <= either.num_states());
//! assert_eq!(min.accepts("cat".chars()), Ok(true));
//! ```
//!

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod alphabets;
pub mod completion;
pub mod determinizer;
pub mod dfa;
pub mod errors;
pub mod languages;
pub mod minimizer;
pub mod nfa;
pub mod partitions;
pub mod products;
pub mod reversal;
pub mod samples;
pub mod states;
pub mod transition_tables;

pub use alphabets::{Alphabet, Label, Symbol};
pub use completion::{complement, complete, complete_over, find_sink};
pub use determinizer::determinize;
pub use dfa::{Dfa, DfaBuilder};
pub use errors::{Error, Malformation, Operand, Result};
pub use languages::{counterexample, equivalent, is_empty, shortest_accepted};
pub use minimizer::{minimize, reachable};
pub use nfa::{Nfa, NfaBuilder};
pub use products::{difference, intersection, product, symmetric_difference, union};
pub use reversal::reverse;
pub use states::{State, StateSet};

mod bfs_queues;
mod fast_sets;
mod labeled_queues;

#[cfg(test)]
mod tests;
