// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Error codes
//!

use thiserror::Error;

use crate::states::State;

///
/// Operand of a binary operation on automata
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operand {
    /// First (left-hand) operand
    Left,
    /// Second (right-hand) operand
    Right,
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
        .fmt(f)
    }
}

///
/// Invariant violated by the description of an automaton
///
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Malformation {
    /// No start state was given to a builder.
    #[error("no start state")]
    MissingStart,

    /// The start state (or a member of the start set of an NFA) is not a state.
    #[error("start state {0} is not in the state set")]
    StartNotInStates(State),

    /// An accepting state is not a state.
    #[error("accepting state {0} is not in the state set")]
    AcceptingNotInStates(State),

    /// A transition leaves from an unknown state.
    #[error("transition source {0} is not in the state set")]
    SourceNotInStates(State),

    /// A transition leads to an unknown state.
    #[error("transition target {0} is not in the state set")]
    TargetNotInStates(State),

    /// A transition from `state` is labeled by a symbol outside the alphabet.
    #[error("transition from {state} uses a symbol outside the alphabet")]
    SymbolNotInAlphabet {
        /// source of the offending transition
        state: State,
    },

    /// Two transitions of a DFA leave `state` on the same symbol
    /// toward different targets.
    #[error("state {state} has two different successors for the same symbol")]
    ConflictingTransition {
        /// source of the offending transitions
        state: State,
    },
}

///
/// Error codes produced by construction, simulation, and combination of automata
///
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The automaton description violates one of the data-model invariants.
    ///
    /// Raised when a [Dfa](crate::dfa::Dfa) or [Nfa](crate::nfa::Nfa) is built.
    #[error("malformed automaton: {0}")]
    MalformedAutomaton(#[from] Malformation),

    /// A symbol outside the alphabet was given to `run` or `next`.
    ///
    /// `position` is the index of the symbol in the input word
    /// (always 0 for a single-step `next`).
    #[error("symbol at position {position} is not in the alphabet")]
    UnknownSymbol {
        /// index of the symbol in the input
        position: usize,
    },

    /// A DFA has no transition for the current state and symbol.
    ///
    /// This means that the automaton was not completed
    /// (see [complete](crate::completion::complete)).
    #[error("no transition from state {state} for the symbol at position {position}")]
    IncompleteTransition {
        /// state where the run got stuck
        state: State,
        /// index of the symbol in the input word
        position: usize,
    },

    /// An operand of a product construction is not complete over the
    /// union of the two alphabets.
    ///
    /// `state` is a state of that operand with a missing transition.
    #[error("{operand} operand is not complete over the joined alphabet (state {state})")]
    IncompatibleAlphabet {
        /// operand that lacks a transition
        operand: Operand,
        /// state of that operand with a missing transition
        state: State,
    },
}

/// Result type for fallible automaton operations
pub type Result<T> = std::result::Result<T, Error>;
