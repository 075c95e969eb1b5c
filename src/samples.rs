// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Small automata used as building blocks and in tests
//!
//! All the automata built here are complete.
//!

use crate::{
    alphabets::{Alphabet, Symbol},
    dfa::Dfa,
    states::{State, StateSet},
    transition_tables::TransitionTable,
};

///
/// DFA that accepts a single word
/// - the alphabet is the union of `alphabet` and the symbols of `word`
/// - if `word` has length n, the states are 0 to n+1: state i is reached
///   after reading the first i symbols of the word, state n is accepting,
///   and state n+1 is a sink
///
/// ```
/// use fsa_algebra::samples::one_string;
///
/// let dfa = one_string("cat".chars(), "abc".chars());
/// assert_eq!(dfa.num_states(), 5);
/// assert_eq!(dfa.accepts("cat".chars()), Ok(true));
/// assert_eq!(dfa.accepts("ca".chars()), Ok(false));
/// ```
///
pub fn one_string<S: Symbol>(
    word: impl IntoIterator<Item = S>,
    alphabet: impl IntoIterator<Item = S>,
) -> Dfa<S> {
    let word: Vec<S> = word.into_iter().collect();
    let mut sigma: Alphabet<S> = alphabet.into_iter().collect();
    for a in &word {
        sigma.insert(a.clone());
    }

    let n = word.len() as u32;
    let sink = State::new(n + 1);
    let states: StateSet = (0..=n + 1).map(State::new).collect();
    let accepting: StateSet = [State::new(n)].into_iter().collect();
    let mut table = TransitionTable::new();
    for q in 0..=n + 1 {
        let source = State::new(q);
        for a in &sigma {
            table.set(source, a.clone(), sink);
        }
    }
    for (i, a) in word.into_iter().enumerate() {
        let i = i as u32;
        table.set(State::new(i), a, State::new(i + 1));
    }

    Dfa::from_parts(sigma, states, State::new(0), accepting, table)
}

//
// One-state DFA with a self-loop on every symbol
//
fn single_state<S: Symbol>(alphabet: impl IntoIterator<Item = S>, accepting: bool) -> Dfa<S> {
    let sigma: Alphabet<S> = alphabet.into_iter().collect();
    let q = State::new(0);
    let mut table = TransitionTable::new();
    for a in &sigma {
        table.set(q, a.clone(), q);
    }
    let states: StateSet = [q].into_iter().collect();
    let final_states = if accepting {
        states.clone()
    } else {
        StateSet::new()
    };
    Dfa::from_parts(sigma, states, q, final_states, table)
}

///
/// DFA that accepts no word
///
pub fn empty_language<S: Symbol>(alphabet: impl IntoIterator<Item = S>) -> Dfa<S> {
    single_state(alphabet, false)
}

///
/// DFA that accepts all words over the alphabet
///
pub fn universal<S: Symbol>(alphabet: impl IntoIterator<Item = S>) -> Dfa<S> {
    single_state(alphabet, true)
}
