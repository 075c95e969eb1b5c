// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Completion and complement of deterministic automata
//!
//! A DFA is made complete by routing every missing transition to a sink
//! (a.k.a. devil) state: a non-accepting state whose transitions all loop back
//! to itself. If the automaton already has such a state, it's reused.
//! Otherwise, a fresh sink state is added.
//!

use crate::{
    alphabets::{Alphabet, Symbol},
    dfa::Dfa,
    states::{State, StateAllocator},
};

///
/// Search for a sink state
/// - a sink is a non-accepting state `q` such that `δ(q, a) = q` for every
///   symbol `a` of the alphabet
/// - return the smallest such state or None
///
/// Reachability is not taken into account.
///
pub fn find_sink<S: Symbol>(dfa: &Dfa<S>) -> Option<State> {
    dfa.states().iter().copied().find(|&q| {
        !dfa.is_accepting(q) && dfa.alphabet().iter().all(|a| dfa.next(q, a) == Some(q))
    })
}

///
/// Complete a DFA
/// - if the DFA is already complete, the result is a copy
/// - otherwise, all missing transitions are redirected to a sink state
///   (an existing one if [find_sink] finds one, or a new state)
///
pub fn complete<S: Symbol>(dfa: &Dfa<S>) -> Dfa<S> {
    if dfa.is_complete() {
        return dfa.clone();
    }

    let mut states = dfa.states().clone();
    let mut table = dfa.table().clone();
    let sink = match find_sink(dfa) {
        Some(q) => q,
        None => {
            let q = StateAllocator::above(dfa.states()).fresh();
            states.insert(q);
            q
        }
    };
    for (q, a) in dfa.missing_transitions() {
        table.set(q, a.clone(), sink);
    }
    // a new sink has no transitions yet
    for a in dfa.alphabet() {
        if !table.contains(sink, a) {
            table.set(sink, a.clone(), sink);
        }
    }

    Dfa::from_parts(
        dfa.alphabet().clone(),
        states,
        dfa.start(),
        dfa.accepting().clone(),
        table,
    )
}

///
/// Extend the alphabet of a DFA then complete it
/// - the new alphabet is the union of `dfa.alphabet()` and `alphabet`
/// - transitions on the new symbols go to the sink state
///
pub fn complete_over<S: Symbol>(dfa: &Dfa<S>, alphabet: &Alphabet<S>) -> Dfa<S> {
    if alphabet.is_subset(dfa.alphabet()) {
        return complete(dfa);
    }
    let extended = Dfa::from_parts(
        dfa.alphabet().union(alphabet),
        dfa.states().clone(),
        dfa.start(),
        dfa.accepting().clone(),
        dfa.table().clone(),
    );
    complete(&extended)
}

///
/// Complement of a DFA
/// - the result is complete and accepts exactly the words over the
///   alphabet that `dfa` rejects
///
pub fn complement<S: Symbol>(dfa: &Dfa<S>) -> Dfa<S> {
    let completed = complete(dfa);
    let accepting = completed
        .states()
        .difference(completed.accepting())
        .copied()
        .collect();
    Dfa::from_parts(
        completed.alphabet().clone(),
        completed.states().clone(),
        completed.start(),
        accepting,
        completed.table().clone(),
    )
}
