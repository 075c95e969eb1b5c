// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Subset construction
//!
//! Every state of the DFA built by [determinize] stands for an
//! epsilon-closed set of NFA states. The sets are discovered breadth-first
//! from the closure of the NFA's start states and numbered in discovery
//! order, so the DFA's start state is 0.
//!
//! Only reachable subsets are built. The empty subset, if it's reached,
//! becomes a non-accepting sink, which makes the result complete.
//!

use crate::{
    alphabets::Symbol,
    bfs_queues::BfsQueue,
    dfa::Dfa,
    nfa::Nfa,
    states::{State, StateSet},
    transition_tables::TransitionTable,
};

///
/// Deterministic automaton for the language of an NFA
/// - the result is complete and has the same alphabet as `nfa`
/// - see [determinize_with_subsets] to get the subset of NFA states
///   that corresponds to each DFA state
///
pub fn determinize<S: Symbol>(nfa: &Nfa<S>) -> Dfa<S> {
    determinize_with_subsets(nfa).0
}

///
/// Subset construction that also returns the subsets
/// - the i-th element of the returned vector is the set of NFA states
///   that DFA state i stands for
///
pub fn determinize_with_subsets<S: Symbol>(nfa: &Nfa<S>) -> (Dfa<S>, Vec<StateSet>) {
    let symbols: Vec<&S> = nfa.alphabet().iter().collect();
    let mut queue = BfsQueue::new();
    queue.push(nfa.epsilon_closure(nfa.start()));

    let mut accepting = StateSet::new();
    let mut table = TransitionTable::new();
    while let Some((i, subset)) = queue.pop() {
        let source = State::new(i as u32);
        if nfa.has_accepting(&subset) {
            accepting.insert(source);
        }
        for &a in &symbols {
            let (j, _) = queue.push(nfa.step(&subset, a));
            table.set(source, a.clone(), State::new(j as u32));
        }
    }

    let subsets: Vec<StateSet> = queue.into_seen().into_iter().collect();
    let states: StateSet = (0..subsets.len() as u32).map(State::new).collect();
    let dfa = Dfa::from_parts(
        nfa.alphabet().clone(),
        states,
        State::new(0),
        accepting,
        table,
    );
    (dfa, subsets)
}
