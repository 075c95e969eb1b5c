// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Queries on the language of a DFA
//!
//! Emptiness and shortest words are computed by breadth-first search
//! from the start state. Equivalence of two DFAs is reduced to emptiness
//! of their symmetric difference; when they differ, a shortest word that
//! distinguishes them is returned.
//!

use crate::{
    alphabets::Symbol,
    completion::complete_over,
    dfa::Dfa,
    errors::*,
    labeled_queues::LabeledQueue,
    minimizer::reachable,
    products::symmetric_difference,
};

///
/// Check whether a DFA accepts no word
///
pub fn is_empty<S: Symbol>(dfa: &Dfa<S>) -> bool {
    reachable(dfa).iter().all(|&q| !dfa.is_accepting(q))
}

///
/// A shortest word accepted by a DFA
/// - return None if the language is empty
/// - among the shortest words, the one returned is the first in the
///   lexicographic order of symbols
///
pub fn shortest_accepted<S: Symbol>(dfa: &Dfa<S>) -> Option<Vec<S>> {
    let mut queue = LabeledQueue::new(dfa.start());
    while let Some(q) = queue.pop() {
        if dfa.is_accepting(q) {
            return queue.path(&q);
        }
        for a in dfa.alphabet() {
            if let Some(r) = dfa.next(q, a) {
                queue.push(&q, a.clone(), r);
            }
        }
    }
    None
}

///
/// A shortest word accepted by exactly one of a1 and a2
/// - both DFAs are completed over the union of their alphabets first
/// - return None if they accept the same language
///
pub fn counterexample<S: Symbol>(a1: &Dfa<S>, a2: &Dfa<S>) -> Result<Option<Vec<S>>> {
    let alphabet = a1.alphabet().union(a2.alphabet());
    let left = complete_over(a1, &alphabet);
    let right = complete_over(a2, &alphabet);
    let diff = symmetric_difference(&left, &right)?;
    Ok(shortest_accepted(&diff))
}

///
/// Check whether two DFAs accept the same language
///
pub fn equivalent<S: Symbol>(a1: &Dfa<S>, a2: &Dfa<S>) -> Result<bool> {
    Ok(counterexample(a1, a2)?.is_none())
}
