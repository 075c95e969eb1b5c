// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//
// Tests that combine several modules, and helpers they share
//

mod properties;

use std::collections::{HashMap, VecDeque};

use crate::{alphabets::Symbol, dfa::Dfa, nfa::Nfa, states::State};

//
// All words over symbols of length at most max_len, shortest first
//
fn words<S: Symbol>(symbols: &[S], max_len: usize) -> Vec<Vec<S>> {
    let mut result = vec![Vec::new()];
    let mut layer = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for w in &layer {
            for a in symbols {
                let mut longer: Vec<S> = w.clone();
                longer.push(a.clone());
                next.push(longer);
            }
        }
        result.extend(next.iter().cloned());
        layer = next;
    }
    result
}

//
// Word membership where running into a missing transition means rejection
//
fn dfa_member<S: Symbol>(dfa: &Dfa<S>, word: &[S]) -> bool {
    dfa.accepts(word).unwrap_or(false)
}

fn nfa_member<S: Symbol>(nfa: &Nfa<S>, word: &[S]) -> bool {
    nfa.accepts(word).unwrap_or(false)
}

//
// Relabel the states reachable from start in breadth-first order, visiting
// symbols in alphabet order. Two DFAs over the same alphabet are isomorphic
// (on their reachable parts) iff they have the same canonical form.
// Each row is (is_accepting, successor index for each symbol).
//
type CanonicalForm = Vec<(bool, Vec<Option<usize>>)>;

fn canonical_form<S: Symbol>(dfa: &Dfa<S>) -> CanonicalForm {
    let mut ids: HashMap<State, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    ids.insert(dfa.start(), 0);
    queue.push_back(dfa.start());
    let mut rows = Vec::new();
    while let Some(q) = queue.pop_front() {
        let mut successors = Vec::new();
        for a in dfa.alphabet() {
            let id = dfa.next(q, a).map(|r| {
                let n = ids.len();
                *ids.entry(r).or_insert_with(|| {
                    queue.push_back(r);
                    n
                })
            });
            successors.push(id);
        }
        rows.push((dfa.is_accepting(q), successors));
    }
    rows
}
