// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Minimization of deterministic finite-state automata
//!
//! [minimize] computes the Myhill-Nerode quotient of a DFA: unreachable
//! states are removed and equivalent states are merged. The refinement
//! itself is done by a [Minimizer] that works on dense integer indices.
//!

use std::{collections::HashMap, fmt::Display};

use crate::{
    alphabets::Symbol,
    bfs_queues::BfsQueue,
    dfa::Dfa,
    fast_sets::FastSet,
    partitions::Partition,
    states::{State, StateSet},
    transition_tables::TransitionTable,
};

//
// The automaton is defined by
// - a set of states [0 .. N-1]
// - an alphabet [0 .. M-1]
// - a total transition function delta: [0 .. N-1] x [0 .. M-1] -> [0 .. N-1]
// - a set of final states
//
// Hopcroft's algorithm
// --------------------
// - the partition starts with two classes: final and non-final states
// - a splitter is a pair (C, a) where C is a class and a is a symbol
// - refining with (C, a): let X = { x | delta(x, a) is in C }.
//   Every class D that intersects X without being included in X is split
//   into D1 = D ∩ X and D2 = D - X.
// - after D is split into D1 and D2, for every symbol a:
//   - if (D, a) is waiting, (D2, a) is added to the waiting set
//     ((D, a) is still waiting and D is now D1)
//   - otherwise the smallest of (D1, a) and (D2, a) is added
// - stop when no splitter is waiting or when every class is a singleton.
//
// Data structures
// ---------------
// - inverse[y * M + a] lists the states x such that delta(x, a) = y
// - the waiting set is a FastSet of codes C * M + a (class ids are less
//   than N so codes are less than N * M)
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Splitter {
    class: u32,
    symbol: u32,
}

impl Display for Splitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Splitter(class {}, symbol {})", self.class, self.symbol)
    }
}

///
/// Partition refinement on a DFA given by dense indices
///
#[derive(Debug, Clone)]
pub struct Minimizer {
    num_states: u32,
    alphabet_size: u32,
    inverse: Vec<Vec<u32>>,
    partition: Partition,
    waiting: FastSet,
    // scratch sets, cleared before each refinement step
    pred: FastSet,
    candidates: FastSet,
}

impl Display for Minimizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Minimizer: {} states, {} symbols",
            self.num_states, self.alphabet_size
        )?;
        write!(f, "{}", self.partition)?;
        write!(f, "waiting:")?;
        for code in &self.waiting {
            let s = self.decode(code);
            write!(f, " ({}, {})", s.class, s.symbol)?;
        }
        writeln!(f)
    }
}

impl Minimizer {
    ///
    /// Prepare the refinement
    /// - states are [0 .. num_states-1] and symbols are [0 .. alphabet_size-1]
    /// - delta must be total on these ranges
    /// - the initial partition separates final and non-final states
    ///
    pub fn new<D, F>(num_states: u32, alphabet_size: u32, delta: D, is_final: F) -> Self
    where
        D: Fn(u32, u32) -> u32,
        F: Fn(u32) -> bool,
    {
        let m = alphabet_size as usize;
        let mut inverse = vec![Vec::new(); num_states as usize * m];
        for x in 0..num_states {
            for a in 0..alphabet_size {
                let y = delta(x, a);
                debug_assert!(y < num_states);
                inverse[y as usize * m + a as usize].push(x);
            }
        }

        let mut partition = Partition::new(num_states);
        let mut waiting = FastSet::new(num_states * alphabet_size);
        if num_states > 0 {
            // class 0 = final states, class 1 = non-final states
            if let Some(other) = partition.split(0, &is_final) {
                let smaller = if partition.class_size(0) <= partition.class_size(other) {
                    0
                } else {
                    other
                };
                for a in 0..alphabet_size {
                    waiting.insert(smaller * alphabet_size + a);
                }
            }
        }

        Minimizer {
            num_states,
            alphabet_size,
            inverse,
            partition,
            waiting,
            pred: FastSet::new(num_states),
            candidates: FastSet::new(num_states),
        }
    }

    fn encode(&self, s: Splitter) -> u32 {
        s.class * self.alphabet_size + s.symbol
    }

    fn decode(&self, code: u32) -> Splitter {
        Splitter {
            class: code / self.alphabet_size,
            symbol: code % self.alphabet_size,
        }
    }

    fn pick_splitter(&mut self) -> Option<Splitter> {
        let code = self.waiting.pop()?;
        Some(self.decode(code))
    }

    //
    // Update the waiting set after class d was split into (d, e)
    //
    fn update_waiting(&mut self, d: u32, e: u32) {
        let smaller = if self.partition.class_size(d) <= self.partition.class_size(e) {
            d
        } else {
            e
        };
        for a in 0..self.alphabet_size {
            let old = self.encode(Splitter { class: d, symbol: a });
            let added = if self.waiting.contains(old) {
                Splitter { class: e, symbol: a }
            } else {
                Splitter {
                    class: smaller,
                    symbol: a,
                }
            };
            let code = self.encode(added);
            self.waiting.insert(code);
        }
    }

    //
    // Collect the predecessors of s.class via s.symbol into self.pred,
    // and the classes they belong to that could be split into self.candidates.
    //
    fn collect_predecessors(&mut self, s: Splitter) {
        self.pred.clear();
        self.candidates.clear();
        let m = self.alphabet_size as usize;
        for &y in self.partition.class_members(s.class) {
            for &x in &self.inverse[y as usize * m + s.symbol as usize] {
                self.pred.insert(x);
            }
        }
        for x in &self.pred {
            let c = self.partition.class_of(x);
            if self.partition.class_size(c) > 1 {
                self.candidates.insert(c);
            }
        }
    }

    //
    // Refine the partition with splitter s
    // - return the number of classes that were split
    //
    fn refine_with_splitter(&mut self, s: Splitter) -> usize {
        self.collect_predecessors(s);
        let candidates: Vec<u32> = self.candidates.iter().collect();
        let mut splits = 0;
        for d in candidates {
            let pred = &self.pred;
            if let Some(e) = self.partition.split(d, |x| pred.contains(x)) {
                self.update_waiting(d, e);
                splits += 1;
            }
        }
        splits
    }

    fn is_discrete(&self) -> bool {
        self.partition.num_classes() >= self.num_states
    }

    ///
    /// Refine the partition until fix point
    /// - return the result (i.e., the equivalence classes of states)
    ///
    pub fn refine(&mut self) -> &Partition {
        while !self.is_discrete() {
            match self.pick_splitter() {
                Some(s) => {
                    self.refine_with_splitter(s);
                }
                None => break,
            }
        }
        &self.partition
    }

    ///
    /// Same as [refine](Self::refine) but print the partition after each step
    ///
    pub fn refine_and_trace(&mut self) -> &Partition {
        let mut round = 0;
        println!("Initial partition");
        println!("{self}");
        while !self.is_discrete() {
            match self.pick_splitter() {
                Some(s) => {
                    round += 1;
                    println!("--- round {round} ---");
                    println!("{s}");
                    let splits = self.refine_with_splitter(s);
                    println!("{splits} class(es) split");
                    println!("{}", self.partition);
                }
                None => break,
            }
        }
        println!("Final partition: {} class(es)", self.partition.num_classes());
        &self.partition
    }
}

///
/// States reachable from the start state
///
pub fn reachable<S: Symbol>(dfa: &Dfa<S>) -> StateSet {
    let mut queue = BfsQueue::new();
    queue.push(dfa.start());
    while let Some((_, q)) = queue.pop() {
        for (_, &target) in dfa.table().row(q) {
            queue.push(target);
        }
    }
    queue.into_seen().into_iter().collect()
}

///
/// Minimal DFA for the language of `dfa`
/// - unreachable states are removed and equivalent states are merged
/// - the states of the result are numbered 0 to n-1 in breadth-first order
///   from the start state (so the start state is 0)
/// - missing transitions go to an implicit dead state: states equivalent to
///   it are removed and transitions into them are left undefined
///
/// The result is complete if and only if `dfa` is complete (up to
/// unreachable states). Two DFAs for the same language over the same
/// alphabet are minimized to identical automata.
///
pub fn minimize<S: Symbol>(dfa: &Dfa<S>) -> Dfa<S> {
    let live: Vec<State> = reachable(dfa).into_iter().collect();
    let index: HashMap<State, u32> = live
        .iter()
        .enumerate()
        .map(|(i, &q)| (q, i as u32))
        .collect();
    let symbols: Vec<&S> = dfa.alphabet().iter().collect();
    let n = live.len() as u32;
    let m = symbols.len();

    // dense transition table; n stands for the implicit dead state
    let mut delta: Vec<u32> = Vec::with_capacity(live.len() * m);
    for &q in &live {
        for &a in &symbols {
            let target = dfa.next(q, a).and_then(|r| index.get(&r).copied());
            delta.push(target.unwrap_or(n));
        }
    }
    let has_dead = delta.contains(&n);
    let num_states = if has_dead { n + 1 } else { n };
    let successor = |x: u32, a: u32| {
        if x == n {
            n
        } else {
            delta[x as usize * m + a as usize]
        }
    };
    let is_final = |x: u32| x < n && dfa.is_accepting(live[x as usize]);

    let mut minimizer = Minimizer::new(num_states, m as u32, &successor, &is_final);
    let partition = minimizer.refine();
    let dead_class = if has_dead {
        Some(partition.class_of(n))
    } else {
        None
    };

    // number the classes in breadth-first order from the start class
    let mut queue = BfsQueue::new();
    let mut table = TransitionTable::new();
    let mut accepting = StateSet::new();
    let start_class = index
        .get(&dfa.start())
        .map_or(0, |&x| partition.class_of(x));
    if Some(start_class) != dead_class {
        queue.push(start_class);
    }
    while let Some((i, c)) = queue.pop() {
        let source = State::new(i as u32);
        let x = partition.representative(c);
        if is_final(x) {
            accepting.insert(source);
        }
        for (a, &symbol) in symbols.iter().enumerate() {
            let d = partition.class_of(successor(x, a as u32));
            if Some(d) != dead_class {
                let (j, _) = queue.push(d);
                table.set(source, symbol.clone(), State::new(j as u32));
            }
        }
    }

    // the language is empty and the start state is dead: keep a single state
    let num_classes = queue.num_seen().max(1) as u32;
    let states: StateSet = (0..num_classes).map(State::new).collect();
    Dfa::from_parts(
        dfa.alphabet().clone(),
        states,
        State::new(0),
        accepting,
        table,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{completion::complete, states::state_set};

    //
    // Example DFA from the Hopcroft-Ullman textbook (states a to h = 0 to 7)
    // over {0, 1}; the minimal DFA has 5 states and d is unreachable.
    //
    fn textbook_dfa() -> Dfa<char> {
        let table = [
            (0, 1, 5),
            (1, 6, 2),
            (2, 0, 2),
            (3, 2, 6),
            (4, 7, 5),
            (5, 2, 6),
            (6, 6, 4),
            (7, 6, 2),
        ];
        let mut transitions = Vec::new();
        for (q, on0, on1) in table {
            transitions.push((State::new(q), '0', State::new(on0)));
            transitions.push((State::new(q), '1', State::new(on1)));
        }
        Dfa::new(
            "01".chars(),
            state_set(0..8),
            State::new(0),
            state_set([2]),
            transitions,
        )
        .unwrap()
    }

    #[test]
    fn test_reachable() {
        let dfa = textbook_dfa();
        let live = reachable(&dfa);
        // d is unreachable
        assert_eq!(live, state_set([0, 1, 2, 4, 5, 6, 7]));
        assert!(!live.contains(&State::new(3)));
    }

    #[test]
    fn test_refine_and_trace() {
        let dfa = textbook_dfa();
        let delta = |x: u32, a: u32| {
            let symbol = if a == 0 { '0' } else { '1' };
            dfa.next(State::new(x), &symbol).map_or(x, |r| r.id())
        };
        let is_final = |x: u32| dfa.is_accepting(State::new(x));
        let mut minimizer = Minimizer::new(8, 2, delta, is_final);
        let partition = minimizer.refine_and_trace();
        // {a, e} {b, h} {c} {d, f} {g}
        assert_eq!(partition.num_classes(), 5);
        let same = |x: u32, y: u32| partition.class_of(x) == partition.class_of(y);
        assert!(same(0, 4));
        assert!(same(1, 7));
        assert!(same(3, 5));
        assert!(!same(0, 6));
        assert!(!same(2, 3));
    }

    #[test]
    fn test_minimize() {
        let dfa = textbook_dfa();
        let min = minimize(&dfa);
        println!("Input:\n{dfa}");
        println!("Minimized:\n{min}");
        assert_eq!(min.num_states(), 5);
        assert!(min.is_complete());
        assert_eq!(min.start(), State::new(0));
        for word in ["01", "101", "0010", "", "1", "011", "0101"] {
            assert_eq!(
                min.accepts(word.chars()),
                dfa.accepts(word.chars()),
                "word {word:?}"
            );
        }

        let again = minimize(&min);
        assert_eq!(again.states(), min.states());
        assert_eq!(again.accepting(), min.accepting());
        let t1: Vec<_> = min.transitions().collect();
        for (q, a, r) in t1 {
            assert_eq!(again.next(q, a), Some(r));
        }
    }

    #[test]
    fn test_minimize_partial() {
        // accepts a*b with redundant states and no sink
        let dfa = Dfa::new(
            "ab".chars(),
            state_set(0..4),
            State::new(0),
            state_set([2, 3]),
            vec![
                (State::new(0), 'a', State::new(1)),
                (State::new(0), 'b', State::new(2)),
                (State::new(1), 'a', State::new(0)),
                (State::new(1), 'b', State::new(3)),
            ],
        )
        .unwrap();
        let min = minimize(&dfa);
        println!("{min}");
        assert_eq!(min.num_states(), 2);
        assert!(!min.is_complete());
        assert_eq!(min.num_transitions(), 2);
        assert_eq!(min.accepts("aaab".chars()), Ok(true));
        assert!(min.accepts("ba".chars()).is_err());

        // completing first gives the same states plus a sink
        let min_complete = minimize(&complete(&dfa));
        assert_eq!(min_complete.num_states(), 3);
        assert!(min_complete.is_complete());
    }

    #[test]
    fn test_minimize_empty_language() {
        let dfa = Dfa::new(
            "ab".chars(),
            state_set(0..3),
            State::new(0),
            StateSet::new(),
            vec![
                (State::new(0), 'a', State::new(1)),
                (State::new(1), 'b', State::new(2)),
            ],
        )
        .unwrap();
        let min = minimize(&dfa);
        assert_eq!(min.num_states(), 1);
        assert!(min.accepting().is_empty());
        assert_eq!(min.num_transitions(), 0);
    }
}
