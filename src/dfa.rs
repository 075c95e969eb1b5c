// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Deterministic finite-state automata
//!
//! A [Dfa] consists of an alphabet, a set of states, a start state, a set of
//! accepting states, and a transition table that maps a pair (state, symbol) to
//! at most one state. The table may have holes: a DFA is *complete* if it
//! has a transition for every state and every symbol of the alphabet.
//!
//! A [Dfa] is immutable once built. All operations that transform an automaton
//! (see [completion](crate::completion), [products](crate::products),
//! [minimizer](crate::minimizer)) construct a new [Dfa].
//!

use std::{borrow::Borrow, fmt::Display};

use crate::{
    alphabets::{Alphabet, Label, Symbol},
    errors::*,
    nfa::Nfa,
    states::{State, StateAllocator, StateSet},
    transition_tables::TransitionTable,
};

///
/// Deterministic finite-state automaton
///
#[derive(Debug, Clone)]
pub struct Dfa<S> {
    alphabet: Alphabet<S>,
    states: StateSet,
    start: State,
    accepting: StateSet,
    table: TransitionTable<S, State>,
}

impl<S: Symbol> Dfa<S> {
    ///
    /// Build a DFA from its components
    ///
    /// - `transitions` is a list of triples (source, symbol, target)
    ///
    /// Fails with [Error::MalformedAutomaton] if
    /// - `start` is not in `states`
    /// - an accepting state is not in `states`
    /// - the source or target of a transition is not in `states`
    /// - a transition symbol is not in the alphabet
    /// - two transitions with the same source and symbol have distinct targets.
    ///
    pub fn new(
        alphabet: impl IntoIterator<Item = S>,
        states: impl IntoIterator<Item = State>,
        start: State,
        accepting: impl IntoIterator<Item = State>,
        transitions: impl IntoIterator<Item = (State, S, State)>,
    ) -> Result<Self> {
        let alphabet: Alphabet<S> = alphabet.into_iter().collect();
        let states: StateSet = states.into_iter().collect();
        if !states.contains(&start) {
            return Err(Malformation::StartNotInStates(start).into());
        }
        let accepting: StateSet = accepting.into_iter().collect();
        if let Some(&q) = accepting.difference(&states).next() {
            return Err(Malformation::AcceptingNotInStates(q).into());
        }

        let mut table = TransitionTable::new();
        for (source, symbol, target) in transitions {
            if !states.contains(&source) {
                return Err(Malformation::SourceNotInStates(source).into());
            }
            if !states.contains(&target) {
                return Err(Malformation::TargetNotInStates(target).into());
            }
            if !alphabet.contains(&symbol) {
                return Err(Malformation::SymbolNotInAlphabet { state: source }.into());
            }
            if let Some(previous) = table.set(source, symbol, target) {
                if previous != target {
                    return Err(Malformation::ConflictingTransition { state: source }.into());
                }
            }
        }

        Ok(Dfa {
            alphabet,
            states,
            start,
            accepting,
            table,
        })
    }

    //
    // Assemble a DFA from parts that are known to be consistent.
    // Used by the algorithms that build automata.
    //
    pub(crate) fn from_parts(
        alphabet: Alphabet<S>,
        states: StateSet,
        start: State,
        accepting: StateSet,
        table: TransitionTable<S, State>,
    ) -> Self {
        debug_assert!(states.contains(&start));
        debug_assert!(accepting.is_subset(&states));
        debug_assert!(table
            .iter()
            .all(|(q, a, r)| states.contains(&q) && states.contains(r) && alphabet.contains(a)));
        Dfa {
            alphabet,
            states,
            start,
            accepting,
            table,
        }
    }

    /// Alphabet
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Set of states
    pub fn states(&self) -> &StateSet {
        &self.states
    }

    /// Number of states
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Start state
    pub fn start(&self) -> State {
        self.start
    }

    /// Set of accepting states
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// Check whether a state is accepting
    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    /// Transition table
    pub(crate) fn table(&self) -> &TransitionTable<S, State> {
        &self.table
    }

    ///
    /// Successor of a state for a symbol
    /// - return None if there's no transition
    ///
    pub fn next(&self, state: State, symbol: &S) -> Option<State> {
        self.table.get(state, symbol).copied()
    }

    ///
    /// All transitions as triples (source, symbol, target)
    /// - the order is not specified
    ///
    pub fn transitions(&self) -> impl Iterator<Item = (State, &S, State)> {
        self.table.iter().map(|(q, a, &r)| (q, a, r))
    }

    ///
    /// Number of transitions
    ///
    pub fn num_transitions(&self) -> usize {
        self.table.len()
    }

    ///
    /// Pairs (state, symbol) that don't have a transition
    ///
    pub fn missing_transitions(&self) -> impl Iterator<Item = (State, &S)> {
        self.states.iter().flat_map(move |&q| {
            self.alphabet
                .iter()
                .filter(move |a| !self.table.contains(q, *a))
                .map(move |a| (q, a))
        })
    }

    ///
    /// Check whether every state has a transition for every symbol
    ///
    pub fn is_complete(&self) -> bool {
        self.missing_transitions().next().is_none()
    }

    ///
    /// Run the automaton on a word
    /// - return the state reached after reading all symbols
    ///
    /// Fails with
    /// - [Error::UnknownSymbol] if a symbol is not in the alphabet
    /// - [Error::IncompleteTransition] if the run reaches a state that has no
    ///   transition for the next symbol.
    ///
    pub fn run<I>(&self, word: I) -> Result<State>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut current = self.start;
        for (position, symbol) in word.into_iter().enumerate() {
            let symbol: &S = symbol.borrow();
            if !self.alphabet.contains(symbol) {
                return Err(Error::UnknownSymbol { position });
            }
            current = match self.table.get(current, symbol) {
                Some(&next) => next,
                None => {
                    return Err(Error::IncompleteTransition {
                        state: current,
                        position,
                    })
                }
            };
        }
        Ok(current)
    }

    ///
    /// Check whether the automaton accepts a word
    /// - fails in the same cases as [run](Self::run)
    ///
    pub fn accepts<I>(&self, word: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        self.run(word).map(|s| self.is_accepting(s))
    }

    ///
    /// Same automaton viewed as an NFA
    ///
    pub fn to_nfa(&self) -> Nfa<S> {
        let mut table: TransitionTable<Label<S>, StateSet> = TransitionTable::new();
        for (q, a, r) in self.transitions() {
            table.entry(q, Label::Symbol(a.clone())).insert(r);
        }
        Nfa::from_parts(
            self.alphabet.clone(),
            self.states.clone(),
            StateSet::from([self.start]),
            self.accepting.clone(),
            table,
        )
    }
}

impl<S: Symbol> Display for Dfa<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn plural(n: usize) -> &'static str {
            if n == 1 {
                ""
            } else {
                "s"
            }
        }

        writeln!(f, "{} state{}", self.num_states(), plural(self.num_states()))?;
        writeln!(f, "alphabet: {}", self.alphabet)?;
        writeln!(f, "initial state: {}", self.start)?;
        write!(f, "final state{}:", plural(self.accepting.len()))?;
        for s in &self.accepting {
            write!(f, " {s}")?;
        }
        writeln!(f)?;
        writeln!(f, "transitions:")?;
        for &q in &self.states {
            for a in &self.alphabet {
                if let Some(r) = self.next(q, a) {
                    writeln!(f, "  \u{03B4}({q}, {a:?}) = {r}")?;
                }
            }
        }
        Ok(())
    }
}

///
/// Incremental construction of a DFA
///
/// States are allocated by the builder. The automaton is validated by
/// [build](Self::build).
///
#[derive(Debug, Clone)]
pub struct DfaBuilder<S> {
    alphabet: Alphabet<S>,
    allocator: StateAllocator,
    states: StateSet,
    start: Option<State>,
    accepting: StateSet,
    transitions: Vec<(State, S, State)>,
}

impl<S: Symbol> DfaBuilder<S> {
    ///
    /// New builder for the given alphabet
    ///
    pub fn new(alphabet: impl IntoIterator<Item = S>) -> Self {
        DfaBuilder {
            alphabet: alphabet.into_iter().collect(),
            allocator: StateAllocator::new(),
            states: StateSet::new(),
            start: None,
            accepting: StateSet::new(),
            transitions: Vec::new(),
        }
    }

    ///
    /// Add a fresh state and return it
    ///
    pub fn add_state(&mut self) -> State {
        let s = self.allocator.fresh();
        self.states.insert(s);
        s
    }

    ///
    /// Add n fresh states
    ///
    pub fn add_states(&mut self, n: usize) -> Vec<State> {
        (0..n).map(|_| self.add_state()).collect()
    }

    ///
    /// Set the start state
    ///
    pub fn set_start(&mut self, state: State) -> &mut Self {
        self.start = Some(state);
        self
    }

    ///
    /// Mark a state as accepting
    ///
    pub fn mark_accepting(&mut self, state: State) -> &mut Self {
        self.accepting.insert(state);
        self
    }

    ///
    /// Add a transition
    ///
    pub fn add_transition(&mut self, source: State, symbol: S, target: State) -> &mut Self {
        self.transitions.push((source, symbol, target));
        self
    }

    ///
    /// Construct the DFA
    /// - fails if no start state was set or if the automaton is malformed
    ///   (see [Dfa::new])
    ///
    pub fn build(&self) -> Result<Dfa<S>> {
        let start = self.start.ok_or(Malformation::MissingStart)?;
        Dfa::new(
            self.alphabet.iter().cloned(),
            self.states.iter().copied(),
            start,
            self.accepting.iter().copied(),
            self.transitions.iter().cloned(),
        )
    }
}
