// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Nondeterministic finite-state automata
//!
//! An [Nfa] has a set of start states and a transition table that maps a pair
//! (state, label) to a set of states. A label is either a symbol of the
//! alphabet or [Label::Epsilon].
//!
//! The automaton is simulated on sets of states: [epsilon_closure](Nfa::epsilon_closure)
//! saturates a set with epsilon transitions and [next](Nfa::next) computes the
//! closed set of successors for one symbol.
//!

use std::{borrow::Borrow, fmt::Display};

use crate::{
    alphabets::{Alphabet, Label, Symbol},
    errors::*,
    states::{State, StateAllocator, StateSet},
    transition_tables::TransitionTable,
};

///
/// Nondeterministic finite-state automaton with epsilon transitions
///
#[derive(Debug, Clone)]
pub struct Nfa<S> {
    alphabet: Alphabet<S>,
    states: StateSet,
    start: StateSet,
    accepting: StateSet,
    table: TransitionTable<Label<S>, StateSet>,
}

impl<S: Symbol> Nfa<S> {
    ///
    /// Build an NFA from its components
    ///
    /// - `transitions` is a list of triples (source, label, target)
    ///
    /// Fails with [Error::MalformedAutomaton] if a start state, an accepting
    /// state, or the source or target of a transition is not in `states`, or if
    /// a transition is labeled by a symbol outside the alphabet.
    ///
    pub fn new(
        alphabet: impl IntoIterator<Item = S>,
        states: impl IntoIterator<Item = State>,
        start: impl IntoIterator<Item = State>,
        accepting: impl IntoIterator<Item = State>,
        transitions: impl IntoIterator<Item = (State, Label<S>, State)>,
    ) -> Result<Self> {
        let alphabet: Alphabet<S> = alphabet.into_iter().collect();
        let states: StateSet = states.into_iter().collect();
        let start: StateSet = start.into_iter().collect();
        if let Some(&q) = start.difference(&states).next() {
            return Err(Malformation::StartNotInStates(q).into());
        }
        let accepting: StateSet = accepting.into_iter().collect();
        if let Some(&q) = accepting.difference(&states).next() {
            return Err(Malformation::AcceptingNotInStates(q).into());
        }

        let mut table: TransitionTable<Label<S>, StateSet> = TransitionTable::new();
        for (source, label, target) in transitions {
            if !states.contains(&source) {
                return Err(Malformation::SourceNotInStates(source).into());
            }
            if !states.contains(&target) {
                return Err(Malformation::TargetNotInStates(target).into());
            }
            if let Label::Symbol(a) = &label {
                if !alphabet.contains(a) {
                    return Err(Malformation::SymbolNotInAlphabet { state: source }.into());
                }
            }
            table.entry(source, label).insert(target);
        }

        Ok(Nfa {
            alphabet,
            states,
            start,
            accepting,
            table,
        })
    }

    pub(crate) fn from_parts(
        alphabet: Alphabet<S>,
        states: StateSet,
        start: StateSet,
        accepting: StateSet,
        table: TransitionTable<Label<S>, StateSet>,
    ) -> Self {
        debug_assert!(start.is_subset(&states));
        debug_assert!(accepting.is_subset(&states));
        Nfa {
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

    /// Set of start states
    pub fn start(&self) -> &StateSet {
        &self.start
    }

    /// Set of accepting states
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// Check whether a state is accepting
    pub fn is_accepting(&self, state: State) -> bool {
        self.accepting.contains(&state)
    }

    ///
    /// Check whether a set of states contains an accepting state
    ///
    pub fn has_accepting(&self, set: &StateSet) -> bool {
        !set.is_disjoint(&self.accepting)
    }

    ///
    /// Successors of a state for a label (empty set if none)
    ///
    pub fn targets(&self, state: State, label: &Label<S>) -> StateSet {
        self.table.get(state, label).cloned().unwrap_or_default()
    }

    ///
    /// All transitions as triples (source, label, target)
    /// - the order is not specified
    ///
    pub fn transitions(&self) -> impl Iterator<Item = (State, &Label<S>, State)> {
        self.table
            .iter()
            .flat_map(|(q, label, targets)| targets.iter().map(move |&r| (q, label, r)))
    }

    ///
    /// Check whether the automaton has epsilon transitions
    ///
    pub fn has_epsilon_transitions(&self) -> bool {
        self.table.iter().any(|(_, label, _)| label.is_epsilon())
    }

    ///
    /// Epsilon closure of a set of states
    /// - smallest superset of `set` that's closed under epsilon transitions
    ///
    pub fn epsilon_closure(&self, set: &StateSet) -> StateSet {
        let mut closure = set.clone();
        let mut stack: Vec<State> = set.iter().copied().collect();
        while let Some(q) = stack.pop() {
            if let Some(targets) = self.table.get(q, &Label::Epsilon) {
                for &r in targets {
                    // visit r only once: this terminates on epsilon cycles
                    if closure.insert(r) {
                        stack.push(r);
                    }
                }
            }
        }
        closure
    }

    //
    // Successors of set for a symbol, then epsilon-closed.
    // The symbol is assumed to be in the alphabet.
    //
    pub(crate) fn step(&self, set: &StateSet, symbol: &S) -> StateSet {
        let label = Label::Symbol(symbol.clone());
        let mut reached = StateSet::new();
        for &q in set {
            if let Some(targets) = self.table.get(q, &label) {
                reached.extend(targets.iter().copied());
            }
        }
        self.epsilon_closure(&reached)
    }

    ///
    /// States reachable from `set` by reading `symbol`
    /// - this is the epsilon closure of the union of all successors of
    ///   elements of `set` for `symbol`
    /// - fails with [Error::UnknownSymbol] if `symbol` is not in the alphabet
    ///
    pub fn next(&self, set: &StateSet, symbol: &S) -> Result<StateSet> {
        if !self.alphabet.contains(symbol) {
            return Err(Error::UnknownSymbol { position: 0 });
        }
        Ok(self.step(set, symbol))
    }

    ///
    /// Run the automaton on a word from its start states
    /// - return the set of states reached
    ///
    pub fn run<I>(&self, word: I) -> Result<StateSet>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        self.run_from(&self.start, word)
    }

    ///
    /// Run the automaton on a word from a given set of states
    /// - the initial set is epsilon-closed first
    /// - fails with [Error::UnknownSymbol] if a symbol is not in the alphabet
    ///
    pub fn run_from<I>(&self, start: &StateSet, word: I) -> Result<StateSet>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut current = self.epsilon_closure(start);
        for (position, symbol) in word.into_iter().enumerate() {
            let symbol: &S = symbol.borrow();
            if !self.alphabet.contains(symbol) {
                return Err(Error::UnknownSymbol { position });
            }
            current = self.step(&current, symbol);
        }
        Ok(current)
    }

    ///
    /// Check whether the automaton accepts a word
    ///
    pub fn accepts<I>(&self, word: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        self.run(word).map(|set| self.has_accepting(&set))
    }
}

impl<S: Symbol> Display for Nfa<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_set(f: &mut std::fmt::Formatter<'_>, set: &StateSet) -> std::fmt::Result {
            write!(f, "{{")?;
            for s in set {
                write!(f, " {s}")?;
            }
            write!(f, " }}")
        }

        writeln!(f, "{} states", self.num_states())?;
        writeln!(f, "alphabet: {}", self.alphabet)?;
        write!(f, "initial states: ")?;
        write_set(f, &self.start)?;
        writeln!(f)?;
        write!(f, "final states: ")?;
        write_set(f, &self.accepting)?;
        writeln!(f)?;
        writeln!(f, "transitions:")?;
        let mut labels = vec![Label::Epsilon];
        labels.extend(self.alphabet.iter().cloned().map(Label::Symbol));
        for &q in &self.states {
            for label in &labels {
                if let Some(targets) = self.table.get(q, label) {
                    write!(f, "  \u{03B4}({q}, {label}) = ")?;
                    write_set(f, targets)?;
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

///
/// Incremental construction of an NFA
///
#[derive(Debug, Clone)]
pub struct NfaBuilder<S> {
    alphabet: Alphabet<S>,
    allocator: StateAllocator,
    states: StateSet,
    start: StateSet,
    accepting: StateSet,
    transitions: Vec<(State, Label<S>, State)>,
}

impl<S: Symbol> NfaBuilder<S> {
    ///
    /// New builder for the given alphabet
    ///
    pub fn new(alphabet: impl IntoIterator<Item = S>) -> Self {
        NfaBuilder {
            alphabet: alphabet.into_iter().collect(),
            allocator: StateAllocator::new(),
            states: StateSet::new(),
            start: StateSet::new(),
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
    /// Add a start state
    ///
    pub fn mark_start(&mut self, state: State) -> &mut Self {
        self.start.insert(state);
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
    /// Add a transition on a symbol
    ///
    pub fn add_transition(&mut self, source: State, symbol: S, target: State) -> &mut Self {
        self.transitions.push((source, Label::Symbol(symbol), target));
        self
    }

    ///
    /// Add an epsilon transition
    ///
    pub fn add_epsilon_transition(&mut self, source: State, target: State) -> &mut Self {
        self.transitions.push((source, Label::Epsilon, target));
        self
    }

    ///
    /// Construct the NFA (see [Nfa::new])
    ///
    pub fn build(&self) -> Result<Nfa<S>> {
        Nfa::new(
            self.alphabet.iter().cloned(),
            self.states.iter().copied(),
            self.start.iter().copied(),
            self.accepting.iter().copied(),
            self.transitions.iter().cloned(),
        )
    }
}
