// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Reversal of automata
//!
//! The reverse of an automaton accepts the mirror images of the words it
//! accepts. Every transition `q --a--> r` becomes `r --a--> q`, the
//! accepting states become start states, and the start states become
//! accepting. The result is in general nondeterministic: use
//! [determinize](crate::determinizer::determinize) to get a DFA.
//!

use crate::{
    alphabets::{Label, Symbol},
    dfa::Dfa,
    nfa::Nfa,
    states::StateSet,
    transition_tables::TransitionTable,
};

///
/// NFA for the reverse language of a DFA
/// - same alphabet and states as `dfa`
/// - the start states are the accepting states of `dfa`
/// - the only accepting state is the start state of `dfa`
///
pub fn reverse<S: Symbol>(dfa: &Dfa<S>) -> Nfa<S> {
    reverse_nfa(&dfa.to_nfa())
}

///
/// NFA for the reverse language of an NFA
/// - epsilon transitions are reversed like the others
///
pub fn reverse_nfa<S: Symbol>(nfa: &Nfa<S>) -> Nfa<S> {
    let mut table: TransitionTable<Label<S>, StateSet> = TransitionTable::new();
    for (q, label, r) in nfa.transitions() {
        table.entry(r, label.clone()).insert(q);
    }
    Nfa::from_parts(
        nfa.alphabet().clone(),
        nfa.states().clone(),
        nfa.accepting().clone(),
        nfa.start().clone(),
        table,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        determinizer::determinize,
        nfa::NfaBuilder,
        samples::one_string,
        states::{state_set, State},
    };

    #[test]
    fn test_reverse_one_string() {
        let ab = one_string("ab".chars(), "ab".chars());
        let ba = reverse(&ab);
        println!("Forward:\n{ab}");
        println!("Reversed:\n{ba}");
        assert_eq!(ba.start(), ab.accepting());
        assert_eq!(ba.accepting(), &state_set([0]));
        assert_eq!(ba.accepts("ba".chars()), Ok(true));
        assert_eq!(ba.accepts("ab".chars()), Ok(false));
        assert_eq!(ba.accepts("".chars()), Ok(false));

        let dfa = determinize(&ba);
        assert_eq!(dfa.accepts("ba".chars()), Ok(true));
        assert_eq!(dfa.accepts("ab".chars()), Ok(false));
        assert_eq!(dfa.accepts("b".chars()), Ok(false));
    }

    #[test]
    fn test_reverse_transitions() {
        let ab = one_string("ab".chars(), "ab".chars());
        let ba = reverse(&ab);
        let mut forward: Vec<_> = ab.transitions().map(|(q, a, r)| (r, *a, q)).collect();
        let mut backward: Vec<_> = ba
            .transitions()
            .filter_map(|(q, label, r)| label.symbol().map(|a| (q, *a, r)))
            .collect();
        forward.sort_unstable();
        backward.sort_unstable();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_reverse_nfa_with_epsilon() {
        // 0 -a-> 1 -ε-> 2 -b-> 3 accepts "ab"
        let mut builder = NfaBuilder::new("ab".chars());
        let q = builder.add_states(4);
        builder
            .mark_start(q[0])
            .mark_accepting(q[3])
            .add_transition(q[0], 'a', q[1])
            .add_epsilon_transition(q[1], q[2])
            .add_transition(q[2], 'b', q[3]);
        let nfa = builder.build().unwrap();
        let reversed = reverse_nfa(&nfa);
        assert!(reversed.has_epsilon_transitions());
        assert_eq!(reversed.start(), &state_set([3]));
        assert!(reversed.is_accepting(State::new(0)));
        assert_eq!(reversed.accepts("ba".chars()), Ok(true));
        assert_eq!(reversed.accepts("ab".chars()), Ok(false));

        let back = reverse_nfa(&reversed);
        assert_eq!(back.accepts("ab".chars()), Ok(true));
    }
}
