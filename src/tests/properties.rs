// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::{
    completion::{complement, complete},
    determinizer::determinize,
    dfa::DfaBuilder,
    errors::Error,
    languages::equivalent,
    minimizer::{minimize, reachable},
    products::{difference, intersection, union},
    reversal::reverse,
    samples::one_string,
};

const CATDOG: &str = "catdog";

fn chars(w: &str) -> Vec<char> {
    w.chars().collect()
}

//
// Partial DFA over {a, b} with an unreachable part:
//   0 -a-> 1, 1 -b-> 2 (final), 2 -a-> 1, 3 -a-> 4 (final), 4 -b-> 3
// accepts (ab)+
//
fn ab_plus_with_garbage() -> Dfa<char> {
    let mut builder = DfaBuilder::new("ab".chars());
    let q = builder.add_states(5);
    builder
        .set_start(q[0])
        .mark_accepting(q[2])
        .mark_accepting(q[4])
        .add_transition(q[0], 'a', q[1])
        .add_transition(q[1], 'b', q[2])
        .add_transition(q[2], 'a', q[1])
        .add_transition(q[3], 'a', q[4])
        .add_transition(q[4], 'b', q[3]);
    builder.build().unwrap()
}

#[test]
fn test_union_cat_dog() {
    let cat = one_string("cat".chars(), CATDOG.chars());
    let dog = one_string("dog".chars(), CATDOG.chars());
    let either = union(&cat, &dog).unwrap();
    println!("{either}");
    assert_eq!(either.accepts("cat".chars()), Ok(true));
    assert_eq!(either.accepts("dog".chars()), Ok(true));
    assert_eq!(
        either.accepts("cow".chars()),
        Err(Error::UnknownSymbol { position: 2 })
    );
    assert_eq!(either.accepts("".chars()), Ok(false));
    assert_eq!(either.accepts("cog".chars()), Ok(false));
    assert_eq!(either.accepts("catdog".chars()), Ok(false));
}

#[test]
fn test_intersection_with_itself() {
    let ab = one_string("ab".chars(), "ab".chars());
    let same = intersection(&ab, &ab).unwrap();
    let accepted: Vec<Vec<char>> = words(&['a', 'b'], 3)
        .into_iter()
        .filter(|w| dfa_member(&same, w))
        .collect();
    assert_eq!(accepted, vec![chars("ab")]);
}

#[test]
fn test_difference_of_singletons() {
    let a = one_string("a".chars(), "ab".chars());
    let b = one_string("b".chars(), "ab".chars());
    let a_or_b = union(&a, &b).unwrap();
    let only_b = difference(&a_or_b, &a).unwrap();
    assert_eq!(only_b.accepts("b".chars()), Ok(true));
    assert_eq!(only_b.accepts("a".chars()), Ok(false));
    assert_eq!(only_b.accepts("ab".chars()), Ok(false));
    assert_eq!(only_b.accepts("".chars()), Ok(false));
}

#[test]
fn test_reverse_then_determinize() {
    let ab = one_string("ab".chars(), "ab".chars());
    let ba = determinize(&reverse(&ab));
    println!("{ba}");
    assert_eq!(ba.accepts("ba".chars()), Ok(true));
    for word in ["ab", "a", "b", ""] {
        assert_eq!(ba.accepts(word.chars()), Ok(false), "word {word:?}");
    }
}

#[test]
fn test_double_complement() {
    let dfa = ab_plus_with_garbage();
    let twice = complement(&complement(&dfa));
    let max_len = 2 * dfa.num_states();
    for w in words(&['a', 'b'], max_len) {
        assert_eq!(dfa_member(&twice, &w), dfa_member(&dfa, &w), "word {w:?}");
    }
}

#[test]
fn test_completed_is_deterministic() {
    let dfa = complete(&ab_plus_with_garbage());
    for q in reachable(&dfa) {
        for a in dfa.alphabet() {
            let count = dfa.transitions().filter(|&(p, b, _)| p == q && b == a).count();
            assert_eq!(count, 1, "state {q} symbol {a:?}");
        }
    }
}

#[test]
fn test_minimize_prunes_unreachable() {
    let dfa = ab_plus_with_garbage();
    let live = reachable(&dfa);
    assert_eq!(live.len(), 3);

    let min = minimize(&dfa);
    println!("{min}");
    // the dead state is implicit, the three reachable states are distinct
    assert_eq!(min.num_states(), 3);
    assert!(reachable(&min).len() == min.num_states());
    assert_eq!(equivalent(&dfa, &min), Ok(true));

    let min_complete = minimize(&complete(&dfa));
    assert_eq!(min_complete.num_states(), 4);
    assert!(min_complete.is_complete());
    assert_eq!(reachable(&min_complete).len(), min_complete.num_states());
}

#[test]
fn test_minimize_idempotent() {
    let cat = one_string("cat".chars(), CATDOG.chars());
    let dog = one_string("dog".chars(), CATDOG.chars());
    let cog = one_string("cog".chars(), CATDOG.chars());
    let any = union(&union(&cat, &dog).unwrap(), &cog).unwrap();

    let once = minimize(&any);
    let twice = minimize(&once);
    println!("{once}");
    assert!(once.num_states() < any.num_states());
    assert_eq!(canonical_form(&once), canonical_form(&twice));
    assert_eq!(equivalent(&any, &once), Ok(true));
    // start, c, d, ca, co or do, final, sink
    assert_eq!(once.num_states(), 7);
}

#[test]
fn test_nfa_of_dfa() {
    let dfa = ab_plus_with_garbage();
    let nfa = dfa.to_nfa();
    let back = determinize(&nfa);
    for w in words(&['a', 'b'], 6) {
        assert_eq!(nfa_member(&nfa, &w), dfa_member(&dfa, &w), "word {w:?}");
        assert_eq!(dfa_member(&back, &w), dfa_member(&dfa, &w), "word {w:?}");
    }
}
