// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Product construction
//!
//! The product of two DFAs A1 and A2 simulates both automata in lock step.
//! Its states are the pairs (q1, q2) where q1 is a state of A1 and q2 is a
//! state of A2. Each pair is given a fresh state id; the map between pairs and
//! ids is kept in a [ProductStates] table.
//!
//! The accepting states of the product are defined by an *accept rule*: a
//! Boolean function `rule(q1 is accepting, q2 is accepting)`. Union,
//! intersection, and symmetric difference are products with the
//! rules `or`, `and`, and `xor`. The difference A - B is computed as
//! the intersection of A and the complement of B.
//!
//! The construction is eager: all |Q1|·|Q2| pairs are built even if some
//! of them are not reachable. Use [minimize](crate::minimizer::minimize) to
//! remove unreachable and redundant states.
//!
//! Both operands must be complete over the union of their alphabets.
//! Use [complete_over](crate::completion::complete_over) to extend
//! operands built over different alphabets.
//!

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use indexmap::IndexSet;

use crate::{
    alphabets::Symbol,
    completion::{complement, complete_over},
    dfa::Dfa,
    errors::*,
    states::{State, StateSet},
    transition_tables::TransitionTable,
};

///
/// Bijection between pairs of states and product states
/// - the i-th pair stored in the table is mapped to `State::new(i)`
///
#[derive(Debug, Clone, Default)]
pub struct ProductStates {
    pairs: IndexSet<(State, State)>,
}

impl ProductStates {
    ///
    /// Empty table
    ///
    pub fn new() -> Self {
        ProductStates {
            pairs: IndexSet::new(),
        }
    }

    ///
    /// Product state for a pair
    /// - allocate a new state if the pair hasn't been seen before
    ///
    pub fn pair(&mut self, q1: State, q2: State) -> State {
        let (i, _) = self.pairs.insert_full((q1, q2));
        State::new(i as u32)
    }

    ///
    /// Product state for a pair if it exists
    ///
    pub fn get(&self, q1: State, q2: State) -> Option<State> {
        self.pairs
            .get_index_of(&(q1, q2))
            .map(|i| State::new(i as u32))
    }

    ///
    /// Pair of a product state
    ///
    pub fn components(&self, state: State) -> Option<(State, State)> {
        self.pairs.get_index(state.index()).copied()
    }

    ///
    /// Number of product states
    ///
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    ///
    /// Check whether the table is empty
    ///
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

//
// Check that dfa has a transition for every state and every symbol in
// the joined alphabet.
//
fn check_complete_over<S: Symbol>(
    dfa: &Dfa<S>,
    symbols: &[&S],
    operand: Operand,
) -> Result<()> {
    for &q in dfa.states() {
        for &a in symbols {
            if dfa.next(q, a).is_none() {
                return Err(Error::IncompatibleAlphabet { operand, state: q });
            }
        }
    }
    Ok(())
}

///
/// Product of two DFAs
/// - return the product automaton and the table that maps its states to pairs
///
/// Fails with [Error::IncompatibleAlphabet] if an operand is not complete
/// over the union of both alphabets.
///
pub fn product_with_states<S, R>(
    a1: &Dfa<S>,
    a2: &Dfa<S>,
    accept_rule: R,
) -> Result<(Dfa<S>, ProductStates)>
where
    S: Symbol,
    R: Fn(bool, bool) -> bool,
{
    let alphabet = a1.alphabet().union(a2.alphabet());
    let symbols: Vec<&S> = alphabet.iter().collect();
    check_complete_over(a1, &symbols, Operand::Left)?;
    check_complete_over(a2, &symbols, Operand::Right)?;

    let mut pairs = ProductStates::new();
    // the start pair gets the first id
    let start = pairs.pair(a1.start(), a2.start());
    for &q1 in a1.states() {
        for &q2 in a2.states() {
            pairs.pair(q1, q2);
        }
    }

    let mut states = StateSet::new();
    let mut accepting = StateSet::new();
    let mut table = TransitionTable::new();
    for &q1 in a1.states() {
        for &q2 in a2.states() {
            let q = pairs.pair(q1, q2);
            states.insert(q);
            if accept_rule(a1.is_accepting(q1), a2.is_accepting(q2)) {
                accepting.insert(q);
            }
            for &a in &symbols {
                // both successors exist: checked above
                if let (Some(r1), Some(r2)) = (a1.next(q1, a), a2.next(q2, a)) {
                    table.set(q, a.clone(), pairs.pair(r1, r2));
                }
            }
        }
    }
    debug_assert_eq!(states.len(), pairs.len());

    let product = Dfa::from_parts(alphabet, states, start, accepting, table);
    Ok((product, pairs))
}

///
/// Product of two DFAs with the given accept rule
///
pub fn product<S, R>(a1: &Dfa<S>, a2: &Dfa<S>, accept_rule: R) -> Result<Dfa<S>>
where
    S: Symbol,
    R: Fn(bool, bool) -> bool,
{
    product_with_states(a1, a2, accept_rule).map(|(dfa, _)| dfa)
}

///
/// DFA for the union of two languages
///
pub fn union<S: Symbol>(a1: &Dfa<S>, a2: &Dfa<S>) -> Result<Dfa<S>> {
    product(a1, a2, |in1, in2| in1 || in2)
}

///
/// DFA for the intersection of two languages
///
pub fn intersection<S: Symbol>(a1: &Dfa<S>, a2: &Dfa<S>) -> Result<Dfa<S>> {
    product(a1, a2, |in1, in2| in1 && in2)
}

///
/// DFA for the symmetric difference of two languages
/// - accepts the words accepted by exactly one of a1 and a2
///
pub fn symmetric_difference<S: Symbol>(a1: &Dfa<S>, a2: &Dfa<S>) -> Result<Dfa<S>> {
    product(a1, a2, |in1, in2| in1 != in2)
}

///
/// DFA for the difference of two languages
/// - accepts the words accepted by a1 and rejected by a2
///
/// Both operands are completed over the union of their alphabets first,
/// so this doesn't fail in practice.
///
pub fn difference<S: Symbol>(a1: &Dfa<S>, a2: &Dfa<S>) -> Result<Dfa<S>> {
    let alphabet = a1.alphabet().union(a2.alphabet());
    let left = complete_over(a1, &alphabet);
    let right = complement(&complete_over(a2, &alphabet));
    intersection(&left, &right)
}

/// Union: `&a | &b`
impl<S: Symbol> BitOr for &Dfa<S> {
    type Output = Result<Dfa<S>>;

    fn bitor(self, other: Self) -> Self::Output {
        union(self, other)
    }
}

/// Intersection: `&a & &b`
impl<S: Symbol> BitAnd for &Dfa<S> {
    type Output = Result<Dfa<S>>;

    fn bitand(self, other: Self) -> Self::Output {
        intersection(self, other)
    }
}

/// Symmetric difference: `&a ^ &b`
impl<S: Symbol> BitXor for &Dfa<S> {
    type Output = Result<Dfa<S>>;

    fn bitxor(self, other: Self) -> Self::Output {
        symmetric_difference(self, other)
    }
}

/// Difference: `&a - &b`
impl<S: Symbol> Sub for &Dfa<S> {
    type Output = Result<Dfa<S>>;

    fn sub(self, other: Self) -> Self::Output {
        difference(self, other)
    }
}

/// Complement: `!&a`
impl<S: Symbol> Not for &Dfa<S> {
    type Output = Dfa<S>;

    fn not(self) -> Self::Output {
        complement(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::samples::one_string;

    const ABC: &str = "abc";

    #[test]
    fn test_product_states() {
        let mut pairs = ProductStates::new();
        let s00 = pairs.pair(State::new(0), State::new(0));
        let s10 = pairs.pair(State::new(1), State::new(0));
        assert_eq!(pairs.pair(State::new(0), State::new(0)), s00);
        assert_ne!(s00, s10);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.components(s10), Some((State::new(1), State::new(0))));
        assert_eq!(pairs.get(State::new(1), State::new(0)), Some(s10));
        assert_eq!(pairs.get(State::new(1), State::new(1)), None);
        assert_eq!(pairs.components(State::new(9)), None);
    }

    #[test]
    fn test_union() {
        let a = one_string("ab".chars(), ABC.chars());
        let b = one_string("c".chars(), ABC.chars());
        let (u, pairs) = product_with_states(&a, &b, |x, y| x || y).unwrap();
        println!("{u}");
        assert_eq!(u.num_states(), a.num_states() * b.num_states());
        assert_eq!(pairs.components(u.start()), Some((a.start(), b.start())));
        assert!(u.is_complete());

        assert_eq!(u.accepts("ab".chars()), Ok(true));
        assert_eq!(u.accepts("c".chars()), Ok(true));
        assert_eq!(u.accepts("".chars()), Ok(false));
        assert_eq!(u.accepts("abc".chars()), Ok(false));
        assert_eq!(u.accepts("cc".chars()), Ok(false));

        let v = (&a | &b).unwrap();
        assert_eq!(v.accepts("c".chars()), Ok(true));
    }

    #[test]
    fn test_intersection() {
        let a = one_string("ab".chars(), ABC.chars());
        let b = one_string("ac".chars(), ABC.chars());
        let empty = (&a & &b).unwrap();
        for word in ["", "a", "ab", "ac", "abc"] {
            assert_eq!(empty.accepts(word.chars()), Ok(false));
        }
        let same = intersection(&a, &a).unwrap();
        assert_eq!(same.accepts("ab".chars()), Ok(true));
        assert_eq!(same.accepts("a".chars()), Ok(false));
    }

    #[test]
    fn test_difference() {
        let a = one_string("a".chars(), ABC.chars());
        let b = one_string("b".chars(), ABC.chars());
        let ab = union(&a, &b).unwrap();
        let only_b = (&ab - &a).unwrap();
        println!("{only_b}");
        assert_eq!(only_b.accepts("b".chars()), Ok(true));
        assert_eq!(only_b.accepts("a".chars()), Ok(false));
        assert_eq!(only_b.accepts("".chars()), Ok(false));

        let xor = (&ab ^ &a).unwrap();
        assert_eq!(xor.accepts("b".chars()), Ok(true));
        assert_eq!(xor.accepts("a".chars()), Ok(false));

        let not_a = !&a;
        assert_eq!(not_a.accepts("a".chars()), Ok(false));
        assert_eq!(not_a.accepts("b".chars()), Ok(true));
    }

    #[test]
    fn test_difference_over_distinct_alphabets() {
        // a over {a}, b over {b}: difference completes both over {a, b}
        let a = one_string("a".chars(), "a".chars());
        let b = one_string("b".chars(), "b".chars());
        let d = difference(&a, &b).unwrap();
        assert_eq!(d.alphabet().len(), 2);
        assert_eq!(d.accepts("a".chars()), Ok(true));
        assert_eq!(d.accepts("b".chars()), Ok(false));
        assert_eq!(d.accepts("ab".chars()), Ok(false));
    }

    #[test]
    fn test_incompatible_alphabets() {
        let a = one_string("a".chars(), "a".chars());
        let b = one_string("b".chars(), "b".chars());
        let e = union(&a, &b).unwrap_err();
        assert!(matches!(
            e,
            Error::IncompatibleAlphabet {
                operand: Operand::Left,
                ..
            }
        ));

        let wide = one_string("b".chars(), "ab".chars());
        let narrow = one_string("a".chars(), "a".chars());
        let e = intersection(&wide, &narrow).unwrap_err();
        assert!(matches!(
            e,
            Error::IncompatibleAlphabet {
                operand: Operand::Right,
                ..
            }
        ));
    }
}
