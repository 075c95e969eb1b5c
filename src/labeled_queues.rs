// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//!
//! Queues for breadth-first exploration of labeled graphs
//!
//! A [LabeledQueue] remembers, for every node it has seen, the edge
//! through which the node was first reached. Since exploration is
//! breadth-first, following these edges back to the root gives a shortest
//! path. This is how shortest words are extracted from automata.
//!

use std::hash::Hash;

use indexmap::IndexMap;

///
/// Labeled queue to explore a graph from a root
/// - T: type of nodes
/// - L: type of labels
///
/// For every node N that's been visited (except the root), we keep
/// a pair (label, predecessor), where the predecessor is a node
/// on a shortest path from the root to N.
///
// Nodes are stored in discovery order: node i is pending iff i >= next.
// The predecessor of a node is stored as an index in the map.
#[derive(Debug, Clone)]
pub struct LabeledQueue<T, L> {
    map: IndexMap<T, Option<(usize, L)>>,
    next: usize,
}

impl<T: Eq + Hash + Clone, L: Clone> LabeledQueue<T, L> {
    ///
    /// Initialize to explore from a root
    ///
    pub fn new(root: T) -> Self {
        let mut map = IndexMap::new();
        map.insert(root, None);
        LabeledQueue { map, next: 0 }
    }

    ///
    /// Push a successor of a node into the queue
    /// - no effect if the successor has been visited before or if
    ///   the predecessor is unknown
    /// - otherwise, record that suc is reachable from pre via label
    /// - return true if suc is new, false otherwise
    ///
    pub fn push(&mut self, pre: &T, label: L, suc: T) -> bool {
        if self.map.contains_key(&suc) {
            return false;
        }
        match self.map.get_index_of(pre) {
            Some(i) => {
                self.map.insert(suc, Some((i, label)));
                true
            }
            None => false,
        }
    }

    ///
    /// Get the node first in the queue
    ///
    pub fn pop(&mut self) -> Option<T> {
        let (node, _) = self.map.get_index(self.next)?;
        self.next += 1;
        Some(node.clone())
    }

    ///
    /// Path from the root to a node
    /// - return None if the node has not been visited
    /// - return the list of labels on the path otherwise
    ///   (the list is empty if node is the root)
    ///
    pub fn path(&self, node: &T) -> Option<Vec<L>> {
        self.full_path(node)
            .map(|path| path.into_iter().map(|(_, label)| label).collect())
    }

    ///
    /// Full path from the root to a destination node
    /// - return None if the destination has not been visited
    /// - return a list of pairs (node, label) otherwise
    /// - the list describes the path from the root to destination:
    ///   - if destination = root, the list is empty
    ///   - otherwise, the list is of the form
    ///     (n<sub>0</sub>, l<sub>0</sub>) ... (n<sub>k</sub>, l<sub>k</sub>)
    ///     where n<sub>0</sub> is the root, n<sub>i+1</sub> is reached from
    ///     n<sub>i</sub> via an edge labeled l<sub>i</sub>, and destination
    ///     is reached from n<sub>k</sub> via l<sub>k</sub>.
    ///
    pub fn full_path(&self, destination: &T) -> Option<Vec<(T, L)>> {
        let mut edge = self.map.get(destination)?;
        let mut result = Vec::new();
        while let Some((i, label)) = edge {
            let (node, pred_edge) = self.map.get_index(*i)?;
            result.push((node.clone(), label.clone()));
            edge = pred_edge;
        }
        result.reverse();
        Some(result)
    }
}
