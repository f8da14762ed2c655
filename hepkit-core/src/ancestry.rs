//! Monte-Carlo Ancestry Search
//!
//! Breadth-first search through the mother/daughter links of a generator-level
//! decay tree, e.g. "does this muon come from a W?" or "which b hadron did
//! this jet constituent descend from?".
//!
//! The tree itself belongs to the caller and is exposed through the
//! [`DecayTree`] trait. Nodes are plain indices.
//!
//! ## Termination
//!
//! Real event records contain shared ancestors, and malformed ones contain
//! loops. Each node is visited at most once, and the queue and visited set are
//! fixed-size `heapless` buffers, so the search always ends: either with a
//! result or with [`HepkitError::TraversalOverflow`].
//!
//! ```rust
//! use hepkit_core::ancestry::{has_ancestor_pdg, DecayTree, NodeId};
//!
//! // 0: W+ -> 1: mu+ , 2: nu_mu
//! struct Event;
//!
//! impl DecayTree for Event {
//!     fn pdg_id(&self, node: NodeId) -> i32 {
//!         [24, -13, 14][node]
//!     }
//!     fn mothers(&self, node: NodeId) -> &[NodeId] {
//!         if node == 0 { &[] } else { &[0] }
//!     }
//!     fn daughters(&self, node: NodeId) -> &[NodeId] {
//!         if node == 0 { &[1, 2] } else { &[] }
//!     }
//! }
//!
//! assert!(has_ancestor_pdg(&Event, 1, -24).unwrap());
//! ```

use heapless::{Deque, FnvIndexSet};

use crate::constants::DEFAULT_TRAVERSAL_CAPACITY;
use crate::errors::{HepkitError, HepkitResult};

/// Index of a particle in the event record
pub type NodeId = usize;

/// Read access to a particle decay tree
///
/// Implementations may panic for indices that are not part of the record;
/// the search only follows indices returned by `mothers`/`daughters`.
pub trait DecayTree {
    /// PDG particle code of a node
    fn pdg_id(&self, node: NodeId) -> i32;

    /// Direct parents of a node
    fn mothers(&self, node: NodeId) -> &[NodeId];

    /// Direct children of a node
    fn daughters(&self, node: NodeId) -> &[NodeId];
}

/// Which links a search follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards mothers
    Ancestors,
    /// Towards daughters
    Descendants,
}

fn neighbours<T: DecayTree + ?Sized>(tree: &T, node: NodeId, direction: Direction) -> &[NodeId] {
    match direction {
        Direction::Ancestors => tree.mothers(node),
        Direction::Descendants => tree.daughters(node),
    }
}

/// Nearest node (by generation) matching `predicate`, excluding `start`.
///
/// `CAP` bounds both the queue and the visited set and must be a power of two.
pub fn breadth_first_search<T, F, const CAP: usize>(
    tree: &T,
    start: NodeId,
    direction: Direction,
    mut predicate: F,
) -> HepkitResult<Option<NodeId>>
where
    T: DecayTree + ?Sized,
    F: FnMut(NodeId) -> bool,
{
    let overflow = || {
        log_warn!(
            "Ancestry search from node {} exceeded {} nodes",
            start, CAP
        );
        HepkitError::TraversalOverflow { capacity: CAP }
    };

    let mut queue: Deque<NodeId, CAP> = Deque::new();
    let mut visited: FnvIndexSet<NodeId, CAP> = FnvIndexSet::new();

    visited.insert(start).map_err(|_| overflow())?;
    queue.push_back(start).map_err(|_| overflow())?;

    while let Some(node) = queue.pop_front() {
        for &next in neighbours(tree, node, direction) {
            match visited.insert(next) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(_) => return Err(overflow()),
            }

            if predicate(next) {
                return Ok(Some(next));
            }

            queue.push_back(next).map_err(|_| overflow())?;
        }
    }

    Ok(None)
}

/// Nearest ancestor of `start` matching `predicate`
pub fn find_ancestor<T, F>(tree: &T, start: NodeId, predicate: F) -> HepkitResult<Option<NodeId>>
where
    T: DecayTree + ?Sized,
    F: FnMut(NodeId) -> bool,
{
    breadth_first_search::<T, F, DEFAULT_TRAVERSAL_CAPACITY>(
        tree,
        start,
        Direction::Ancestors,
        predicate,
    )
}

/// Nearest descendant of `start` matching `predicate`
pub fn find_descendant<T, F>(tree: &T, start: NodeId, predicate: F) -> HepkitResult<Option<NodeId>>
where
    T: DecayTree + ?Sized,
    F: FnMut(NodeId) -> bool,
{
    breadth_first_search::<T, F, DEFAULT_TRAVERSAL_CAPACITY>(
        tree,
        start,
        Direction::Descendants,
        predicate,
    )
}

/// Whether any ancestor of `start` has PDG code `±pdg_id`
pub fn has_ancestor_pdg<T>(tree: &T, start: NodeId, pdg_id: i32) -> HepkitResult<bool>
where
    T: DecayTree + ?Sized,
{
    let wanted = pdg_id.unsigned_abs();
    find_ancestor(tree, start, |node| tree.pdg_id(node).unsigned_abs() == wanted)
        .map(|found| found.is_some())
}

/// Whether any descendant of `start` has PDG code `±pdg_id`
pub fn has_descendant_pdg<T>(tree: &T, start: NodeId, pdg_id: i32) -> HepkitResult<bool>
where
    T: DecayTree + ?Sized,
{
    let wanted = pdg_id.unsigned_abs();
    find_descendant(tree, start, |node| tree.pdg_id(node).unsigned_abs() == wanted)
        .map(|found| found.is_some())
}
