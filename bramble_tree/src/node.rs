// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and the insertion, removal, and rebalancing algorithms.
//!
//! Nodes are a closed two-variant union. A leaf owns one payload and the box
//! it was inserted with; an inner node owns exactly two children, a cached
//! bounds equal to the union of its children's bounds, and a cached height.
//! Structural operations consume nodes by value and hand back the (possibly
//! new) subtree root, so ownership transfer during rebalancing and sibling
//! promotion is checked by the compiler rather than sequenced by hand.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{Aabb2D, PayloadEq, Scalar};

/// A node of the tree: either a payload-carrying leaf or a two-child inner node.
pub(crate) enum Node<T: Scalar, U> {
    Leaf(Leaf<T, U>),
    Inner(Inner<T, U>),
}

/// A leaf holds one payload and the exact box it was inserted with.
pub(crate) struct Leaf<T: Scalar, U> {
    pub(crate) bounds: Aabb2D<T>,
    pub(crate) data: U,
}

/// An inner node structures the tree; it carries no payload.
pub(crate) struct Inner<T: Scalar, U> {
    bounds: Aabb2D<T>,
    height: usize,
    pub(crate) left: Box<Node<T, U>>,
    pub(crate) right: Box<Node<T, U>>,
}

/// Outcome of a removal attempt on a subtree.
///
/// "This child is gone" and "nothing matched" are different results that must
/// not share a representation; keeping the three cases distinct makes sibling
/// promotion and the not-found fall-through impossible to confuse.
pub(crate) enum Removal<T: Scalar, U> {
    /// No leaf in this subtree matched; the subtree is handed back untouched.
    NotFound(Box<Node<T, U>>),
    /// A matching leaf below this node was removed; the subtree's (possibly
    /// new) root is handed back.
    Removed(Box<Node<T, U>>),
    /// This node itself was the matching leaf and has been consumed; the
    /// caller promotes its sibling.
    RemovedSelf,
}

/// A step down from an inner node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Branch {
    Left,
    Right,
}

/// The relocation target found by [`Node::rebalance_candidate`].
struct Candidate<T: Scalar> {
    /// Branches from the subtree root down to the candidate leaf.
    path: Vec<Branch>,
    /// The candidate leaf's bounds.
    bounds: Aabb2D<T>,
}

/// How much merging `incoming` into `current` would grow it.
///
/// The least-increaser metric: both insertion descent and the rebalance
/// candidate search pick whichever option minimizes this, breaking ties
/// toward the first (left) option.
fn volume_increase<T: Scalar>(current: &Aabb2D<T>, incoming: &Aabb2D<T>) -> T::Acc {
    current.union(incoming).volume() - current.volume()
}

impl<T: Scalar, U> Node<T, U> {
    pub(crate) fn leaf(bounds: Aabb2D<T>, data: U) -> Self {
        Self::Leaf(Leaf { bounds, data })
    }

    pub(crate) fn bounds(&self) -> &Aabb2D<T> {
        match self {
            Self::Leaf(leaf) => &leaf.bounds,
            Self::Inner(inner) => &inner.bounds,
        }
    }

    /// A leaf has height 1; an inner node caches 1 + the taller child.
    pub(crate) fn height(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Inner(inner) => inner.height,
        }
    }

    /// Signed height difference, right minus left. A leaf is always 0.
    pub(crate) fn balance(&self) -> i64 {
        match self {
            Self::Leaf(_) => 0,
            Self::Inner(inner) => inner.balance(),
        }
    }

    /// Insert `bounds`/`data` into this subtree and return its new root.
    ///
    /// A leaf acquires a sibling: it returns a fresh inner node holding itself
    /// and a new leaf. An inner node descends into whichever child's bounds
    /// would grow least, then refreshes its caches and rebalances.
    pub(crate) fn insert(self: Box<Self>, bounds: Aabb2D<T>, data: U) -> Box<Self> {
        match *self {
            Self::Leaf(leaf) => {
                let left = Box::new(Self::Leaf(leaf));
                let right = Box::new(Self::leaf(bounds, data));
                Box::new(Self::Inner(Inner::new(left, right)))
            }
            Self::Inner(mut inner) => {
                let grow_left = volume_increase(inner.left.bounds(), &bounds);
                let grow_right = volume_increase(inner.right.bounds(), &bounds);
                if grow_left <= grow_right {
                    inner.left = inner.left.insert(bounds, data);
                } else {
                    inner.right = inner.right.insert(bounds, data);
                }
                Box::new(Self::Inner(inner.rebalanced()))
            }
        }
    }

    /// Remove the leaf matching `bounds`/`data` (under `eq`) from this subtree.
    ///
    /// Children are only descended into when their bounds contain `bounds`;
    /// the left child is tried first, then the right. A matching leaf reports
    /// [`Removal::RemovedSelf`] so its parent can promote the sibling in its
    /// place.
    pub(crate) fn remove<E>(
        self: Box<Self>,
        bounds: &Aabb2D<T>,
        data: &U,
        eq: &E,
    ) -> Removal<T, U>
    where
        E: PayloadEq<U>,
    {
        match *self {
            Self::Leaf(leaf) => {
                if eq.eq(data, &leaf.data) {
                    Removal::RemovedSelf
                } else {
                    Removal::NotFound(Box::new(Self::Leaf(leaf)))
                }
            }
            Self::Inner(mut inner) => {
                if inner.left.bounds().contains(bounds) {
                    match inner.left.remove(bounds, data, eq) {
                        Removal::RemovedSelf => return Removal::Removed(inner.right),
                        Removal::Removed(new_left) => {
                            inner.left = new_left;
                            return Removal::Removed(Box::new(Self::Inner(inner.rebalanced())));
                        }
                        Removal::NotFound(unchanged) => inner.left = unchanged,
                    }
                }
                if inner.right.bounds().contains(bounds) {
                    match inner.right.remove(bounds, data, eq) {
                        Removal::RemovedSelf => return Removal::Removed(inner.left),
                        Removal::Removed(new_right) => {
                            inner.right = new_right;
                            return Removal::Removed(Box::new(Self::Inner(inner.rebalanced())));
                        }
                        Removal::NotFound(unchanged) => inner.right = unchanged,
                    }
                }
                Removal::NotFound(Box::new(Self::Inner(inner)))
            }
        }
    }

    /// Find the leaf in this subtree whose relocation would grow `target` the
    /// least.
    ///
    /// Candidates from both children are compared pairwise at every inner node
    /// and the winner propagates up, so the result minimizes growth at each
    /// comparison point along its path. This is a greedy search, not a global
    /// optimum, and it must stay that way: the chosen leaf determines tree
    /// shape.
    fn rebalance_candidate(&self, target: &Aabb2D<T>) -> Candidate<T> {
        let mut candidate = self.candidate_from(target);
        candidate.path.reverse();
        candidate
    }

    fn candidate_from(&self, target: &Aabb2D<T>) -> Candidate<T> {
        match self {
            Self::Leaf(leaf) => Candidate {
                path: Vec::new(),
                bounds: leaf.bounds,
            },
            Self::Inner(inner) => {
                let left = inner.left.candidate_from(target);
                let right = inner.right.candidate_from(target);
                let (branch, mut winner) = if volume_increase(&left.bounds, target)
                    <= volume_increase(&right.bounds, target)
                {
                    (Branch::Left, left)
                } else {
                    (Branch::Right, right)
                };
                winner.path.push(branch);
                winner
            }
        }
    }

    /// Structurally remove the leaf addressed by `path`, returning the
    /// remaining subtree root together with the leaf's bounds and payload.
    ///
    /// Ancestors of the removed leaf refresh and rebalance on the way back up,
    /// exactly as a removal would; the cascade never escapes this subtree.
    fn extract(self: Box<Self>, path: &[Branch]) -> (Box<Self>, Aabb2D<T>, U) {
        let Self::Inner(mut inner) = *self else {
            unreachable!("candidate path never addresses the subtree root");
        };
        let (step, rest) = path
            .split_first()
            .expect("candidate path ends inside the subtree");
        match step {
            Branch::Left => {
                if rest.is_empty() {
                    let leaf = inner.left.into_leaf();
                    (inner.right, leaf.bounds, leaf.data)
                } else {
                    let (remaining, bounds, data) = inner.left.extract(rest);
                    inner.left = remaining;
                    (Box::new(Self::Inner(inner.rebalanced())), bounds, data)
                }
            }
            Branch::Right => {
                if rest.is_empty() {
                    let leaf = inner.right.into_leaf();
                    (inner.left, leaf.bounds, leaf.data)
                } else {
                    let (remaining, bounds, data) = inner.right.extract(rest);
                    inner.right = remaining;
                    (Box::new(Self::Inner(inner.rebalanced())), bounds, data)
                }
            }
        }
    }

    fn into_leaf(self: Box<Self>) -> Leaf<T, U> {
        match *self {
            Self::Leaf(leaf) => leaf,
            Self::Inner(_) => unreachable!("candidate path ends at a leaf"),
        }
    }
}

impl<T: Scalar, U> Inner<T, U> {
    fn new(left: Box<Node<T, U>>, right: Box<Node<T, U>>) -> Self {
        let bounds = left.bounds().union(right.bounds());
        let height = 1 + left.height().max(right.height());
        Self {
            bounds,
            height,
            left,
            right,
        }
    }

    pub(crate) fn bounds(&self) -> &Aabb2D<T> {
        &self.bounds
    }

    fn balance(&self) -> i64 {
        self.right.height() as i64 - self.left.height() as i64
    }

    /// Re-derive the cached bounds and height from the children.
    fn refresh(&mut self) {
        self.bounds = self.left.bounds().union(self.right.bounds());
        self.height = 1 + self.left.height().max(self.right.height());
    }

    /// Refresh this node's caches and, while the children's heights differ by
    /// more than one level, relocate one leaf from the taller subtree into the
    /// shorter one.
    ///
    /// One relocation restores the bound in all but rare shapes where neither
    /// subtree changes height; the loop strictly shrinks the taller subtree's
    /// leaf count, so it terminates. Ancestors re-check on their own way back
    /// up; the correction never escapes this node.
    fn rebalanced(mut self) -> Self {
        self.refresh();
        loop {
            let balance = self.balance();
            if balance > 1 {
                let candidate = self.right.rebalance_candidate(self.left.bounds());
                let (remaining, bounds, data) = self.right.extract(&candidate.path);
                self.right = remaining;
                self.left = self.left.insert(bounds, data);
            } else if balance < -1 {
                let candidate = self.left.rebalance_candidate(self.right.bounds());
                let (remaining, bounds, data) = self.left.extract(&candidate.path);
                self.left = remaining;
                self.right = self.right.insert(bounds, data);
            } else {
                break;
            }
            self.refresh();
        }
        self
    }
}
