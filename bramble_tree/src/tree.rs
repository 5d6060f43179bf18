// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree driver: insert/remove forwarding, queries, and the diagnostic dump.

use alloc::boxed::Box;
use core::fmt;
use core::fmt::{Display, Write};

use crate::node::{Node, Removal};
use crate::types::{Aabb2D, PayloadEq, Scalar, ValueEq};

/// A dynamic, height-balanced AABB tree.
///
/// Indexes axis-aligned boxes with opaque payloads under incremental insertion
/// and removal. Every inner node's bounds is the union of its children's
/// bounds, and subtree heights per node never differ by more than one level,
/// which bounds the depth reached by containment-pruned descent.
///
/// Entries are identified for removal by the payload equality relation `E`
/// (default: [`ValueEq`], plain value equality); the box only prunes the
/// search. Duplicate box/payload pairs are accepted and stored as distinct
/// leaves; removal then deletes an arbitrary matching leaf, so a second
/// removal of a duplicated pair still returns `true` while a match remains.
pub struct AabbTree<T: Scalar, U, E: PayloadEq<U> = ValueEq> {
    root: Option<Box<Node<T, U>>>,
    len: usize,
    eq: E,
}

impl<T: Scalar, U, E: PayloadEq<U> + Default> Default for AabbTree<T, U, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, U, E: PayloadEq<U> + Default> AabbTree<T, U, E> {
    /// Create an empty tree using the default-constructed equality relation.
    pub fn new() -> Self {
        Self::with_eq(E::default())
    }
}

impl<T: Scalar, U, E: PayloadEq<U>> AabbTree<T, U, E> {
    /// Create an empty tree that identifies entries for removal with `eq`.
    pub fn with_eq(eq: E) -> Self {
        Self {
            root: None,
            len: 0,
            eq,
        }
    }

    /// True if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of entries stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Height of the tree: the longest root-to-leaf path, 0 when empty.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.height())
    }

    /// Bounds enclosing every entry in the tree.
    ///
    /// Calling this on an empty tree is a programmer error: it is asserted in
    /// debug builds and degrades to the [sentinel](Aabb2D::sentinel) box in
    /// release builds. Check [`is_empty`](Self::is_empty) first.
    pub fn bounds(&self) -> Aabb2D<T> {
        debug_assert!(!self.is_empty(), "bounds() called on an empty tree");
        match &self.root {
            Some(root) => *root.bounds(),
            None => Aabb2D::sentinel(),
        }
    }

    /// Insert an entry with the given bounds.
    ///
    /// Duplicates are not detected; inserting an equal box/payload pair twice
    /// creates two leaves.
    pub fn insert(&mut self, bounds: Aabb2D<T>, data: U) {
        self.root = Some(match self.root.take() {
            Some(root) => root.insert(bounds, data),
            None => Box::new(Node::leaf(bounds, data)),
        });
        self.len += 1;
        debug_assert!(
            self.root.as_ref().is_none_or(|r| r.balance().abs() < 2),
            "insertion left the root out of balance"
        );
    }

    /// Remove the entry whose payload matches `data` under the tree's equality
    /// relation and whose leaf lies under `bounds`.
    ///
    /// Returns `true` and restructures the tree if such a leaf was found;
    /// returns `false` with the tree untouched when the tree is empty, the box
    /// is not contained in the root bounds, or no payload matches.
    pub fn remove(&mut self, bounds: &Aabb2D<T>, data: &U) -> bool {
        let Some(root) = self.root.take() else {
            return false;
        };
        if !root.bounds().contains(bounds) {
            self.root = Some(root);
            return false;
        }
        let removed = match root.remove(bounds, data, &self.eq) {
            Removal::RemovedSelf => true,
            Removal::Removed(new_root) => {
                self.root = Some(new_root);
                true
            }
            Removal::NotFound(unchanged) => {
                self.root = Some(unchanged);
                false
            }
        };
        if removed {
            self.len -= 1;
        }
        debug_assert!(
            self.root.as_ref().is_none_or(|r| r.balance().abs() < 2),
            "removal left the root out of balance"
        );
        removed
    }

    /// Drop every entry, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<T: Scalar + Display, U: Display, E: PayloadEq<U>> AabbTree<T, U, E> {
    /// Write an indented depth-first dump of the tree, one line per node.
    ///
    /// Inner nodes are tagged `O`, leaves `L` with their payload appended;
    /// indentation encodes depth. Diagnostic output only, with no parsing
    /// contract.
    pub fn dump(&self, out: &mut dyn Write) -> fmt::Result {
        match &self.root {
            Some(root) => dump_node(root, out, 0),
            None => Ok(()),
        }
    }
}

impl<T: Scalar + Display, U: Display, E: PayloadEq<U>> Display for AabbTree<T, U, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.dump(f)
    }
}

impl<T: Scalar, U, E: PayloadEq<U>> fmt::Debug for AabbTree<T, U, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AabbTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

fn dump_node<T: Scalar + Display, U: Display>(
    node: &Node<T, U>,
    out: &mut dyn Write,
    depth: usize,
) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    match node {
        Node::Leaf(leaf) => {
            out.write_str("L ")?;
            write_bounds(out, &leaf.bounds)?;
            writeln!(out, ": {}", leaf.data)
        }
        Node::Inner(inner) => {
            out.write_str("O ")?;
            write_bounds(out, inner.bounds())?;
            out.write_str("\n")?;
            dump_node(&inner.left, out, depth + 1)?;
            dump_node(&inner.right, out, depth + 1)
        }
    }
}

fn write_bounds<T: Scalar + Display>(out: &mut dyn Write, bounds: &Aabb2D<T>) -> fmt::Result {
    write!(
        out,
        "[ ({} {}) ({} {}) ]",
        bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
    )
}
