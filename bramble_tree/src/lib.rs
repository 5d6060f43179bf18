// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bramble_tree --heading-base-level=0

//! Bramble Tree: a dynamic, height-balanced 2D AABB tree.
//!
//! Bramble Tree indexes axis-aligned bounding boxes with opaque payloads and
//! keeps itself balanced under incremental insertion and removal.
//!
//! - Insert and remove box/payload entries one at a time; no bulk rebuild step.
//! - Subtree heights per node never differ by more than one level (an
//!   AVL-style bound over heights, not element counts), so containment-pruned
//!   descent stays logarithmic in practice.
//! - Insertion descends into whichever child's bounds would grow the least,
//!   keeping sibling subtrees spatially compact; rebalancing relocates the one
//!   leaf that grows the shorter sibling the least. Both heuristics are
//!   greedy, not globally optimal.
//! - Removal identifies the entry through a pluggable payload equality
//!   relation ([`PayloadEq`]); the box only prunes the search.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry
//! crate. Scalars use widened accumulator types for volume metrics
//! (f32→f64, f64→f64, i64→i128) to reduce precision pitfalls.
//!
//! # Example
//!
//! ```rust
//! use bramble_tree::{AabbTree, Aabb2D};
//!
//! // Index three labeled boxes.
//! let mut tree: AabbTree<f64, &str> = AabbTree::new();
//! tree.insert(Aabb2D::new(0.0, 0.0, 1.0, 1.0), "a");
//! tree.insert(Aabb2D::new(2.0, 2.0, 3.0, 3.0), "b");
//! tree.insert(Aabb2D::new(10.0, 10.0, 11.0, 11.0), "c");
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.bounds(), Aabb2D::new(0.0, 0.0, 11.0, 11.0));
//!
//! // Remove by box + payload; the box prunes, the payload decides.
//! assert!(tree.remove(&Aabb2D::new(2.0, 2.0, 3.0, 3.0), &"b"));
//! assert!(!tree.remove(&Aabb2D::new(2.0, 2.0, 3.0, 3.0), &"b"));
//! assert_eq!(tree.bounds(), Aabb2D::new(0.0, 0.0, 11.0, 11.0));
//! ```
//!
//! You can supply your own equality relation when payload identity is not
//! plain value equality:
//!
//! ```rust
//! use bramble_tree::{AabbTree, Aabb2D};
//!
//! // Entries are (id, revision); identity is the id alone.
//! let mut tree = AabbTree::with_eq(|a: &(u32, u32), b: &(u32, u32)| a.0 == b.0);
//! tree.insert(Aabb2D::new(0_i64, 0, 10, 10), (1_u32, 1_u32));
//!
//! // A stale revision still finds the entry.
//! assert!(tree.remove(&Aabb2D::new(0, 0, 10, 10), &(1, 42)));
//! ```
//!
//! ## Contracts and edge cases
//!
//! - Duplicate box/payload pairs are stored as distinct leaves; removal takes
//!   an arbitrary matching leaf, one per call.
//! - [`AabbTree::bounds`] on an empty tree is a debug-asserted programmer
//!   error that degrades to a [sentinel box](Aabb2D::sentinel) in release
//!   builds; check [`AabbTree::is_empty`] first.
//! - The tree is single-owner: mutations take `&mut self` and queries take
//!   `&self`. Callers needing concurrent mutation must serialize externally.
//! - Float inputs are assumed finite (no NaNs). Debug builds may assert.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod node;
pub mod tree;
pub mod types;

pub use tree::AabbTree;
pub use types::{Aabb2D, PayloadEq, Scalar, ValueEq};
