// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AABB tree basics.
//!
//! Build a small tree, inspect its bounds and height, and remove an entry.
//!
//! Run:
//! - `cargo run -p bramble_demos --example tree_basics`

use bramble_tree::{Aabb2D, AabbTree};

fn main() {
    let mut tree: AabbTree<f64, &str> = AabbTree::new();

    tree.insert(Aabb2D::new(0.0, 0.0, 1.0, 1.0), "a");
    tree.insert(Aabb2D::new(2.0, 2.0, 3.0, 3.0), "b");
    tree.insert(Aabb2D::new(10.0, 10.0, 11.0, 11.0), "c");

    println!("entries: {}", tree.len());
    println!("height:  {}", tree.height());
    println!("bounds:  {:?}", tree.bounds());

    // The box prunes the search; the payload decides the match.
    let removed = tree.remove(&Aabb2D::new(2.0, 2.0, 3.0, 3.0), &"b");
    println!("removed b: {removed}");
    println!("bounds after: {:?}", tree.bounds());

    assert!(removed, "b was inserted and should be found");
    assert_eq!(tree.len(), 2);
}
