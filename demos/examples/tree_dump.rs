// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic dump of the tree structure.
//!
//! Insert a batch of boxes and print the indented depth-first dump; inner
//! nodes are tagged `O`, leaves `L` with their payload.
//!
//! Run:
//! - `cargo run -p bramble_demos --example tree_dump`

use bramble_tree::{Aabb2D, AabbTree};

fn main() {
    let mut tree: AabbTree<i64, u32> = AabbTree::new();
    for i in 0..8_u32 {
        let x = i64::from(i % 4) * 20;
        let y = i64::from(i / 4) * 20;
        tree.insert(Aabb2D::<i64>::from_xywh(x, y, 10, 10), i);
    }

    // `Display` renders the same dump.
    print!("{tree}");
    println!("height: {}", tree.height());
}
