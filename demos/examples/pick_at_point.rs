// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point picking over an editor-page scene.
//!
//! This example shows how to combine:
//! - `bramble_scene` for the item hierarchy and per-item geometry,
//! - `bramble_pick` for depth-first point queries,
//! - `write_outline` for dumping the tree while debugging.
//!
//! Run:
//! - `cargo run -p bramble_demos --example pick_at_point`

use bramble_demos::demo_scene;
use bramble_pick::{PickFilter, items_above_point_filtered};
use bramble_scene::write_outline;
use kurbo::Point;

fn main() {
    let (scene, page) = demo_scene();

    let mut outline = String::new();
    write_outline(&scene, page, &mut outline).expect("String sink cannot fail");
    println!("Scene outline (children before parents):\n{outline}");

    let filter = PickFilter::new().visible().pickable();
    for (label, pt) in [
        ("inside start box", Point::new(100.0, 90.0)),
        ("on the end box handle", Point::new(302.0, 338.0)),
        ("empty page area", Point::new(700.0, 500.0)),
        ("off the page", Point::new(900.0, 700.0)),
    ] {
        println!("== Query: {} @ ({:.1}, {:.1}) ==", label, pt.x, pt.y);
        let picked = items_above_point_filtered(&scene, page, pt, filter);
        if picked.is_empty() {
            println!("  (no items)");
        }
        for id in picked {
            println!("  {}", scene.label(id).unwrap_or("<stale>"));
        }
    }
}
