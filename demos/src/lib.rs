// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the bramble demos.

use bramble_scene::{Item, RectGeometry, Scene};
use kurbo::{Affine, Rect, Vec2};

/// Build the small editor-page scene the demos pick against.
///
/// Layout (global space): an 800x600 page containing two boxes, the second of
/// which holds a connector handle placed by a transform.
pub fn demo_scene() -> (Scene, bramble_scene::NodeId) {
    let mut scene = Scene::new();
    let page = scene.insert(
        None,
        Item::new("page", RectGeometry::new(Rect::new(0.0, 0.0, 800.0, 600.0))),
    );
    scene.insert(
        Some(page),
        Item::new(
            "start box",
            RectGeometry::new(Rect::new(50.0, 50.0, 200.0, 130.0)),
        ),
    );
    let end_box = scene.insert(
        Some(page),
        Item::new(
            "end box",
            RectGeometry::new(Rect::new(300.0, 300.0, 450.0, 380.0)),
        ),
    );
    scene.insert(
        Some(end_box),
        Item::new(
            "left handle",
            RectGeometry::new(Rect::new(-8.0, -8.0, 8.0, 8.0))
                .with_transform(Affine::translate(Vec2::new(300.0, 340.0))),
        ),
    );
    (scene, page)
}
