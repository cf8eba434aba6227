// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-item geometry capability consumed by spatial queries.

use kurbo::{Affine, Point, Rect};

/// Geometry capability of a scene item.
///
/// Spatial queries hand each item a point in the caller's global/query space;
/// the item maps it into its own local frame and answers containment there.
/// Both halves are opaque to the query: whatever framework owns item geometry
/// (a widget toolkit, a canvas layer, a test double) implements this trait.
///
/// Implementations must be pure: queries may call these methods any number of
/// times and in any order.
pub trait ItemGeometry {
    /// Map a point from the global/query coordinate space into this item's
    /// local space.
    fn map_from_global(&self, point: Point) -> Point;

    /// Report whether a point already in local space lies within this item's
    /// bounds. Edge behavior is up to the implementation.
    fn contains_local(&self, point: Point) -> bool;

    /// Map a global-space point to local space and test containment in one
    /// step. Implementations whose framework fuses the two operations can
    /// override this; the split methods then become trivial delegates.
    fn hit(&self, point: Point) -> bool {
        self.contains_local(self.map_from_global(point))
    }
}

/// Stock geometry: an axis-aligned local rectangle placed in global space by
/// an affine transform.
///
/// `transform` maps local space to global space and must be invertible
/// (non-zero determinant); a degenerate transform maps every query point to a
/// non-finite local point, which never tests as contained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectGeometry {
    /// Local (untransformed) bounds.
    pub bounds: Rect,
    /// Local-to-global transform.
    pub transform: Affine,
}

impl RectGeometry {
    /// Geometry with the given local bounds, placed at the global origin.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            transform: Affine::IDENTITY,
        }
    }

    /// Builder-style override of the local-to-global transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

impl ItemGeometry for RectGeometry {
    fn map_from_global(&self, point: Point) -> Point {
        self.transform.inverse() * point
    }

    fn contains_local(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn identity_transform_is_passthrough() {
        let g = RectGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(g.map_from_global(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
        assert!(g.hit(Point::new(5.0, 5.0)));
        assert!(!g.hit(Point::new(15.0, 5.0)));
    }

    #[test]
    fn translated_geometry_maps_back_to_local() {
        let g = RectGeometry::new(Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_transform(Affine::translate(Vec2::new(100.0, 50.0)));
        assert_eq!(
            g.map_from_global(Point::new(105.0, 55.0)),
            Point::new(5.0, 5.0)
        );
        assert!(g.hit(Point::new(105.0, 55.0)));
        assert!(!g.hit(Point::new(5.0, 5.0)));
    }

    #[test]
    fn rotated_geometry_rejects_points_outside_true_bounds() {
        // A unit square rotated 45 degrees about its corner: the global point
        // (0.9, 0.0) is inside the square's global AABB but not the square.
        let g = RectGeometry::new(Rect::new(0.0, 0.0, 1.0, 1.0))
            .with_transform(Affine::rotate(core::f64::consts::FRAC_PI_4));
        assert!(!g.hit(Point::new(0.9, 0.0)));
        assert!(g.hit(Point::new(0.0, 0.9)));
    }

    #[test]
    fn default_hit_composes_map_and_contains() {
        struct Shifted;
        impl ItemGeometry for Shifted {
            fn map_from_global(&self, point: Point) -> Point {
                Point::new(point.x - 10.0, point.y)
            }
            fn contains_local(&self, point: Point) -> bool {
                (0.0..=1.0).contains(&point.x) && (0.0..=1.0).contains(&point.y)
            }
        }
        assert!(Shifted.hit(Point::new(10.5, 0.5)));
        assert!(!Shifted.hit(Point::new(0.5, 0.5)));
    }
}
