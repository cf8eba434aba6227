// Copyright 2026 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small numeric helpers shared by view-layer code.

/// Clamp `value` to the closed interval `[min, max]`.
///
/// Requires `min <= max`; debug builds assert this. Inputs are assumed to be
/// non-`NaN` (a `NaN` value comes back as `min`).
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "clamp called with an inverted interval");
    value.max(min).min(max)
}

/// Clamp `value` to `[0.0, 1.0]`.
///
/// Convenience form of [`clamp`] for normalized quantities such as opacities
/// and interpolation factors.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_in_range_is_unchanged() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-3.0, -10.0, 10.0), -3.0);
        assert_eq!(clamp(0.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn value_below_range_saturates_to_min() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(f64::NEG_INFINITY, -2.0, 2.0), -2.0);
    }

    #[test]
    fn value_above_range_saturates_to_max() {
        assert_eq!(clamp(7.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp(f64::INFINITY, -2.0, 2.0), 2.0);
    }

    #[test]
    fn degenerate_interval_returns_the_single_point() {
        assert_eq!(clamp(5.0, 3.0, 3.0), 3.0);
    }

    #[test]
    fn clamp01_matches_general_form() {
        for v in [-2.0, -0.0, 0.25, 0.999, 1.0, 42.0] {
            assert_eq!(clamp01(v), clamp(v, 0.0, 1.0));
        }
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
    }
}
