// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the turtlr crate.


#[cfg(test)]
use std::fmt::Debug;
#[cfg(test)]
use vector_traits::glam::{DVec2, DVec3};

/// Reduces an angle, in degrees, into `[0, 360)` using the Euclidean remainder.
pub(crate) fn wrap_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative values up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Reduces an angle, in degrees, into `[-180, 180)`.
pub(crate) fn wrap_pitch(degrees: f64) -> f64 {
    wrap_heading(degrees + 180.0) - 180.0
}

/// Style strings end up verbatim inside SVG attributes, so a handful of characters are refused.
pub(crate) fn is_style_token(value: &str) -> bool {
    !value.is_empty() && !value.contains(['<', '>', '"', '\'', '&'])
}

#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-9;

#[cfg(test)]
pub(crate) fn assert_approx_eq<T: SillyApproxEq + Debug>(v1: T, v2: T, epsilon: f64) {
    assert!(v1.silly_approx_eq(&v2, epsilon), "{v1:?} != {v2:?}");
}

#[cfg(test)]
pub(crate) trait SillyApproxEq {
    fn silly_approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

#[cfg(test)]
impl SillyApproxEq for f64 {
    fn silly_approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() <= epsilon
    }
}

#[cfg(test)]
impl SillyApproxEq for DVec2 {
    fn silly_approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

#[cfg(test)]
impl SillyApproxEq for DVec3 {
    fn silly_approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}
