//! Angle and point math for the zone plane.
//!
//! Angles are radians measured counter-clockwise from +x (East) and are
//! normalised to `[0, TAU)`. All functions are pure.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use crate::types::Position;

/// Wrap an angle into `[0, TAU)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Bearing from `from` to `to`.
pub fn bearing(from: Position, to: Position) -> f64 {
    let d = DVec2::from(to) - DVec2::from(from);
    normalize_angle(d.y.atan2(d.x))
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Position, radius: f64, angle: f64) -> Position {
    (DVec2::from(center) + DVec2::from_angle(angle) * radius).into()
}

/// Move `distance` meters from `from` along `heading`.
pub fn project(from: Position, heading: f64, distance: f64) -> Position {
    (DVec2::from(from) + DVec2::from_angle(heading) * distance).into()
}

/// Point on the segment `a..b` nearest to `p`.
pub fn closest_on_segment(p: Position, a: Position, b: Position) -> Position {
    let (a, b, p) = (DVec2::from(a), DVec2::from(b), DVec2::from(p));
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a.into();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t).into()
}

/// Step a point around a circle by `delta` radians.
///
/// The current bearing is measured from `center` to `from`; the returned point
/// lies exactly on the circle of `radius` at the advanced bearing.
pub fn arc_step(center: Position, radius: f64, from: Position, delta: f64) -> (Position, f64) {
    let next_bearing = normalize_angle(bearing(center, from) + delta);
    (point_on_circle(center, radius, next_bearing), next_bearing)
}

/// Heading pointing back the way an aircraft came.
pub fn reciprocal(heading: f64) -> f64 {
    normalize_angle(heading + PI)
}

/// True for headings strictly inside `(0, PI)`, i.e. with a northward component.
pub fn is_northbound(heading: f64) -> bool {
    let h = normalize_angle(heading);
    h > 0.0 && h < PI
}
