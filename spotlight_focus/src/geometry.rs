// Copyright 2026 the Spotlight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional geometry: half-plane membership and adjacency scoring.
//!
//! Both functions compare the bounds of a reference element (`from`) with those of a
//! candidate (`to`). Bounds must share one absolute coordinate space.
//!
//! ## Scoring
//!
//! - `dx` is the distance between the trailing (right) edges of the two boxes, not their
//!   horizontal centers. It is floored to `0.001` so that it never divides by zero.
//! - `dy` is the distance between the top edges.
//! - The angle is `atan(dx / dy)` for vertical moves and `atan(dy / dx)` for horizontal ones,
//!   in degrees, floored to `0.1`.
//! - The distance is the Euclidean norm of `(dx, dy)`, floored to `0.1`.
//! - Candidates further than 89 degrees off axis score `0`; otherwise the score is
//!   `1 / (angle * distance^4)`.
//!
//! Higher scores are better; `0` means ineligible.

use core::f64::consts::PI;

use kurbo::{Rect, Vec2};

use crate::Direction;

/// Smallest horizontal delta used by the scorer.
pub const MIN_DX: f64 = 0.001;

/// Angle (in degrees) used when the computed angle is zero.
pub const MIN_ANGLE: f64 = 0.1;

/// Distance used when the computed distance is zero.
pub const MIN_DISTANCE: f64 = 0.1;

/// Candidates more than this many degrees off axis are rejected.
pub const MAX_ANGLE: f64 = 89.0;

/// Whether `to` lies strictly on the `direction` side of `from`.
///
/// Vertical directions compare top edges, horizontal ones compare left edges.
/// Equal edges are excluded.
#[must_use]
pub fn in_half_plane(direction: Direction, from: Rect, to: Rect) -> bool {
    match direction {
        Direction::Up => from.y0 > to.y0,
        Direction::Down => from.y0 < to.y0,
        Direction::Left => from.x0 > to.x0,
        Direction::Right => from.x0 < to.x0,
    }
}

/// Adjacency score of moving from `from` to `to` in `direction`.
///
/// Does not check the half plane; pair with [`in_half_plane`].
#[must_use]
pub fn adjacency_score(direction: Direction, from: Rect, to: Rect) -> f64 {
    let (dx, dy) = deltas(from, to);
    let angle = angle_degrees(direction, dx, dy);
    if angle > MAX_ANGLE {
        return 0.0;
    }
    let distance = or_floor(Vec2::new(dx, dy).length(), MIN_DISTANCE);
    let d2 = distance * distance;
    1.0 / (angle * d2 * d2)
}

/// Off-axis angle of `to` relative to `from`, in degrees.
#[must_use]
pub fn off_axis_angle(direction: Direction, from: Rect, to: Rect) -> f64 {
    let (dx, dy) = deltas(from, to);
    angle_degrees(direction, dx, dy)
}

fn deltas(from: Rect, to: Rect) -> (f64, f64) {
    let dx = or_floor((trailing_edge(to) - trailing_edge(from)).abs(), MIN_DX);
    let dy = (to.y0 - from.y0).abs();
    (dx, dy)
}

fn angle_degrees(direction: Direction, dx: f64, dy: f64) -> f64 {
    // atan(y / x) == atan2(y, x) for x > 0, and both give 90 degrees when x == 0.
    let radians = if direction.is_vertical() {
        Vec2::new(dy, dx).atan2()
    } else {
        Vec2::new(dx, dy).atan2()
    };
    or_floor(radians * 180.0 / PI, MIN_ANGLE)
}

fn trailing_edge(r: Rect) -> f64 {
    r.x0 + r.width()
}

// Zero (and NaN) fall back to `floor`.
fn or_floor(value: f64, floor: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        floor
    } else {
        value
    }
}
