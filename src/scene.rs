//! Packaging of one evaluation into a drawable scene.
//!
//! A [`Scene`] is pure data aggregation. It computes no geometry of its own
//! and borrows everything it can, it merely gathers what a renderer needs to
//! draw one frame of the construction.

use nalgebra::{RealField, Scalar, Vector2, Vector3};
use num::Float;

use crate::curve::{Construction, Level, RationalCurve, WeightedPoint};

/// All geometric content of a single animation frame.
///
/// Point positions, levels and connectivity are the contract here, visual
/// styling is entirely the renderer's business.
#[derive(Copy, Clone, Debug)]
pub struct Scene<'a, T: Scalar> {
    /// The curve's control polygon
    pub control_points: &'a [WeightedPoint<T>],
    /// The center the control points blend from
    pub center: Vector2<T>,
    /// Every interpolation level, the first being the projected polygon
    pub levels: &'a [Level<T>],
    /// The point the recursion collapsed to, weight still attached
    pub projected_point: Vector3<T>,
    /// The newest curve point, already part of the trace's tail
    pub curve_point: Vector2<T>,
    /// The curve accumulated so far, in increasing parameter order
    pub trace: &'a [Vector2<T>],
}

/// Gathers the pieces of one frame into a [`Scene`].
///
/// The trace is owned by the sweep loop. The caller appends the new curve
/// point to it before assembling, growing the trace is not this function's
/// job.
pub fn assemble<'a, T: RealField + Float>(
    curve: &'a RationalCurve<T>,
    construction: &'a Construction<T>,
    trace: &'a [Vector2<T>],
) -> Scene<'a, T> {
    Scene {
        control_points: &curve[..],
        center: curve.center(),
        levels: &construction.levels,
        projected_point: *construction.projected_point(),
        curve_point: construction.point,
        trace,
    }
}
