//! Weighted control points and the recorded construction of rational curves.
//!
//! Instead of true homogeneous coordinates, a weight is represented by
//! blending its control point from a shared center toward its real position
//! by a factor equal to the weight. The blended position and the weight form
//! a 3d point, de castlejau's algorithm runs over all three components at
//! once, and dividing the blend back out of the single remaining point
//! yields the rational curve point. Every intermediate level is recorded so
//! the whole scaffold can be drawn.

use nalgebra::{RealField, Scalar, Vector2, Vector3};
use num::Float;
use smallvec::SmallVec;
use std::ops::Deref;

use crate::bounding_box::BoundingBox;
use crate::error::Error;

/// A 2d control point with an attached weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedPoint<T: Scalar> {
    /// Where the control point actually sits
    pub position: Vector2<T>,
    /// How strongly the curve is pulled towards this point, must be positive
    pub weight: T,
}

impl<T: Scalar> WeightedPoint<T> {
    /// Bundles a position and a weight into a control point
    pub fn new(x: T, y: T, weight: T) -> WeightedPoint<T> {
        WeightedPoint {
            position: Vector2::new(x, y),
            weight,
        }
    }
}

/// One level of the interpolation scaffold.
///
/// `x` and `y` are a projected position, `z` carries the weight along so the
/// recursion interpolates it together with the position.
pub type Level<T> = SmallVec<[Vector3<T>; 4]>;

type Polygon<T> = SmallVec<[WeightedPoint<T>; 4]>;

/* Center projection and its inverse */

/// Blends a control point from `center` toward its position by its own weight.
///
/// A weight of 1 reproduces the position exactly, a weight below 1 pulls the
/// point toward the center and a weight above 1 pushes it past its position.
/// The weight itself is kept as the `z` component.
pub fn project<T: RealField + Float>(center: Vector2<T>, point: WeightedPoint<T>) -> Vector3<T> {
    let xy = center + (point.position - center) * point.weight;
    Vector3::new(xy.x, xy.y, point.weight)
}

/// Undoes [`project`] using the weight found in the point's `z` component.
///
/// The weight passed in here is usually an interpolated one, not any control
/// point's own. A weight of exactly zero would place the result at infinity,
/// so it is reported as [`Error::DegenerateWeight`] instead of dividing.
pub fn unproject<T: RealField + Float>(center: Vector2<T>, point: Vector3<T>) -> Result<Vector2<T>, Error> {
    if point.z == T::zero() {
        return Err(Error::DegenerateWeight);
    }
    let xy = Vector2::new(point.x, point.y);
    Ok(center + (xy - center) / point.z)
}

/// A weighted control polygon together with the center its weights blend from.
///
/// Constructing one validates the polygon and projects it once. Evaluation
/// ([`construct`]) is a pure function of the curve and the parameter.
///
/// [`construct`]: RationalCurve::construct
#[derive(Clone, Debug, PartialEq)]
pub struct RationalCurve<T: Scalar> {
    points: Polygon<T>,
    center: Vector2<T>,
    projected: Level<T>,
}

impl<T: Scalar> Deref for RationalCurve<T> {
    type Target = [WeightedPoint<T>];
    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<T: Scalar> RationalCurve<T> {
    /// Returns a curve's degree which is one lower then its number of control points
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// The center shared by every control point, fixed for the curve's lifetime
    pub fn center(&self) -> Vector2<T>
    where
        T: Copy,
    {
        self.center
    }

    /// The projected control polygon, computed once at construction
    pub fn projected(&self) -> &Level<T> {
        &self.projected
    }
}

impl<T: RealField + Float> RationalCurve<T> {
    /// Validates a control polygon and attaches it to its center.
    ///
    /// At least two control points are required and every weight must be
    /// positive. The projected polygon is computed here, once, since it only
    /// depends on the control points and the center.
    pub fn new<I>(points: I, center: Vector2<T>) -> Result<RationalCurve<T>, Error>
    where
        I: IntoIterator<Item = WeightedPoint<T>>,
    {
        let points: Polygon<T> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(Error::TooFewPoints(points.len()));
        }
        for (index, point) in points.iter().enumerate() {
            // Also catches NaN weights
            if !(point.weight > T::zero()) {
                return Err(Error::NonPositiveWeight { index });
            }
        }
        let projected = points.iter().map(|&p| project(center, p)).collect();
        Ok(RationalCurve {
            points,
            center,
            projected,
        })
    }

    /// Evaluates the curve at `t` and records every step of the construction.
    ///
    /// Starting from the projected polygon, each level combines `n` points
    /// into `n - 1` by computing `a + (b - a) * t` on consecutive points `a`
    /// and `b`, over all three components. The levels are snapshots: each one
    /// is allocated fresh and never touched again, so callers may hold on to
    /// the whole scaffold while drawing.
    ///
    /// `t` outside `[0, 1]` extrapolates and is not an error, only non finite
    /// parameters are rejected. Extrapolation can drive the interpolated
    /// weight to zero, in which case back projection fails with
    /// [`Error::DegenerateWeight`].
    pub fn construct(&self, t: T) -> Result<Construction<T>, Error> {
        if !Float::is_finite(t) {
            return Err(Error::NonFiniteParameter);
        }

        let mut levels = Vec::with_capacity(self.points.len());
        levels.push(self.projected.clone());
        for k in 1..self.points.len() {
            let level: Level<T> = levels[k - 1]
                .windows(2)
                .map(|pair| pair[0] + (pair[1] - pair[0]) * t)
                .collect();
            levels.push(level);
        }

        let point = unproject(self.center, levels[self.degree()][0])?;
        Ok(Construction { levels, point })
    }

    /// The smallest axis aligned box containing the control points, their
    /// projections and the center.
    ///
    /// The whole scaffold for any `t` in `[0, 1]` stays inside this box, so
    /// it makes a stable viewport for an animation over the full sweep.
    pub fn frame_box(&self) -> BoundingBox<T> {
        let positions = self.points.iter().map(|p| p.position);
        let projected = self.projected.iter().map(|p| Vector2::new(p.x, p.y));
        BoundingBox::from_iter(positions.chain(projected).chain(std::iter::once(self.center)))
    }
}

/// Everything produced while evaluating a curve at a single parameter value.
///
/// Owned by the caller of [`RationalCurve::construct`] and typically
/// discarded once the frame built from it has been drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Construction<T: Scalar> {
    /// Every interpolation level, starting with the projected control polygon.
    ///
    /// On a curve of degree `n` there are `n + 1` levels and level `k` holds
    /// `n + 1 - k` points.
    pub levels: Vec<Level<T>>,
    /// The curve point recovered by blending the last level back from the center
    pub point: Vector2<T>,
}

impl<T: Scalar> Construction<T> {
    /// The single point the recursion collapses to, weight still attached
    pub fn projected_point(&self) -> &Vector3<T> {
        &self.levels[self.levels.len() - 1][0]
    }
}
