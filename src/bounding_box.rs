//! Axis aligned bounding boxes, used to pick a stable viewport for a sweep.

use nalgebra::{RealField, Scalar, Vector2};
use num::Float;

/// Axis aligned box spanned by two corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox<T: Scalar> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,
    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField + Float> BoundingBox<T> {
    /// Computes the smallest box containing every point of the iterator.
    ///
    /// Panics on an empty iterator, a box around nothing has no meaning.
    pub fn from_iter<Iter: Iterator<Item = Vector2<T>>>(mut points: Iter) -> BoundingBox<T> {
        let first = points.next().expect("Should contain at least one point");
        let mut min = first;
        let mut max = first;
        for p in points {
            if min.x > p.x {
                min.x = p.x;
            }
            if min.y > p.y {
                min.y = p.y;
            }
            if max.x < p.x {
                max.x = p.x;
            }
            if max.y < p.y {
                max.y = p.y;
            }
        }
        BoundingBox { min, max }
    }

    /// Grows the box on every side by `margin` times its larger extent.
    ///
    /// Keeps a degenerate box (all points on one line) from collapsing the
    /// viewport to zero width or height.
    pub fn pad(&self, margin: T) -> BoundingBox<T> {
        let size = self.max - self.min;
        let extent = if size.x > size.y { size.x } else { size.y };
        let offset = Vector2::new(extent * margin, extent * margin);
        BoundingBox {
            min: self.min - offset,
            max: self.max + offset,
        }
    }

    /// The box's extent along the x axis
    pub fn width(&self) -> T {
        self.max.x - self.min.x
    }

    /// The box's extent along the y axis
    pub fn height(&self) -> T {
        self.max.y - self.min.y
    }
}
