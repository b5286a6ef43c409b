#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod curve;
pub mod error;
pub mod scene;
pub mod svg;
pub mod sweep;

pub use crate::curve::{Construction, RationalCurve, WeightedPoint};
pub use crate::error::Error;
pub use crate::scene::{assemble, Scene};
pub use crate::sweep::sweep;
