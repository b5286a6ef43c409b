//! Sampling of the curve parameter.

use nalgebra::RealField;
use num::Float;

use crate::error::Error;

/// Builds the ordered sequence of parameter values for one animation.
///
/// The sequence is `0, step, 2 * step, ...` for as long as `k * step < 1`,
/// followed by exactly `1` as the final element. The sweep therefore always
/// ends precisely on the curve's endpoint, whether or not `step` divides 1
/// evenly, and a step that does divide 1 does not produce the endpoint twice.
///
/// The iterator is `Clone`, so the same sweep can be walked multiple times.
///
/// Steps outside `(0, 1]` (including NaN) are rejected with
/// [`Error::StepOutOfRange`].
pub fn sweep<T: RealField + Float>(step: T) -> Result<ParameterSweep<T>, Error> {
    if !(step > T::zero()) || step > T::one() {
        return Err(Error::StepOutOfRange);
    }
    Ok(ParameterSweep {
        step,
        k: T::zero(),
        done: false,
    })
}

/// Iterator returned by [`sweep`].
#[derive(Clone, Debug)]
pub struct ParameterSweep<T> {
    step: T,
    // The sample index kept as a scalar, so t is always computed as one
    // product instead of a running sum accumulating rounding error
    k: T,
    done: bool,
}

impl<T: RealField + Float> Iterator for ParameterSweep<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.done {
            return None;
        }
        let t = self.k * self.step;
        if t < T::one() {
            self.k += T::one();
            Some(t)
        } else {
            self.done = true;
            Some(T::one())
        }
    }
}
