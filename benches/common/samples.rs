use nalgebra::Vector2;
use once_cell::sync::Lazy;
use rbezier::{RationalCurve, WeightedPoint};

/// Weighted points as `(x, y, weight)`, generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"({(random()-0.5)*i:.5f}, {(random()-0.5)*i:.5f}, {0.25 + 2 * random():.5f}),")
/// ```
pub static POINTS: [(f64, f64, f64); 10] = [
    (0.0, 0.0, 1.0),
    (-0.29734, 0.44984, 1.83411),
    (-0.52560, 0.42885, 0.67927),
    (1.42777, -0.02652, 2.10435),
    (1.98032, -0.67824, 0.31219),
    (0.44863, -0.91328, 1.24626),
    (-2.51139, -0.79100, 0.88377),
    (-3.10479, -0.59318, 1.97308),
    (-1.16022, -2.95591, 0.44679),
    (-1.07946, 0.78888, 1.51026),
];

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub LINEAR: Vec<RationalCurve<f64>>,
    pub QUADRATIC: Vec<RationalCurve<f64>>,
    pub CUBIC: Vec<RationalCurve<f64>>,
    pub HIGHER: Vec<RationalCurve<f64>>,
}
impl Curves {
    pub fn new() -> Curves {
        let center = Vector2::new(0.0, 0.0);
        let curve = |indices: &[usize]| {
            RationalCurve::new(
                indices.iter().map(|&i| {
                    let (x, y, weight) = POINTS[i];
                    WeightedPoint::new(x, y, weight)
                }),
                center,
            )
            .unwrap()
        };
        Curves {
            LINEAR: vec![
                curve(&[0, 1]),
                curve(&[2, 3]),
                curve(&[4, 5]),
                curve(&[6, 7]),
                curve(&[8, 9]),
            ],
            QUADRATIC: vec![
                curve(&[0, 1, 2]),
                curve(&[2, 3, 4]),
                curve(&[4, 6, 8]),
                curve(&[1, 3, 5]),
                curve(&[5, 7, 9]),
            ],
            CUBIC: vec![
                curve(&[0, 1, 2, 3]),
                curve(&[2, 3, 4, 5]),
                curve(&[4, 5, 6, 7]),
                curve(&[6, 7, 8, 9]),
                curve(&[3, 7, 5, 9]),
            ],
            HIGHER: vec![
                curve(&[0, 1, 2, 3, 4]),
                curve(&[2, 3, 4, 5, 6]),
                curve(&[4, 5, 6, 7, 8]),
                curve(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
                curve(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RationalCurve<f64>> {
        self.LINEAR
            .iter()
            .chain(self.QUADRATIC.iter())
            .chain(self.CUBIC.iter())
            .chain(self.HIGHER.iter())
    }
}
