//! Canonical representative of an edge tangent angle

use std::f64::consts::PI;

/// Fold an angle into `(0, π]`.
///
/// Applies exactly one shift in each direction: `+π` if the angle is
/// `<= 0`, then `-π` if the result exceeds `π`. This is correct for inputs
/// in `(-π, 2π]`, which covers every angle the orientation pass produces.
/// It is not a modulo reduction: values outside that interval come back
/// outside `(0, π]`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle;
    if a <= 0.0 {
        a += PI;
    }
    if a > PI {
        a -= PI;
    }
    a
}
