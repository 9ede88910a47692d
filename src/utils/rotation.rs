use crate::math::{Point, Real, Rotation};

/// The rotation of `degrees` degrees.
///
/// Positive angles turn the `x` axis toward the `y` axis.
#[inline]
pub fn rotation_from_degrees(degrees: Real) -> Rotation {
    Rotation::new(degrees.to_radians())
}

/// Rotates `point` about `pivot`.
#[inline]
pub fn rotate_about(point: &Point, pivot: &Point, rotation: &Rotation) -> Point {
    pivot + rotation * (point - pivot)
}

/// Rotates every point of `points` about `pivot` by `degrees` degrees.
pub fn rotate_points_about(points: &mut [Point], pivot: &Point, degrees: Real) {
    let rotation = rotation_from_degrees(degrees);

    for pt in points.iter_mut() {
        *pt = rotate_about(pt, pivot, &rotation);
    }
}
