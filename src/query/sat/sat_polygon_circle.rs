use crate::math::{Point, Real};
use crate::query::sat::max_projection_from;
use crate::shape::{ConvexView, ShapeError};

/// Intersection test between a convex polygon and a circle.
///
/// The only axis tested is the one joining the polygon center to the circle
/// center: the shapes are disjoint iff. the circle lies strictly beyond the
/// furthest extent of the polygon along it. When both centers coincide the
/// axis is undefined and the shapes are reported as intersecting, whatever
/// their sizes.
///
/// `polygon_center` is the reference point of the polygon (its position);
/// the projections of its vertices are measured from it.
pub fn polygon_circle_intersection_test(
    poly: &ConvexView,
    polygon_center: &Point,
    circle_center: &Point,
    radius: Real,
) -> bool {
    let delta = circle_center - polygon_center;
    let dist = delta.norm();

    if dist == 0.0 {
        log::debug!("Concentric polygon and circle: reporting an intersection.");
        return true;
    }

    let axis = delta / dist;
    let extent = max_projection_from(poly, polygon_center, &axis);

    dist - extent - radius <= 0.0
}

/// Intersection test between a convex polygon given by its vertices and a
/// circle.
///
/// Fails if fewer than 3 points are given.
pub fn points_circle_intersection_test(
    points: &[Point],
    polygon_center: &Point,
    circle_center: &Point,
    radius: Real,
) -> Result<bool, ShapeError> {
    Ok(polygon_circle_intersection_test(
        &ConvexView::new(points)?,
        polygon_center,
        circle_center,
        radius,
    ))
}
