use crate::query::sat;
use crate::shape::{Circle, Shape};

/// Tests whether two shapes are intersecting.
///
/// Shapes touching along an edge or at a vertex intersect.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use satcollide2d::math::{Point, Vector};
/// use satcollide2d::query::intersection_test;
/// use satcollide2d::shape::{IsoTriangle, Rectangle, Shape};
///
/// let rect = Shape::from(Rectangle::new(Point::new(0.0, 0.0), Vector::new(2.0, 2.0), 0.0));
/// let tri = Shape::from(IsoTriangle::new(Point::new(0.0, 2.0), Vector::new(2.0, 2.0), 0.0));
///
/// // The apex of the triangle touches the bottom side of the box.
/// assert!(intersection_test(&rect, &tri));
/// # }
/// ```
#[inline]
pub fn intersection_test(g1: &Shape, g2: &Shape) -> bool {
    sat::polygon_polygon_intersection_test(&g1.as_convex(), &g2.as_convex())
}

/// Tests whether a shape and a circle are intersecting.
///
/// The circle is tested against the axis joining its center to the position
/// of the shape. A circle centered on the shape position always intersects it.
#[inline]
pub fn intersection_test_shape_circle(g1: &Shape, circle: &Circle) -> bool {
    sat::polygon_circle_intersection_test(
        &g1.as_convex(),
        &g1.position(),
        &circle.position,
        circle.radius,
    )
}

/// Tests whether a circle and a shape are intersecting.
#[inline]
pub fn intersection_test_circle_shape(circle: &Circle, g2: &Shape) -> bool {
    intersection_test_shape_circle(g2, circle)
}
