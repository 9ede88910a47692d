use crate::math::{Point, Vector};
use crate::query::sat::{project_polygon, projections_intersect};
use crate::shape::{ConvexView, ShapeError};

/// Searches the edge normals of `poly1` for an axis separating `poly1` from `poly2`.
///
/// This is the "one-way" half of the separating-axis test: only the normals
/// of `poly1` are candidates. Returns the first separating axis found, or
/// `None` if the projections of both polygons overlap on every axis.
pub fn polygon_polygon_find_separating_normal_oneway(
    poly1: &ConvexView,
    poly2: &ConvexView,
) -> Option<Vector> {
    let axis = poly1
        .normals()
        .find(|axis| !projections_intersect(poly1, poly2, axis))?;

    log::trace!(
        "Separating axis {:?}, gap {}.",
        axis,
        -project_polygon(poly1, &axis).overlap(project_polygon(poly2, &axis))
    );
    Some(axis)
}

/// Searches the edge normals of both polygons for a separating axis.
///
/// The normals of `poly1` are tested first. Returns `None` if the polygons
/// intersect.
pub fn polygon_polygon_find_separating_normal(
    poly1: &ConvexView,
    poly2: &ConvexView,
) -> Option<Vector> {
    polygon_polygon_find_separating_normal_oneway(poly1, poly2)
        .or_else(|| polygon_polygon_find_separating_normal_oneway(poly2, poly1))
}

/// Intersection test between two convex polygons.
///
/// Both polygons intersect iff. no edge normal of either of them separates
/// their projections. Polygons touching along an edge or at a vertex are
/// reported as intersecting. The test stops at the first separating axis
/// found.
///
/// Each view may carry cached normals or compute them on the fly,
/// independently of the other.
#[inline]
pub fn polygon_polygon_intersection_test(poly1: &ConvexView, poly2: &ConvexView) -> bool {
    polygon_polygon_find_separating_normal(poly1, poly2).is_none()
}

/// Intersection test between two convex polygons given by their vertices.
///
/// The edge normals of both polygons are computed on the fly. Fails if
/// either slice has fewer than 3 points.
pub fn points_points_intersection_test(
    points1: &[Point],
    points2: &[Point],
) -> Result<bool, ShapeError> {
    Ok(polygon_polygon_intersection_test(
        &ConvexView::new(points1)?,
        &ConvexView::new(points2)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Real;
    use crate::shape::Rectangle;

    fn rect(x: Real, y: Real) -> Rectangle {
        Rectangle::new(Point::new(x, y), Vector::new(2.0, 2.0), 0.0)
    }

    #[test]
    fn separated_boxes_have_a_separating_normal() {
        let a = rect(0.0, 0.0);
        let b = rect(3.0, 0.0);

        let axis = polygon_polygon_find_separating_normal(&a.as_convex(), &b.as_convex())
            .expect("the boxes are separated");
        assert_eq!(axis.y, 0.0);
        assert!(!polygon_polygon_intersection_test(&a.as_convex(), &b.as_convex()));
    }

    #[test]
    fn overlapping_boxes_have_none() {
        let a = rect(0.0, 0.0);
        let b = rect(1.9, 0.5);

        assert_eq!(
            polygon_polygon_find_separating_normal(&a.as_convex(), &b.as_convex()),
            None
        );
        assert!(polygon_polygon_intersection_test(&a.as_convex(), &b.as_convex()));
    }

    #[test]
    fn the_second_polygon_may_hold_the_only_separating_axis() {
        // The diamond's normals are the only ones separating it from the box
        // corner it faces.
        let square = rect(0.0, 0.0);
        let diamond = Rectangle::new(Point::new(2.3, 2.3), Vector::new(2.0, 2.0), 45.0);

        assert!(
            polygon_polygon_find_separating_normal_oneway(&square.as_convex(), &diamond.as_convex())
                .is_none()
        );
        assert!(
            polygon_polygon_find_separating_normal_oneway(&diamond.as_convex(), &square.as_convex())
                .is_some()
        );
        assert!(!polygon_polygon_intersection_test(
            &square.as_convex(),
            &diamond.as_convex()
        ));
    }

    #[test]
    fn raw_and_cached_views_can_be_mixed() {
        let a = rect(0.0, 0.0);
        let b = rect(1.5, 1.5);
        let raw_b = b.points().to_vec();

        let cached = polygon_polygon_intersection_test(&a.as_convex(), &b.as_convex());
        let mixed = polygon_polygon_intersection_test(
            &a.as_convex(),
            &ConvexView::new(&raw_b).unwrap(),
        );
        let raw = points_points_intersection_test(a.points(), &raw_b).unwrap();

        assert!(cached && mixed && raw);
    }

    #[test]
    fn too_few_points_are_rejected() {
        let a = rect(0.0, 0.0);
        assert_eq!(
            points_points_intersection_test(a.points(), &a.points()[..2]),
            Err(ShapeError::TooFewPoints { len: 2 })
        );
    }
}
