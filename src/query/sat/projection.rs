use crate::math::{Point, Real, Vector};
use crate::shape::ConvexView;
use crate::utils::Interval;

/// Projects every vertex of `poly` on `axis` and returns the range they cover.
///
/// Each bound of the result is the dot product of one of the vertices with
/// `axis`. The axis doesn't have to be normalized.
pub fn project_polygon(poly: &ConvexView, axis: &Vector) -> Interval<Real> {
    let points = poly.points();
    let first = points[0].coords.dot(axis);

    points[1..]
        .iter()
        .fold(Interval::splat(first), |range, pt| {
            range.enclose(pt.coords.dot(axis))
        })
}

/// The largest projection on `axis` of the vertices of `poly`, measured from
/// `origin`.
pub fn max_projection_from(poly: &ConvexView, origin: &Point, axis: &Vector) -> Real {
    let points = poly.points();
    let mut best = (points[0] - origin).dot(axis);

    for pt in &points[1..] {
        let dot = (pt - origin).dot(axis);

        if dot > best {
            best = dot;
        }
    }

    best
}

/// Do the projections of both polygons on `axis` overlap?
///
/// Touching projections count as overlapping.
#[inline]
pub fn projections_intersect(poly1: &ConvexView, poly2: &ConvexView, axis: &Vector) -> bool {
    project_polygon(poly1, axis).intersects(&project_polygon(poly2, axis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_tight() {
        let pts = [
            Point::new(1.0, 2.0),
            Point::new(-3.0, 0.5),
            Point::new(4.0, -1.0),
            Point::new(0.0, 0.0),
        ];
        let axis = Vector::new(2.0, 1.0);
        let range = project_polygon(&ConvexView::new(&pts).unwrap(), &axis);
        let dots = pts.map(|pt| pt.coords.dot(&axis));

        assert_eq!(range, Interval(-5.5, 7.0));
        assert!(range.min() <= range.max());
        assert!(dots.contains(&range.min()));
        assert!(dots.contains(&range.max()));
    }

    #[test]
    fn projection_of_a_flat_polygon() {
        let pts = [Point::new(2.0, 3.0), Point::new(5.0, 3.0), Point::new(-1.0, 3.0)];
        let range = project_polygon(&ConvexView::new(&pts).unwrap(), &Vector::y());
        assert_eq!(range, Interval(3.0, 3.0));
    }

    #[test]
    fn projection_on_a_zero_axis_always_overlaps() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        let b = [Point::new(50.0, 0.0), Point::new(51.0, 0.0), Point::new(50.0, 1.0)];
        let (a, b) = (ConvexView::new(&a).unwrap(), ConvexView::new(&b).unwrap());

        assert!(projections_intersect(&a, &b, &Vector::zeros()));
        assert!(!projections_intersect(&a, &b, &Vector::x()));
    }

    #[test]
    fn max_projection_is_relative_to_origin() {
        let pts = [Point::new(4.0, 0.0), Point::new(6.0, 1.0), Point::new(5.0, -1.0)];
        let poly = ConvexView::new(&pts).unwrap();
        let origin = Point::new(5.0, 0.0);

        assert_eq!(max_projection_from(&poly, &origin, &Vector::x()), 1.0);
        assert_eq!(max_projection_from(&poly, &origin, &-Vector::x()), 1.0);
        assert_eq!(max_projection_from(&poly, &origin, &Vector::y()), 1.0);
    }
}
