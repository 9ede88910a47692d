use crate::shape::Circle;

/// Intersection test between circles.
///
/// Tangent circles intersect.
#[inline]
pub fn intersection_test_circle_circle(c1: &Circle, c2: &Circle) -> bool {
    let distance_squared = (c2.position - c1.position).norm_squared();
    let sum_radius = c1.radius + c2.radius;
    distance_squared <= sum_radius * sum_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    #[test]
    fn circle_circle() {
        let c1 = Circle::new(Point::new(0.0, 0.0), 1.0);

        assert!(intersection_test_circle_circle(&c1, &Circle::new(Point::new(1.5, 0.0), 1.0)));
        assert!(intersection_test_circle_circle(&c1, &Circle::new(Point::new(0.0, 3.0), 2.0)));
        assert!(!intersection_test_circle_circle(&c1, &Circle::new(Point::new(3.0, 4.0), 3.9)));
        assert!(intersection_test_circle_circle(&c1, &c1));
    }
}
