extern crate nalgebra as na;

use na::Point2;
use satcollide2d::query;
use satcollide2d::shape::{Circle, RegularPolygon, Shape};

fn main() {
    let hexagon: Shape = RegularPolygon::new(Point2::new(5.0, 0.0), 1.0, 6, 0.0)
        .expect("a hexagon has enough sides")
        .into();
    let ball = Circle::new(Point2::origin(), 1.0);

    assert!(!query::intersection_test_shape_circle(&hexagon, &ball));

    // A circle centered on the polygon always intersects it.
    let centered = Circle::new(Point2::new(5.0, 0.0), 0.01);
    assert!(hexagon.intersects_circle(&centered));
}
