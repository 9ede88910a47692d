extern crate nalgebra as na;

use na::{Point2, Vector2};
use satcollide2d::query;
use satcollide2d::shape::{Rectangle, Shape};

fn main() {
    let wall: Shape = Rectangle::new(Point2::new(0.0, 0.0), Vector2::new(2.0, 2.0), 0.0).into();
    let mut crate_box = Rectangle::new(Point2::new(3.0, 0.0), Vector2::new(2.0, 2.0), 0.0);

    // Gap of 1 between both boxes.
    assert!(!query::intersection_test(&wall, &crate_box.clone().into()));

    // Slide toward the wall until the boxes overlap.
    assert!(crate_box.set_position(Point2::new(1.9, 0.0)));
    assert!(query::intersection_test(&wall, &crate_box.clone().into()));

    // Same parameters twice: nothing gets recomputed.
    assert!(!crate_box.update(Point2::new(1.9, 0.0), Vector2::new(2.0, 2.0), 0.0));
}
