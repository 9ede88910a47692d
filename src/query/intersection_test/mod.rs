//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::{
    intersection_test, intersection_test_circle_shape, intersection_test_shape_circle,
};
pub use self::intersection_test_circle_circle::intersection_test_circle_circle;

mod intersection_test;
mod intersection_test_circle_circle;
