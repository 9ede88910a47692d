//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`query::intersection_test_shape_circle()`] to determine if a shape and a circle are intersecting or not.
//!
//! # Specific cases
//! The functions exported by the `sat` submodule work on borrowed polygons
//! ([`ConvexView`]) rather than on [`Shape`]s. They let the caller test raw
//! vertex slices, reuse normals cached across frames, or retrieve the
//! separating axis that proved two polygons disjoint.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test()
//! [`query::intersection_test_shape_circle()`]: crate::query::intersection_test_shape_circle()
//! [`ConvexView`]: crate::shape::ConvexView
//! [`Shape`]: crate::shape::Shape

pub use self::intersection_test::{
    intersection_test, intersection_test_circle_circle, intersection_test_circle_shape,
    intersection_test_shape_circle,
};
pub use self::sat::{
    points_circle_intersection_test, points_points_intersection_test,
    polygon_circle_intersection_test, polygon_polygon_intersection_test,
};

mod intersection_test;
pub mod sat;
