/*!
satcollide
==========

**satcollide** is a 2-dimensional convex overlap library written with
the rust programming language. It answers one question, "do these two
shapes touch?", using the Separating Axis Theorem.

```
# #[cfg(feature = "f32")] {
use satcollide2d::math::{Point, Vector};
use satcollide2d::query;
use satcollide2d::shape::{Circle, Rectangle};

let a = Rectangle::new(Point::new(0.0, 0.0), Vector::new(2.0, 2.0), 0.0);
let b = Rectangle::new(Point::new(1.9, 0.0), Vector::new(2.0, 2.0), 45.0);
assert!(query::polygon_polygon_intersection_test(&a.as_convex(), &b.as_convex()));

let ball = Circle::new(Point::new(5.0, 0.0), 1.0);
assert!(!query::intersection_test_shape_circle(&a.into(), &ball));
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitComplex, Vector2};

    /// The point type.
    pub type Point = Point2<Real>;

    /// The vector type.
    pub type Vector = Vector2<Real>;

    /// The rotation type.
    pub type Rotation = UnitComplex<Real>;
}
