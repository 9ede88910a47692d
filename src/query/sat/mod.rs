//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! # What is the Separating Axis Theorem?
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis
//! onto which the projections of the two shapes do not overlap. For convex
//! polygons it is enough to try the normals of the edges of both polygons:
//! if none of them separates the projections, the polygons intersect.
//!
//! # How does the test run?
//!
//! 1. **Select candidate axes**: the edge normals of the first polygon, then
//!    those of the second.
//! 2. **Project both polygons onto each axis**: every vertex is projected
//!    with a dot product, giving one [`Interval`] per polygon.
//! 3. **Check for overlap**: the first pair of disjoint intervals ends the
//!    test. Intervals sharing a single bound overlap, so polygons touching
//!    along an edge intersect.
//!
//! The polygon-vs-circle test only uses the axis joining both centers.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use satcollide2d::math::{Point, Vector};
//! use satcollide2d::query::sat::*;
//! use satcollide2d::shape::Rectangle;
//!
//! let rect1 = Rectangle::new(Point::new(0.0, 0.0), Vector::new(2.0, 2.0), 0.0);
//! let rect2 = Rectangle::new(Point::new(3.0, 0.0), Vector::new(2.0, 2.0), 0.0);
//!
//! // The first normal of rect1 along which both boxes are separated.
//! let axis = polygon_polygon_find_separating_normal(&rect1.as_convex(), &rect2.as_convex());
//! assert!(axis.is_some());
//! assert!(!polygon_polygon_intersection_test(&rect1.as_convex(), &rect2.as_convex()));
//! # }
//! ```
//!
//! [`Interval`]: crate::utils::Interval

pub use self::projection::*;
pub use self::sat_polygon_circle::*;
pub use self::sat_polygon_polygon::*;

mod projection;
mod sat_polygon_circle;
mod sat_polygon_polygon;
