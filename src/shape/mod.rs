//! Shapes supported by satcollide.

pub use self::circle::Circle;
pub use self::convex_view::ConvexView;
pub use self::error::ShapeError;
pub use self::irregular_polygon::IrregularPolygon;
pub use self::iso_triangle::IsoTriangle;
pub use self::point_set::{PointSet, INLINE_POINTS};
pub use self::rectangle::Rectangle;
pub use self::regular_polygon::RegularPolygon;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};

mod circle;
mod convex_view;
mod error;
mod irregular_polygon;
mod iso_triangle;
mod point_set;
mod rectangle;
mod regular_polygon;
#[cfg(feature = "serde")]
mod serde_repr;
mod shape;
