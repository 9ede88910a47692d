use crate::math::{Point, Real, Vector};
use crate::query;
use crate::shape::{
    Circle, ConvexView, IrregularPolygon, IsoTriangle, PointSet, Rectangle, RegularPolygon,
};
use crate::utils::NormalSide;

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A rotated box.
    Rectangle,
    /// An isosceles triangle.
    IsoTriangle,
    /// A regular polygon.
    RegularPolygon,
    /// A polygon with a caller-supplied outline.
    IrregularPolygon,
}

/// Any of the convex polygons supported by this crate.
///
/// Every variant keeps its vertices and edge normals up to date with its
/// parameters, so the collision queries only ever see [`Shape::as_convex`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A rotated box.
    Rectangle(Rectangle),
    /// An isosceles triangle.
    IsoTriangle(IsoTriangle),
    /// A regular polygon.
    RegularPolygon(RegularPolygon),
    /// A polygon with a caller-supplied outline.
    IrregularPolygon(IrregularPolygon),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::IsoTriangle(_) => ShapeType::IsoTriangle,
            Shape::RegularPolygon(_) => ShapeType::RegularPolygon,
            Shape::IrregularPolygon(_) => ShapeType::IrregularPolygon,
        }
    }

    /// The vertices of this shape with their edge normals.
    pub fn point_set(&self) -> &PointSet {
        match self {
            Shape::Rectangle(s) => s.point_set(),
            Shape::IsoTriangle(s) => s.point_set(),
            Shape::RegularPolygon(s) => s.point_set(),
            Shape::IrregularPolygon(s) => s.point_set(),
        }
    }

    /// The vertices of this shape.
    #[inline]
    pub fn points(&self) -> &[Point] {
        self.point_set().points()
    }

    /// The edge normals of this shape.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        self.point_set().normals()
    }

    /// A view of this shape for the separating-axis tests.
    #[inline]
    pub fn as_convex(&self) -> ConvexView<'_> {
        self.point_set().as_convex()
    }

    /// The position (center) of this shape.
    pub fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::IsoTriangle(s) => s.position(),
            Shape::RegularPolygon(s) => s.position(),
            Shape::IrregularPolygon(s) => s.position(),
        }
    }

    /// The rotation of this shape about its position, in degrees.
    pub fn rotation(&self) -> Real {
        match self {
            Shape::Rectangle(s) => s.rotation(),
            Shape::IsoTriangle(s) => s.rotation(),
            Shape::RegularPolygon(s) => s.rotation(),
            Shape::IrregularPolygon(s) => s.rotation(),
        }
    }

    /// Moves this shape, keeping all its other parameters.
    ///
    /// Returns `true` if its vertices were recomputed.
    pub fn set_position(&mut self, position: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.set_position(position),
            Shape::IsoTriangle(s) => s.set_position(position),
            Shape::RegularPolygon(s) => s.update(position, s.radius(), s.rotation()),
            Shape::IrregularPolygon(s) => s.update(position, s.rotation()),
        }
    }

    /// Rotates this shape about its position, keeping all its other parameters.
    ///
    /// Returns `true` if its vertices were recomputed.
    pub fn set_rotation(&mut self, rotation: Real) -> bool {
        match self {
            Shape::Rectangle(s) => s.update(s.position(), s.size(), rotation),
            Shape::IsoTriangle(s) => s.update(s.position(), s.size(), rotation),
            Shape::RegularPolygon(s) => s.update(s.position(), s.radius(), rotation),
            Shape::IrregularPolygon(s) => s.update(s.position(), rotation),
        }
    }

    /// Changes the side used to compute the edge normals.
    pub fn set_normal_side(&mut self, side: NormalSide) {
        match self {
            Shape::Rectangle(s) => s.set_normal_side(side),
            Shape::IsoTriangle(s) => s.set_normal_side(side),
            Shape::RegularPolygon(s) => s.set_normal_side(side),
            Shape::IrregularPolygon(s) => s.set_normal_side(side),
        }
    }

    /// Does this shape intersect `other`?
    #[inline]
    pub fn intersects(&self, other: &Shape) -> bool {
        query::intersection_test(self, other)
    }

    /// Does this shape intersect the given circle?
    #[inline]
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        query::intersection_test_shape_circle(self, circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<IsoTriangle> for Shape {
    fn from(s: IsoTriangle) -> Self {
        Shape::IsoTriangle(s)
    }
}

impl From<RegularPolygon> for Shape {
    fn from(s: RegularPolygon) -> Self {
        Shape::RegularPolygon(s)
    }
}

impl From<IrregularPolygon> for Shape {
    fn from(s: IrregularPolygon) -> Self {
        Shape::IrregularPolygon(s)
    }
}
