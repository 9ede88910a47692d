use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexView, PointSet};
use crate::utils::{NormalSide, DEFAULT_NORMAL_SIDE};

/// An isosceles triangle, symmetric about the vertical axis of its own frame.
///
/// Its apex sits at the middle of the top side of the `size` box and its
/// base spans the bottom side (with the `y` axis pointing down). The points
/// are ordered apex, bottom-right, bottom-left.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        from = "crate::shape::serde_repr::IsoTriangleRepr",
        into = "crate::shape::serde_repr::IsoTriangleRepr"
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct IsoTriangle {
    position: Point,
    size: Vector,
    rotation: Real,
    points: PointSet,
}

impl IsoTriangle {
    /// Creates a triangle fitting a `size` box centered at `position`,
    /// rotated by `rotation` degrees about `position`.
    pub fn new(position: Point, size: Vector, rotation: Real) -> Self {
        let points = PointSet::build(
            Self::corners(&position, &size),
            &position,
            rotation,
            DEFAULT_NORMAL_SIDE,
        );

        IsoTriangle {
            position,
            size,
            rotation,
            points,
        }
    }

    fn corners(position: &Point, size: &Vector) -> [Point; 3] {
        let half = size / 2.0;

        [
            position + Vector::new(0.0, -half.y),
            position + half,
            position + Vector::new(-half.x, half.y),
        ]
    }

    /// Sets all the parameters of this triangle at once.
    ///
    /// Returns `true` if the points were recomputed, i.e., if at least one
    /// parameter changed.
    pub fn update(&mut self, position: Point, size: Vector, rotation: Real) -> bool {
        if self.position == position && self.size == size && self.rotation == rotation {
            log::trace!("Triangle unchanged, skipping its rebuild.");
            return false;
        }

        self.position = position;
        self.size = size;
        self.rotation = rotation;
        self.points.rebuild(
            Self::corners(&self.position, &self.size),
            &self.position,
            self.rotation,
        );
        true
    }

    /// Moves this triangle without changing its size or rotation.
    ///
    /// Cheap for an unrotated triangle; a rotated one is fully rebuilt.
    pub fn set_position(&mut self, position: Point) -> bool {
        if self.position == position {
            return false;
        }

        if !self.is_axis_aligned() {
            return self.update(position, self.size, self.rotation);
        }

        self.position = position;
        self.points
            .rebuild(Self::corners(&self.position, &self.size), &self.position, 0.0);
        true
    }

    /// The center of the bounding box of this triangle.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The size of the bounding box of this triangle.
    #[inline]
    pub fn size(&self) -> Vector {
        self.size
    }

    /// The rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// Is this triangle free of any rotation?
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation == 0.0
    }

    /// The three vertices.
    #[inline]
    pub fn points(&self) -> &[Point] {
        self.points.points()
    }

    /// The three edge normals.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        self.points.normals()
    }

    /// The vertices with their edge normals.
    #[inline]
    pub fn point_set(&self) -> &PointSet {
        &self.points
    }

    /// Changes the side used to compute the edge normals.
    pub fn set_normal_side(&mut self, side: NormalSide) {
        self.points.set_normal_side(side)
    }

    /// A view of this triangle for the separating-axis tests.
    #[inline]
    pub fn as_convex(&self) -> ConvexView<'_> {
        self.points.as_convex()
    }
}
