//! Rotated 2D box.

use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexView, PointSet};
use crate::utils::{NormalSide, DEFAULT_NORMAL_SIDE};

/// A box given by its center, its size and a rotation about its center.
///
/// Its four corners are kept up to date with these parameters. In the
/// unrotated frame they are ordered top-left, top-right, bottom-right,
/// bottom-left, with the `y` axis pointing down.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        from = "crate::shape::serde_repr::RectangleRepr",
        into = "crate::shape::serde_repr::RectangleRepr"
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    position: Point,
    size: Vector,
    rotation: Real,
    points: PointSet,
}

impl Rectangle {
    /// Creates a box centered at `position` with the given width and height,
    /// rotated by `rotation` degrees about its center.
    pub fn new(position: Point, size: Vector, rotation: Real) -> Self {
        let points = PointSet::build(
            Self::corners(&position, &size),
            &position,
            rotation,
            DEFAULT_NORMAL_SIDE,
        );

        Rectangle {
            position,
            size,
            rotation,
            points,
        }
    }

    /// The unrotated corners of a box.
    fn corners(position: &Point, size: &Vector) -> [Point; 4] {
        let half = size / 2.0;

        [
            position + Vector::new(-half.x, -half.y),
            position + Vector::new(half.x, -half.y),
            position + half,
            position + Vector::new(-half.x, half.y),
        ]
    }

    /// Sets all the parameters of this box at once.
    ///
    /// The corners are recomputed only if at least one parameter changed.
    /// Returns `true` if they were.
    pub fn update(&mut self, position: Point, size: Vector, rotation: Real) -> bool {
        if self.position == position && self.size == size && self.rotation == rotation {
            log::trace!("Rectangle unchanged, skipping its rebuild.");
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

    /// Moves this box without changing its size or rotation.
    ///
    /// An axis-aligned box gets its corners recomputed from the new position
    /// alone. A rotated box goes through the full rebuild.
    /// Returns `true` if the corners changed.
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

    /// The center of this box.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The width and height of this box.
    #[inline]
    pub fn size(&self) -> Vector {
        self.size
    }

    /// Half the width and half the height of this box.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        self.size / 2.0
    }

    /// The rotation of this box about its center, in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// Is this box free of any rotation?
    #[inline]
    pub fn is_axis_aligned(&self) -> bool {
        self.rotation == 0.0
    }

    /// The four corners of this box.
    #[inline]
    pub fn points(&self) -> &[Point] {
        self.points.points()
    }

    /// The normals of the four edges of this box.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        self.points.normals()
    }

    /// The corners of this box with their edge normals.
    #[inline]
    pub fn point_set(&self) -> &PointSet {
        &self.points
    }

    /// Changes the side used to compute the edge normals.
    pub fn set_normal_side(&mut self, side: NormalSide) {
        self.points.set_normal_side(side)
    }

    /// A view of this box for the separating-axis tests.
    #[inline]
    pub fn as_convex(&self) -> ConvexView<'_> {
        self.points.as_convex()
    }
}
