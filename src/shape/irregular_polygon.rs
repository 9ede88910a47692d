use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexView, PointSet, ShapeError, INLINE_POINTS};
use crate::utils::{NormalSide, DEFAULT_NORMAL_SIDE};
use smallvec::SmallVec;

/// A convex polygon with an arbitrary, caller-supplied outline.
///
/// The outline is expressed in the local frame of the polygon: relative to
/// `position` and before `rotation` is applied. Convexity and winding order
/// are the caller's responsibility.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "crate::shape::serde_repr::IrregularPolygonRepr",
        into = "crate::shape::serde_repr::IrregularPolygonRepr"
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct IrregularPolygon {
    position: Point,
    rotation: Real,
    outline: SmallVec<[Point; INLINE_POINTS]>,
    points: PointSet,
}

impl IrregularPolygon {
    /// Creates a polygon from its local outline, placed at `position` and
    /// rotated by `rotation` degrees about it.
    ///
    /// Fails if the outline has fewer than 3 points.
    pub fn new(
        position: Point,
        rotation: Real,
        outline: impl IntoIterator<Item = Point>,
    ) -> Result<Self, ShapeError> {
        let outline: SmallVec<[Point; INLINE_POINTS]> = outline.into_iter().collect();

        if outline.len() < 3 {
            return Err(ShapeError::TooFewPoints { len: outline.len() });
        }

        let points = PointSet::build(
            Self::placed(&outline, position),
            &position,
            rotation,
            DEFAULT_NORMAL_SIDE,
        );

        Ok(IrregularPolygon {
            position,
            rotation,
            outline,
            points,
        })
    }

    fn placed(outline: &[Point], position: Point) -> impl Iterator<Item = Point> + '_ {
        outline.iter().map(move |pt| position + pt.coords)
    }

    fn rebuild(&mut self) {
        self.points.rebuild(
            Self::placed(&self.outline, self.position),
            &self.position,
            self.rotation,
        );
    }

    /// Moves and rotates this polygon.
    ///
    /// Returns `true` if the points were recomputed, i.e., if at least one
    /// parameter changed.
    pub fn update(&mut self, position: Point, rotation: Real) -> bool {
        if self.position == position && self.rotation == rotation {
            log::trace!("Irregular polygon unchanged, skipping its rebuild.");
            return false;
        }

        self.position = position;
        self.rotation = rotation;
        self.rebuild();
        true
    }

    /// Replaces the local outline of this polygon.
    ///
    /// Fails, leaving `self` unchanged, if fewer than 3 points are given.
    pub fn set_outline(&mut self, outline: impl IntoIterator<Item = Point>) -> Result<(), ShapeError> {
        let outline: SmallVec<[Point; INLINE_POINTS]> = outline.into_iter().collect();

        if outline.len() < 3 {
            return Err(ShapeError::TooFewPoints { len: outline.len() });
        }

        self.outline = outline;
        self.rebuild();
        Ok(())
    }

    /// The outline of this polygon in its local frame.
    #[inline]
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// The position of this polygon.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The vertices, placed in the world.
    #[inline]
    pub fn points(&self) -> &[Point] {
        self.points.points()
    }

    /// The edge normals.
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

    /// A view of this polygon for the separating-axis tests.
    #[inline]
    pub fn as_convex(&self) -> ConvexView<'_> {
        self.points.as_convex()
    }
}
