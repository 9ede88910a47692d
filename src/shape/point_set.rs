use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexView, ShapeError};
use crate::utils::{self, NormalSide, DEFAULT_NORMAL_SIDE};
use smallvec::SmallVec;

/// Number of vertices a [`PointSet`] stores without allocating.
pub const INLINE_POINTS: usize = 8;

/// The vertices of a convex polygon, along with the normals of its edges.
///
/// The normals are recomputed every time the points change, so they can
/// never get out of sync with the polygon they describe. Up to
/// [`INLINE_POINTS`] vertices are stored inline; larger polygons spill to the
/// heap. The storage is released when the point set is dropped.
///
/// Only the points and the normal side are serialized. Deserialization
/// checks the point count and recomputes the normals.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "crate::shape::serde_repr::PointSetRepr",
        into = "crate::shape::serde_repr::PointSetRepr"
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: SmallVec<[Point; INLINE_POINTS]>,
    normals: SmallVec<[Vector; INLINE_POINTS]>,
    side: NormalSide,
}

impl PointSet {
    /// Creates a point set from the vertices of a convex polygon.
    ///
    /// The vertices must be given in a consistent winding order. Convexity
    /// is not checked. Fails if fewer than 3 points are given.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Result<Self, ShapeError> {
        Self::with_normal_side(points, DEFAULT_NORMAL_SIDE)
    }

    /// Creates a point set whose edge normals are computed with the given side.
    pub fn with_normal_side(
        points: impl IntoIterator<Item = Point>,
        side: NormalSide,
    ) -> Result<Self, ShapeError> {
        let points: SmallVec<[Point; INLINE_POINTS]> = points.into_iter().collect();

        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints { len: points.len() });
        }

        let mut result = PointSet {
            points,
            normals: SmallVec::new(),
            side,
        };
        result.recompute_normals();
        Ok(result)
    }

    /// Builds the point set of a shape: the given points rotated by `degrees`
    /// about `pivot`.
    ///
    /// The caller guarantees there are at least 3 points.
    pub(crate) fn build(
        points: impl IntoIterator<Item = Point>,
        pivot: &Point,
        degrees: Real,
        side: NormalSide,
    ) -> Self {
        let mut result = PointSet {
            points: SmallVec::new(),
            normals: SmallVec::new(),
            side,
        };
        result.rebuild(points, pivot, degrees);
        result
    }

    /// Replaces every point by the given ones rotated by `degrees` about
    /// `pivot`, then recomputes the normals.
    ///
    /// The caller guarantees there are at least 3 points.
    pub(crate) fn rebuild(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        pivot: &Point,
        degrees: Real,
    ) {
        self.points.clear();
        self.points.extend(points);
        debug_assert!(self.points.len() >= 3);

        if degrees != 0.0 {
            utils::rotate_points_about(&mut self.points, pivot, degrees);
        }

        self.recompute_normals();
    }

    /// Replaces every point of this set.
    ///
    /// Fails, leaving `self` unchanged, if fewer than 3 points are given.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Point>) -> Result<(), ShapeError> {
        *self = Self::with_normal_side(points, self.side)?;
        Ok(())
    }

    fn recompute_normals(&mut self) {
        self.normals.clear();
        utils::edge_normals_to(&self.points, self.side, &mut self.normals);
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The normals of the edges of this polygon.
    ///
    /// The `i`-th normal is the one of the edge `(points[i], points[i + 1])`
    /// (wrapping around for the last one). Normals are not normalized.
    #[inline]
    pub fn normals(&self) -> &[Vector] {
        &self.normals
    }

    /// The number of vertices (and of edges) of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a point set has at least three points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Does this point set store its vertices on the heap?
    #[inline]
    pub fn spilled(&self) -> bool {
        self.points.spilled()
    }

    /// The side used to compute the edge normals.
    #[inline]
    pub fn normal_side(&self) -> NormalSide {
        self.side
    }

    /// Changes the side used to compute the edge normals.
    pub fn set_normal_side(&mut self, side: NormalSide) {
        if self.side != side {
            self.side = side;
            self.recompute_normals();
        }
    }

    /// A view of this polygon reusing its precomputed normals.
    #[inline]
    pub fn as_convex(&self) -> ConvexView<'_> {
        ConvexView::from_parts(&self.points, Some(&self.normals), self.side)
    }
}
