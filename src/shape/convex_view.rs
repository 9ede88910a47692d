use crate::math::{Point, Vector};
use crate::shape::ShapeError;
use crate::utils::{self, NormalSide, DEFAULT_NORMAL_SIDE};
use either::Either;

/// A borrowed convex polygon, as consumed by the separating-axis tests.
///
/// The view may carry the precomputed normals of the polygon edges. When it
/// doesn't, the normals are derived on the fly, edge by edge, while the test
/// runs. Both kinds of views can be mixed freely in a single test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConvexView<'a> {
    points: &'a [Point],
    normals: Option<&'a [Vector]>,
    side: NormalSide,
}

impl<'a> ConvexView<'a> {
    /// A view of the given convex polygon that computes its normals lazily.
    ///
    /// Fails if fewer than 3 points are given.
    pub fn new(points: &'a [Point]) -> Result<Self, ShapeError> {
        Self::with_normal_side(points, DEFAULT_NORMAL_SIDE)
    }

    /// A view that computes its normals lazily with the given side.
    pub fn with_normal_side(points: &'a [Point], side: NormalSide) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints { len: points.len() });
        }

        Ok(Self::from_parts(points, None, side))
    }

    /// A view of a convex polygon reusing normals computed earlier.
    ///
    /// `normals[i]` must be the normal of the edge `(points[i], points[i + 1])`
    /// (wrapping around). Only the count is checked.
    pub fn with_normals(points: &'a [Point], normals: &'a [Vector]) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints { len: points.len() });
        }

        if normals.len() != points.len() {
            return Err(ShapeError::NormalsMismatch {
                points: points.len(),
                normals: normals.len(),
            });
        }

        Ok(Self::from_parts(points, Some(normals), DEFAULT_NORMAL_SIDE))
    }

    pub(crate) fn from_parts(
        points: &'a [Point],
        normals: Option<&'a [Vector]>,
        side: NormalSide,
    ) -> Self {
        ConvexView {
            points,
            normals,
            side,
        }
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn points(&self) -> &'a [Point] {
        self.points
    }

    /// The precomputed normals, if this view carries them.
    #[inline]
    pub fn cached_normals(&self) -> Option<&'a [Vector]> {
        self.normals
    }

    /// The same polygon, with its normals always derived on the fly.
    #[inline]
    pub fn without_cached_normals(self) -> Self {
        Self::from_parts(self.points, None, self.side)
    }

    /// The normal of the `i`-th edge.
    #[inline]
    pub fn normal(&self, i: usize) -> Vector {
        match self.normals {
            Some(normals) => normals[i],
            None => {
                let j = (i + 1) % self.points.len();
                utils::edge_normal(&self.points[i], &self.points[j], self.side)
            }
        }
    }

    /// Iterates through the normals of every edge of this polygon.
    pub fn normals(&self) -> impl ExactSizeIterator<Item = Vector> + 'a {
        match self.normals {
            Some(normals) => Either::Left(normals.iter().copied()),
            None => Either::Right(utils::edge_normals(self.points, self.side)),
        }
    }
}
