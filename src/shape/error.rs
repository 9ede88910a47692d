/// Errors raised when building a shape or a convex view from invalid inputs.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A convex point set needs at least three points.
    #[error("a convex point set needs at least 3 points, got {len}.")]
    TooFewPoints {
        /// The number of points given.
        len: usize,
    },
    /// A regular polygon needs at least three sides.
    #[error("a regular polygon needs at least 3 sides, got {sides}.")]
    TooFewSides {
        /// The number of sides given.
        sides: usize,
    },
    /// Precomputed normals must match the edges of the point set one-to-one.
    #[error("{normals} edge normals were given for a polygon with {points} edges.")]
    NormalsMismatch {
        /// The number of points (hence of edges).
        points: usize,
        /// The number of normals given.
        normals: usize,
    },
}
