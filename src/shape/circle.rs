use crate::math::{Point, Real};

/// A circle, the round operand of the polygon-vs-circle tests.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Circle {
    /// The center of the circle.
    pub position: Point,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given center and radius.
    #[inline]
    pub fn new(position: Point, radius: Real) -> Circle {
        Circle { position, radius }
    }
}
