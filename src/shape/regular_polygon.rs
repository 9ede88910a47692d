use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexView, PointSet, ShapeError};
use crate::utils::{self, NormalSide, DEFAULT_NORMAL_SIDE};

/// A regular polygon inscribed in a circle of radius `radius`.
///
/// Its first vertex points up (toward `-y`) before the polygon rotation is
/// applied; the next ones follow every `360 / sides` degrees. The number of
/// sides is fixed once the polygon is created.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "crate::shape::serde_repr::RegularPolygonRepr",
        into = "crate::shape::serde_repr::RegularPolygonRepr"
    )
)]
#[derive(Clone, Debug, PartialEq)]
pub struct RegularPolygon {
    position: Point,
    radius: Real,
    sides: usize,
    rotation: Real,
    points: PointSet,
}

impl RegularPolygon {
    /// Creates a regular polygon centered at `position`, rotated by
    /// `rotation` degrees about its center.
    ///
    /// Fails if `sides < 3`.
    pub fn new(
        position: Point,
        radius: Real,
        sides: usize,
        rotation: Real,
    ) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewSides { sides });
        }

        let points = PointSet::build(
            Self::vertices(position, radius, sides),
            &position,
            rotation,
            DEFAULT_NORMAL_SIDE,
        );

        Ok(RegularPolygon {
            position,
            radius,
            sides,
            rotation,
            points,
        })
    }

    fn vertices(position: Point, radius: Real, sides: usize) -> impl Iterator<Item = Point> {
        let up = Vector::new(0.0, -radius);
        let step = 360.0 / sides as Real;

        (0..sides).map(move |i| {
            let rot = utils::rotation_from_degrees(step * i as Real);
            position + rot * up
        })
    }

    /// Sets the position, radius and rotation of this polygon at once.
    ///
    /// Returns `true` if the vertices were recomputed, i.e., if at least one
    /// parameter changed. The number of sides cannot be changed: build a new
    /// polygon instead.
    pub fn update(&mut self, position: Point, radius: Real, rotation: Real) -> bool {
        if self.position == position && self.radius == radius && self.rotation == rotation {
            log::trace!("Regular polygon unchanged, skipping its rebuild.");
            return false;
        }

        self.position = position;
        self.radius = radius;
        self.rotation = rotation;
        self.points.rebuild(
            Self::vertices(self.position, self.radius, self.sides),
            &self.position,
            self.rotation,
        );
        true
    }

    /// The center of this polygon.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The radius of the circle this polygon is inscribed in.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The number of sides of this polygon.
    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }

    /// The rotation in degrees.
    #[inline]
    pub fn rotation(&self) -> Real {
        self.rotation
    }

    /// The vertices.
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
