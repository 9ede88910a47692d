//! Serialized forms of the shapes.
//!
//! Only the parameters of a shape are stored. Its vertices and edge normals
//! are rebuilt, and validated, when it is deserialized.

use crate::math::{Point, Real, Vector};
use crate::shape::{
    IrregularPolygon, IsoTriangle, PointSet, Rectangle, RegularPolygon, ShapeError, INLINE_POINTS,
};
use crate::utils::NormalSide;
use smallvec::SmallVec;

#[derive(Serialize, Deserialize)]
pub(crate) struct PointSetRepr {
    points: SmallVec<[Point; INLINE_POINTS]>,
    #[serde(default)]
    side: NormalSide,
}

impl From<PointSet> for PointSetRepr {
    fn from(set: PointSet) -> Self {
        PointSetRepr {
            points: set.points().iter().copied().collect(),
            side: set.normal_side(),
        }
    }
}

impl TryFrom<PointSetRepr> for PointSet {
    type Error = ShapeError;

    fn try_from(repr: PointSetRepr) -> Result<Self, ShapeError> {
        PointSet::with_normal_side(repr.points, repr.side)
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct RectangleRepr {
    position: Point,
    size: Vector,
    rotation: Real,
    #[serde(default)]
    side: NormalSide,
}

impl From<Rectangle> for RectangleRepr {
    fn from(rect: Rectangle) -> Self {
        RectangleRepr {
            position: rect.position(),
            size: rect.size(),
            rotation: rect.rotation(),
            side: rect.point_set().normal_side(),
        }
    }
}

impl From<RectangleRepr> for Rectangle {
    fn from(repr: RectangleRepr) -> Self {
        let mut rect = Rectangle::new(repr.position, repr.size, repr.rotation);
        rect.set_normal_side(repr.side);
        rect
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct IsoTriangleRepr {
    position: Point,
    size: Vector,
    rotation: Real,
    #[serde(default)]
    side: NormalSide,
}

impl From<IsoTriangle> for IsoTriangleRepr {
    fn from(tri: IsoTriangle) -> Self {
        IsoTriangleRepr {
            position: tri.position(),
            size: tri.size(),
            rotation: tri.rotation(),
            side: tri.point_set().normal_side(),
        }
    }
}

impl From<IsoTriangleRepr> for IsoTriangle {
    fn from(repr: IsoTriangleRepr) -> Self {
        let mut tri = IsoTriangle::new(repr.position, repr.size, repr.rotation);
        tri.set_normal_side(repr.side);
        tri
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct RegularPolygonRepr {
    position: Point,
    radius: Real,
    sides: usize,
    rotation: Real,
    #[serde(default)]
    side: NormalSide,
}

impl From<RegularPolygon> for RegularPolygonRepr {
    fn from(poly: RegularPolygon) -> Self {
        RegularPolygonRepr {
            position: poly.position(),
            radius: poly.radius(),
            sides: poly.sides(),
            rotation: poly.rotation(),
            side: poly.point_set().normal_side(),
        }
    }
}

impl TryFrom<RegularPolygonRepr> for RegularPolygon {
    type Error = ShapeError;

    fn try_from(repr: RegularPolygonRepr) -> Result<Self, ShapeError> {
        let mut poly = RegularPolygon::new(repr.position, repr.radius, repr.sides, repr.rotation)?;
        poly.set_normal_side(repr.side);
        Ok(poly)
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct IrregularPolygonRepr {
    position: Point,
    rotation: Real,
    outline: SmallVec<[Point; INLINE_POINTS]>,
    #[serde(default)]
    side: NormalSide,
}

impl From<IrregularPolygon> for IrregularPolygonRepr {
    fn from(poly: IrregularPolygon) -> Self {
        IrregularPolygonRepr {
            position: poly.position(),
            rotation: poly.rotation(),
            outline: poly.outline().iter().copied().collect(),
            side: poly.point_set().normal_side(),
        }
    }
}

impl TryFrom<IrregularPolygonRepr> for IrregularPolygon {
    type Error = ShapeError;

    fn try_from(repr: IrregularPolygonRepr) -> Result<Self, ShapeError> {
        let mut poly = IrregularPolygon::new(repr.position, repr.rotation, repr.outline)?;
        poly.set_normal_side(repr.side);
        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query;
    use crate::shape::Shape;

    fn square() -> [Point; 4] {
        [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ]
    }

    #[test]
    fn point_set_serializes_points_only() {
        let set = PointSet::with_normal_side(square(), NormalSide::Right).unwrap();
        let json = serde_json::to_string(&set).unwrap();

        assert!(!json.contains("normals"));
        assert_eq!(serde_json::from_str::<PointSet>(&json).unwrap(), set);
    }

    #[test]
    fn point_set_rejects_too_few_points() {
        assert!(serde_json::from_str::<PointSet>(r#"{"points":[],"side":"Left"}"#).is_err());
        assert!(
            serde_json::from_str::<PointSet>(r#"{"points":[[0.0,0.0],[1.0,0.0]]}"#).is_err()
        );
    }

    #[test]
    fn point_set_recomputes_normals_on_load() {
        let json = r#"{
            "points": [[-1.0,-1.0],[1.0,-1.0],[1.0,1.0],[-1.0,1.0]],
            "normals": [],
            "side": "Right"
        }"#;
        let set: PointSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.normals().len(), 4);
        assert_eq!(
            set,
            PointSet::with_normal_side(square(), NormalSide::Right).unwrap()
        );
    }

    #[test]
    fn shapes_are_rebuilt_from_their_parameters() {
        // Stale vertices and normals in the input are ignored.
        let far = r#"{"Rectangle":{
            "position": [100.0, 0.0],
            "size": [2.0, 2.0],
            "rotation": 0.0,
            "points": {"points": [], "side": "Left"},
            "normals": []
        }}"#;
        let far: Shape = serde_json::from_str(far).unwrap();
        let near = Shape::from(Rectangle::new(Point::origin(), Vector::new(2.0, 2.0), 0.0));

        assert_eq!(far.points().len(), 4);
        assert_eq!(far.normals().len(), 4);
        assert!(!query::intersection_test(&far, &near));
        assert!(!far.intersects_circle(&crate::shape::Circle::new(Point::origin(), 1.0)));
    }

    #[test]
    fn invalid_polygon_parameters_are_rejected() {
        let json = r#"{"position":[0.0,0.0],"radius":1.0,"sides":2,"rotation":0.0}"#;
        assert!(serde_json::from_str::<RegularPolygon>(json).is_err());

        let json = r#"{"position":[0.0,0.0],"rotation":0.0,"outline":[[0.0,0.0],[1.0,1.0]]}"#;
        assert!(serde_json::from_str::<IrregularPolygon>(json).is_err());
    }

    #[test]
    fn every_shape_round_trips() {
        let shapes = [
            Shape::from(Rectangle::new(Point::new(1.0, 2.0), Vector::new(3.0, 1.0), 30.0)),
            Shape::from(IsoTriangle::new(Point::new(-1.0, 0.5), Vector::new(2.0, 2.0), 0.0)),
            Shape::from(RegularPolygon::new(Point::new(0.0, 3.0), 1.5, 7, 12.0).unwrap()),
            Shape::from(IrregularPolygon::new(Point::new(2.0, -2.0), 45.0, square()).unwrap()),
        ];

        for shape in shapes.iter() {
            let mut flipped = shape.clone();
            flipped.set_normal_side(NormalSide::Right);

            for original in [shape, &flipped] {
                let json = serde_json::to_string(original).unwrap();
                let loaded: Shape = serde_json::from_str(&json).unwrap();
                assert_eq!(&loaded, original);
            }
        }

        for a in shapes.iter() {
            for b in shapes.iter() {
                let a2: Shape = serde_json::from_str(&serde_json::to_string(a).unwrap()).unwrap();
                let b2: Shape = serde_json::from_str(&serde_json::to_string(b).unwrap()).unwrap();
                assert_eq!(query::intersection_test(&a2, &b2), query::intersection_test(a, b));
            }
        }
    }
}
