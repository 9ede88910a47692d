use crate::math::{Point, Vector};

/// Selects which of the two perpendiculars of an edge is used as its normal.
///
/// Under the winding order produced by the shape builders of this crate,
/// [`NormalSide::Left`] gives outward normals. The separating-axis tests only
/// need *an* axis perpendicular to each edge, so both sides yield the same
/// collision results; the side matters to callers that reuse the normals for
/// other purposes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormalSide {
    /// Swap the edge components, then negate the `x` component.
    #[default]
    Left,
    /// Swap the edge components, then negate the `y` component.
    Right,
}

/// The normal side used by every shape unless told otherwise.
pub const DEFAULT_NORMAL_SIDE: NormalSide = NormalSide::Left;

/// Computes a vector perpendicular to the edge going from `b` to `a`.
///
/// The edge vector `a - b` has its components swapped, then one of them is
/// negated depending on `side`. The result is not normalized: the interval
/// overlap test is invariant to the axis length.
///
/// A degenerate edge (`a == b`) yields the zero vector.
#[inline]
pub fn edge_normal(a: &Point, b: &Point, side: NormalSide) -> Vector {
    let ab = a - b;

    match side {
        NormalSide::Left => Vector::new(-ab.y, ab.x),
        NormalSide::Right => Vector::new(ab.y, -ab.x),
    }
}

/// Iterates through the normals of every edge of the closed polyline `points`.
///
/// The `i`-th normal is the one of the edge `(points[i], points[i + 1])`; the
/// last one closes the polyline with the edge `(points[n - 1], points[0])`.
pub fn edge_normals(
    points: &[Point],
    side: NormalSide,
) -> impl ExactSizeIterator<Item = Vector> + '_ {
    (0..points.len()).map(move |i1| {
        let i2 = (i1 + 1) % points.len();
        let normal = edge_normal(&points[i1], &points[i2], side);

        if normal.x == 0.0 && normal.y == 0.0 {
            log::debug!(
                "Degenerate edge ({}, {}): its normal has a zero length.",
                i1,
                i2
            );
        }

        normal
    })
}

/// Appends the normals of every edge of the closed polyline `points` to `out`.
///
/// Same normals, in the same order, as [`edge_normals`]. `out` is not
/// cleared first, so a buffer can be reused across calls.
pub fn edge_normals_to(points: &[Point], side: NormalSide, out: &mut impl Extend<Vector>) {
    out.extend(edge_normals(points, side));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_normal_is_perpendicular() {
        let a = Point::new(3.0, 1.0);
        let b = Point::new(-1.0, 2.0);

        for side in [NormalSide::Left, NormalSide::Right] {
            let n = edge_normal(&a, &b, side);
            assert_eq!(n.dot(&(a - b)), 0.0);
            assert_eq!(n.norm_squared(), (a - b).norm_squared());
        }

        assert_eq!(
            edge_normal(&a, &b, NormalSide::Left),
            -edge_normal(&a, &b, NormalSide::Right)
        );
    }

    #[test]
    fn edge_normal_swaps_then_negates() {
        let a = Point::new(1.0, 0.0);
        let b = Point::new(0.0, 0.0);

        assert_eq!(
            edge_normal(&a, &b, NormalSide::Left),
            Vector::new(0.0, 1.0)
        );
        assert_eq!(
            edge_normal(&a, &b, NormalSide::Right),
            Vector::new(0.0, -1.0)
        );
    }

    #[test]
    fn degenerate_edge_has_zero_normal() {
        let a = Point::new(4.0, 4.0);
        assert_eq!(edge_normal(&a, &a, NormalSide::Left), Vector::zeros());
    }

    #[test]
    fn edge_normals_wrap_around() {
        let square = [
            Point::new(-1.0, -1.0),
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ];
        let normals: [Vector; 4] = core::array::from_fn({
            let mut it = edge_normals(&square, NormalSide::Left);
            move |_| it.next().unwrap()
        });

        assert_eq!(edge_normals(&square, NormalSide::Left).len(), 4);
        assert_eq!(
            normals[3],
            edge_normal(&square[3], &square[0], NormalSide::Left)
        );

        for (i, n) in normals.iter().enumerate() {
            let edge = square[(i + 1) % 4] - square[i];
            assert_eq!(n.dot(&edge), 0.0);
        }
    }

    #[test]
    fn edge_normals_to_appends_into_buffer() {
        let tri = [
            Point::new(0.0, -1.0),
            Point::new(1.0, 1.0),
            Point::new(-1.0, 1.0),
        ];
        let mut buf = smallvec::SmallVec::<[Vector; 8]>::new();

        edge_normals_to(&tri, NormalSide::Right, &mut buf);
        assert_eq!(buf.len(), 3);
        assert!(buf
            .iter()
            .copied()
            .eq(edge_normals(&tri, NormalSide::Right)));

        buf.clear();
        edge_normals_to(&tri, NormalSide::Left, &mut buf);
        assert_eq!(buf[2], edge_normal(&tri[2], &tri[0], NormalSide::Left));
    }
}
