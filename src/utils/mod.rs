//! Various unsorted geometrical operators.

pub use self::edge_normal::{
    edge_normal, edge_normals, edge_normals_to, NormalSide, DEFAULT_NORMAL_SIDE,
};
pub use self::interval::Interval;
pub use self::rotation::{rotate_about, rotate_points_about, rotation_from_degrees};

mod edge_normal;
mod interval;
mod rotation;
