//! Aliases for mathematical types.

use na::{Isometry3, Point3, UnitQuaternion, Vector6};

/// The dimension of a spatial vector (linear and angular parts stacked).
pub const SPATIAL_DIM: usize = 6;

/// The point type.
pub type Point<N> = Point3<N>;

/// The vector type with dimension `SPATIAL_DIM`.
pub type SpatialVector<N> = Vector6<N>;

/// The transformation matrix type.
pub type Isometry<N> = Isometry3<N>;

/// The rotation type.
pub type Rotation<N> = UnitQuaternion<N>;

/// The type of a spatial motion (velocity or acceleration).
pub type Motion<N> = crate::algebra::Motion3<N>;

/// The type of a spatial force.
pub type Force<N> = crate::algebra::Force3<N>;
