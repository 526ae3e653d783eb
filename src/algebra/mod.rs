//! Dynamics-specific algebraic entities: spatial motions and spatial forces.

pub use self::force3::Force3;
pub use self::motion3::Motion3;

mod force3;
mod motion3;
