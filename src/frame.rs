//! Frame indexing and reference-frame conventions shared with the kinematic tree.

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// The index of a frame in the companion kinematic tree.
///
/// Frame indices are opaque identifiers from this crate's point of view: they
/// are resolved by the kinematic tree, not here.
pub type FrameIndex = usize;

/// The frame index of a contact not attached to any frame yet.
///
/// This sentinel must never be used to look up the kinematic-tree frame table.
pub const UNSET_FRAME: FrameIndex = FrameIndex::MAX;

/// The coordinate frame in which a spatial quantity is expressed.
///
/// Velocities, accelerations, and forces attached to a contact are meaningful
/// only relative to the reference frame declared alongside them. Combining or
/// comparing quantities expressed in different reference frames without
/// transforming them first is a caller error that cannot be detected here.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceFrame {
    /// The inertial world frame.
    World,
    /// The local frame of the body the quantity is attached to.
    Local,
    /// A frame centered at the body but with axes aligned with the world frame.
    LocalWorldAligned,
}

impl Default for ReferenceFrame {
    #[inline]
    fn default() -> Self {
        ReferenceFrame::World
    }
}
