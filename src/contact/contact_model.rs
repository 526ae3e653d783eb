use na::RealField;
use simba::scalar::SubsetOf;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::frame::{FrameIndex, ReferenceFrame, UNSET_FRAME};
use crate::math::{Isometry, Motion};

/// The type of a rigid contact constraint.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactType {
    /// Point contact: constrains the three translational components of the
    /// relative motion at the attachment frame.
    Point3D,
    /// Frame contact: constrains the full rigid relative motion (translation
    /// and rotation) of the attachment frame.
    Frame6D,
    /// A contact whose type has not been defined yet.
    Undefined,
}

impl ContactType {
    /// The number of scalar constraint equations induced by this contact type.
    ///
    /// This mapping is the single source of truth for constraint
    /// dimensionality. It is a `const fn` so storage sized off a statically
    /// known contact type can be fixed-size. `Undefined` yields 0.
    #[inline]
    pub const fn dimension(self) -> usize {
        match self {
            ContactType::Point3D => 3,
            ContactType::Frame6D => 6,
            ContactType::Undefined => 0,
        }
    }
}

impl Default for ContactType {
    #[inline]
    fn default() -> Self {
        ContactType::Undefined
    }
}

/// The model of a rigid contact constraint: what the constraint is, where it is
/// attached, and its desired target kinematics.
///
/// A model is constructed once per contact definition and stays immutable in
/// practice afterwards, except for updates to the desired-target fields. The
/// external solver reads it to know the constraint shape (`size`) and targets.
///
/// # Equality
///
/// Two models compare equal iff their `contact_type`, `frame_id`, and
/// `reference_frame` match. The desired-target fields are deliberately excluded
/// so that two contacts with the same attachment and type but different target
/// trajectories are considered the same contact when diffing contact sets
/// across steps. This is the opposite of [`ContactData`](crate::contact::ContactData),
/// whose equality is exact over every field.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ContactModel<N: RealField> {
    /// The type of this contact. Determines the constraint dimension through
    /// [`ContactType::dimension`].
    pub contact_type: ContactType,
    /// Index of the attachment frame in the companion kinematic tree.
    ///
    /// Defaults to [`UNSET_FRAME`](crate::frame::UNSET_FRAME), which must never
    /// be resolved against the frame table. Validity of any other value is the
    /// kinematic tree's responsibility, not this model's.
    pub frame_id: FrameIndex,
    /// Reference frame in which the desired and computed quantities of this
    /// contact are expressed.
    pub reference_frame: ReferenceFrame,
    /// Desired placement of the contact frame. Meaningful chiefly for 6D
    /// contacts.
    pub desired_placement: Isometry<N>,
    /// Desired spatial velocity of the contact frame.
    pub desired_velocity: Motion<N>,
    /// Desired spatial acceleration of the contact frame (feed-forward term
    /// for constraint stabilization).
    pub desired_acceleration: Motion<N>,
}

impl<N: RealField> ContactModel<N> {
    /// Creates a contact model of the given type attached to the frame
    /// `frame_id`, expressed in the world reference frame.
    ///
    /// The desired targets are initialized to the identity placement and zero
    /// velocity/acceleration.
    pub fn new(contact_type: ContactType, frame_id: FrameIndex) -> Self {
        Self::new_with_reference_frame(contact_type, frame_id, ReferenceFrame::World)
    }

    /// Creates a contact model of the given type attached to the frame
    /// `frame_id`, expressed in the given reference frame.
    pub fn new_with_reference_frame(
        contact_type: ContactType,
        frame_id: FrameIndex,
        reference_frame: ReferenceFrame,
    ) -> Self {
        ContactModel {
            contact_type,
            frame_id,
            reference_frame,
            desired_placement: Isometry::identity(),
            desired_velocity: Motion::zero(),
            desired_acceleration: Motion::zero(),
        }
    }

    /// The constraint dimension of this contact: 3 for a point contact, 6 for
    /// a frame contact, 0 if undefined.
    #[inline]
    pub fn size(&self) -> usize {
        self.contact_type.dimension()
    }

    /// Converts every scalar-valued field of this model to the `N2` scalar
    /// type.
    ///
    /// `contact_type`, `frame_id`, and `reference_frame` are copied unchanged.
    /// The original model is left untouched; this is used to retarget a contact
    /// description to another precision or to a differentiable scalar.
    pub fn cast<N2: RealField>(&self) -> ContactModel<N2>
    where
        N: SubsetOf<N2>,
    {
        ContactModel {
            contact_type: self.contact_type,
            frame_id: self.frame_id,
            reference_frame: self.reference_frame,
            desired_placement: self.desired_placement.clone().cast(),
            desired_velocity: self.desired_velocity.cast(),
            desired_acceleration: self.desired_acceleration.cast(),
        }
    }
}

impl<N: RealField> Default for ContactModel<N> {
    fn default() -> Self {
        Self::new(ContactType::Undefined, UNSET_FRAME)
    }
}

impl<N: RealField> PartialEq for ContactModel<N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.contact_type == other.contact_type
            && self.frame_id == other.frame_id
            && self.reference_frame == other.reference_frame
    }
}
