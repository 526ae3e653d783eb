use na::RealField;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::contact::ContactModel;
use crate::math::{Force, Motion};

/// The per-step record of quantities computed for one rigid contact.
///
/// One `ContactData` exists per active contact per solver context. The external
/// solver overwrites every field once per evaluation step; this type performs
/// no computation of its own.
///
/// All quantities are stored as full 6-component spatial values regardless of
/// the constraint dimension of the paired model. For a 3D point contact only
/// the components of the constrained subspace are solver-defined; the remainder
/// are conventionally zero and their interpretation belongs to the solver. The
/// active subspace is tracked only through the paired model's
/// [`size`](crate::contact::ContactModel::size), which keeps arrays of records
/// uniform in layout.
///
/// # Equality
///
/// Unlike [`ContactModel`], equality compares all five fields exactly.
///
/// # Pairing
///
/// The record keeps no reference to the model it was built from. If the paired
/// model's `contact_type` later changes, the record becomes stale: rebuild it
/// with [`ContactData::new`] or clear it with [`ContactData::reset`] before the
/// next evaluation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ContactData<N: RealField> {
    /// Resultant constraint force and torque.
    pub contact_force: Force<N>,
    /// Current spatial velocity of the contact frame.
    pub contact_velocity: Motion<N>,
    /// Current spatial acceleration of the contact frame.
    pub contact_acceleration: Motion<N>,
    /// Acceleration the contact frame would exhibit under zero constraint
    /// force, due to Coriolis/centrifugal effects and applied external forces.
    /// This is the right-hand-side bias of the constraint equations.
    pub contact_acceleration_drift: Motion<N>,
    /// Residual between the current and the desired acceleration, used as a
    /// stabilization feedback signal.
    pub contact_acceleration_deviation: Motion<N>,
}

impl<N: RealField> ContactData<N> {
    /// Creates the record paired with `model`, with every field zeroed.
    ///
    /// The model is not retained and none of its contents affect the result;
    /// it is taken as an argument to make the pairing explicit at the call
    /// site.
    pub fn new(_model: &ContactModel<N>) -> Self {
        ContactData {
            contact_force: Force::zero(),
            contact_velocity: Motion::zero(),
            contact_acceleration: Motion::zero(),
            contact_acceleration_drift: Motion::zero(),
            contact_acceleration_deviation: Motion::zero(),
        }
    }

    /// Zeroes every field, restoring the freshly-constructed state.
    ///
    /// Must be called (or the record rebuilt with [`ContactData::new`]) when
    /// the paired model's `contact_type` changes, since the record does not
    /// track its model.
    pub fn reset(&mut self) {
        self.contact_force = Force::zero();
        self.contact_velocity = Motion::zero();
        self.contact_acceleration = Motion::zero();
        self.contact_acceleration_drift = Motion::zero();
        self.contact_acceleration_deviation = Motion::zero();
    }
}
