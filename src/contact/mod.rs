//! Rigid contact constraint descriptions: per-contact models and per-step data records.
//!
//! A contact is described by a pair of value types. The [`ContactModel`] is the
//! static part: constraint type, attachment frame, reference frame, and desired
//! target kinematics. The [`ContactData`] is the dynamic part: the quantities an
//! external constraint-force solver computes for that contact each evaluation
//! step.
//!
//! The two types deliberately use different equality policies. Model equality is
//! structural (type, attachment, reference frame) so contact sets can be matched
//! across steps even when target trajectories differ; data equality is exact
//! over every computed field.

pub use self::contact_data::ContactData;
pub use self::contact_model::{ContactModel, ContactType};

mod contact_data;
mod contact_model;
