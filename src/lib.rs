/*!
ncontact
========
**ncontact** defines the canonical description of rigid contact constraints for
constrained multibody dynamics. It uses [nalgebra](https://nalgebra.org) for
vector/matrix math.

A contact constraint is described by two cooperating value types, both generic
wrt. the scalar type:

- [`contact::ContactModel`]: the static descriptor of one contact: its type
  (point or frame), the kinematic-tree frame it is attached to, the reference
  frame its quantities are expressed in, and its desired target kinematics.
- [`contact::ContactData`]: the per-step record of computed quantities (force,
  velocity, acceleration, drift, deviation) written by an external
  constraint-force solver each evaluation.

This crate supplies the solver its inputs and receives its outputs. It does not
assemble constraint Jacobians, solve any system, or manage collections of
contacts: those responsibilities are layered on top.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]

extern crate nalgebra as na;

pub mod algebra;
pub mod contact;
pub mod frame;
pub mod math;
