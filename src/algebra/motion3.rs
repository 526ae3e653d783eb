use na::storage::Storage;
use na::{self, RealField, Vector, Vector3, U6};
use simba::scalar::SubsetOf;
use std::mem;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::math::{Isometry, Rotation, SpatialVector};

/// A spatial motion with a linear and an angular component.
///
/// Depending on context, a motion represents a spatial velocity (twist) or a
/// spatial acceleration of a frame. Both components are expressed in the
/// reference frame declared wherever the motion is stored.
#[repr(C)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Motion3<N: RealField> {
    /// The linear component.
    pub linear: Vector3<N>,
    /// The angular component.
    pub angular: Vector3<N>,
}

impl<N: RealField> Motion3<N> {
    /// Creates a motion from its linear and angular components.
    #[inline]
    pub fn new(linear: Vector3<N>, angular: Vector3<N>) -> Self {
        Motion3 { linear, angular }
    }

    /// The zero motion.
    #[inline]
    pub fn zero() -> Self {
        Self::new(na::zero(), na::zero())
    }

    /// Creates a purely linear motion.
    #[inline]
    pub fn linear(vx: N, vy: N, vz: N) -> Self {
        Motion3::new(Vector3::new(vx, vy, vz), na::zero())
    }

    /// Creates a purely angular motion.
    #[inline]
    pub fn angular(wx: N, wy: N, wz: N) -> Self {
        Motion3::new(na::zero(), Vector3::new(wx, wy, wz))
    }

    /// Creates a motion from a slice where the linear components are stored first.
    #[inline]
    pub fn from_slice(data: &[N]) -> Self {
        Self::new(
            Vector3::new(data[0].clone(), data[1].clone(), data[2].clone()),
            Vector3::new(data[3].clone(), data[4].clone(), data[5].clone()),
        )
    }

    /// Creates a motion from a vector where the linear components are stored first.
    #[inline]
    pub fn from_vector<S: Storage<N, U6>>(data: &Vector<N, U6, S>) -> Self {
        Self::new(
            Vector3::new(data[0].clone(), data[1].clone(), data[2].clone()),
            Vector3::new(data[3].clone(), data[4].clone(), data[5].clone()),
        )
    }

    /// This motion seen as a slice. The linear components are stored first.
    #[inline]
    pub fn as_slice(&self) -> &[N] {
        self.as_vector().as_slice()
    }

    /// This motion seen as a vector. The linear components are stored first.
    #[inline]
    pub fn as_vector(&self) -> &SpatialVector<N> {
        unsafe { mem::transmute(self) }
    }

    /// This motion seen as a mutable vector. The linear components are stored first.
    #[inline]
    pub fn as_vector_mut(&mut self) -> &mut SpatialVector<N> {
        unsafe { mem::transmute(self) }
    }

    /// The motion of a point shifted by `shift` from this motion's application point.
    #[inline]
    pub fn shift(&self, shift: &Vector3<N>) -> Self {
        Self::new(
            self.linear.clone() + self.angular.cross(shift),
            self.angular.clone(),
        )
    }

    /// Applies the given transformation to both components of this motion.
    #[inline]
    pub fn transformed(&self, iso: &Isometry<N>) -> Self {
        Self::new(iso * &self.linear, iso * &self.angular)
    }

    /// Rotates both components of this motion.
    #[inline]
    pub fn rotated(&self, rot: &Rotation<N>) -> Self {
        Self::new(rot * &self.linear, rot * &self.angular)
    }

    /// Converts the components of this motion to the `N2` scalar type.
    #[inline]
    pub fn cast<N2: RealField>(&self) -> Motion3<N2>
    where
        N: SubsetOf<N2>,
    {
        Motion3::new(self.linear.clone().cast(), self.angular.clone().cast())
    }
}

impl<N: RealField> Add<Motion3<N>> for Motion3<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Motion3::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl<N: RealField> AddAssign<Motion3<N>> for Motion3<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.linear += rhs.linear;
        self.angular += rhs.angular;
    }
}

impl<N: RealField> Sub<Motion3<N>> for Motion3<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Motion3::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl<N: RealField> SubAssign<Motion3<N>> for Motion3<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.linear -= rhs.linear;
        self.angular -= rhs.angular;
    }
}

impl<N: RealField> Mul<N> for Motion3<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: N) -> Self {
        Motion3::new(self.linear * rhs.clone(), self.angular * rhs)
    }
}

impl<N: RealField> Neg for Motion3<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Motion3::new(-self.linear, -self.angular)
    }
}

#[cfg(test)]
mod test {
    use super::Motion3;
    use crate::math::SPATIAL_DIM;
    use approx::assert_relative_eq;
    use na::{Isometry3, UnitQuaternion, Vector3, Vector6};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn zero_is_additive_identity() {
        let m = Motion3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(m + Motion3::zero(), m);
        assert_eq!(m - m, Motion3::zero());
    }

    #[test]
    fn vector_view_is_linear_first() {
        let m = Motion3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(
            *m.as_vector(),
            Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
        );
        assert_eq!(Motion3::from_vector(m.as_vector()), m);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.as_slice().len(), SPATIAL_DIM);
    }

    #[test]
    fn from_slice_reads_linear_first() {
        let m = Motion3::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.linear, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.angular, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn shift_adds_angular_cross_term() {
        let m = Motion3::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
        let shifted = m.shift(&Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(shifted.linear, Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(shifted.angular, m.angular);
    }

    #[test]
    fn rotated_rotates_both_components() {
        let rot = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);
        let m = Motion3::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let rotated = m.rotated(&rot);
        assert_relative_eq!(rotated.linear, Vector3::new(0.0, 1.0, 0.0), epsilon = 1.0e-12);
        assert_relative_eq!(rotated.angular, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1.0e-12);
    }

    #[test]
    fn transformed_rotates_but_ignores_translation() {
        let iso = Isometry3::new(
            Vector3::new(10.0, -20.0, 30.0),
            Vector3::new(0.0, 0.0, FRAC_PI_2),
        );
        let m = Motion3::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let transformed = m.transformed(&iso);
        assert_relative_eq!(
            transformed.linear,
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1.0e-12
        );
        assert_relative_eq!(
            transformed.angular,
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn cast_preserves_components() {
        let m = Motion3::new(Vector3::new(1.0f64, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        let m32: Motion3<f32> = m.cast();
        assert_eq!(m32, Motion3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)));
    }
}
