use na::storage::Storage;
use na::{self, RealField, Vector, Vector3, U6};
use simba::scalar::SubsetOf;
use std::mem;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

use crate::math::{Isometry, Point, SpatialVector};

/// A spatial force with a linear and an angular (torque) component.
#[repr(C)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Force3<N: RealField> {
    /// The linear force.
    pub linear: Vector3<N>,
    /// The torque.
    pub angular: Vector3<N>,
}

impl<N: RealField> Force3<N> {
    /// Creates a force from its linear and angular components.
    #[inline]
    pub fn new(linear: Vector3<N>, angular: Vector3<N>) -> Self {
        Force3 { linear, angular }
    }

    /// A zero force.
    #[inline]
    pub fn zero() -> Self {
        Self::new(na::zero(), na::zero())
    }

    /// Creates a force from a slice where the linear components are stored first.
    #[inline]
    pub fn from_slice(data: &[N]) -> Self {
        Self::new(
            Vector3::new(data[0].clone(), data[1].clone(), data[2].clone()),
            Vector3::new(data[3].clone(), data[4].clone(), data[5].clone()),
        )
    }

    /// Creates a force from a vector where the linear components are stored first.
    #[inline]
    pub fn from_vector<S: Storage<N, U6>>(data: &Vector<N, U6, S>) -> Self {
        Self::new(
            Vector3::new(data[0].clone(), data[1].clone(), data[2].clone()),
            Vector3::new(data[3].clone(), data[4].clone(), data[5].clone()),
        )
    }

    /// Creates a pure linear force.
    #[inline]
    pub fn linear(linear: Vector3<N>) -> Self {
        Self::new(linear, na::zero())
    }

    /// Creates a pure torque.
    #[inline]
    pub fn torque(torque: Vector3<N>) -> Self {
        Self::new(na::zero(), torque)
    }

    /// Creates the resultant of a linear force applied at the given point
    /// (relative to the frame the force is expressed in).
    #[inline]
    pub fn linear_at_point(linear: Vector3<N>, point: &Point<N>) -> Self {
        Self::new(linear.clone(), point.coords.cross(&linear))
    }

    /// This force seen as a slice. The linear components are stored first.
    #[inline]
    pub fn as_slice(&self) -> &[N] {
        self.as_vector().as_slice()
    }

    /// This force seen as a vector. The linear components are stored first.
    #[inline]
    pub fn as_vector(&self) -> &SpatialVector<N> {
        unsafe { mem::transmute(self) }
    }

    /// This force seen as a mutable vector. The linear components are stored first.
    #[inline]
    pub fn as_vector_mut(&mut self) -> &mut SpatialVector<N> {
        unsafe { mem::transmute(self) }
    }

    /// Applies the given transformation to both components of this force.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<N>) -> Self {
        Self::new(m * &self.linear, m * &self.angular)
    }

    /// Converts the components of this force to the `N2` scalar type.
    #[inline]
    pub fn cast<N2: RealField>(&self) -> Force3<N2>
    where
        N: SubsetOf<N2>,
    {
        Force3::new(self.linear.clone().cast(), self.angular.clone().cast())
    }
}

impl<N: RealField> Add<Force3<N>> for Force3<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Force3::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl<N: RealField> AddAssign<Force3<N>> for Force3<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.linear += rhs.linear;
        self.angular += rhs.angular;
    }
}

impl<N: RealField> Sub<Force3<N>> for Force3<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Force3::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl<N: RealField> SubAssign<Force3<N>> for Force3<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.linear -= rhs.linear;
        self.angular -= rhs.angular;
    }
}

impl<N: RealField> Mul<N> for Force3<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: N) -> Self {
        Force3::new(self.linear * rhs.clone(), self.angular * rhs)
    }
}

impl<N: RealField> Neg for Force3<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Force3::new(-self.linear, -self.angular)
    }
}

#[cfg(test)]
mod test {
    use super::Force3;
    use crate::math::SPATIAL_DIM;
    use approx::assert_relative_eq;
    use na::{Isometry3, Point3, Vector3, Vector6};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn vector_view_is_linear_first() {
        let f = Force3::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(
            *f.as_vector(),
            Vector6::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)
        );
        assert_eq!(Force3::from_slice(f.as_slice()), f);
        assert_eq!(f.as_slice().len(), SPATIAL_DIM);
    }

    #[test]
    fn transform_by_rotates_both_components() {
        let m = Isometry3::new(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, FRAC_PI_2),
        );
        let f = Force3::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let transformed = f.transform_by(&m);
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
    fn linear_at_point_induces_torque() {
        let f = Force3::linear_at_point(
            Vector3::new(0.0, 1.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
        );
        assert_eq!(f.linear, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(f.angular, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn neg_negates_both_components() {
        let f = Force3::new(Vector3::new(1.0, -2.0, 3.0), Vector3::new(-4.0, 5.0, -6.0));
        assert_eq!(f + -f, Force3::zero());
    }
}
